use axum::{extract::State, Json};

use crate::api_models::SummaryResponse;
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::handler::read_rows;
use crate::models::SummaryRow;
use crate::utils::decimal::{percent_string, round2};

impl From<SummaryRow> for SummaryResponse {
    fn from(r: SummaryRow) -> Self {
        Self {
            ticker: r.ticker,
            initial_open: r.initial_open,
            final_close: r.final_close,
            total_change: round2(r.total_change),
            percentage_change: percent_string(r.percentage_change),
            average_volume: round2(r.average_volume),
            industry: r.industry,
            sector: r.sector,
        }
    }
}

pub async fn list_summary(
    State(state): State<AppState>,
) -> Result<Json<Vec<SummaryResponse>>, AppError> {
    let items = read_rows(&state, |store| store.summary()).await?;
    Ok(Json(items))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn summary_renames_and_rounds() {
        let row = SummaryRow {
            ticker: "MSFT".into(),
            initial_open: 158.779999,
            final_close: 336.320007,
            total_change: 177.540008,
            percentage_change: 111.8151,
            average_volume: 30_441_152.456,
            sector: "Technology".into(),
            industry: "Software".into(),
        };
        let v = serde_json::to_value(SummaryResponse::from(row)).unwrap();
        assert_eq!(
            v,
            json!({
                "Ticker": "MSFT",
                "Initial Open": 158.779999,
                "Final Close": 336.320007,
                "Total Change": 177.54,
                "Percentage Change": "111.82%",
                "Average Volume": 30_441_152.46,
                "Industry": "Software",
                "Sector": "Technology"
            })
        );
    }

    #[test]
    fn whole_percentages_keep_two_decimals() {
        let row = SummaryRow {
            ticker: "T".into(),
            initial_open: 1.0,
            final_close: 1.12,
            total_change: 0.12,
            percentage_change: 12.0,
            average_volume: 100.0,
            sector: "Communication Services".into(),
            industry: "Telecom Services".into(),
        };
        let resp = SummaryResponse::from(row);
        assert_eq!(resp.percentage_change, "12.00%");
        assert_eq!(resp.average_volume, 100.0);
    }
}
