use axum::{extract::State, Json};

use crate::api_models::{PredictedStockResponse, PredictedSummaryResponse};
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::handler::read_rows;
use crate::models::{PredictedStockRow, PredictedSummaryRow};
use crate::utils::decimal::percent_string;

impl From<PredictedStockRow> for PredictedStockResponse {
    fn from(r: PredictedStockRow) -> Self {
        Self {
            ticker: r.ticker,
            sector: r.sector,
            industry: r.industry,
            date: r.date,
            close_price: r.close,
        }
    }
}

impl From<PredictedSummaryRow> for PredictedSummaryResponse {
    fn from(r: PredictedSummaryRow) -> Self {
        Self {
            ticker: r.ticker,
            sector: r.sector,
            industry: r.industry,
            todays_price: r.today_price,
            predicted_price: r.predicted_price,
            predicted_change: r.predicted_change,
            percent_change: percent_string(r.percentage_change),
        }
    }
}

pub async fn list_predicted_stocks(
    State(state): State<AppState>,
) -> Result<Json<Vec<PredictedStockResponse>>, AppError> {
    let items = read_rows(&state, |store| store.predicted_stocks()).await?;
    Ok(Json(items))
}

pub async fn list_predicted_summary(
    State(state): State<AppState>,
) -> Result<Json<Vec<PredictedSummaryResponse>>, AppError> {
    let items = read_rows(&state, |store| store.predicted_summary()).await?;
    Ok(Json(items))
}
