use axum::{
    extract::{Path, State},
    Json,
};

use crate::api_models::{ClosePriceResponse, MovingAverageResponse, StockDataResponse};
use crate::app::AppState;
use crate::filter::StockRangeFilter;
use crate::handler::error::AppError;
use crate::handler::read_rows;
use crate::models::{ClosePriceRow, MovingAverageRow, StockRow};

impl From<ClosePriceRow> for ClosePriceResponse {
    fn from(r: ClosePriceRow) -> Self {
        Self {
            ticker: r.ticker,
            date: r.date,
            close: r.close,
            industry: r.industry,
            sector: r.sector,
        }
    }
}

impl From<StockRow> for StockDataResponse {
    fn from(r: StockRow) -> Self {
        Self {
            ticker: r.ticker,
            date: r.date,
            open: r.open,
            high: r.high,
            low: r.low,
            close: r.close,
            volume: r.volume,
            industry: r.industry,
            sector: r.sector,
        }
    }
}

impl From<MovingAverageRow> for MovingAverageResponse {
    fn from(r: MovingAverageRow) -> Self {
        Self {
            date: r.date,
            close_price: r.close,
        }
    }
}

pub async fn list_close_prices(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClosePriceResponse>>, AppError> {
    let items = read_rows(&state, |store| store.close_prices()).await?;
    Ok(Json(items))
}

pub async fn list_stock_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<StockDataResponse>>, AppError> {
    let items = read_rows(&state, |store| store.stock_data()).await?;
    Ok(Json(items))
}

/// Rows for one ticker with `start <= Date <= end`.
pub async fn list_stock_data_in_range(
    State(state): State<AppState>,
    Path((ticker, start, end)): Path<(String, String, String)>,
) -> Result<Json<Vec<StockDataResponse>>, AppError> {
    let range = StockRangeFilter::from_path(ticker, &start, &end)?;
    if range.is_inverted() {
        tracing::debug!(ticker = %range.ticker, %range.start, %range.end, "inverted date range");
    }
    let items = read_rows(&state, move |store| store.stock_data_in_range(&range)).await?;
    Ok(Json(items))
}

pub async fn list_moving_average(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovingAverageResponse>>, AppError> {
    let items = read_rows(&state, |store| store.moving_average()).await?;
    Ok(Json(items))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn stock_row_keeps_numeric_types() {
        let row = StockRow {
            date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            ticker: "AAPL".into(),
            open: 74.06,
            high: 75.15,
            low: 73.8,
            close: 75.09,
            volume: 135_480_400,
            sector: "Technology".into(),
            industry: "Consumer Electronics".into(),
        };
        let v = serde_json::to_value(StockDataResponse::from(row)).unwrap();
        assert_eq!(
            v,
            json!({
                "Ticker": "AAPL",
                "Date": "2020-01-02",
                "Open": 74.06,
                "High": 75.15,
                "Low": 73.8,
                "Close": 75.09,
                "Volume": 135_480_400,
                "Industry": "Consumer Electronics",
                "Sector": "Technology"
            })
        );
        assert!(v["Volume"].is_i64());
    }

    #[test]
    fn moving_average_renames_close() {
        let row = MovingAverageRow {
            date: NaiveDate::from_ymd_opt(2021, 6, 30).unwrap(),
            close: 136.96,
        };
        let v: Value = serde_json::to_value(MovingAverageResponse::from(row)).unwrap();
        assert_eq!(v, json!({"Date": "2021-06-30", "Close_Price": 136.96}));
    }
}
