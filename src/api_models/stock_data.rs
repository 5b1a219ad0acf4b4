use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ClosePriceResponse {
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Sector")]
    pub sector: String,
}

/// Shared by `/stock_data` and the ticker/date-range variant.
#[derive(Debug, Serialize)]
pub struct StockDataResponse {
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "Volume")]
    pub volume: i64,
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Sector")]
    pub sector: String,
}

#[derive(Debug, Serialize)]
pub struct MovingAverageResponse {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Close_Price")]
    pub close_price: f64,
}
