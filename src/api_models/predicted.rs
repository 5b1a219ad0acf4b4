use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PredictedStockResponse {
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[serde(rename = "Sector")]
    pub sector: String,
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Close_Price")]
    pub close_price: f64,
}

#[derive(Debug, Serialize)]
pub struct PredictedSummaryResponse {
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[serde(rename = "Sector")]
    pub sector: String,
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Today's_Price")]
    pub todays_price: f64,
    #[serde(rename = "Predicted_Price")]
    pub predicted_price: f64,
    #[serde(rename = "Predicted_Change")]
    pub predicted_change: f64,
    #[serde(rename = "Percent_Change")]
    pub percent_change: String,
}
