use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[serde(rename = "Initial Open")]
    pub initial_open: f64,
    #[serde(rename = "Final Close")]
    pub final_close: f64,
    #[serde(rename = "Total Change")]
    pub total_change: f64,
    /// e.g. `"12.35%"`
    #[serde(rename = "Percentage Change")]
    pub percentage_change: String,
    #[serde(rename = "Average Volume")]
    pub average_volume: f64,
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Sector")]
    pub sector: String,
}
