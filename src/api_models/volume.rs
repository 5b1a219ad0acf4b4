use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TotalVolumeResponse {
    #[serde(rename = "Year")]
    pub year: i64,
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[serde(rename = "Total_Volume")]
    pub total_volume: i64,
    #[serde(rename = "Sector")]
    pub sector: String,
}

#[derive(Debug, Serialize)]
pub struct SectorVolumeResponse {
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Sector")]
    pub sector: String,
    #[serde(rename = "Total_Volume")]
    pub total_volume: i64,
}
