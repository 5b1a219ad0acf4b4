use axum::{extract::State, Json};

use crate::api_models::{SectorVolumeResponse, TotalVolumeResponse};
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::handler::read_rows;
use crate::models::{IndustryVolumeRow, TotalVolumeRow};

impl From<TotalVolumeRow> for TotalVolumeResponse {
    fn from(r: TotalVolumeRow) -> Self {
        Self {
            year: r.year,
            ticker: r.ticker,
            total_volume: r.total_volume,
            sector: r.sector,
        }
    }
}

impl From<IndustryVolumeRow> for SectorVolumeResponse {
    fn from(r: IndustryVolumeRow) -> Self {
        Self {
            industry: r.industry,
            sector: r.sector,
            total_volume: r.total_volume,
        }
    }
}

pub async fn list_total_volume(
    State(state): State<AppState>,
) -> Result<Json<Vec<TotalVolumeResponse>>, AppError> {
    let items = read_rows(&state, |store| store.total_volume()).await?;
    Ok(Json(items))
}

pub async fn list_sector_volume(
    State(state): State<AppState>,
) -> Result<Json<Vec<SectorVolumeResponse>>, AppError> {
    let items = read_rows(&state, |store| store.sector_volume()).await?;
    Ok(Json(items))
}
