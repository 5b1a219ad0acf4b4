use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::stock_data::{
    list_close_prices, list_moving_average, list_stock_data, list_stock_data_in_range,
};
use crate::handler::summary::list_summary;
use crate::handler::volume::{list_sector_volume, list_total_volume};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stock_data", get(list_stock_data))
        .route("/stock_data/close_price", get(list_close_prices))
        .route("/stock_data/moving_average", get(list_moving_average))
        .route("/stock_data/total_volume", get(list_total_volume))
        .route("/stock_data/summary", get(list_summary))
        .route("/stock_data/sector_volume", get(list_sector_volume))
        .route("/stock_data/:ticker/:start/:end", get(list_stock_data_in_range))
}
