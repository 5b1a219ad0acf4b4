use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::predicted::{list_predicted_stocks, list_predicted_summary};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/predicted_stock_data", get(list_predicted_stocks))
        .route("/predicted_stock_data/summary", get(list_predicted_summary))
}
