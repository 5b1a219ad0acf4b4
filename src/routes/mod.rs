use axum::Router;

use crate::app::AppState;

mod predicted;
mod root;
mod stock_data;

pub fn build_routes() -> Router<AppState> {
    Router::new()
        // dashboard shell and liveness probe
        .merge(root::router())
        .nest(
            "/api/v1.0",
            stock_data::router().merge(predicted::router()),
        )
}
