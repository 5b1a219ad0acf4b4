use axum::{response::Html, routing::get, Router};

use crate::app::AppState;

const DASHBOARD: &str = include_str!("../../templates/index.html");

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
}

async fn index() -> Html<&'static str> {
    Html(DASHBOARD)
}

async fn healthz() -> &'static str {
    "ok"
}
