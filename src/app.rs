use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::routes;
use crate::store::AnalyticsStore;
use crate::utils::config::DatabaseConfig;
use crate::utils::middleware;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AnalyticsStore>,
}

pub fn build_pool(cfg: &DatabaseConfig) -> Result<DbPool, diesel::r2d2::PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(cfg.url.as_str());
    Pool::builder()
        .max_size(cfg.pool_size)
        .connection_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .build(manager)
}

pub fn build_app(store: Arc<dyn AnalyticsStore>) -> Router {
    let state = AppState { store };

    routes::build_routes()
        .with_state(state)
        .layer(middleware::cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
