mod api_models;
mod app;
mod filter;
mod handler;
mod models;
mod repositories;
mod routes;
mod schema;
mod schema_binding;
mod store;
mod utils;

use std::sync::Arc;

use anyhow::Context;

use crate::schema_binding::SchemaBinding;
use crate::store::PgStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    utils::logging::init_logging();

    let server_cfg = utils::config::ServerConfig::from_env()?;
    let db_cfg = utils::config::DatabaseConfig::from_env()?;

    let pool = app::build_pool(&db_cfg).context("failed to create DB pool")?;

    // Nothing is served unless every entity binds.
    let binding = tokio::task::spawn_blocking({
        let pool = pool.clone();
        move || SchemaBinding::reflect(&pool)
    })
    .await
    .context("schema reflection task failed")?
    .context("schema binding failed")?;
    for entity in binding.entities() {
        let columns: Vec<String> = binding
            .columns(entity)
            .iter()
            .map(|c| format!("{}:{}", c.spec.name, c.data_type))
            .collect();
        tracing::info!(
            entity = entity.name(),
            table = entity.table_name(),
            ?columns,
            "bound entity"
        );
    }

    let app = app::build_app(Arc::new(PgStore::new(pool)));

    let listener = tokio::net::TcpListener::bind(server_cfg.addr)
        .await
        .with_context(|| format!("bind {} failed", server_cfg.addr))?;
    tracing::info!("Axum listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
