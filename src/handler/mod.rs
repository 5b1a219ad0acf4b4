use std::sync::Arc;

use crate::app::AppState;
use crate::store::{AnalyticsStore, StoreResult};

pub mod error;
pub mod predicted;
pub mod stock_data;
pub mod summary;
pub mod volume;

use error::AppError;

/// Runs one store read on the blocking pool and maps each row into its
/// response record, keeping the store's row order.
pub(crate) async fn read_rows<T, R, F>(state: &AppState, read: F) -> Result<Vec<R>, AppError>
where
    F: FnOnce(&dyn AnalyticsStore) -> StoreResult<T> + Send + 'static,
    T: Into<R> + Send + 'static,
{
    let store = Arc::clone(&state.store);
    let rows = tokio::task::spawn_blocking(move || read(store.as_ref()))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "store read task did not complete");
            AppError::InternalServerError
        })??;
    Ok(rows.into_iter().map(Into::into).collect())
}
