//! Read-only access to the analytics tables.
//!
//! Handlers talk to an [`AnalyticsStore`] held in `AppState`; [`PgStore`] is
//! the production implementation over the r2d2 pool.

use thiserror::Error;

use crate::app::DbPool;
use crate::filter::StockRangeFilter;
use crate::models::{
    ClosePriceRow, IndustryVolumeRow, MovingAverageRow, PredictedStockRow, PredictedSummaryRow,
    StockRow, SummaryRow, TotalVolumeRow,
};
use crate::repositories::{self, PgPoolConn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection unavailable: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
}

pub type StoreResult<T> = Result<Vec<T>, StoreError>;

/// One method per endpoint projection. Row order is whatever the store returns.
pub trait AnalyticsStore: Send + Sync {
    fn close_prices(&self) -> StoreResult<ClosePriceRow>;
    fn stock_data(&self) -> StoreResult<StockRow>;
    fn stock_data_in_range(&self, range: &StockRangeFilter) -> StoreResult<StockRow>;
    fn moving_average(&self) -> StoreResult<MovingAverageRow>;
    fn total_volume(&self) -> StoreResult<TotalVolumeRow>;
    fn summary(&self) -> StoreResult<SummaryRow>;
    fn sector_volume(&self) -> StoreResult<IndustryVolumeRow>;
    fn predicted_stocks(&self) -> StoreResult<PredictedStockRow>;
    fn predicted_summary(&self) -> StoreResult<PredictedSummaryRow>;
}

pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Checks out a connection, runs one query, and hands the connection back
    /// to the pool when it drops, whichever way `query` returns.
    fn with_conn<T>(
        &self,
        query: impl FnOnce(&mut PgPoolConn) -> Result<Vec<T>, diesel::result::Error>,
    ) -> StoreResult<T> {
        let mut conn = self.pool.get()?;
        Ok(query(&mut conn)?)
    }
}

impl AnalyticsStore for PgStore {
    fn close_prices(&self) -> StoreResult<ClosePriceRow> {
        self.with_conn(repositories::stock_data::list_close_prices)
    }

    fn stock_data(&self) -> StoreResult<StockRow> {
        self.with_conn(repositories::stock_data::list_all)
    }

    fn stock_data_in_range(&self, range: &StockRangeFilter) -> StoreResult<StockRow> {
        self.with_conn(|conn| repositories::stock_data::list_in_range(conn, range))
    }

    fn moving_average(&self) -> StoreResult<MovingAverageRow> {
        self.with_conn(repositories::stock_data::list_closes)
    }

    fn total_volume(&self) -> StoreResult<TotalVolumeRow> {
        self.with_conn(repositories::volume::list_yearly_totals)
    }

    fn summary(&self) -> StoreResult<SummaryRow> {
        self.with_conn(repositories::summary::list_all)
    }

    fn sector_volume(&self) -> StoreResult<IndustryVolumeRow> {
        self.with_conn(repositories::volume::list_industry_totals)
    }

    fn predicted_stocks(&self) -> StoreResult<PredictedStockRow> {
        self.with_conn(repositories::predicted::list_predicted_closes)
    }

    fn predicted_summary(&self) -> StoreResult<PredictedSummaryRow> {
        self.with_conn(repositories::predicted::list_summary)
    }
}
