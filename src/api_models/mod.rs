pub mod stock_data;
pub mod summary;
pub mod volume;
pub mod predicted;

pub use stock_data::{ClosePriceResponse, MovingAverageResponse, StockDataResponse};
pub use summary::SummaryResponse;
pub use volume::{SectorVolumeResponse, TotalVolumeResponse};
pub use predicted::{PredictedStockResponse, PredictedSummaryResponse};
