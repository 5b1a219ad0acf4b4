pub mod stock_data;
pub mod summary;
pub mod volume;
pub mod predicted;

pub use stock_data::{ClosePriceRow, MovingAverageRow, StockRow};
pub use summary::SummaryRow;
pub use volume::{IndustryVolumeRow, TotalVolumeRow};
pub use predicted::{PredictedStockRow, PredictedSummaryRow};
