use chrono::NaiveDate;

use crate::handler::error::AppError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Row predicate for `/stock_data/:ticker/:start/:end`.
///
/// Both bounds are inclusive. An inverted range is accepted and matches no
/// rows rather than being reported as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRangeFilter {
    pub ticker: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StockRangeFilter {
    /// Parses raw path segments. Dates must be `YYYY-MM-DD`.
    pub fn from_path(ticker: String, start: &str, end: &str) -> Result<Self, AppError> {
        Ok(Self {
            ticker,
            start: parse_date("start", start)?,
            end: parse_date("end", end)?,
        })
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Same predicate the repository pushes down to SQL.
    pub fn matches(&self, ticker: &str, date: NaiveDate) -> bool {
        ticker == self.ticker && self.start <= date && date <= self.end
    }
}

fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        AppError::BadRequest(format!("{field} must be a date in YYYY-MM-DD format, got {raw:?}"))
    })
}
