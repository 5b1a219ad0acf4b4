use chrono::NaiveDate;
use diesel::prelude::*;

use crate::schema::final_data;

/// Full OHLCV projection of `Final_Data`.
#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = final_data)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StockRow {
    pub date: NaiveDate,
    pub ticker: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
    pub sector: String,
    pub industry: String,
}

#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = final_data)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ClosePriceRow {
    pub ticker: String,
    pub date: NaiveDate,
    pub close: f64,
    pub industry: String,
    pub sector: String,
}

#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = final_data)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MovingAverageRow {
    pub date: NaiveDate,
    pub close: f64,
}
