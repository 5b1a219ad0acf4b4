use chrono::NaiveDate;
use diesel::prelude::*;

use crate::schema::{data_with_prediction, predicted_summary};

#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = data_with_prediction)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PredictedStockRow {
    pub close: f64,
    pub date: NaiveDate,
    pub ticker: String,
    pub sector: String,
    pub industry: String,
}

#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = predicted_summary)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PredictedSummaryRow {
    pub ticker: String,
    pub today_price: f64,
    pub predicted_price: f64,
    pub predicted_change: f64,
    pub percentage_change: f64,
    pub sector: String,
    pub industry: String,
}
