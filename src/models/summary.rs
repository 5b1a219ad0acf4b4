use diesel::prelude::*;

use crate::schema::summary;

#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = summary)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SummaryRow {
    pub ticker: String,
    pub initial_open: f64,
    pub final_close: f64,
    pub total_change: f64,
    /// Ratio as stored, not yet rounded.
    pub percentage_change: f64,
    pub average_volume: f64,
    pub sector: String,
    pub industry: String,
}
