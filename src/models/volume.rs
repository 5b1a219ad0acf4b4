use diesel::prelude::*;

use crate::schema::{industry_volume, total_volume};

#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = total_volume)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TotalVolumeRow {
    pub year: i64,
    pub ticker: String,
    #[diesel(column_name = yearly_total)]
    pub total_volume: i64,
    pub sector: String,
}

#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = industry_volume)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct IndustryVolumeRow {
    pub sector: String,
    pub industry: String,
    pub total_volume: i64,
}
