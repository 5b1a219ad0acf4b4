use diesel::prelude::*;

use crate::models::{IndustryVolumeRow, TotalVolumeRow};
use crate::repositories::PgPoolConn;
use crate::schema::{industry_volume, total_volume};

pub fn list_yearly_totals(conn: &mut PgPoolConn) -> Result<Vec<TotalVolumeRow>, diesel::result::Error> {
    total_volume::table
        .select(TotalVolumeRow::as_select())
        .load(conn)
}

pub fn list_industry_totals(
    conn: &mut PgPoolConn,
) -> Result<Vec<IndustryVolumeRow>, diesel::result::Error> {
    industry_volume::table
        .select(IndustryVolumeRow::as_select())
        .load(conn)
}
