use diesel::prelude::*;

use crate::models::SummaryRow;
use crate::repositories::PgPoolConn;
use crate::schema::summary::dsl::*;

pub fn list_all(conn: &mut PgPoolConn) -> Result<Vec<SummaryRow>, diesel::result::Error> {
    summary.select(SummaryRow::as_select()).load(conn)
}
