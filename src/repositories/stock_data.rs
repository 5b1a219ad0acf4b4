use diesel::prelude::*;

use crate::filter::StockRangeFilter;
use crate::models::{ClosePriceRow, MovingAverageRow, StockRow};
use crate::repositories::PgPoolConn;
use crate::schema::final_data::dsl::*;

pub fn list_close_prices(conn: &mut PgPoolConn) -> Result<Vec<ClosePriceRow>, diesel::result::Error> {
    final_data.select(ClosePriceRow::as_select()).load(conn)
}

pub fn list_all(conn: &mut PgPoolConn) -> Result<Vec<StockRow>, diesel::result::Error> {
    final_data.select(StockRow::as_select()).load(conn)
}

/// `Ticker = $1 AND Date >= $2 AND Date <= $3`; an inverted range simply matches nothing.
pub fn list_in_range(
    conn: &mut PgPoolConn,
    range: &StockRangeFilter,
) -> Result<Vec<StockRow>, diesel::result::Error> {
    final_data
        .filter(ticker.eq(range.ticker.as_str()))
        .filter(date.ge(range.start))
        .filter(date.le(range.end))
        .select(StockRow::as_select())
        .load(conn)
}

pub fn list_closes(conn: &mut PgPoolConn) -> Result<Vec<MovingAverageRow>, diesel::result::Error> {
    final_data.select(MovingAverageRow::as_select()).load(conn)
}
