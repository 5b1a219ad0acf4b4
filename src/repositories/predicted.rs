use diesel::prelude::*;

use crate::models::{PredictedStockRow, PredictedSummaryRow};
use crate::repositories::PgPoolConn;
use crate::schema::{data_with_prediction, predicted_summary};

pub fn list_predicted_closes(
    conn: &mut PgPoolConn,
) -> Result<Vec<PredictedStockRow>, diesel::result::Error> {
    data_with_prediction::table
        .select(PredictedStockRow::as_select())
        .load(conn)
}

pub fn list_summary(conn: &mut PgPoolConn) -> Result<Vec<PredictedSummaryRow>, diesel::result::Error> {
    predicted_summary::table
        .select(PredictedSummaryRow::as_select())
        .load(conn)
}
