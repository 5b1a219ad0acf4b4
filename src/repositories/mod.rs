use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, PooledConnection};

pub mod stock_data;
pub mod summary;
pub mod volume;
pub mod predicted;

pub type PgPoolConn = PooledConnection<ConnectionManager<PgConnection>>;
