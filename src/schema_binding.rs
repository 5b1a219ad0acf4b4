//! Startup-time binding of the logical entities to the tables the upstream
//! pipeline left in the database.
//!
//! The column accessors themselves are the `diesel::table!` items in
//! [`crate::schema`]. This module checks, once, that the live schema still
//! matches those declarations so a drifted database stops the process before
//! any request is served.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use diesel::prelude::*;
use diesel::sql_types::Text;
use thiserror::Error;

use crate::app::DbPool;

/// SQL type family a declared column is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Float,
    Integer,
    Date,
}

impl ColumnKind {
    fn accepts(self, data_type: &str) -> bool {
        let data_type = data_type.to_ascii_lowercase();
        match self {
            ColumnKind::Text => matches!(data_type.as_str(), "text" | "character varying"),
            ColumnKind::Float => data_type == "double precision",
            ColumnKind::Integer => data_type == "bigint",
            ColumnKind::Date => data_type == "date",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColumnKind::Text => "text",
            ColumnKind::Float => "double precision",
            ColumnKind::Integer => "bigint",
            ColumnKind::Date => "date",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn col(name: &'static str, kind: ColumnKind) -> ColumnSpec {
    ColumnSpec { name, kind }
}

const STOCKS_COLUMNS: &[ColumnSpec] = &[
    col("Date", ColumnKind::Date),
    col("Ticker", ColumnKind::Text),
    col("Open", ColumnKind::Float),
    col("High", ColumnKind::Float),
    col("Low", ColumnKind::Float),
    col("Close", ColumnKind::Float),
    col("Volume", ColumnKind::Integer),
    col("Sector", ColumnKind::Text),
    col("Industry", ColumnKind::Text),
];

const SUMMARY_COLUMNS: &[ColumnSpec] = &[
    col("Ticker", ColumnKind::Text),
    col("Initial_Open", ColumnKind::Float),
    col("Final_Close", ColumnKind::Float),
    col("Total_Change", ColumnKind::Float),
    col("Percentage_Change", ColumnKind::Float),
    col("Average_Volume", ColumnKind::Float),
    col("Sector", ColumnKind::Text),
    col("Industry", ColumnKind::Text),
];

const TOTAL_VOLUME_COLUMNS: &[ColumnSpec] = &[
    col("year", ColumnKind::Integer),
    col("ticker", ColumnKind::Text),
    col("total_volume", ColumnKind::Integer),
    col("sector", ColumnKind::Text),
];

const INDUSTRY_VOLUME_COLUMNS: &[ColumnSpec] = &[
    col("sector", ColumnKind::Text),
    col("industry", ColumnKind::Text),
    col("total_volume", ColumnKind::Integer),
];

const PREDICTED_STOCKS_COLUMNS: &[ColumnSpec] = &[
    col("Close", ColumnKind::Float),
    col("Date", ColumnKind::Date),
    col("Ticker", ColumnKind::Text),
    col("Sector", ColumnKind::Text),
    col("Industry", ColumnKind::Text),
];

const PREDICTED_SUMMARY_COLUMNS: &[ColumnSpec] = &[
    col("Ticker", ColumnKind::Text),
    col("Today_price", ColumnKind::Float),
    col("Predicted_price", ColumnKind::Float),
    col("Predicted_Change", ColumnKind::Float),
    col("Percentage_Change", ColumnKind::Float),
    col("Sector", ColumnKind::Text),
    col("Industry", ColumnKind::Text),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Entity {
    Stocks,
    Summary,
    TotalVolume,
    IndustryVolume,
    PredictedStocks,
    PredictedSummary,
}

impl Entity {
    pub const ALL: [Entity; 6] = [
        Entity::Stocks,
        Entity::Summary,
        Entity::TotalVolume,
        Entity::IndustryVolume,
        Entity::PredictedStocks,
        Entity::PredictedSummary,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Entity::Stocks => "Stocks",
            Entity::Summary => "Summary",
            Entity::TotalVolume => "TotalVolume",
            Entity::IndustryVolume => "IndustryVolume",
            Entity::PredictedStocks => "PredictedStocks",
            Entity::PredictedSummary => "PredictedSummary",
        }
    }

    /// Stored table name, matching the `sql_name` in [`crate::schema`].
    pub fn table_name(self) -> &'static str {
        match self {
            Entity::Stocks => "Final_Data",
            Entity::Summary => "Summary",
            Entity::TotalVolume => "Total_Volume",
            Entity::IndustryVolume => "Industry_Volume",
            Entity::PredictedStocks => "data_with_prediction",
            Entity::PredictedSummary => "Predicted_Summary",
        }
    }

    pub fn columns(self) -> &'static [ColumnSpec] {
        match self {
            Entity::Stocks => STOCKS_COLUMNS,
            Entity::Summary => SUMMARY_COLUMNS,
            Entity::TotalVolume => TOTAL_VOLUME_COLUMNS,
            Entity::IndustryVolume => INDUSTRY_VOLUME_COLUMNS,
            Entity::PredictedStocks => PREDICTED_STOCKS_COLUMNS,
            Entity::PredictedSummary => PREDICTED_SUMMARY_COLUMNS,
        }
    }
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("entity {entity} is missing: table \"{table}\" not found in the current schema")]
    MissingEntity { entity: &'static str, table: &'static str },
    #[error("column \"{column}\" not found in table \"{table}\"")]
    MissingColumn { table: &'static str, column: &'static str },
    #[error("column \"{table}\".\"{column}\" has type {found}, expected {expected}")]
    TypeMismatch {
        table: &'static str,
        column: &'static str,
        expected: ColumnKind,
        found: String,
    },
    #[error("schema reflection query failed: {0}")]
    Query(#[from] diesel::result::Error),
    #[error("could not acquire a connection for schema reflection: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

/// One row of `information_schema.columns`.
#[derive(Debug, Clone, QueryableByName)]
pub struct ReflectedColumn {
    #[diesel(sql_type = Text)]
    pub table_name: String,
    #[diesel(sql_type = Text)]
    pub column_name: String,
    #[diesel(sql_type = Text)]
    pub data_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundColumn {
    pub spec: ColumnSpec,
    /// Type as reported by the database.
    pub data_type: String,
}

/// Verified entity → column mapping. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct SchemaBinding {
    entities: BTreeMap<Entity, Vec<BoundColumn>>,
}

impl SchemaBinding {
    /// Reads the live schema once and binds every entity against it.
    pub fn reflect(pool: &DbPool) -> Result<Self, SchemaError> {
        let mut conn = pool.get()?;
        let reflected = diesel::sql_query(
            r#"
            SELECT table_name::text AS table_name,
                   column_name::text AS column_name,
                   data_type::text AS data_type
            FROM information_schema.columns
            WHERE table_schema = current_schema()
            ORDER BY table_name, ordinal_position
            "#,
        )
        .load::<ReflectedColumn>(&mut conn)?;
        Self::bind(&reflected)
    }

    pub fn bind(reflected: &[ReflectedColumn]) -> Result<Self, SchemaError> {
        let mut tables: HashMap<&str, HashMap<&str, &ReflectedColumn>> = HashMap::new();
        for c in reflected {
            tables
                .entry(c.table_name.as_str())
                .or_default()
                .insert(c.column_name.as_str(), c);
        }

        let mut entities = BTreeMap::new();
        for entity in Entity::ALL {
            let table = entity.table_name();
            let found = tables.get(table).ok_or(SchemaError::MissingEntity {
                entity: entity.name(),
                table,
            })?;

            let mut bound = Vec::with_capacity(entity.columns().len());
            for spec in entity.columns() {
                let column = found.get(spec.name).ok_or(SchemaError::MissingColumn {
                    table,
                    column: spec.name,
                })?;
                if !spec.kind.accepts(&column.data_type) {
                    return Err(SchemaError::TypeMismatch {
                        table,
                        column: spec.name,
                        expected: spec.kind,
                        found: column.data_type.clone(),
                    });
                }
                bound.push(BoundColumn {
                    spec: *spec,
                    data_type: column.data_type.clone(),
                });
            }
            entities.insert(entity, bound);
        }

        Ok(Self { entities })
    }

    /// Bound columns of `entity`, in declaration order.
    pub fn columns(&self, entity: Entity) -> &[BoundColumn] {
        self.entities.get(&entity).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_type(kind: ColumnKind) -> &'static str {
        match kind {
            ColumnKind::Text => "text",
            ColumnKind::Float => "double precision",
            ColumnKind::Integer => "bigint",
            ColumnKind::Date => "date",
        }
    }

    /// What `information_schema.columns` reports for a database laid out
    /// exactly as declared.
    fn full_reflection() -> Vec<ReflectedColumn> {
        let mut out = Vec::new();
        for entity in Entity::ALL {
            for spec in entity.columns() {
                out.push(ReflectedColumn {
                    table_name: entity.table_name().to_string(),
                    column_name: spec.name.to_string(),
                    data_type: data_type(spec.kind).to_string(),
                });
            }
        }
        out
    }

    #[test]
    fn binds_every_entity_in_declaration_order() {
        let binding = SchemaBinding::bind(&full_reflection()).unwrap();
        assert_eq!(binding.entities().count(), 6);

        let names: Vec<_> = binding
            .columns(Entity::Stocks)
            .iter()
            .map(|c| c.spec.name)
            .collect();
        assert_eq!(
            names,
            ["Date", "Ticker", "Open", "High", "Low", "Close", "Volume", "Sector", "Industry"]
        );
    }

    #[test]
    fn extra_tables_and_columns_are_ignored() {
        let mut reflected = full_reflection();
        reflected.push(ReflectedColumn {
            table_name: "Final_Data".into(),
            column_name: "index".into(),
            data_type: "bigint".into(),
        });
        reflected.push(ReflectedColumn {
            table_name: "scratch".into(),
            column_name: "x".into(),
            data_type: "text".into(),
        });
        assert!(SchemaBinding::bind(&reflected).is_ok());
    }

    #[test]
    fn missing_table_is_fatal() {
        let reflected: Vec<_> = full_reflection()
            .into_iter()
            .filter(|c| c.table_name != "Predicted_Summary")
            .collect();
        let err = SchemaBinding::bind(&reflected).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::MissingEntity { entity: "PredictedSummary", table: "Predicted_Summary" }
        ));
    }

    #[test]
    fn missing_column_is_fatal() {
        let reflected: Vec<_> = full_reflection()
            .into_iter()
            .filter(|c| !(c.table_name == "Summary" && c.column_name == "Average_Volume"))
            .collect();
        let err = SchemaBinding::bind(&reflected).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::MissingColumn { table: "Summary", column: "Average_Volume" }
        ));
    }

    #[test]
    fn column_names_are_case_sensitive() {
        let mut reflected = full_reflection();
        for c in reflected.iter_mut() {
            if c.table_name == "Final_Data" && c.column_name == "Ticker" {
                c.column_name = "ticker".into();
            }
        }
        assert!(matches!(
            SchemaBinding::bind(&reflected),
            Err(SchemaError::MissingColumn { table: "Final_Data", column: "Ticker" })
        ));
    }

    #[test]
    fn wrong_type_family_is_fatal() {
        let mut reflected = full_reflection();
        for c in reflected.iter_mut() {
            if c.table_name == "Total_Volume" && c.column_name == "total_volume" {
                c.data_type = "text".into();
            }
        }
        let err = SchemaBinding::bind(&reflected).unwrap_err();
        match err {
            SchemaError::TypeMismatch { table, column, expected, found } => {
                assert_eq!(table, "Total_Volume");
                assert_eq!(column, "total_volume");
                assert_eq!(expected, ColumnKind::Integer);
                assert_eq!(found, "text");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    /// Stored column names of each `diesel::table!`, in `Entity::columns()` order,
    /// plus the SQL diesel renders for a read of the table.
    fn diesel_tables() -> Vec<(Entity, Vec<&'static str>, String)> {
        use diesel::pg::Pg;
        use diesel::{Column, QueryDsl};

        use crate::schema::{
            data_with_prediction as dp, final_data as fd, industry_volume as iv,
            predicted_summary as ps, summary as sm, total_volume as tv,
        };

        fn from_sql<Q>(query: Q) -> String
        where
            Q: diesel::query_builder::QueryFragment<Pg>,
        {
            diesel::debug_query::<Pg, _>(&query).to_string()
        }

        vec![
            (
                Entity::Stocks,
                vec![
                    fd::date::NAME,
                    fd::ticker::NAME,
                    fd::open::NAME,
                    fd::high::NAME,
                    fd::low::NAME,
                    fd::close::NAME,
                    fd::volume::NAME,
                    fd::sector::NAME,
                    fd::industry::NAME,
                ],
                from_sql(fd::table.count()),
            ),
            (
                Entity::Summary,
                vec![
                    sm::ticker::NAME,
                    sm::initial_open::NAME,
                    sm::final_close::NAME,
                    sm::total_change::NAME,
                    sm::percentage_change::NAME,
                    sm::average_volume::NAME,
                    sm::sector::NAME,
                    sm::industry::NAME,
                ],
                from_sql(sm::table.count()),
            ),
            (
                Entity::TotalVolume,
                vec![
                    tv::year::NAME,
                    tv::ticker::NAME,
                    tv::yearly_total::NAME,
                    tv::sector::NAME,
                ],
                from_sql(tv::table.count()),
            ),
            (
                Entity::IndustryVolume,
                vec![iv::sector::NAME, iv::industry::NAME, iv::total_volume::NAME],
                from_sql(iv::table.count()),
            ),
            (
                Entity::PredictedStocks,
                vec![
                    dp::close::NAME,
                    dp::date::NAME,
                    dp::ticker::NAME,
                    dp::sector::NAME,
                    dp::industry::NAME,
                ],
                from_sql(dp::table.count()),
            ),
            (
                Entity::PredictedSummary,
                vec![
                    ps::ticker::NAME,
                    ps::today_price::NAME,
                    ps::predicted_price::NAME,
                    ps::predicted_change::NAME,
                    ps::percentage_change::NAME,
                    ps::sector::NAME,
                    ps::industry::NAME,
                ],
                from_sql(ps::table.count()),
            ),
        ]
    }

    #[test]
    fn checked_columns_match_diesel_tables() {
        let tables = diesel_tables();
        assert_eq!(tables.len(), Entity::ALL.len());
        for (entity, names, sql) in tables {
            let checked: Vec<&str> = entity.columns().iter().map(|c| c.name).collect();
            assert_eq!(checked, names, "{}", entity.name());
            assert!(
                sql.contains(&format!("FROM \"{}\"", entity.table_name())),
                "{}: {sql}",
                entity.name()
            );
        }
    }

    #[test]
    fn varchar_counts_as_text() {
        let mut reflected = full_reflection();
        for c in reflected.iter_mut() {
            if c.data_type == "text" {
                c.data_type = "character varying".into();
            }
        }
        assert!(SchemaBinding::bind(&reflected).is_ok());
    }
}
