//! Row conversion helpers shared by the query modules.

use jiff::Timestamp;
use rusqlite::{types::Type, Row};

use crate::models::Phase;

/// Reads an RFC 3339 timestamp column.
pub(crate) fn timestamp_column(row: &Row<'_>, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Reads a JSON-encoded phase list column.
pub(crate) fn phases_column(row: &Row<'_>, index: usize) -> rusqlite::Result<Vec<Phase>> {
    let json: String = row.get(index)?;
    serde_json::from_str(&json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Reads an INTEGER id column as `u64`.
pub(crate) fn id_column(row: &Row<'_>, index: usize) -> rusqlite::Result<u64> {
    let id: i64 = row.get(index)?;
    u64::try_from(id)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Integer, Box::new(e)))
}
