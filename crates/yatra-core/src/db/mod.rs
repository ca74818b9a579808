//! SQLite persistence for step records, route progress and packing checks.
//!
//! Each table gets its own `*_queries` module adding methods to
//! [`Database`]. Methods are synchronous; the async [`crate::trip::Trip`]
//! facade runs them on blocking workers, one connection per call.

use std::path::Path;

use rusqlite::{types::Type, Connection};

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod packing_queries;
pub mod route_queries;
pub mod step_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Parses an RFC 3339 column into a timestamp.
pub(crate) fn timestamp_column(index: usize, value: String) -> rusqlite::Result<jiff::Timestamp> {
    value
        .parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}
