//! Database schema initialization.

use std::time::Duration;

use crate::error::{DatabaseResultExt, Result};

/// Several family members write to the same file; wait for the lock instead
/// of failing immediately.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Adds columns introduced after a database file was first created.
    fn apply_migrations(&self) -> Result<()> {
        let has_updated_by: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('route_progress') WHERE name = 'updated_by'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect route_progress columns")?;

        if !has_updated_by {
            self.connection
                .execute("ALTER TABLE route_progress ADD COLUMN updated_by TEXT", [])
                .db_context("Failed to add updated_by column to route_progress")?;
        }

        Ok(())
    }
}
