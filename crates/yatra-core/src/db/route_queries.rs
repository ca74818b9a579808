//! Route-progress document queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};
use serde_json::Value;

use crate::{
    error::{DatabaseResultExt, Result},
    models::RouteProgress,
};

const SELECT_ROUTE_DOCUMENT_SQL: &str = "SELECT document FROM route_progress WHERE id = ?1";
const UPSERT_ROUTE_DOCUMENT_SQL: &str = "INSERT INTO route_progress (id, document, updated_by, updated_at) VALUES (?1, ?2, ?3, ?4) ON CONFLICT(id) DO UPDATE SET document = excluded.document, updated_by = excluded.updated_by, updated_at = excluded.updated_at";

impl super::Database {
    /// The raw stored document, if the route has one.
    pub fn get_route_document(&self, id: &str) -> Result<Option<Value>> {
        let text: Option<String> = self
            .connection
            .query_row(SELECT_ROUTE_DOCUMENT_SQL, params![id], |row| row.get(0))
            .optional()
            .db_context("Failed to get route progress")?;

        Ok(text.map(|t| serde_json::from_str(&t)).transpose()?)
    }

    /// Stores a raw document, replacing any previous one.
    pub fn put_route_document(
        &self,
        id: &str,
        document: &Value,
        updated_by: &str,
        now: Timestamp,
    ) -> Result<()> {
        let text = serde_json::to_string(document)?;
        self.connection
            .execute(
                UPSERT_ROUTE_DOCUMENT_SQL,
                params![id, text, updated_by, now.to_string()],
            )
            .db_context("Failed to save route progress")?;
        Ok(())
    }

    /// Reads the document as [`RouteProgress`]. Missing rows read as empty
    /// progress and legacy flat maps are upgraded.
    pub fn get_route_progress(&self, id: &str) -> Result<RouteProgress> {
        RouteProgress::from_stored(self.get_route_document(id)?.unwrap_or(Value::Null))
    }

    /// Writes progress in the current versioned envelope.
    pub fn put_route_progress(
        &self,
        id: &str,
        progress: &RouteProgress,
        updated_by: &str,
        now: Timestamp,
    ) -> Result<()> {
        self.put_route_document(id, &progress.to_stored()?, updated_by, now)
    }
}
