//! Packing checkbox queries.

use jiff::Timestamp;
use rusqlite::params;

use crate::{
    error::{DatabaseResultExt, Result},
    models::PackingState,
};

const SELECT_PACKING_CHECKS_SQL: &str =
    "SELECT list_key, item_index, checked FROM packing_checks ORDER BY list_key, item_index";
const UPSERT_PACKING_CHECK_SQL: &str = "INSERT INTO packing_checks (list_key, item_index, checked, checked_by, updated_at) VALUES (?1, ?2, ?3, ?4, ?5) ON CONFLICT(list_key, item_index) DO UPDATE SET checked = excluded.checked, checked_by = excluded.checked_by, updated_at = excluded.updated_at";

impl super::Database {
    pub fn get_packing_state(&self) -> Result<PackingState> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PACKING_CHECKS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)? as u32,
                    row.get::<_, bool>(2)?,
                ))
            })
            .db_context("Failed to query packing checks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch packing checks")?;

        let mut state = PackingState::default();
        for (list_key, item_index, checked) in rows {
            state.set(&list_key, item_index, checked);
        }
        Ok(state)
    }

    pub fn set_packing_check(
        &self,
        list_key: &str,
        item_index: u32,
        checked: bool,
        checked_by: &str,
        now: Timestamp,
    ) -> Result<()> {
        self.connection
            .execute(
                UPSERT_PACKING_CHECK_SQL,
                params![
                    list_key,
                    i64::from(item_index),
                    checked,
                    checked_by,
                    now.to_string()
                ],
            )
            .db_context("Failed to save packing check")?;
        Ok(())
    }
}
