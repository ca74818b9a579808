//! Step record queries: seeding, listing, finishing and resetting.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Transaction};

use super::timestamp_column;
use crate::{
    error::{DatabaseResultExt, Result, TripError},
    models::{StepDefinition, StepOutcome, StepRecord, StepStatus},
};

const STEP_COLUMNS: &str = "slug, day_number, sort_order, status, skip_reason, completed_at, completed_by, created_at, updated_at";
const COUNT_STEPS_SQL: &str = "SELECT COUNT(*) FROM trip_steps";
const UPSERT_SEED_STEP_SQL: &str = "INSERT INTO trip_steps (slug, day_number, sort_order, status, skip_reason, completed_at, completed_by, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, NULL, NULL, NULL, ?5, ?5) ON CONFLICT(slug) DO UPDATE SET day_number = excluded.day_number, sort_order = excluded.sort_order, status = excluded.status, skip_reason = NULL, completed_at = NULL, completed_by = NULL, updated_at = excluded.updated_at";
const CHECK_STEP_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM trip_steps WHERE slug = ?1)";
const FINISH_STEP_SQL: &str = "UPDATE trip_steps SET status = ?1, completed_at = ?2, completed_by = ?3, skip_reason = ?4, updated_at = ?5 WHERE slug = ?6";
const PROMOTE_NEXT_STEP_SQL: &str = "UPDATE trip_steps SET status = 'active', updated_at = ?1 WHERE slug = (SELECT slug FROM trip_steps WHERE status = 'upcoming' ORDER BY day_number, sort_order LIMIT 1)";
const DELETE_ALL_STEPS_SQL: &str = "DELETE FROM trip_steps";

impl super::Database {
    /// Helper function to construct a StepRecord from a database row
    fn build_step_record_from_row(row: &rusqlite::Row) -> rusqlite::Result<StepRecord> {
        let status_str: String = row.get(3)?;
        let status = status_str.parse::<StepStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                Type::Text,
                format!("Invalid status: {status_str}").into(),
            )
        })?;

        Ok(StepRecord {
            slug: row.get(0)?,
            day_number: row.get::<_, i64>(1)? as u32,
            sort_order: row.get::<_, i64>(2)? as u32,
            status,
            skip_reason: row.get(4)?,
            completed_at: row
                .get::<_, Option<String>>(5)?
                .map(|s| timestamp_column(5, s))
                .transpose()?,
            completed_by: row.get(6)?,
            created_at: timestamp_column(7, row.get(7)?)?,
            updated_at: timestamp_column(8, row.get(8)?)?,
        })
    }

    fn insert_seed_rows(tx: &Transaction, definitions: &[StepDefinition]) -> Result<usize> {
        let now = Timestamp::now().to_string();
        let mut stmt = tx
            .prepare(UPSERT_SEED_STEP_SQL)
            .db_context("Failed to prepare seed statement")?;

        for (i, definition) in definitions.iter().enumerate() {
            let status = if i == 0 {
                StepStatus::Active
            } else {
                StepStatus::Upcoming
            };
            stmt.execute(params![
                definition.slug,
                i64::from(definition.day_number),
                i64::from(definition.sort_order),
                status.as_str(),
                &now
            ])
            .db_context("Failed to seed step")?;
        }

        Ok(definitions.len())
    }

    pub fn count_steps(&self) -> Result<usize> {
        let count: i64 = self
            .connection
            .query_row(COUNT_STEPS_SQL, [], |row| row.get(0))
            .db_context("Failed to count steps")?;
        Ok(count as usize)
    }

    /// Writes one row per definition, the first `active` and the rest
    /// `upcoming`. Existing rows with the same slug are overwritten.
    pub fn seed_steps(&mut self, definitions: &[StepDefinition]) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        let seeded = Self::insert_seed_rows(&tx, definitions)?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(seeded)
    }

    /// Seeds the table if it is empty. Returns whether rows were written.
    pub fn ensure_seeded(&mut self, definitions: &[StepDefinition]) -> Result<bool> {
        if self.count_steps()? > 0 {
            return Ok(false);
        }
        self.seed_steps(definitions)?;
        Ok(true)
    }

    /// All records ordered by day, then by position within the day.
    pub fn list_steps(&self) -> Result<Vec<StepRecord>> {
        let sql = format!("SELECT {STEP_COLUMNS} FROM trip_steps ORDER BY day_number, sort_order");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        let steps = stmt
            .query_map([], Self::build_step_record_from_row)
            .db_context("Failed to query steps")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch steps")?;

        Ok(steps)
    }

    pub fn get_step(&self, slug: &str) -> Result<Option<StepRecord>> {
        let sql = format!("SELECT {STEP_COLUMNS} FROM trip_steps WHERE slug = ?1");
        self.connection
            .query_row(&sql, params![slug], Self::build_step_record_from_row)
            .optional()
            .db_context("Failed to get step")
    }

    /// Marks a step done or skipped and promotes the first upcoming step to
    /// active, in one transaction.
    ///
    /// `completed_at` is only written for done steps and `skip_reason` only
    /// for skipped ones.
    pub fn finish_step(
        &mut self,
        slug: &str,
        outcome: StepOutcome,
        skip_reason: Option<&str>,
        completed_by: &str,
        now: Timestamp,
    ) -> Result<StepRecord> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_STEP_EXISTS_SQL, params![slug], |row| row.get(0))
            .db_context("Failed to check step existence")?;
        if !exists {
            return Err(TripError::StepNotFound {
                slug: slug.to_string(),
            });
        }

        let now_str = now.to_string();
        let status = StepStatus::from(outcome);
        let (completed_at, skip_reason) = match outcome {
            StepOutcome::Done => (Some(now_str.as_str()), None),
            StepOutcome::Skipped => (None, skip_reason),
        };

        tx.execute(
            FINISH_STEP_SQL,
            params![
                status.as_str(),
                completed_at,
                completed_by,
                skip_reason,
                &now_str,
                slug
            ],
        )
        .db_context("Failed to update step")?;

        tx.execute(PROMOTE_NEXT_STEP_SQL, params![&now_str])
            .db_context("Failed to promote next step")?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_step(slug)?.ok_or_else(|| TripError::StepNotFound {
            slug: slug.to_string(),
        })
    }

    /// Deletes every record and seeds fresh ones. Returns the new row count.
    pub fn reset_steps(&mut self, definitions: &[StepDefinition]) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_ALL_STEPS_SQL, [])
            .db_context("Failed to delete steps")?;
        let seeded = Self::insert_seed_rows(&tx, definitions)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(seeded)
    }
}
