//! Step definitions, persisted step records and their joined view.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{BilingualText, StepStatus};

/// A compiled-in itinerary activity.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct StepDefinition {
    /// Unique identifier, also the key of the persisted record
    pub slug: &'static str,

    /// Trip day, starting at 0 for the arrival day
    pub day_number: u32,

    /// Order within the day
    pub sort_order: u32,

    /// Planned window, e.g. "8:30 – 9:15 AM" or "9:00 AM onwards"
    pub time_window: &'static str,

    /// Planned duration in minutes
    pub duration_min: i32,

    pub title: BilingualText,
    pub subtitle: BilingualText,
    pub tip: BilingualText,

    /// Things to carry for this step
    pub carry: &'static [BilingualText],

    pub skip_allowed: bool,

    /// What the family gives up by skipping
    pub skip_consequence: Option<BilingualText>,

    pub next_slug: Option<&'static str>,

    /// Label of the trip phase this step belongs to
    pub phase: Option<&'static str>,
}

/// Persisted state of one step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepRecord {
    pub slug: String,
    pub day_number: u32,
    pub sort_order: u32,
    pub status: StepStatus,

    /// Why the step was skipped (skipped steps only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<String>,

    /// When the step was marked done (done steps only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,

    /// User that finished or skipped the step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Completion facts the itinerary cascade reads for one step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StepCompletion {
    pub status: StepStatus,
    pub completed_at: Option<Timestamp>,
}

impl StepCompletion {
    pub fn done_at(completed_at: Timestamp) -> Self {
        Self {
            status: StepStatus::Done,
            completed_at: Some(completed_at),
        }
    }

    pub fn skipped() -> Self {
        Self {
            status: StepStatus::Skipped,
            completed_at: None,
        }
    }
}

impl From<&StepRecord> for StepCompletion {
    fn from(record: &StepRecord) -> Self {
        Self {
            status: record.status,
            completed_at: record.completed_at,
        }
    }
}

/// A persisted record joined with its definition by slug.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StepView {
    pub definition: &'static StepDefinition,
    pub record: StepRecord,
}
