//! Status enumerations for itinerary steps.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TripError;

/// Lifecycle state of a single itinerary step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Not yet reached
    #[default]
    Upcoming,

    /// The step the family is on right now
    Active,

    /// Finished, with a completion timestamp
    Done,

    /// Passed over without doing it
    Skipped,
}

impl FromStr for StepStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upcoming" => Ok(StepStatus::Upcoming),
            "active" => Ok(StepStatus::Active),
            "done" => Ok(StepStatus::Done),
            "skipped" => Ok(StepStatus::Skipped),
            _ => Err(format!("Invalid step status: {s}")),
        }
    }
}

impl StepStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Upcoming => "upcoming",
            StepStatus::Active => "active",
            StepStatus::Done => "done",
            StepStatus::Skipped => "skipped",
        }
    }

    /// Whether the step no longer needs attention.
    pub fn is_finished(&self) -> bool {
        matches!(self, StepStatus::Done | StepStatus::Skipped)
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use yatra_core::models::StepStatus;
    ///
    /// assert_eq!(StepStatus::Done.with_icon(), "✓ Done");
    /// assert_eq!(StepStatus::Active.with_icon(), "➤ Now");
    /// assert_eq!(StepStatus::Skipped.with_icon(), "↷ Skipped");
    /// assert_eq!(StepStatus::Upcoming.with_icon(), "○ Upcoming");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepStatus::Done => "✓ Done",
            StepStatus::Active => "➤ Now",
            StepStatus::Skipped => "↷ Skipped",
            StepStatus::Upcoming => "○ Upcoming",
        }
    }
}

/// The two ways a step can be finished by the advance operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepOutcome {
    Done,
    Skipped,
}

impl FromStr for StepOutcome {
    type Err = TripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "done" => Ok(StepOutcome::Done),
            "skipped" => Ok(StepOutcome::Skipped),
            _ => Err(TripError::invalid_input("status")
                .with_reason("Status must be 'done' or 'skipped'")),
        }
    }
}

impl From<StepOutcome> for StepStatus {
    fn from(outcome: StepOutcome) -> Self {
        match outcome {
            StepOutcome::Done => StepStatus::Done,
            StepOutcome::Skipped => StepStatus::Skipped,
        }
    }
}
