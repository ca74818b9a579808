//! Output of the schedule cascade.

use serde::{Deserialize, Serialize};

/// Display time of one step or phase after cascading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdjustedTime {
    /// Formatted instant or window
    pub time: String,
    /// Whether the displayed time differs from plan
    pub shifted: bool,
    /// Minutes shifted, positive when running late
    pub delta: i32,
}

impl AdjustedTime {
    pub fn new(time: impl Into<String>, shifted: bool, delta: i32) -> Self {
        Self {
            time: time.into(),
            shifted,
            delta,
        }
    }

    /// Human-readable drift such as "+20 min" or "-5 min".
    pub fn delta_label(&self) -> Option<String> {
        match self.delta {
            0 => None,
            d if d > 0 => Some(format!("+{d} min")),
            d => Some(format!("{d} min")),
        }
    }
}
