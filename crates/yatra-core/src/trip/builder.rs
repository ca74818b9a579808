//! Builder for creating and configuring Trip instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Trip;
use crate::{
    content,
    db::Database,
    error::{Result, TripError},
    models::StepDefinition,
    schedule::{TripClock, DEFAULT_UTC_OFFSET_MINUTES},
};

/// Builder for creating and configuring Trip instances.
#[derive(Debug, Clone)]
pub struct TripBuilder {
    database_path: Option<PathBuf>,
    utc_offset_minutes: i32,
    steps: &'static [StepDefinition],
}

impl TripBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            steps: content::STEPS,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/yatra/yatra.db` or `~/.local/share/yatra/yatra.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the trip's fixed UTC offset. Defaults to +05:30.
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Replaces the compiled-in itinerary.
    pub fn with_steps(mut self, steps: &'static [StepDefinition]) -> Self {
        self.steps = steps;
        self
    }

    /// Builds the configured trip instance.
    ///
    /// # Errors
    ///
    /// Returns `TripError::Configuration` if the UTC offset is out of range
    /// Returns `TripError::FileSystem` if the database directory cannot be
    /// created
    /// Returns `TripError::Database` if database initialization fails
    pub async fn build(self) -> Result<Trip> {
        let clock = TripClock::fixed(self.utc_offset_minutes)?;

        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TripError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(|_| ()))
            .await
            .map_err(TripError::join)??;

        debug!("Opened trip database at {}", db_path.display());
        Ok(Trip::new(db_path, clock, self.steps))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("yatra")
            .place_data_file("yatra.db")
            .map_err(|e| TripError::XdgDirectory(e.to_string()))
    }
}

impl Default for TripBuilder {
    fn default() -> Self {
        Self::new()
    }
}
