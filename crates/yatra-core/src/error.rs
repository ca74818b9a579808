//! Error types for the trip library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all trip operations.
#[derive(Error, Debug)]
pub enum TripError {
    /// The caller carries no user identity
    #[error("Unauthorized: sign in to access the trip")]
    Unauthorized,
    /// The caller is signed in but lacks the admin role
    #[error("Forbidden: admin access required to {action}")]
    Forbidden { action: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Step not found for the given slug
    #[error("Step '{slug}' not found")]
    StepNotFound { slug: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Weather passthrough errors
    #[error("Weather error: {message}")]
    Weather { message: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TripError {
        TripError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TripError {
        TripError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TripError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a blocking task join failure.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }

    /// HTTP-style status code for surfaces that speak request/response.
    ///
    /// ```rust
    /// use yatra_core::TripError;
    ///
    /// assert_eq!(TripError::Unauthorized.http_status(), 401);
    /// assert_eq!(
    ///     TripError::StepNotFound { slug: "x".into() }.http_status(),
    ///     404
    /// );
    /// ```
    pub fn http_status(&self) -> u16 {
        match self {
            TripError::Unauthorized => 401,
            TripError::Forbidden { .. } => 403,
            TripError::StepNotFound { .. } => 404,
            TripError::InvalidInput { .. } => 400,
            TripError::Weather { .. } => 502,
            TripError::Database { .. }
            | TripError::FileSystem { .. }
            | TripError::XdgDirectory(_)
            | TripError::Serialization { .. }
            | TripError::Configuration { .. } => 500,
        }
    }
}

impl From<reqwest::Error> for TripError {
    fn from(error: reqwest::Error) -> Self {
        TripError::Weather {
            message: error.to_string(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TripError::database(message).with_source(e))
    }
}

/// Result type alias for trip operations
pub type Result<T> = std::result::Result<T, TripError>;
