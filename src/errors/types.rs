//! Error type definitions for the scorebook service

use sea_orm::DbErr;
use thiserror::Error;

/// Top-level application error type
///
/// Uses `thiserror` for automatic trait implementations and error chaining.
/// The web layer maps each variant to a status code and a stable `error`
/// literal so clients can branch without string-matching free text.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or invariant-violating input
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Referenced resource does not exist
    #[error("Not found: {resource} with id {id}")]
    NotFound { resource: String, id: String },

    /// Optimistic-concurrency version mismatch
    #[error(
        "Conflict: {resource} {id} was modified concurrently (expected row_version {expected}, current {current})"
    )]
    Conflict {
        resource: String,
        id: String,
        expected: i32,
        current: i32,
    },

    /// Transient store failure; the operation made no commit decision
    #[error("Store unavailable: {message}")]
    Unavailable { message: String },

    /// Unexpected database errors (SeaORM)
    #[error("Database error: {0}")]
    Database(DbErr),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a validation error with a custom message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not-found error for a resource/id pair
    pub fn not_found<R: Into<String>, I: ToString>(resource: R, id: I) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.to_string(),
        }
    }

    /// Create a conflict error carrying both version sides
    pub fn conflict<R: Into<String>, I: ToString>(
        resource: R,
        id: I,
        expected: i32,
        current: i32,
    ) -> Self {
        Self::Conflict {
            resource: resource.into(),
            id: id.to_string(),
            expected,
            current,
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Route connection-level failures to `Unavailable` so a stalled or
/// exhausted pool is reported as transient, never as a conflict or an
/// internal bug.
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(runtime_err) => AppError::Unavailable {
                message: runtime_err.to_string(),
            },
            DbErr::ConnectionAcquire(acquire_err) => AppError::Unavailable {
                message: acquire_err.to_string(),
            },
            other => AppError::Database(other),
        }
    }
}
