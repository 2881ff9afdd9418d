//! Centralized error handling for the scorebook service
//!
//! The error taxonomy deliberately separates the four outcomes a caller can
//! react to differently:
//!
//! - **Validation**: malformed or invariant-violating input, never partially
//!   applied
//! - **NotFound**: a referenced id does not exist
//! - **Conflict**: an optimistic-concurrency version mismatch — the expected
//!   outcome of a lost race, not a bug
//! - **Unavailable**: a transient store failure or timeout; no commit
//!   decision was made
//!
//! Conflict and Unavailable must never be conflated: a conflicted caller
//! should re-read and resubmit, an unavailable one may simply retry.

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
