//! Unified error type for the scoreboard crates.
//!
//! Data-access operations return [`Result`] so callers can tell a uniqueness
//! conflict apart from bad input or a missing row instead of receiving an
//! absent value for every failure.

use std::fmt;

/// Unified error type covering all failure modes in scoreboard.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested row could not be found.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity (e.g. "score", "pong").
        entity: String,
        /// The identifier that was looked up.
        id: String,
    },

    /// Caller-supplied data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A row with the same unique key already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A database operation failed.
    #[error("Database error: {source}")]
    Database {
        /// The underlying database error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Convenience constructor for [`Error::NotFound`].
    pub fn not_found(entity: impl Into<String>, id: impl fmt::Display) -> Self {
        Error::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Convenience constructor for [`Error::Database`].
    pub fn database(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Database {
            source: source.into(),
        }
    }

    /// Convenience constructor for [`Error::Conflict`].
    pub fn conflict(msg: impl Into<String>) -> Self {
        Error::Conflict(msg.into())
    }

    /// Convenience constructor for [`Error::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Returns `true` for [`Error::Conflict`].
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict(_))
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = Error::not_found("pong", 42);
        assert_eq!(err.to_string(), "pong not found: 42");
    }

    #[test]
    fn validation_display() {
        let err = Error::validation("bad date");
        assert_eq!(err.to_string(), "Validation error: bad date");
    }

    #[test]
    fn conflict_display() {
        let err = Error::conflict("username 'bob123' already exists");
        assert_eq!(err.to_string(), "Conflict: username 'bob123' already exists");
        assert!(err.is_conflict());
    }

    #[test]
    fn database_display() {
        let err = Error::database("disk I/O error");
        assert!(err.to_string().contains("disk I/O error"));
        assert!(!err.is_conflict());
    }
}
