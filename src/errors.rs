//! Unified error types and result handling.
//!
//! Domain errors (validation, not found) are expected and recoverable by the caller;
//! storage and configuration errors are server faults. [`Error::is_client_error`]
//! tells the two apart.

use thiserror::Error;
use uuid::Uuid;

/// Errors produced by the inventory core, repository and startup code
#[derive(Debug, Error)]
pub enum Error {
    /// An entity invariant was violated on construction or assignment
    #[error("Validation failed for '{field}': {message}")]
    Validation {
        /// Name of the offending attribute
        field: &'static str,
        /// Human-readable description of the violated rule
        message: String,
    },

    /// An update or delete targeted an identifier with no stored record
    #[error("{entity} with ID {id} not found")]
    NotFound {
        /// Human-readable entity name, e.g. "Electronic board"
        entity: &'static str,
        /// Identifier that was looked up
        id: Uuid,
    },

    /// Any failure reported by the persistence layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// I/O failure outside the database (listener bind, serving)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for building a [`Error::Validation`].
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// True for errors caused by the caller's input rather than by the system.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::NotFound { .. })
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
