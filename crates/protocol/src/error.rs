//! Error types for the nexus-protocol crate.
//!
//! The catalog is local and in-memory, so the only failures are lookups of
//! ids that do not exist, rejected form input, and unparseable names.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// No entity of the given kind has the given id.
    #[error("{kind} not found: {id}")]
    EntityNotFound {
        /// Entity kind, e.g. `"task"` or `"order"`.
        kind: &'static str,
        /// The id that was looked up.
        id: String,
    },

    /// A task title was empty or only whitespace.
    #[error("invalid task title: title cannot be empty")]
    InvalidTaskTitle,

    /// A customer name was empty or only whitespace.
    #[error("invalid customer name: name cannot be empty")]
    InvalidCustomerName,

    /// A phone number that is not an optional `+` followed by 10 to 15
    /// digits (spaces and dashes aside).
    #[error("invalid phone number: `{0}`")]
    InvalidPhone(String),

    /// A customer note was empty or only whitespace.
    #[error("note cannot be empty")]
    EmptyNote,

    /// A path that is not one of the declared navigation routes.
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    /// A string that does not name any variant of an enumeration.
    #[error("unknown {kind}: {value}")]
    UnknownVariant {
        /// Enumeration name, e.g. `"task status"`.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl ProtocolError {
    /// Shorthand for [`ProtocolError::EntityNotFound`].
    #[must_use]
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::EntityNotFound {
            kind,
            id: id.into(),
        }
    }
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
