//! Failures raised by directory use-cases.
//!
//! These errors are transport agnostic. Inbound adapters decide how each kind
//! is presented; the HTTP adapter maps them onto error documents.

use super::directory::DirectoryId;
use super::validation::ConstraintViolations;

/// Failure kinds of the directory lifecycle.
///
/// Storage failures are classified by the operation that hit them and carry
/// the underlying message for logs. Constraint violations pass through
/// unwrapped so each offending field can be reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// No directory has the requested identifier.
    #[error("Directory not found: {id}")]
    NotFound { id: DirectoryId },
    /// Loading a directory failed.
    #[error("Unable to read directory: {message}")]
    Read { message: String },
    /// Persisting a new directory failed.
    #[error("Unable to create directory: {message}")]
    Create { message: String },
    /// Persisting changes to a directory failed.
    #[error("Unable to update directory: {message}")]
    Update { message: String },
    /// Removing a directory failed.
    #[error("Unable to delete directory: {message}")]
    Delete { message: String },
    /// The directory breaks one or more constraints.
    #[error(transparent)]
    Validation(#[from] ConstraintViolations),
}

impl DirectoryError {
    /// Directory `id` does not exist.
    pub fn not_found(id: DirectoryId) -> Self {
        Self::NotFound { id }
    }

    /// Read failure.
    pub fn read(message: impl Into<String>) -> Self {
        Self::Read {
            message: message.into(),
        }
    }

    /// Create failure.
    pub fn create(message: impl Into<String>) -> Self {
        Self::Create {
            message: message.into(),
        }
    }

    /// Update failure.
    pub fn update(message: impl Into<String>) -> Self {
        Self::Update {
            message: message.into(),
        }
    }

    /// Delete failure.
    pub fn delete(message: impl Into<String>) -> Self {
        Self::Delete {
            message: message.into(),
        }
    }
}
