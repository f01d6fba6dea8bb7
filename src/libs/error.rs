//! Error types for student record operations.
//!
//! Validation failures never reach the database; storage failures carry the
//! underlying SQLite cause so it can be shown to the user. A statement that
//! matches no row is not an error, see [`Outcome`](crate::libs::session::Outcome).

use thiserror::Error;

/// A form value that failed validation. The display text is the reason
/// shown to the user.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ID required")]
    IdRequired,

    #[error("invalid ID")]
    InvalidId,

    #[error("name required")]
    NameRequired,

    #[error("invalid email")]
    InvalidEmail,

    #[error("invalid phone")]
    InvalidPhone,
}

/// Connection or statement failure.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store was never connected; every operation fails fast.
    #[error("database is not connected: {reason}")]
    Unavailable { reason: String },

    /// Opening the database file failed.
    #[error("failed to open database '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement failed to prepare or execute.
    #[error("{context}: {source}")]
    Statement {
        context: &'static str,
        #[source]
        source: rusqlite::Error,
    },
}

impl StorageError {
    pub(crate) fn statement(context: &'static str) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| StorageError::Statement { context, source }
    }
}

/// Failure of a session action.
#[derive(Debug, Error)]
pub enum StudentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl StudentError {
    pub fn is_validation(&self) -> bool {
        matches!(self, StudentError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_reasons() {
        assert_eq!(ValidationError::IdRequired.to_string(), "ID required");
        assert_eq!(ValidationError::NameRequired.to_string(), "name required");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "invalid email");
        assert_eq!(ValidationError::InvalidPhone.to_string(), "invalid phone");
    }

    #[test]
    fn test_unavailable_carries_reason() {
        let err = StorageError::Unavailable {
            reason: "unable to open database file".to_string(),
        };
        assert_eq!(err.to_string(), "database is not connected: unable to open database file");
    }

    #[test]
    fn test_student_error_is_transparent() {
        let err: StudentError = ValidationError::InvalidPhone.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "invalid phone");
    }
}
