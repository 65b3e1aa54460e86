//! Database error types.

use thiserror::Error;

/// Record store and manager errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DbError {
    /// A record with this identifier is already in the table
    #[error("Student '{id}' already exists")]
    AlreadyExists { id: String },

    /// No record carries this identifier
    #[error("Student '{id}' not found")]
    NotFound { id: String },

    /// Field value rejected before reaching the manager
    #[error("Invalid value for '{field}': {reason}")]
    ValidationFailure { field: String, reason: String },

    /// Unknown column name
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Data corruption detected
    #[error("Data corruption detected: {0}")]
    DataCorruption(String),

    /// Disk full error during persistence
    #[error("Disk full: {0}")]
    DiskFull(String),

    /// I/O error during persistence
    #[error("I/O error: {0}")]
    IoError(String),
}

impl DbError {
    /// Returns true when the error came from reading or writing the backing file.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            DbError::SerializationError(_)
                | DbError::DataCorruption(_)
                | DbError::DiskFull(_)
                | DbError::IoError(_)
        )
    }
}
