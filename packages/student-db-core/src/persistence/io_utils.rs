//! I/O utilities for persistence operations.

use std::io::ErrorKind;

use crate::error::DbError;

/// Classifies I/O errors into specific DbError variants.
pub fn classify_io_error(error: std::io::Error, context: &str) -> DbError {
    match error.kind() {
        ErrorKind::StorageFull | ErrorKind::OutOfMemory => {
            DbError::DiskFull(format!("{}: {}", context, error))
        }
        ErrorKind::InvalidData => DbError::SerializationError(format!("{}: {}", context, error)),
        _ => DbError::IoError(format!("{}: {}", context, error)),
    }
}

/// Classifies CSV errors, routing the I/O cases through [`classify_io_error`].
pub fn classify_csv_error(error: csv::Error, context: &str) -> DbError {
    if !error.is_io_error() {
        return DbError::SerializationError(format!("{}: {}", context, error));
    }
    match error.into_kind() {
        csv::ErrorKind::Io(io) => classify_io_error(io, context),
        kind => DbError::SerializationError(format!("{}: {:?}", context, kind)),
    }
}
