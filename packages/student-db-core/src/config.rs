//! Database configuration.

use std::path::PathBuf;

/// Database configuration.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// CSV file holding the student table
    pub data_file: PathBuf,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("students.csv"),
        }
    }
}
