//! Core record engine for the student records tool.
//!
//! Provides the student record model, the in-memory table with its
//! filter/sort query, CSV persistence, and the record manager that ties
//! them together.

pub mod config;
pub mod error;
pub mod manager;
pub mod persistence;
pub mod record;
pub mod table;

pub use error::DbError;
pub use manager::RecordManager;
pub use record::{Field, Student, StudentChanges};
pub use table::{Query, Table};
