//! Loading and saving the student table.
//!
//! The whole table is read at startup and the whole table is rewritten on
//! every mutation. There is no atomic rename: a crash mid-write can leave a
//! truncated file behind. Two processes sharing one file race, and the last
//! writer wins.

mod csv_store;
pub mod io_utils;

pub use csv_store::{write_records, CsvStore};

use crate::error::DbError;
use crate::table::Table;

/// Durable storage for a whole table.
pub trait RecordStore {
    /// Reads the full table. Missing storage yields an empty table.
    fn load(&self) -> Result<Table, DbError>;

    /// Replaces stored content with `table`.
    fn save(&self, table: &Table) -> Result<(), DbError>;
}
