//! CSV file store for the student table.

use std::fs::{self, File};
use std::io::{BufReader, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use crate::config::DbConfig;
use crate::error::DbError;
use crate::record::{Field, Student};
use crate::table::Table;

use super::io_utils::{classify_csv_error, classify_io_error};
use super::RecordStore;

/// Stores the table as a single CSV file with a fixed header row.
#[derive(Debug, Clone)]
pub struct CsvStore {
    /// Backing file path
    path: PathBuf,
}

impl CsvStore {
    /// Creates a store for the data file named in `config`.
    pub fn new(config: &DbConfig) -> Self {
        Self::at(config.data_file.clone())
    }

    /// Creates a store for an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for CsvStore {
    fn load(&self) -> Result<Table, DbError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No data file at {}, starting empty", self.path.display());
                return Ok(Table::new());
            }
            Err(e) => return Err(classify_io_error(e, "Failed to open data file")),
        };

        let table = read_table(BufReader::new(file))?;
        tracing::debug!(
            "Loaded {} students from {}",
            table.len(),
            self.path.display()
        );
        Ok(table)
    }

    fn save(&self, table: &Table) -> Result<(), DbError> {
        // Ensure data directory exists
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| classify_io_error(e, "Failed to create data directory"))?;
        }

        let file = File::create(&self.path)
            .map_err(|e| classify_io_error(e, "Failed to create data file"))?;
        let file = write_records(file, table.records())?;
        file.sync_all()
            .map_err(|e| classify_io_error(e, "Failed to sync data file"))?;

        tracing::debug!("Saved {} students to {}", table.len(), self.path.display());
        Ok(())
    }
}

/// Parses a CSV document into a table.
///
/// # Arguments
/// * `reader` - CSV source with a header row
///
/// # Returns
/// `Result<Table, DbError>` containing the parsed table. An empty document is
/// an empty table; a header that does not match the column set is
/// `DataCorruption`.
pub(crate) fn read_table<R: Read>(reader: R) -> Result<Table, DbError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| classify_csv_error(e, "Failed to read header"))?
        .clone();
    if headers.is_empty() {
        return Ok(Table::new());
    }

    let expected = Field::header();
    if !headers.iter().eq(expected.iter().copied()) {
        return Err(DbError::DataCorruption(format!(
            "unexpected header [{}], expected [{}]",
            headers.iter().collect::<Vec<_>>().join(","),
            expected.join(",")
        )));
    }

    let mut records = Vec::new();
    for (index, result) in csv_reader.deserialize::<Student>().enumerate() {
        let student = result
            .map_err(|e| classify_csv_error(e, &format!("Failed to parse record {}", index + 1)))?;
        records.push(student);
    }

    Table::from_records(records)
}

/// Writes the header row and every record, returning the flushed writer.
///
/// The header is written even when `records` is empty.
pub fn write_records<W: Write>(writer: W, records: &[Student]) -> Result<W, DbError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false) // Header is written explicitly so empty tables keep it
        .from_writer(writer);

    csv_writer
        .write_record(Field::header())
        .map_err(|e| classify_csv_error(e, "Failed to write header"))?;
    for student in records {
        csv_writer
            .serialize(student)
            .map_err(|e| classify_csv_error(e, "Failed to write record"))?;
    }

    csv_writer
        .into_inner()
        .map_err(|e| classify_io_error(e.into_error(), "Failed to flush data file"))
}
