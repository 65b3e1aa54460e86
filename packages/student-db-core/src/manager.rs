//! Record manager: the only writer of the student table.

use crate::config::DbConfig;
use crate::error::DbError;
use crate::persistence::{CsvStore, RecordStore};
use crate::record::{Student, StudentChanges};
use crate::table::{Query, Table};

/// Owns the in-memory table and persists it after every mutation.
///
/// Each mutation is all-or-nothing with respect to the in-memory table: if
/// the store fails to save, the change is undone before the error is
/// returned, so later reads never observe a write that did not reach disk.
#[derive(Debug)]
pub struct RecordManager<S: RecordStore = CsvStore> {
    /// Current table contents
    table: Table,
    /// Backing store
    store: S,
}

impl RecordManager<CsvStore> {
    /// Opens the CSV file named in `config`.
    pub fn open(config: &DbConfig) -> Result<Self, DbError> {
        Self::new(CsvStore::new(config))
    }
}

impl<S: RecordStore> RecordManager<S> {
    /// Creates a manager, loading the full table from `store`.
    ///
    /// # Arguments
    /// * `store` - Backing store
    ///
    /// # Returns
    /// `Result<RecordManager, DbError>` containing the manager, or the
    /// storage error that prevented loading.
    pub fn new(store: S) -> Result<Self, DbError> {
        let table = store.load()?;
        tracing::info!("Record manager ready with {} students", table.len());
        Ok(Self { table, store })
    }

    /// Adds a new student at the end of the table.
    ///
    /// # Arguments
    /// * `student` - Record to add
    ///
    /// # Returns
    /// `Result<(), DbError>`: `AlreadyExists` if the identifier is taken, or a
    /// storage error if the table could not be saved.
    pub fn add(&mut self, student: Student) -> Result<(), DbError> {
        let student_id = student.student_id.clone();
        self.table.push(student)?;

        if let Err(err) = self.store.save(&self.table) {
            self.table.pop();
            tracing::warn!("Rolled back add of '{}': {}", student_id, err);
            return Err(err);
        }

        tracing::debug!("Added student '{}'", student_id);
        Ok(())
    }

    /// Overwrites the fields set in `changes` on one student.
    ///
    /// # Arguments
    /// * `student_id` - Identifier of the record to change
    /// * `changes` - Fields to overwrite; unset fields stay as they are
    ///
    /// # Returns
    /// `Result<(), DbError>`: `NotFound` if no record has this identifier, or
    /// a storage error if the table could not be saved.
    pub fn update(&mut self, student_id: &str, changes: &StudentChanges) -> Result<(), DbError> {
        let not_found = || DbError::NotFound {
            id: student_id.to_string(),
        };
        let index = self.table.position(student_id).ok_or_else(not_found)?;
        let record = self.table.get_mut_at(index).ok_or_else(not_found)?;
        let previous = record.clone();
        record.apply(changes);

        if let Err(err) = self.store.save(&self.table) {
            if let Some(record) = self.table.get_mut_at(index) {
                *record = previous;
            }
            tracing::warn!("Rolled back update of '{}': {}", student_id, err);
            return Err(err);
        }

        tracing::debug!(
            "Updated student '{}' fields {:?}",
            student_id,
            changes.fields()
        );
        Ok(())
    }

    /// Deletes one student. Deletion cannot be undone.
    ///
    /// # Returns
    /// `Result<Student, DbError>` containing the removed record, `NotFound`
    /// if absent, or a storage error if the table could not be saved.
    pub fn delete(&mut self, student_id: &str) -> Result<Student, DbError> {
        let index = self
            .table
            .position(student_id)
            .ok_or_else(|| DbError::NotFound {
                id: student_id.to_string(),
            })?;
        let removed = self.table.remove_at(index);

        if let Err(err) = self.store.save(&self.table) {
            self.table.insert_at(index, removed);
            tracing::warn!("Rolled back delete of '{}': {}", student_id, err);
            return Err(err);
        }

        tracing::debug!("Deleted student '{}'", student_id);
        Ok(removed)
    }

    /// Runs a filter/sort query. Never mutates the table.
    pub fn list(&self, query: &Query) -> Vec<Student> {
        self.table.query(query)
    }

    /// Looks up one student by identifier.
    pub fn get(&self, student_id: &str) -> Option<&Student> {
        self.table.get(student_id)
    }

    /// Returns every record in insertion order.
    pub fn records(&self) -> &[Student] {
        self.table.records()
    }

    /// Returns the current table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the number of students.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if there are no students.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
