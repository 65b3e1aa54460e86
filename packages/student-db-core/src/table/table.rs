//! Ordered student table keyed by identifier.

use std::collections::HashSet;

use crate::error::DbError;
use crate::record::Student;

/// Ordered sequence of student records with pairwise distinct identifiers.
///
/// Records keep insertion order. Lookups are linear scans; the table is
/// expected to stay small.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Records in insertion order
    records: Vec<Student>,
}

impl Table {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from records read back from storage.
    ///
    /// # Arguments
    /// * `records` - Records in file order
    ///
    /// # Returns
    /// `Result<Table, DbError>` with `DataCorruption` if two records share
    /// an identifier.
    pub fn from_records(records: Vec<Student>) -> Result<Self, DbError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.student_id.as_str()) {
                return Err(DbError::DataCorruption(format!(
                    "duplicate student_id '{}'",
                    record.student_id
                )));
            }
        }
        Ok(Self { records })
    }

    /// Returns all records in insertion order.
    pub fn records(&self) -> &[Student] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the index of the record with exactly this identifier.
    pub fn position(&self, student_id: &str) -> Option<usize> {
        self.records.iter().position(|s| s.student_id == student_id)
    }

    /// Returns true if a record with this identifier exists.
    pub fn contains(&self, student_id: &str) -> bool {
        self.position(student_id).is_some()
    }

    /// Looks up a record by identifier.
    pub fn get(&self, student_id: &str) -> Option<&Student> {
        self.records.iter().find(|s| s.student_id == student_id)
    }

    /// Appends a record, rejecting a duplicate identifier.
    pub(crate) fn push(&mut self, student: Student) -> Result<(), DbError> {
        if self.contains(&student.student_id) {
            return Err(DbError::AlreadyExists {
                id: student.student_id,
            });
        }
        self.records.push(student);
        Ok(())
    }

    /// Removes the last record. Used to undo a `push`.
    pub(crate) fn pop(&mut self) -> Option<Student> {
        self.records.pop()
    }

    pub(crate) fn get_mut_at(&mut self, index: usize) -> Option<&mut Student> {
        self.records.get_mut(index)
    }

    /// Removes and returns the record at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds; callers obtain it from `position`.
    pub(crate) fn remove_at(&mut self, index: usize) -> Student {
        self.records.remove(index)
    }

    /// Reinserts a record at `index`. Used to undo a `remove_at`.
    pub(crate) fn insert_at(&mut self, index: usize, student: Student) {
        self.records.insert(index, student);
    }
}
