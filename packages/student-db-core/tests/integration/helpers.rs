//! Shared fixtures for integration tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::NaiveDate;
use student_db_core::persistence::RecordStore;
use student_db_core::{DbError, Student, Table};

/// Builds a valid student with a derived email.
pub fn student(id: &str, first_name: &str, score: u32) -> Student {
    Student {
        student_id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: "Student".to_string(),
        age: 16,
        grade: "11".to_string(),
        email: format!("{}@school.test", first_name.to_lowercase()),
        enrollment_date: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
        score,
    }
}

/// Returns identifiers in order.
pub fn ids(records: &[Student]) -> Vec<String> {
    records.iter().map(|s| s.student_id.clone()).collect()
}

/// In-memory store whose saves can be switched to fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub saved: Rc<RefCell<Table>>,
    pub fail_saves: Rc<Cell<bool>>,
    pub save_count: Rc<Cell<usize>>,
}

impl MemoryStore {
    pub fn with_table(table: Table) -> Self {
        Self {
            saved: Rc::new(RefCell::new(table)),
            ..Default::default()
        }
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<Table, DbError> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, table: &Table) -> Result<(), DbError> {
        if self.fail_saves.get() {
            return Err(DbError::DiskFull("simulated".to_string()));
        }
        self.save_count.set(self.save_count.get() + 1);
        *self.saved.borrow_mut() = table.clone();
        Ok(())
    }
}
