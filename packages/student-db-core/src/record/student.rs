//! The student record.

use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::changes::StudentChanges;
use super::field::Field;

/// Date format used for `enrollment_date` in files and filters.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// One row of the student table.
///
/// Field order matches the CSV column order. `student_id` is opaque text:
/// `"007"` and `"7"` are different students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub grade: String,
    pub email: String,
    pub enrollment_date: NaiveDate,
    pub score: u32,
}

impl Student {
    /// Returns the value of `field` rendered as text.
    ///
    /// Numbers render in decimal and the enrollment date as `YYYY-MM-DD`,
    /// matching how they appear in the backing file.
    pub fn field_text(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::StudentId => Cow::Borrowed(&self.student_id),
            Field::FirstName => Cow::Borrowed(&self.first_name),
            Field::LastName => Cow::Borrowed(&self.last_name),
            Field::Age => Cow::Owned(self.age.to_string()),
            Field::Grade => Cow::Borrowed(&self.grade),
            Field::Email => Cow::Borrowed(&self.email),
            Field::EnrollmentDate => {
                Cow::Owned(self.enrollment_date.format(DATE_FORMAT).to_string())
            }
            Field::Score => Cow::Owned(self.score.to_string()),
        }
    }

    /// Compares two records by the natural ordering of `field`.
    pub fn compare_by(&self, other: &Student, field: Field) -> Ordering {
        match field {
            Field::StudentId => self.student_id.cmp(&other.student_id),
            Field::FirstName => self.first_name.cmp(&other.first_name),
            Field::LastName => self.last_name.cmp(&other.last_name),
            Field::Age => self.age.cmp(&other.age),
            Field::Grade => self.grade.cmp(&other.grade),
            Field::Email => self.email.cmp(&other.email),
            Field::EnrollmentDate => self.enrollment_date.cmp(&other.enrollment_date),
            Field::Score => self.score.cmp(&other.score),
        }
    }

    /// Applies every field set in `changes`. The identifier is never touched.
    pub fn apply(&mut self, changes: &StudentChanges) {
        if let Some(first_name) = &changes.first_name {
            self.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &changes.last_name {
            self.last_name.clone_from(last_name);
        }
        if let Some(age) = changes.age {
            self.age = age;
        }
        if let Some(grade) = &changes.grade {
            self.grade.clone_from(grade);
        }
        if let Some(email) = &changes.email {
            self.email.clone_from(email);
        }
        if let Some(enrollment_date) = changes.enrollment_date {
            self.enrollment_date = enrollment_date;
        }
        if let Some(score) = changes.score {
            self.score = score;
        }
    }

    /// Returns `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
