//! Partial updates to a student record.

use chrono::NaiveDate;

use super::field::Field;

/// The set of fields an update should overwrite.
///
/// `None` leaves the stored value untouched. There is no slot for the
/// identifier, so an update can never re-key a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<u32>,
    pub grade: Option<String>,
    pub email: Option<String>,
    pub enrollment_date: Option<NaiveDate>,
    pub score: Option<u32>,
}

impl StudentChanges {
    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Returns the fields this update sets, in column order.
    pub fn fields(&self) -> Vec<Field> {
        let set = [
            (Field::FirstName, self.first_name.is_some()),
            (Field::LastName, self.last_name.is_some()),
            (Field::Age, self.age.is_some()),
            (Field::Grade, self.grade.is_some()),
            (Field::Email, self.email.is_some()),
            (Field::EnrollmentDate, self.enrollment_date.is_some()),
            (Field::Score, self.score.is_some()),
        ];
        set.into_iter()
            .filter_map(|(field, present)| present.then_some(field))
            .collect()
    }
}
