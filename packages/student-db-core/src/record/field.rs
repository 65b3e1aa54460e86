//! Column definitions for the student table.

use std::fmt;
use std::str::FromStr;

use crate::error::DbError;

/// One column of the student table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    StudentId,
    FirstName,
    LastName,
    Age,
    Grade,
    Email,
    EnrollmentDate,
    Score,
}

impl Field {
    /// All columns in file order.
    pub const ALL: [Field; 8] = [
        Field::StudentId,
        Field::FirstName,
        Field::LastName,
        Field::Age,
        Field::Grade,
        Field::Email,
        Field::EnrollmentDate,
        Field::Score,
    ];

    /// Returns the column name used in the CSV header.
    pub fn name(self) -> &'static str {
        match self {
            Field::StudentId => "student_id",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Age => "age",
            Field::Grade => "grade",
            Field::Email => "email",
            Field::EnrollmentDate => "enrollment_date",
            Field::Score => "score",
        }
    }

    /// Returns the header row in file order.
    pub fn header() -> [&'static str; 8] {
        Field::ALL.map(Field::name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s.trim().to_ascii_lowercase().as_str() {
            "student_id" | "id" | "identifier" => Field::StudentId,
            "first_name" => Field::FirstName,
            "last_name" => Field::LastName,
            "age" => Field::Age,
            "grade" => Field::Grade,
            "email" => Field::Email,
            "enrollment_date" => Field::EnrollmentDate,
            "score" => Field::Score,
            _ => return Err(DbError::UnknownField(s.to_string())),
        };
        Ok(field)
    }
}
