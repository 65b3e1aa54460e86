//! Validation of field values before they reach the record manager.
//!
//! The manager only checks identifier uniqueness and existence. Callers that
//! build records from user input run these checks first.

use std::ops::RangeInclusive;

use super::changes::StudentChanges;
use super::field::Field;
use super::student::Student;
use crate::error::DbError;

/// Accepted ages.
pub const AGE_RANGE: RangeInclusive<u32> = 1..=150;

/// Accepted scores.
pub const SCORE_RANGE: RangeInclusive<u32> = 0..=100;

/// Validates a complete record.
///
/// # Arguments
/// * `student` - Record about to be added
///
/// # Returns
/// `Result<(), DbError>` with `ValidationFailure` naming the first bad field.
pub fn validate_student(student: &Student) -> Result<(), DbError> {
    require_text(Field::StudentId, &student.student_id)?;
    require_text(Field::FirstName, &student.first_name)?;
    require_text(Field::LastName, &student.last_name)?;
    check_range(Field::Age, student.age, &AGE_RANGE)?;
    require_text(Field::Grade, &student.grade)?;
    require_text(Field::Email, &student.email)?;
    check_range(Field::Score, student.score, &SCORE_RANGE)?;
    Ok(())
}

/// Validates only the fields present in `changes`.
pub fn validate_changes(changes: &StudentChanges) -> Result<(), DbError> {
    let text = [
        (Field::FirstName, &changes.first_name),
        (Field::LastName, &changes.last_name),
        (Field::Grade, &changes.grade),
        (Field::Email, &changes.email),
    ];
    for (field, value) in text {
        if let Some(value) = value {
            require_text(field, value)?;
        }
    }
    if let Some(age) = changes.age {
        check_range(Field::Age, age, &AGE_RANGE)?;
    }
    if let Some(score) = changes.score {
        check_range(Field::Score, score, &SCORE_RANGE)?;
    }
    Ok(())
}

fn require_text(field: Field, value: &str) -> Result<(), DbError> {
    if value.trim().is_empty() {
        return Err(DbError::ValidationFailure {
            field: field.name().to_string(),
            reason: "value is required".to_string(),
        });
    }
    Ok(())
}

fn check_range(field: Field, value: u32, range: &RangeInclusive<u32>) -> Result<(), DbError> {
    if !range.contains(&value) {
        return Err(DbError::ValidationFailure {
            field: field.name().to_string(),
            reason: format!(
                "{} is outside {}..={}",
                value,
                range.start(),
                range.end()
            ),
        });
    }
    Ok(())
}
