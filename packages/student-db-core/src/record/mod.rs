//! Student record model, column definitions, and field validation.

mod changes;
mod field;
mod student;
pub mod validation;

pub use changes::StudentChanges;
pub use field::Field;
pub use student::Student;
