//! In-memory student table and its filter/sort query.

mod query;
#[allow(clippy::module_inception)]
mod table;

pub use query::Query;
pub use table::Table;
