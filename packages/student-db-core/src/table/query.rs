//! Filter and sort queries over the student table.

use super::Table;
use crate::record::{Field, Student};

/// A read-only listing request.
///
/// Filters are case-insensitive substring matches combined with AND; empty
/// filter text is ignored. Sorting is stable in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Field and substring pairs
    pub filters: Vec<(Field, String)>,
    /// Field to sort by; `None` keeps insertion order
    pub sort_by: Option<Field>,
    /// Sort direction
    pub ascending: bool,
    /// Inclusive lower bound on `score`; negative bounds keep every record
    pub min_score: Option<i64>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            sort_by: None,
            ascending: true,
            min_score: None,
        }
    }
}

impl Query {
    /// Creates a query that returns every record in insertion order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a substring filter on `field`.
    pub fn filter(mut self, field: Field, text: impl Into<String>) -> Self {
        self.filters.push((field, text.into()));
        self
    }

    /// Sorts results by `field`.
    pub fn sort_by(mut self, field: Field) -> Self {
        self.sort_by = Some(field);
        self
    }

    /// Sorts results by a column name. An unknown name leaves the order unchanged.
    pub fn sort_by_name(mut self, name: &str) -> Self {
        self.sort_by = match name.parse::<Field>() {
            Ok(field) => Some(field),
            Err(_) => {
                tracing::debug!("Ignoring sort on unknown field '{}'", name);
                None
            }
        };
        self
    }

    /// Sets the sort direction.
    pub fn ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    /// Keeps only records with `score >= min_score`.
    pub fn min_score(mut self, min_score: i64) -> Self {
        self.min_score = Some(min_score);
        self
    }

    /// Returns true if `student` passes every filter and the score bound.
    pub fn matches(&self, student: &Student) -> bool {
        let passes_filters = self
            .filters
            .iter()
            .filter(|(_, text)| !text.is_empty())
            .all(|(field, text)| {
                student
                    .field_text(*field)
                    .to_lowercase()
                    .contains(&text.to_lowercase())
            });

        let passes_score = self
            .min_score
            .map_or(true, |min| i64::from(student.score) >= min);

        passes_filters && passes_score
    }
}

impl Table {
    /// Runs a query and returns matching records as a fresh sequence.
    ///
    /// # Arguments
    /// * `query` - Filters, score bound and sort order
    ///
    /// # Returns
    /// Matching records, sorted if the query names a sort field, otherwise
    /// in insertion order.
    ///
    /// # Performance
    /// - O(n) scan plus O(n log n) when sorting
    pub fn query(&self, query: &Query) -> Vec<Student> {
        let mut results: Vec<Student> = self
            .records()
            .iter()
            .filter(|student| query.matches(student))
            .cloned()
            .collect();

        if let Some(field) = query.sort_by {
            // slice::sort_by is stable, so equal keys keep insertion order
            if query.ascending {
                results.sort_by(|a, b| a.compare_by(b, field));
            } else {
                results.sort_by(|a, b| b.compare_by(a, field));
            }
        }

        results
    }
}
