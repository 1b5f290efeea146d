//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to catalog records.

use data_loader::MovieRecord;

/// Core trait for filtering movie records.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared with concurrent readers
/// - Filters work on borrowed records; the catalog is never copied
/// - `apply` keeps the input order, so results stay in catalog order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single record passes this filter
    fn matches(&self, record: &MovieRecord) -> bool;

    /// Apply this filter to a set of records, preserving their order.
    fn apply<'a>(&self, records: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}
