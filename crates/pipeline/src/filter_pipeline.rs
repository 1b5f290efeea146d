//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::Filter;
use data_loader::{Catalog, MovieRecord};
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// A record passes the pipeline when it passes every filter; an empty
/// pipeline passes everything.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(LanguageFilter::new("English"))
///     .add_filter(RatingRangeFilter::new(Some(7.0), None));
///
/// let matches = pipeline.apply_catalog(&catalog);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Whether a single record passes every filter.
    pub fn matches(&self, record: &MovieRecord) -> bool {
        self.filters.iter().all(|filter| filter.matches(record))
    }

    /// Apply all filters in sequence to the records.
    ///
    /// ## Algorithm
    /// 1. Start with the input records
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set (input order preserved)
    pub fn apply<'a>(&self, records: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        let mut current = records;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Apply the pipeline to every record of a catalog, in catalog order.
    pub fn apply_catalog<'a>(&self, catalog: &'a Catalog) -> Vec<&'a MovieRecord> {
        self.apply(catalog.iter().collect())
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
