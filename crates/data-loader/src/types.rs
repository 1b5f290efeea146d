//! Core domain types for the movie catalog.
//!
//! This module defines the fundamental data structures used throughout the system:
//! - `MovieRecord`: one row of the dataset
//! - `Catalog`: the immutable, ordered table of records
//! - `LoadOptions`: knobs that control how a tabular source becomes a catalog

use crate::error::{DataLoadError, NotFoundError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

// =============================================================================
// Type Aliases
// =============================================================================

/// Release year of a movie
pub type Year = u16;

/// Highest value on the rating scale (ratings are 0.0..=10.0)
pub const MAX_RATING: f32 = 10.0;

// =============================================================================
// MovieRecord
// =============================================================================

/// Represents one movie row in the dataset.
///
/// `title` is the identity of a record: it is unique within a catalog and
/// is what recommendation uses to exclude the selected movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub description: String,
    /// Categorical, matched exactly
    pub language: String,
    /// Categorical and opaque: "Action, Comedy" is one genre value, not two
    pub genre: String,
    pub year: Year,
    /// Value on the 0-10 scale
    pub rating: f32,
    /// Path-like identifier of the poster asset. May be empty or point at a
    /// file that does not exist; that only changes how the record renders.
    pub poster_reference: String,
}

// =============================================================================
// LoadOptions
// =============================================================================

/// Controls how a tabular source is turned into a `Catalog`.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    /// Abort the whole load on the first malformed row instead of skipping it
    pub strict: bool,
    /// Trim and title-case `Language` and `Genre`
    pub normalize_labels: bool,
    /// Keep only records whose year falls in this inclusive window
    pub year_range: Option<(Year, Year)>,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self {
            strict: false,
            normalize_labels: true,
            year_range: None,
        }
    }

    /// Configure strict parsing (default: false, malformed rows are skipped)
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Configure label normalisation (default: true)
    pub fn with_normalize_labels(mut self, normalize: bool) -> Self {
        self.normalize_labels = normalize;
        self
    }

    /// Restrict the catalog to an inclusive year window (default: no window)
    pub fn with_year_range(mut self, from: Year, to: Year) -> Self {
        self.year_range = Some((from, to));
        self
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Catalog - The Core In-Memory Table
// =============================================================================

/// Immutable, ordered collection of movie records.
///
/// Built once at startup and shared read-only (usually behind an `Arc`).
/// There are no public mutators: every query borrows from the catalog.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Records in source order
    pub(crate) records: Vec<MovieRecord>,
    /// Title -> position in `records`
    pub(crate) title_index: HashMap<String, usize>,

    // Distinct values for the browse controls
    pub(crate) languages: BTreeSet<String>,
    pub(crate) genres: BTreeSet<String>,
    pub(crate) years: BTreeSet<Year>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records already in memory.
    ///
    /// Catalog order is the order of `records`. Fails with
    /// `DataLoadError::DuplicateTitle` if two records share a title.
    pub fn from_records(records: Vec<MovieRecord>) -> Result<Self> {
        let mut catalog = Self::new();
        for record in records {
            if catalog.title_index.contains_key(&record.title) {
                return Err(DataLoadError::DuplicateTitle {
                    title: record.title,
                });
            }
            catalog.push(record);
        }
        Ok(catalog)
    }

    /// Append a record and update the secondary indices.
    ///
    /// Callers guarantee the title is not present yet.
    pub(crate) fn push(&mut self, record: MovieRecord) {
        self.languages.insert(record.language.clone());
        self.genres.insert(record.genre.clone());
        self.years.insert(record.year);
        self.title_index
            .insert(record.title.clone(), self.records.len());
        self.records.push(record);
    }

    /// Exact-match lookup by title
    pub fn get(&self, title: &str) -> Option<&MovieRecord> {
        self.title_index.get(title).map(|&pos| &self.records[pos])
    }

    /// Exact-match lookup by title that reports a miss as an error
    pub fn find_by_title(&self, title: &str) -> std::result::Result<&MovieRecord, NotFoundError> {
        self.get(title).ok_or_else(|| NotFoundError::new(title))
    }

    /// All records in catalog order
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct languages
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(String::as_str)
    }

    /// Sorted distinct genres
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genres.iter().map(String::as_str)
    }

    /// Sorted distinct years
    pub fn years(&self) -> impl Iterator<Item = Year> + '_ {
        self.years.iter().copied()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
