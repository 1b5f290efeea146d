//! Filter to keep only movies of a given genre.
//!
//! The genre column is treated as one opaque value. `GenreMatch::Contains`
//! lets a browse query for "Comedy" also find "Action, Comedy" without the
//! catalog ever splitting the field.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// How a genre criterion is compared with a record's genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenreMatch {
    /// Whole value, case-sensitive
    #[default]
    Exact,
    /// Case-insensitive substring
    Contains,
}

pub struct GenreFilter {
    genre: String,
    mode: GenreMatch,
}

impl GenreFilter {
    pub fn new(genre: impl Into<String>, mode: GenreMatch) -> Self {
        let genre = genre.into();
        let genre = match mode {
            GenreMatch::Exact => genre,
            GenreMatch::Contains => genre.to_lowercase(),
        };
        Self { genre, mode }
    }

    /// Shorthand for an exact match
    pub fn exact(genre: impl Into<String>) -> Self {
        Self::new(genre, GenreMatch::Exact)
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, record: &MovieRecord) -> bool {
        match self.mode {
            GenreMatch::Exact => record.genre == self.genre,
            GenreMatch::Contains => record.genre.to_lowercase().contains(&self.genre),
        }
    }
}
