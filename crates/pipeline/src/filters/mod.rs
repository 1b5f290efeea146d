//! Filter implementations for the record pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod exclude_title;
pub mod genre;
pub mod language;
pub mod rating_range;
pub mod year;

// Re-export for convenience
pub use exclude_title::ExcludeTitleFilter;
pub use genre::{GenreFilter, GenreMatch};
pub use language::LanguageFilter;
pub use rating_range::RatingRangeFilter;
pub use year::YearFilter;

#[cfg(test)]
pub(crate) fn test_movie(
    title: &str,
    language: &str,
    genre: &str,
    year: u16,
    rating: f32,
) -> data_loader::MovieRecord {
    data_loader::MovieRecord {
        title: title.to_string(),
        description: format!("{} description", title),
        language: language.to_string(),
        genre: genre.to_string(),
        year,
        rating,
        poster_reference: format!("posters/{}.jpg", title.to_lowercase()),
    }
}
