//! Browse criteria and the catalog query built from them.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{GenreFilter, GenreMatch, LanguageFilter, RatingRangeFilter, YearFilter};
use data_loader::{Catalog, MovieRecord, Year};
use tracing::{debug, instrument};

/// The set of user-supplied filter predicates.
///
/// Every field is optional; an unset field imposes no constraint, so
/// `Criteria::default()` matches the whole catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub language: Option<String>,
    pub genre: Option<String>,
    pub genre_match: GenreMatch,
    pub year: Option<Year>,
    /// Inclusive lower bound
    pub min_rating: Option<f32>,
    /// Inclusive upper bound
    pub max_rating: Option<f32>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Configure how `genre` is compared (default: exact)
    pub fn with_genre_match(mut self, mode: GenreMatch) -> Self {
        self.genre_match = mode;
        self
    }

    pub fn with_year(mut self, year: Year) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_min_rating(mut self, rating: f32) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn with_max_rating(mut self, rating: f32) -> Self {
        self.max_rating = Some(rating);
        self
    }

    /// True when no predicate is set
    pub fn is_empty(&self) -> bool {
        self.language.is_none()
            && self.genre.is_none()
            && self.year.is_none()
            && self.min_rating.is_none()
            && self.max_rating.is_none()
    }

    /// Build the filter pipeline for the supplied predicates only.
    pub fn to_pipeline(&self) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new();
        if let Some(language) = &self.language {
            pipeline = pipeline.add_filter(LanguageFilter::new(language.clone()));
        }
        if let Some(genre) = &self.genre {
            pipeline = pipeline.add_filter(GenreFilter::new(genre.clone(), self.genre_match));
        }
        if let Some(year) = self.year {
            pipeline = pipeline.add_filter(YearFilter::new(year));
        }
        if self.min_rating.is_some() || self.max_rating.is_some() {
            pipeline =
                pipeline.add_filter(RatingRangeFilter::new(self.min_rating, self.max_rating));
        }
        pipeline
    }
}

/// Read-only queries over a catalog.
pub trait CatalogQuery {
    /// All records satisfying every supplied criterion, in catalog order.
    fn filter(&self, criteria: &Criteria) -> Vec<&MovieRecord>;
}

impl CatalogQuery for Catalog {
    #[instrument(skip(self))]
    fn filter(&self, criteria: &Criteria) -> Vec<&MovieRecord> {
        let matches = criteria.to_pipeline().apply_catalog(self);
        debug!("{} of {} movies match", matches.len(), self.len());
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_movie;

    fn create_test_catalog() -> Catalog {
        Catalog::from_records(vec![
            test_movie("Heat", "English", "Crime", 1995, 8.3),
            test_movie("Amelie", "French", "Romance", 2001, 8.3),
            test_movie("Ronin", "English", "Crime", 1998, 7.2),
            test_movie("Rush Hour", "English", "Action, Crime", 1998, 7.0),
        ])
        .unwrap()
    }

    fn titles<'a>(records: &[&'a MovieRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_no_criteria_returns_everything() {
        let catalog = create_test_catalog();
        let criteria = Criteria::new();

        assert!(criteria.is_empty());
        assert!(criteria.to_pipeline().is_empty());
        assert_eq!(
            titles(&catalog.filter(&criteria)),
            ["Heat", "Amelie", "Ronin", "Rush Hour"]
        );
    }

    #[test]
    fn test_every_criterion_applies() {
        let catalog = create_test_catalog();
        let criteria = Criteria::new()
            .with_language("English")
            .with_genre("Crime")
            .with_year(1998)
            .with_min_rating(7.0);

        assert_eq!(criteria.to_pipeline().len(), 4);
        assert_eq!(titles(&catalog.filter(&criteria)), ["Ronin"]);
    }

    #[test]
    fn test_genre_contains() {
        let catalog = create_test_catalog();
        let criteria = Criteria::new()
            .with_genre("crime")
            .with_genre_match(GenreMatch::Contains);

        assert_eq!(titles(&catalog.filter(&criteria)), ["Heat", "Ronin", "Rush Hour"]);
    }

    #[test]
    fn test_max_rating() {
        let catalog = create_test_catalog();
        let criteria = Criteria::new().with_max_rating(7.2);

        assert_eq!(titles(&catalog.filter(&criteria)), ["Ronin", "Rush Hour"]);
    }

    #[test]
    fn test_no_french_movies_is_empty_not_error() {
        let catalog = Catalog::from_records(vec![test_movie("Heat", "English", "Crime", 1995, 8.3)])
            .unwrap();

        let matches = catalog.filter(&Criteria::new().with_language("French"));
        assert!(matches.is_empty());
    }
}
