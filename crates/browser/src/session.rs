//! # Movie Browser Session
//!
//! This module coordinates one user interaction:
//! 1. Filter the catalog with the user's criteria
//! 2. Select a movie (the first match when browsing, or by title)
//! 3. Pick recommendations for the selection
//! 4. Resolve every poster, falling back to the placeholder
//! 5. Return render-ready views
//!
//! Each call is independent; the only shared state is the read-only
//! catalog, so a `MovieBrowser` can be cloned freely across callers.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use data_loader::{Catalog, MovieRecord, NotFoundError, Year};
use pipeline::{CatalogQuery, Criteria, DEFAULT_RECOMMENDATION_LIMIT, recommend};
use posters::{ImageHandle, PosterResolver};

/// A movie ready to be rendered: its metadata plus the resolved poster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieCard {
    pub title: String,
    pub description: String,
    pub language: String,
    pub genre: String,
    pub year: Year,
    pub rating: f32,
    pub poster: ImageHandle,
}

/// The selected movie and what to watch next
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionView {
    pub selected: MovieCard,
    /// May be empty; render as "no recommendations"
    pub recommendations: Vec<MovieCard>,
}

/// Result of one browse interaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowseView {
    /// Every record matching the criteria, in catalog order
    pub matches: Vec<MovieRecord>,
    /// Details for the first match, or `None` when nothing matched
    pub selection: Option<SelectionView>,
}

/// Entry point the interaction surface talks to
#[derive(Debug, Clone)]
pub struct MovieBrowser {
    catalog: Arc<Catalog>,
    posters: PosterResolver,
    limit: usize,
}

impl MovieBrowser {
    /// Create a browser over a loaded catalog
    ///
    /// # Arguments
    /// * `catalog` - Shared, immutable catalog
    /// * `posters` - Resolver for poster references
    pub fn new(catalog: Arc<Catalog>, posters: PosterResolver) -> Self {
        Self {
            catalog,
            posters,
            limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }

    /// Configure how many recommendations a selection gets (default: 3)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Filter the catalog and auto-select the first match.
    ///
    /// No match is a valid outcome: the view has no matches and no selection.
    pub fn browse(&self, criteria: &Criteria) -> BrowseView {
        let start_time = Instant::now();

        let matches = self.catalog.filter(criteria);
        info!("Browse matched {} movies", matches.len());

        let selection = matches.first().map(|first| self.selection_for(first));
        let view = BrowseView {
            matches: matches.into_iter().cloned().collect(),
            selection,
        };

        debug!("Browse finished in {:.2?}", start_time.elapsed());
        view
    }

    /// Select a movie by exact title and build its view.
    pub fn select(&self, title: &str) -> Result<SelectionView, NotFoundError> {
        let selected = self.catalog.find_by_title(title)?;
        Ok(self.selection_for(selected))
    }

    fn selection_for(&self, selected: &MovieRecord) -> SelectionView {
        let picks = recommend(&self.catalog, selected, self.limit);
        info!(
            "Selected '{}' with {} recommendations",
            selected.title,
            picks.len()
        );

        SelectionView {
            selected: self.card(selected),
            recommendations: picks.into_iter().map(|record| self.card(record)).collect(),
        }
    }

    fn card(&self, record: &MovieRecord) -> MovieCard {
        MovieCard {
            title: record.title.clone(),
            description: record.description.clone(),
            language: record.language.clone(),
            genre: record.genre.clone(),
            year: record.year,
            rating: record.rating,
            poster: self.posters.resolve_poster(&record.poster_reference),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use std::fs;
    use tempfile::TempDir;

    fn movie(title: &str, language: &str, genre: &str, poster: &str) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            description: format!("About {}", title),
            language: language.to_string(),
            genre: genre.to_string(),
            year: 2020,
            rating: 7.5,
            poster_reference: poster.to_string(),
        }
    }

    /// Catalog of three English dramas and one Korean thriller; only
    /// "The Father" has a poster on disk.
    fn build_test_browser() -> (MovieBrowser, TempDir) {
        let assets = TempDir::new().unwrap();
        fs::create_dir_all(assets.path().join("posters")).unwrap();
        RgbImage::new(2, 3)
            .save(assets.path().join("posters/father.png"))
            .unwrap();

        let catalog = Catalog::from_records(vec![
            movie("The Father", "English", "Drama", "posters/father.png"),
            movie("Nomadland", "English", "Drama", "posters/missing.png"),
            movie("Minari", "English", "Drama", ""),
            movie("Parasite", "Korean", "Thriller", "posters/parasite.png"),
        ])
        .unwrap();

        let browser = MovieBrowser::new(Arc::new(catalog), PosterResolver::new(assets.path()));
        (browser, assets)
    }

    fn titles(cards: &[MovieCard]) -> Vec<&str> {
        cards.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_select_recommends_other_dramas() {
        let (browser, _assets) = build_test_browser();

        let view = browser.select("The Father").unwrap();
        assert_eq!(view.selected.title, "The Father");
        assert!(!view.selected.poster.is_placeholder());
        assert_eq!(titles(&view.recommendations), ["Nomadland", "Minari"]);
    }

    #[test]
    fn test_missing_posters_degrade_to_placeholder() {
        let (browser, _assets) = build_test_browser();

        let view = browser.select("The Father").unwrap();
        assert!(view.recommendations.iter().all(|c| c.poster == ImageHandle::Placeholder));

        let view = browser.select("Parasite").unwrap();
        assert!(view.selected.poster.is_placeholder());
        assert!(view.recommendations.is_empty());
    }

    #[test]
    fn test_select_unknown_title() {
        let (browser, _assets) = build_test_browser();

        let err = browser.select("Citizen Kane").unwrap_err();
        assert_eq!(err, NotFoundError::new("Citizen Kane"));
    }

    #[test]
    fn test_browse_auto_selects_first_match() {
        let (browser, _assets) = build_test_browser();

        let view = browser.browse(&Criteria::new().with_genre("Drama"));
        assert_eq!(view.matches.len(), 3);

        let selection = view.selection.unwrap();
        assert_eq!(selection.selected.title, "The Father");
        assert_eq!(selection.recommendations.len(), 2);
    }

    #[test]
    fn test_browse_without_matches() {
        let (browser, _assets) = build_test_browser();

        let view = browser.browse(&Criteria::new().with_language("French"));
        assert!(view.matches.is_empty());
        assert!(view.selection.is_none());
    }

    #[test]
    fn test_limit() {
        let (browser, _assets) = build_test_browser();
        let browser = browser.with_limit(1);

        let view = browser.select("Minari").unwrap();
        assert_eq!(titles(&view.recommendations), ["The Father"]);
    }
}
