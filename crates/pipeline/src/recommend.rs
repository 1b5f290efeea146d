//! Attribute-match recommendation.
//!
//! ## Algorithm
//! 1. Candidate set = records with the selected movie's language AND genre,
//!    minus the selected movie itself (matched by title)
//! 2. Walk the catalog in order and keep the first `limit` candidates
//!
//! There is no scoring: ties are broken by catalog order, so the same
//! catalog and selection always yield the same list.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{ExcludeTitleFilter, GenreFilter, LanguageFilter};
use data_loader::{Catalog, MovieRecord};
use tracing::{debug, instrument};

/// Number of recommendations shown for a selection
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

/// Pipeline that accepts exactly the candidate set of `selected`.
pub fn candidate_pipeline(selected: &MovieRecord) -> FilterPipeline {
    FilterPipeline::new()
        .add_filter(ExcludeTitleFilter::new(selected.title.clone()))
        .add_filter(LanguageFilter::new(selected.language.clone()))
        .add_filter(GenreFilter::exact(selected.genre.clone()))
}

/// Up to `limit` movies sharing the selection's genre and language.
///
/// Returns fewer (possibly zero) when there are not enough candidates;
/// that is a normal outcome, not an error.
#[instrument(skip(catalog, selected), fields(title = %selected.title))]
pub fn recommend<'a>(
    catalog: &'a Catalog,
    selected: &MovieRecord,
    limit: usize,
) -> Vec<&'a MovieRecord> {
    let pipeline = candidate_pipeline(selected);
    let picks: Vec<&MovieRecord> = catalog
        .iter()
        .filter(|record| pipeline.matches(record))
        .take(limit)
        .collect();

    debug!("Selected {} recommendations (limit {})", picks.len(), limit);
    picks
}
