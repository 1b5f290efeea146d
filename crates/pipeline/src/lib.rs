//! Filter and recommendation engine over the movie catalog.
//!
//! This crate provides:
//! - Filter trait and implementations for record filtering
//! - FilterPipeline for composing filters
//! - Criteria, the browse query, and `CatalogQuery::filter`
//! - `recommend`, the genre + language match over the catalog
//!
//! ## Architecture
//! Both entry points run the same machinery:
//! 1. Build a FilterPipeline (from Criteria, or from the selected movie)
//! 2. Walk the catalog in order and keep records passing every filter
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{CatalogQuery, Criteria, recommend, DEFAULT_RECOMMENDATION_LIMIT};
//!
//! let matches = catalog.filter(&Criteria::new().with_language("English").with_min_rating(7.0));
//! if let Some(first) = matches.first() {
//!     let picks = recommend(&catalog, first, DEFAULT_RECOMMENDATION_LIMIT);
//! }
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod criteria;
pub mod recommend;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use filters::GenreMatch;
pub use criteria::{CatalogQuery, Criteria};
pub use recommend::{DEFAULT_RECOMMENDATION_LIMIT, candidate_pipeline, recommend};
