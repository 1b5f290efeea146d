//! Filter to keep movies inside a rating window.
//!
//! Both bounds are optional and inclusive. A lower bound is the usual
//! "at least 7.0" browse control; an upper bound is a "maximum rating"
//! slider.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps records with `min <= rating <= max` for whichever bounds are set.
pub struct RatingRangeFilter {
    min_rating: Option<f32>,
    max_rating: Option<f32>,
}

impl RatingRangeFilter {
    /// Create a new RatingRangeFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Lowest accepted rating, inclusive
    /// * `max_rating` - Highest accepted rating, inclusive
    pub fn new(min_rating: Option<f32>, max_rating: Option<f32>) -> Self {
        Self {
            min_rating,
            max_rating,
        }
    }
}

impl Filter for RatingRangeFilter {
    fn name(&self) -> &str {
        "RatingRangeFilter"
    }

    fn matches(&self, record: &MovieRecord) -> bool {
        self.min_rating.is_none_or(|min| record.rating >= min)
            && self.max_rating.is_none_or(|max| record.rating <= max)
    }
}
