//! Filter to remove one movie by title.
//!
//! Used by recommendation so the selected movie is never recommended
//! to itself.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Removes the record whose title equals the given one.
pub struct ExcludeTitleFilter {
    title: String,
}

impl ExcludeTitleFilter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Filter for ExcludeTitleFilter {
    fn name(&self) -> &str {
        "ExcludeTitleFilter"
    }

    fn matches(&self, record: &MovieRecord) -> bool {
        record.title != self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_movie;

    #[test]
    fn test_exclude_title_filter() {
        let movies = vec![
            test_movie("Heat", "English", "Crime", 1995, 8.3),
            test_movie("Ronin", "English", "Crime", 1998, 7.2),
            test_movie("Heat 2", "English", "Crime", 2026, 7.0),
        ];

        let filter = ExcludeTitleFilter::new("Heat");
        let filtered = filter.apply(movies.iter().collect());

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "Ronin");
        assert_eq!(filtered[1].title, "Heat 2");
    }
}
