//! Filter to keep only movies released in one year.

use crate::traits::Filter;
use data_loader::{MovieRecord, Year};

pub struct YearFilter {
    year: Year,
}

impl YearFilter {
    pub fn new(year: Year) -> Self {
        Self { year }
    }
}

impl Filter for YearFilter {
    fn name(&self) -> &str {
        "YearFilter"
    }

    fn matches(&self, record: &MovieRecord) -> bool {
        record.year == self.year
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_movie;

    #[test]
    fn test_year_filter() {
        let movies = vec![
            test_movie("Old Movie", "English", "Drama", 1980, 7.0),
            test_movie("Era Movie", "English", "Drama", 2000, 7.0),
            test_movie("Recent Movie", "English", "Drama", 2020, 7.0),
        ];

        let filtered = YearFilter::new(2000).apply(movies.iter().collect());

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Era Movie");
    }

    #[test]
    fn test_year_filter_no_match() {
        let movies = vec![test_movie("Old Movie", "English", "Drama", 1980, 7.0)];
        assert!(YearFilter::new(2024).apply(movies.iter().collect()).is_empty());
    }
}
