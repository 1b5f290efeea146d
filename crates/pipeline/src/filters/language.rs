//! Filter to keep only movies in one language.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps records whose language equals the requested one exactly.
pub struct LanguageFilter {
    language: String,
}

impl LanguageFilter {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl Filter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn matches(&self, record: &MovieRecord) -> bool {
        record.language == self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_movie;

    #[test]
    fn test_language_filter() {
        let movies = vec![
            test_movie("Amelie", "French", "Romance", 2001, 8.3),
            test_movie("Heat", "English", "Crime", 1995, 8.3),
            test_movie("Intouchables", "French", "Comedy", 2011, 8.5),
        ];

        let filter = LanguageFilter::new("French");
        let filtered = filter.apply(movies.iter().collect());

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "Amelie");
        assert_eq!(filtered[1].title, "Intouchables");
    }

    #[test]
    fn test_language_filter_is_exact() {
        let movie = test_movie("Heat", "English", "Crime", 1995, 8.3);
        assert!(!LanguageFilter::new("english").matches(&movie));
        assert!(!LanguageFilter::new("Eng").matches(&movie));
    }
}
