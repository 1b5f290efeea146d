//! Parser for the tabular movie source.
//!
//! The source is CSV with a header row:
//! `Title,Description,Language,Genre,Year,Rating,Image_Path`
//!
//! Header names are exact. The poster column may also be called `Poster`,
//! `Poster_Path` or `Poster_URL`; the first one present wins.

use crate::error::{DataLoadError, Result};
use crate::types::{LoadOptions, MAX_RATING, MovieRecord, Year};
use csv::StringRecord;

pub const TITLE_COLUMN: &str = "Title";
pub const DESCRIPTION_COLUMN: &str = "Description";
pub const LANGUAGE_COLUMN: &str = "Language";
pub const GENRE_COLUMN: &str = "Genre";
pub const YEAR_COLUMN: &str = "Year";
pub const RATING_COLUMN: &str = "Rating";

/// Accepted names for the poster column, in order of preference
pub const POSTER_COLUMNS: [&str; 4] = ["Image_Path", "Poster", "Poster_Path", "Poster_URL"];

/// Position of every required column in a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnMap {
    title: usize,
    description: usize,
    language: usize,
    genre: usize,
    year: usize,
    rating: usize,
    poster: usize,
}

/// Locate the required columns in the header row
pub(crate) fn resolve_columns(headers: &StringRecord) -> Result<ColumnMap> {
    let position = |name: &str| headers.iter().position(|h| h.trim() == name);
    let require = |name: &str| {
        position(name).ok_or_else(|| DataLoadError::MissingColumn {
            column: name.to_string(),
        })
    };

    let poster = POSTER_COLUMNS
        .iter()
        .find_map(|&name| position(name))
        .ok_or_else(|| DataLoadError::MissingColumn {
            column: POSTER_COLUMNS[0].to_string(),
        })?;

    Ok(ColumnMap {
        title: require(TITLE_COLUMN)?,
        description: require(DESCRIPTION_COLUMN)?,
        language: require(LANGUAGE_COLUMN)?,
        genre: require(GENRE_COLUMN)?,
        year: require(YEAR_COLUMN)?,
        rating: require(RATING_COLUMN)?,
        poster,
    })
}

/// Parse one data row.
///
/// Returns the reason as a plain string on failure; the caller decides
/// whether that aborts the load or just skips the row.
pub(crate) fn parse_row(
    row: &StringRecord,
    columns: &ColumnMap,
    options: &LoadOptions,
) -> std::result::Result<MovieRecord, String> {
    let field = |idx: usize, name: &str| {
        row.get(idx)
            .map(str::trim)
            .ok_or_else(|| format!("Missing {}", name))
    };

    let title = field(columns.title, TITLE_COLUMN)?;
    if title.is_empty() {
        return Err("Empty title".to_string());
    }

    let language = field(columns.language, LANGUAGE_COLUMN)?;
    let genre = field(columns.genre, GENRE_COLUMN)?;
    let (language, genre) = if options.normalize_labels {
        (normalize_label(language), normalize_label(genre))
    } else {
        (language.to_string(), genre.to_string())
    };

    let year = field(columns.year, YEAR_COLUMN)?;
    let rating = field(columns.rating, RATING_COLUMN)?;

    Ok(MovieRecord {
        title: title.to_string(),
        description: field(columns.description, DESCRIPTION_COLUMN)?.to_string(),
        language,
        genre,
        year: parse_year(year)?,
        rating: parse_rating(rating)?,
        // A short row may simply have no poster cell
        poster_reference: row.get(columns.poster).unwrap_or("").trim().to_string(),
    })
}

/// Parse a year cell.
///
/// Spreadsheet exports often write integral numbers as "2019.0", so a
/// float with no fractional part is accepted too.
fn parse_year(s: &str) -> std::result::Result<Year, String> {
    if let Ok(year) = s.parse::<Year>() {
        return Ok(year);
    }
    match s.parse::<f64>() {
        Ok(value) if value.fract() == 0.0 && (0.0..=Year::MAX as f64).contains(&value) => {
            Ok(value as Year)
        }
        _ => Err(format!("Invalid year: '{}'", s)),
    }
}

fn parse_rating(s: &str) -> std::result::Result<f32, String> {
    let rating: f32 = s
        .parse()
        .map_err(|e| format!("Invalid rating '{}': {}", s, e))?;
    if !(0.0..=MAX_RATING).contains(&rating) {
        return Err(format!("Rating {} outside 0-{}", rating, MAX_RATING));
    }
    Ok(rating)
}

/// Trim and title-case a categorical label.
///
/// Example: " sci-fi " -> "Sci-Fi", "ENGLISH" -> "English",
///          "children's" -> "Children's"
pub fn normalize_label(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.trim().chars() {
        if in_word {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        in_word = c.is_alphabetic() || (in_word && c == '\'');
    }
    out
}
