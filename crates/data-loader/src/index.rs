//! Catalog loading.
//!
//! Turns a tabular source into a `Catalog`:
//! 1. Resolve the required columns from the header row
//! 2. Parse every row (skip or abort on malformed rows, per `LoadOptions::strict`)
//! 3. Apply the optional year window
//! 4. Collapse duplicate rows and keep titles unique

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use csv::StringRecord;
use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Counters reported at the end of a load
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub malformed: usize,
    pub outside_year_range: usize,
    pub duplicate_rows: usize,
    pub conflicting_titles: usize,
}

impl Catalog {
    /// Load the catalog from a CSV file on disk.
    ///
    /// This is the main entry point used at process start.
    pub fn load_from_file(path: &Path, options: &LoadOptions) -> Result<Self> {
        info!("Loading movie catalog from {:?}", path);
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DataLoadError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => DataLoadError::IoError(e),
        })?;
        Self::from_reader(file, options)
    }

    /// Load the catalog from any reader producing CSV
    pub fn from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Self> {
        let (catalog, report) = Self::from_reader_with_report(reader, options)?;
        info!(
            "Loaded {} movies ({} malformed, {} outside year range, {} duplicate rows, {} conflicting titles skipped)",
            report.loaded,
            report.malformed,
            report.outside_year_range,
            report.duplicate_rows,
            report.conflicting_titles
        );
        Ok(catalog)
    }

    /// Same as `from_reader`, but also returns what was dropped and why
    pub fn from_reader_with_report<R: Read>(
        reader: R,
        options: &LoadOptions,
    ) -> Result<(Self, LoadReport)> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let columns = parser::resolve_columns(csv_reader.headers()?)?;

        let mut catalog = Catalog::new();
        let mut report = LoadReport::default();

        // Rows are read as bytes so a bad encoding in one row counts as a
        // malformed row instead of ending the load
        for row in csv_reader.byte_records() {
            let row = row?;
            if row.iter().all(|cell| cell.is_empty()) {
                continue; // Skip blank lines
            }
            let line = row.position().map(|p| p.line()).unwrap_or(0);

            let parsed = StringRecord::from_byte_record(row)
                .map_err(|e| format!("invalid UTF-8 in field {}", e.utf8_error().field() + 1))
                .and_then(|row| parser::parse_row(&row, &columns, options));

            let record = match parsed {
                Ok(record) => record,
                Err(reason) if options.strict => {
                    return Err(DataLoadError::ParseError { line, reason });
                }
                Err(reason) => {
                    warn!("Skipping malformed row at line {}: {}", line, reason);
                    report.malformed += 1;
                    continue;
                }
            };

            if let Some((from, to)) = options.year_range {
                if record.year < from || record.year > to {
                    report.outside_year_range += 1;
                    continue;
                }
            }

            if let Some(existing) = catalog.get(&record.title) {
                if same_row(existing, &record) {
                    debug!("Dropping duplicate row for '{}' at line {}", record.title, line);
                    report.duplicate_rows += 1;
                } else {
                    warn!(
                        "Skipping row at line {}: title '{}' already loaded with different attributes",
                        line, record.title
                    );
                    report.conflicting_titles += 1;
                }
                continue;
            }

            catalog.push(record);
        }

        report.loaded = catalog.len();
        Ok((catalog, report))
    }

    /// Count records per genre, in genre order
    pub fn genre_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for record in &self.records {
            *counts.entry(record.genre.as_str()).or_insert(0) += 1;
        }
        self.genres()
            .map(|genre| (genre, counts.get(genre).copied().unwrap_or(0)))
            .collect()
    }
}

/// Rows are duplicates when every attribute used for browsing matches
fn same_row(a: &MovieRecord, b: &MovieRecord) -> bool {
    a.title == b.title
        && a.language == b.language
        && a.genre == b.genre
        && a.year == b.year
        && a.rating.to_bits() == b.rating.to_bits()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Title,Description,Language,Genre,Year,Rating,Image_Path\n";

    fn load(body: &str, options: &LoadOptions) -> Result<(Catalog, LoadReport)> {
        let csv = format!("{}{}", HEADER, body);
        Catalog::from_reader_with_report(csv.as_bytes(), options)
    }

    #[test]
    fn test_load_preserves_order() {
        let (catalog, report) = load(
            "Dune,Desert planet,English,Sci-Fi,2021,8.0,posters/dune.jpg\n\
             Amelie,Paris whimsy,French,Romance,2001,8.3,posters/amelie.jpg\n\
             Heat,Cops and robbers,English,Crime,1995,8.3,\n",
            &LoadOptions::default(),
        )
        .unwrap();

        let titles: Vec<_> = catalog.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Dune", "Amelie", "Heat"]);
        assert_eq!(report.loaded, 3);
        assert_eq!(catalog.get("Heat").unwrap().poster_reference, "");
    }

    #[test]
    fn test_missing_rating_column() {
        let csv = "Title,Description,Language,Genre,Year,Image_Path\n\
                   Dune,Desert planet,English,Sci-Fi,2021,posters/dune.jpg\n";
        let err = Catalog::from_reader(csv.as_bytes(), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn { ref column } if column == "Rating"));
    }

    #[test]
    fn test_lenient_load_skips_malformed_rows() {
        let (catalog, report) = load(
            "Dune,Desert planet,English,Sci-Fi,2021,8.0,\n\
             Broken,Bad year,English,Drama,twenty,7.0,\n\
             Heat,Cops and robbers,English,Crime,1995,8.3,\n",
            &LoadOptions::default(),
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(report.malformed, 1);
        assert!(catalog.get("Broken").is_none());
    }

    /// Latin-1 bytes in one row, as exported by some spreadsheet tools
    fn csv_with_latin1_row() -> Vec<u8> {
        let mut csv = HEADER.as_bytes().to_vec();
        csv.extend_from_slice(b"Dune,Desert planet,English,Sci-Fi,2021,8.0,\n");
        csv.extend_from_slice(b"Caf\xe9 Society,Hollywood,English,Comedy,2016,6.6,\n");
        csv.extend_from_slice(b"Heat,Cops and robbers,English,Crime,1995,8.3,\n");
        csv
    }

    #[test]
    fn test_lenient_load_skips_invalid_utf8_row() {
        let (catalog, report) =
            Catalog::from_reader_with_report(&csv_with_latin1_row()[..], &LoadOptions::default())
                .unwrap();

        let titles: Vec<_> = catalog.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Dune", "Heat"]);
        assert_eq!(report.malformed, 1);
        assert_eq!(report.loaded, 2);
    }

    #[test]
    fn test_strict_load_aborts_on_invalid_utf8_row() {
        let err = Catalog::from_reader_with_report(
            &csv_with_latin1_row()[..],
            &LoadOptions::default().with_strict(true),
        )
        .unwrap_err();

        match err {
            DataLoadError::ParseError { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("UTF-8"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_strict_load_aborts_on_malformed_row() {
        let err = load(
            "Dune,Desert planet,English,Sci-Fi,2021,8.0,\n\
             Broken,Bad rating,English,Drama,2020,great,\n",
            &LoadOptions::default().with_strict(true),
        )
        .unwrap_err();

        match err {
            DataLoadError::ParseError { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("rating"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicates_and_conflicting_titles() {
        let (catalog, report) = load(
            "Dune,Desert planet,English,Sci-Fi,2021,8.0,a.jpg\n\
             Dune,Desert planet,english,sci-fi,2021,8.0,b.jpg\n\
             Dune,Remake,English,Sci-Fi,1984,6.3,c.jpg\n",
            &LoadOptions::default(),
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(report.duplicate_rows, 1);
        assert_eq!(report.conflicting_titles, 1);
        assert_eq!(catalog.get("Dune").unwrap().poster_reference, "a.jpg");
    }

    #[test]
    fn test_year_range() {
        let (catalog, report) = load(
            "Old,,English,Drama,1999,7.0,\n\
             Mid,,English,Drama,2016,7.0,\n\
             New,,English,Drama,2025,7.0,\n",
            &LoadOptions::default().with_year_range(2014, 2024),
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("Mid").is_some());
        assert_eq!(report.outside_year_range, 2);
    }

    #[test]
    fn test_option_lists() {
        let (catalog, _) = load(
            "A,,english,drama,2020,7.0,\n\
             B,,French,Comedy,2018,6.0,\n\
             C,,English,Comedy,2020,5.0,\n",
            &LoadOptions::default(),
        )
        .unwrap();

        assert_eq!(catalog.languages().collect::<Vec<_>>(), ["English", "French"]);
        assert_eq!(catalog.genres().collect::<Vec<_>>(), ["Comedy", "Drama"]);
        assert_eq!(catalog.years().collect::<Vec<_>>(), [2018, 2020]);
        assert_eq!(catalog.genre_counts(), [("Comedy", 2), ("Drama", 1)]);
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        write!(temp_file, "{}", HEADER)?;
        writeln!(temp_file, "Dune,Desert planet,English,Sci-Fi,2021,8.0,posters/dune.jpg")?;

        let catalog = Catalog::load_from_file(temp_file.path(), &LoadOptions::default())?;
        assert_eq!(catalog.len(), 1);
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load_from_file(Path::new("does/not/exist.csv"), &LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
