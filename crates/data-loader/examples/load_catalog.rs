use data_loader::{Catalog, LoadOptions};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let path: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/movies.csv".to_string())
        .into();

    println!("Loading movie catalog from {}...\n", path.display());

    let start = Instant::now();
    let file = File::open(&path).expect("Failed to open dataset");
    let (catalog, report) = Catalog::from_reader_with_report(file, &LoadOptions::default())
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", report.loaded);
    println!("Malformed rows skipped: {}", report.malformed);
    println!("Duplicate rows dropped: {}", report.duplicate_rows);
    println!("Conflicting titles skipped: {}", report.conflicting_titles);
    println!("Languages: {}", catalog.languages().collect::<Vec<_>>().join(", "));
    println!("Genres: {}", catalog.genres().collect::<Vec<_>>().join(", "));
}
