//! # Data Loader Crate
//!
//! This crate loads the movie dataset and holds it as an immutable catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, Catalog, LoadOptions)
//! - **parser**: Column resolution and row parsing for the CSV source
//! - **index**: Building a Catalog from a reader or a file
//! - **error**: Error types for data loading and lookups
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{Catalog, LoadOptions};
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/movies.csv"), &LoadOptions::default())?;
//!
//! let movie = catalog.find_by_title("Parasite")?;
//! println!("{} ({}) - {}", movie.title, movie.year, movie.genre);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, NotFoundError, Result};
pub use index::LoadReport;
pub use parser::normalize_label;
pub use types::{Catalog, LoadOptions, MAX_RATING, MovieRecord, Year};
