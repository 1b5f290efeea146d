//! Browser crate for the movie picker.
//!
//! This crate contains the session that strings the components together
//! for one user interaction: filter the catalog, select a movie, pick
//! recommendations and resolve every poster into a render-ready card.

pub mod config;
pub mod session;

pub use config::BrowserConfig;
pub use session::{BrowseView, MovieBrowser, MovieCard, SelectionView};
