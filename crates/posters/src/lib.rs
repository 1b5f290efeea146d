//! # Posters Crate
//!
//! Resolves a movie's poster reference into something a UI can render.
//!
//! Resolution never fails. A missing file, an unreadable file or an image
//! that does not decode all come back as `ImageHandle::Placeholder`; the
//! reason is only logged. A broken asset changes how a movie is drawn and
//! nothing else.
//!
//! ## Example Usage
//!
//! ```ignore
//! use posters::{ImageHandle, PosterResolver};
//!
//! let resolver = PosterResolver::new("assets").with_prefix_rewrite("poster/", "posters/");
//! match resolver.resolve_poster(&movie.poster_reference) {
//!     ImageHandle::Poster { path, width, height } => show(path, width, height),
//!     ImageHandle::Placeholder => show_text(posters::PLACEHOLDER_TEXT),
//! }
//! ```

mod error;
pub mod resolver;

pub use resolver::{ImageHandle, PLACEHOLDER_TEXT, PosterResolver};
