//! Reasons a poster could not be resolved.
//!
//! These never leave the crate's public resolution API; they exist so the
//! fallback to a placeholder can be logged with a precise cause.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PosterError {
    #[error("Empty poster reference")]
    EmptyReference,

    #[error("Poster reference '{reference}' points outside the asset directory")]
    OutsideAssetDir { reference: String },

    #[error("Poster file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read poster {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode poster {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
