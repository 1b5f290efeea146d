//! Poster lookup with graceful degradation.

use crate::error::PosterError;
use image::ImageReader;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Text shown in place of a poster that could not be resolved
pub const PLACEHOLDER_TEXT: &str = "No poster available.";

/// A renderable poster, or the fixed fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageHandle {
    /// A decoded image on disk
    Poster {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    /// The fallback used whenever the poster cannot be resolved
    Placeholder,
}

impl ImageHandle {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageHandle::Placeholder)
    }

    /// Path of the decoded poster, if there is one
    pub fn path(&self) -> Option<&Path> {
        match self {
            ImageHandle::Poster { path, .. } => Some(path),
            ImageHandle::Placeholder => None,
        }
    }
}

/// Resolves poster references relative to an asset directory.
#[derive(Debug, Clone)]
pub struct PosterResolver {
    asset_dir: PathBuf,
    /// Leading path segment to replace before lookup
    prefix_rewrite: Option<(String, String)>,
}

impl PosterResolver {
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            prefix_rewrite: None,
        }
    }

    /// Rewrite references starting with `from` to start with `to` instead.
    ///
    /// Datasets in the wild point at `poster/x.jpg` while the files live in
    /// `posters/`; this maps one onto the other without editing the data.
    pub fn with_prefix_rewrite(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.prefix_rewrite = Some((from.into(), to.into()));
        self
    }

    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }

    /// Where a reference points on disk, after any prefix rewrite.
    ///
    /// Returns `None` for references that would leave the asset directory:
    /// absolute paths and paths with `..` segments.
    pub fn locate(&self, reference: &str) -> Option<PathBuf> {
        let reference = reference.trim();
        let rewritten = match &self.prefix_rewrite {
            Some((from, to)) if reference.starts_with(from.as_str()) => {
                format!("{}{}", to, &reference[from.len()..])
            }
            _ => reference.to_string(),
        };

        let relative = Path::new(&rewritten)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        relative.then(|| self.asset_dir.join(rewritten))
    }

    /// Resolve a poster reference. Never fails.
    pub fn resolve_poster(&self, reference: &str) -> ImageHandle {
        match self.try_resolve(reference) {
            Ok(handle) => handle,
            Err(e) => {
                debug!("Using placeholder for '{}': {}", reference, e);
                ImageHandle::Placeholder
            }
        }
    }

    fn try_resolve(&self, reference: &str) -> Result<ImageHandle, PosterError> {
        if reference.trim().is_empty() {
            return Err(PosterError::EmptyReference);
        }
        let path = self
            .locate(reference)
            .ok_or_else(|| PosterError::OutsideAssetDir {
                reference: reference.trim().to_string(),
            })?;

        let reader = ImageReader::open(&path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => PosterError::NotFound { path: path.clone() },
                _ => PosterError::Read {
                    path: path.clone(),
                    source,
                },
            })?;

        let image = reader.decode().map_err(|source| PosterError::Decode {
            path: path.clone(),
            source,
        })?;

        Ok(ImageHandle::Poster {
            width: image.width(),
            height: image.height(),
            path,
        })
    }
}
