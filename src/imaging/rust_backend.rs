//! Header-only probing with the `image` crate.
//!
//! `image::image_dimensions` reads just enough of the file to find its size,
//! so probing a whole category stays cheap even for large originals.

use super::backend::{BackendError, Dimensions, ImageProbe};
use std::path::Path;

/// Probe backed by files on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileProbe;

impl FileProbe {
    pub fn new() -> Self {
        Self
    }
}

impl ImageProbe for FileProbe {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| match e {
            image::ImageError::IoError(io) => BackendError::Io(io),
            other => BackendError::ProbeFailed(format!(
                "Failed to read dimensions of {}: {}",
                path.display(),
                other
            )),
        })?;
        Ok(Dimensions { width, height })
    }
}
