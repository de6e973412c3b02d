//! Probe trait and shared types.
//!
//! The production implementation is
//! [`FileProbe`](super::rust_backend::FileProbe), which reads image headers
//! with the `image` crate. Tests use the recording mock below.

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Probe failed: {0}")]
    ProbeFailed(String),
}

/// Natural pixel size of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Anything that can tell the natural size of an image file.
///
/// `Sync` so probes can be shared across rayon workers.
pub trait ImageProbe: Sync {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;
}
