//! Gallery document updater.
//!
//! Brings `gallery-data.json` in line with what is actually on disk while
//! keeping everything a person wrote by hand. The folder scan from
//! [`crate::scan`] is the source of truth for *which* categories and images
//! exist; the existing document is the source of truth for *how* they are
//! described.
//!
//! ## Merge Rules
//!
//! For each scanned category folder:
//!
//! 1. Reuse the existing category whose `id` or `name` matches the folder
//!    name (ignoring case); otherwise create one with a title-cased name and
//!    a generic description.
//! 2. For each image file, keep the existing entry with the same `src` in that
//!    category; failing that, copy the entry with the same `src` from any other
//!    category; failing that, create `{src, alt}` with generated alt text and
//!    no description (so it shows up in the "without captions" count).
//!
//! Categories whose folder is gone are dropped, as are entries for files that
//! no longer exist. The result is sorted by category name.

use crate::naming::{category_display_name, generate_alt_text};
use crate::scan::{GalleryScan, ScanError};
use crate::types::{Category, GalleryDocument, Image};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{} is not a valid gallery document, leaving it untouched: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}

/// Load the current document, or an empty one if there is no file yet.
///
/// A file that exists but does not parse is an error: writing an update over
/// it would throw away every hand-written caption.
pub fn load_document_or_default(path: &Path) -> Result<GalleryDocument, UpdateError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::warn!("No gallery data at {}, starting empty", path.display());
            return Ok(GalleryDocument::default());
        }
        Err(e) => return Err(e.into()),
    };
    GalleryDocument::parse(&content).map_err(|source| UpdateError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the document as pretty-printed JSON.
pub fn save_document(path: &Path, document: &GalleryDocument) -> Result<(), UpdateError> {
    let mut json = document.to_pretty_json()?;
    json.push('\n');
    fs::write(path, json)?;
    log::info!("Gallery data written to {}", path.display());
    Ok(())
}

/// Merge a folder scan into an existing document.
pub fn update_document(existing: GalleryDocument, scan: &GalleryScan) -> GalleryDocument {
    let GalleryDocument {
        categories: existing_categories,
        extra,
    } = existing;

    // Every image in the old document, by src, for cross-category moves
    let by_src: HashMap<String, Image> = existing_categories
        .iter()
        .flat_map(|c| c.images.iter())
        .filter(|img| !img.src.is_empty())
        .map(|img| (img.src.clone(), img.clone()))
        .collect();

    let mut categories: Vec<Category> = scan
        .iter()
        .map(|(folder, files)| {
            let mut category = matching_category(&existing_categories, folder)
                .cloned()
                .unwrap_or_else(|| new_category(folder));

            let images: Vec<Image> = files
                .iter()
                .map(|file| {
                    if let Some(img) = category.images.iter().find(|i| i.src == file.relative_path) {
                        img.clone()
                    } else if let Some(img) = by_src.get(&file.relative_path) {
                        Image {
                            src: file.relative_path.clone(),
                            ..img.clone()
                        }
                    } else {
                        log::debug!("new image {}", file.relative_path);
                        Image {
                            src: file.relative_path.clone(),
                            alt: generate_alt_text(&file.file_name, folder),
                            ..Image::default()
                        }
                    }
                })
                .collect();

            category.images = images;
            category
        })
        .collect();

    categories.sort_by(|a, b| a.name.cmp(&b.name));

    GalleryDocument { categories, extra }
}

/// First category matching `folder` by id or name, ignoring case.
///
/// Matches are not consumed: folders that differ only in case (`Animals/`
/// and `animals/`) both pick up the same authored metadata.
fn matching_category<'a>(categories: &'a [Category], folder: &str) -> Option<&'a Category> {
    let folder = folder.to_lowercase();
    categories
        .iter()
        .find(|c| c.id.to_lowercase() == folder || c.name.to_lowercase() == folder)
}

fn new_category(folder: &str) -> Category {
    let name = category_display_name(folder);
    log::debug!("new category {folder} ({name})");
    Category {
        id: folder.to_string(),
        description: format!("{name} photography collection"),
        name,
        ..Category::default()
    }
}

/// Counts reported after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    pub categories: usize,
    pub total_images: usize,
    /// Images with no `description` key at all.
    pub without_captions: usize,
    /// `(name, image count)` per category, in document order.
    pub per_category: Vec<(String, usize)>,
}

impl UpdateSummary {
    pub fn of(document: &GalleryDocument) -> Self {
        Self {
            categories: document.categories.len(),
            total_images: document.image_count(),
            without_captions: document
                .categories
                .iter()
                .flat_map(|c| c.images.iter())
                .filter(|i| i.description.is_none())
                .count(),
            per_category: document
                .categories
                .iter()
                .map(|c| (c.name.clone(), c.images.len()))
                .collect(),
        }
    }
}

/// Scan, merge, and write back in one go.
pub fn update_gallery_file(
    data_path: &Path,
    images_root: &Path,
    gallery_dir: &str,
) -> Result<UpdateSummary, UpdateError> {
    let existing = load_document_or_default(data_path)?;
    log::info!(
        "Loaded gallery data with {} categories",
        existing.categories.len()
    );
    let scan = crate::scan::scan_gallery(images_root, gallery_dir)?;
    log::info!("Found {} gallery categories", scan.len());
    let updated = update_document(existing, &scan);
    save_document(data_path, &updated)?;
    Ok(UpdateSummary::of(&updated))
}
