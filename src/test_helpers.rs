//! Shared test utilities for the joyful-gallery test suite.
//!
//! Provides sample documents, on-disk site fixtures, and extractors over the
//! renderer's [`View`] so assertions read as lists of labels and captions.
//!
//! # Usage
//!
//! ```text
//! use crate::test_helpers::*;
//!
//! let tmp = setup_site(&[("animals", &["fox.png"])]);
//! let doc = sample_document();
//! assert_eq!(tab_labels(gallery.view()), vec!["Animals", "Birds"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::gallery::View;
use crate::types::{Category, GalleryDocument, Image};

// =========================================================================
// Sample documents
// =========================================================================

/// Two categories: `a` (Animals, one image) and `b` (Birds, two images).
pub fn two_category_json() -> String {
    r#"{
        "categories": [
            {
                "id": "a",
                "name": "Animals",
                "description": "Four legs",
                "images": [
                    {"src": "gallery/a/fox.jpg", "alt": "Fox", "description": "A red fox"}
                ]
            },
            {
                "id": "b",
                "name": "Birds",
                "description": "Two wings",
                "images": [
                    {"src": "gallery/b/heron.jpg", "alt": "Heron", "description": "Heron in the reeds"},
                    {"src": "gallery/b/kingfisher.jpg", "alt": "Kingfisher", "description": "Kingfisher"}
                ]
            }
        ]
    }"#
    .to_string()
}

pub fn sample_document() -> GalleryDocument {
    GalleryDocument::parse(&two_category_json()).unwrap()
}

pub fn image(src: &str, alt: &str, description: Option<&str>) -> Image {
    Image {
        src: src.to_string(),
        alt: alt.to_string(),
        description: description.map(str::to_string),
        ..Image::default()
    }
}

pub fn category(id: &str, name: &str, images: Vec<Image>) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} photography collection"),
        images,
        ..Category::default()
    }
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a site root with `images/gallery/<category>/<file>` for each entry.
///
/// `.png` files are real (tiny) images so they can be probed; anything else
/// is written as placeholder bytes.
pub fn setup_site(categories: &[(&str, &[&str])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (category, files) in categories {
        let dir = tmp.path().join("images/gallery").join(category);
        std::fs::create_dir_all(&dir).unwrap();
        for file in *files {
            write_image(&dir.join(file), 4, 3);
        }
    }
    tmp
}

/// Write an image file; PNGs get real pixel data of the given size.
pub fn write_image(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let is_png = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    if is_png {
        image::RgbImage::new(width, height).save(path).unwrap();
    } else {
        std::fs::write(path, b"placeholder").unwrap();
    }
}

/// Write a gallery document to `<root>/gallery-data.json`.
pub fn write_document(root: &Path, document: &GalleryDocument) {
    std::fs::write(
        root.join("gallery-data.json"),
        document.to_pretty_json().unwrap(),
    )
    .unwrap();
}

// =========================================================================
// View extractors
// =========================================================================

/// Tab labels in display order. Panics if the view has no tabs.
pub fn tab_labels(view: &View) -> Vec<&str> {
    view.tabs
        .as_ref()
        .expect("view has no tabs")
        .iter()
        .map(|t| t.label.as_str())
        .collect()
}

pub fn active_tab_id(view: &View) -> Option<&str> {
    view.active_tab().map(|t| t.category_id.as_str())
}

/// Tile captions in display order.
pub fn tile_captions(view: &View) -> Vec<&str> {
    view.tiles().iter().map(|t| t.caption.as_str()).collect()
}

/// Find a category by id. Panics with the available ids if not found.
pub fn find_category<'a>(document: &'a GalleryDocument, id: &str) -> &'a Category {
    document.category(id).unwrap_or_else(|| {
        let ids: Vec<&str> = document.categories.iter().map(|c| c.id.as_str()).collect();
        panic!("category '{id}' not found. Available: {ids:?}")
    })
}
