//! The gallery document: categories of images, as stored in `gallery-data.json`.
//!
//! The same types are read by the renderer, rewritten by the updater, and
//! checked by the validator, so they must round-trip without losing
//! hand-authored data. Keys this crate does not know about are kept in
//! `extra` and written back out unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// The whole gallery: an ordered list of categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryDocument {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A named group of images, shown under one tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Stable key used by tabs. Unique within a document.
    #[serde(default)]
    pub id: String,
    /// Tab label.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One gallery image.
///
/// `src` is relative to the image root (`gallery/animals/fox.jpg`) and is
/// resolved to a URL by [`crate::config::ImageResolver`]. An entry without
/// one still parses, with an empty `src`, so the rest of the document is not
/// lost; the validator reports it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub src: String,
    #[serde(default)]
    pub alt: String,
    /// Caption. Newly scanned images have none until someone writes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Image {
    /// Caption text, empty when there is no description.
    pub fn caption(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

impl GalleryDocument {
    /// Parse a gallery document from JSON text.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look up a category by id. With duplicate ids the first one wins.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn first_category(&self) -> Option<&Category> {
        self.categories.first()
    }

    /// Total number of images across all categories.
    pub fn image_count(&self) -> usize {
        self.categories.iter().map(|c| c.images.len()).sum()
    }

    /// Category ids that appear more than once, in first-repeat order.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for category in &self.categories {
            if !seen.insert(category.id.as_str()) && !dupes.contains(&category.id.as_str()) {
                dupes.push(category.id.as_str());
            }
        }
        dupes
    }

    /// Serialize with two-space indentation, the layout the data file uses.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
