//! Gallery folder scanning.
//!
//! The image root is organised one folder per category:
//!
//! ```text
//! images/                          # Image root
//! ├── logo.jpg                     # Site images (ignored by the scan)
//! └── gallery/                     # Gallery folder
//!     ├── animals/                 # Category "animals"
//!     │   ├── fox.jpg
//!     │   └── owl.png
//!     └── street-art/              # Category "street-art"
//!         └── mural.webp
//! ```
//!
//! Only immediate subfolders become categories and only their immediate files
//! count; deeper folders are ignored. Hidden entries are skipped. Files are
//! returned sorted by name so repeated scans produce the same document.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extensions picked up as gallery images (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// An image file found in a category folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedImage {
    pub file_name: String,
    /// Path relative to the image root, always `/`-separated.
    pub relative_path: String,
}

/// Category folder name → its images, sorted by file name.
pub type GalleryScan = BTreeMap<String, Vec<ScannedImage>>;

/// Scan `<images_root>/<gallery_dir>` for category folders.
///
/// A missing gallery folder is not an error: the scan is empty.
pub fn scan_gallery(images_root: &Path, gallery_dir: &str) -> Result<GalleryScan, ScanError> {
    let gallery_path = images_root.join(gallery_dir);
    let mut scan = GalleryScan::new();
    if !gallery_path.is_dir() {
        log::warn!("Gallery path not found: {}", gallery_path.display());
        return Ok(scan);
    }

    for category_dir in collect_entries(&gallery_path)?
        .into_iter()
        .filter(|p| p.is_dir())
    {
        let category = file_name(&category_dir);
        let images = collect_entries(&category_dir)?
            .into_iter()
            .filter(|p| is_image(p))
            .map(|p| {
                let file = file_name(&p);
                ScannedImage {
                    relative_path: format!("{gallery_dir}/{category}/{file}"),
                    file_name: file,
                }
            })
            .collect::<Vec<_>>();
        log::debug!("category {category}: {} images", images.len());
        scan.insert(category, images);
    }

    Ok(scan)
}

fn collect_entries(path: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut entries: Vec<PathBuf> = fs::read_dir(path)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| !file_name(p).starts_with('.'))
        .collect();
    entries.sort();
    Ok(entries)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Whether a path is a file with a gallery image extension.
pub fn is_image(path: &Path) -> bool {
    path.is_file() && has_image_extension(path)
}

pub fn has_image_extension(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn scan_finds_categories_and_images() {
        let tmp = setup_site(&[
            ("animals", &["owl.png", "fox.jpg"]),
            ("street-art", &["mural.webp"]),
        ]);
        let scan = scan_gallery(&tmp.path().join("images"), "gallery").unwrap();

        assert_eq!(
            scan.keys().collect::<Vec<_>>(),
            vec!["animals", "street-art"]
        );
        let animals: Vec<&str> = scan["animals"]
            .iter()
            .map(|i| i.relative_path.as_str())
            .collect();
        assert_eq!(
            animals,
            vec!["gallery/animals/fox.jpg", "gallery/animals/owl.png"]
        );
    }

    #[test]
    fn non_images_and_hidden_files_are_skipped() {
        let tmp = setup_site(&[("animals", &["fox.jpg", "notes.txt", ".hidden.jpg", "RAW.JPEG"])]);
        let scan = scan_gallery(&tmp.path().join("images"), "gallery").unwrap();

        let names: Vec<&str> = scan["animals"].iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, vec!["RAW.JPEG", "fox.jpg"]);
    }

    #[test]
    fn nested_folders_are_ignored() {
        let tmp = setup_site(&[("animals", &["fox.jpg", "drafts/old.jpg"])]);
        let scan = scan_gallery(&tmp.path().join("images"), "gallery").unwrap();
        assert_eq!(scan["animals"].len(), 1);
    }

    #[test]
    fn empty_category_folder_is_kept() {
        let tmp = setup_site(&[("empty", &[])]);
        let scan = scan_gallery(&tmp.path().join("images"), "gallery").unwrap();
        assert!(scan["empty"].is_empty());
    }

    #[test]
    fn loose_files_in_gallery_folder_are_not_categories() {
        let tmp = setup_site(&[("animals", &["fox.jpg"])]);
        write_image(&tmp.path().join("images/gallery/stray.jpg"), 1, 1);
        let scan = scan_gallery(&tmp.path().join("images"), "gallery").unwrap();
        assert_eq!(scan.len(), 1);
    }

    #[test]
    fn missing_gallery_folder_is_empty_scan() {
        let tmp = tempfile::TempDir::new().unwrap();
        let scan = scan_gallery(&tmp.path().join("images"), "gallery").unwrap();
        assert!(scan.is_empty());
    }
}
