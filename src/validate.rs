//! Gallery document validation.
//!
//! Two passes over `gallery-data.json`:
//!
//! - **Local**: every referenced `src` exists under the image root, and every
//!   file under the gallery folder is referenced by some entry.
//! - **Remote**: every referenced `src` answers `200` to an HTTP `HEAD` against
//!   the production storage URL.
//!
//! The document is read as raw JSON rather than through [`crate::types`] so a
//! structurally broken entry is reported as an issue instead of failing the
//! whole parse. Only a missing file, invalid JSON, or a missing `categories`
//! array are fatal.

use rayon::prelude::*;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("gallery data not found at {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("gallery data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("'categories' key missing or not a list in gallery data")]
    MissingCategories,
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// A single problem found during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingImagesList { category: String },
    MissingSrc { category: String },
    DuplicateCategoryId { id: String },
    MissingFile { src: String, expected: PathBuf },
    Unreferenced { path: String },
    /// `status` is `None` when the request itself failed.
    MissingRemote { src: String, url: String, status: Option<u16> },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::MissingImagesList { category } => {
                write!(f, "Category '{category}' missing 'images' list")
            }
            Issue::MissingSrc { category } => {
                write!(f, "Image in category '{category}' missing 'src' key")
            }
            Issue::DuplicateCategoryId { id } => write!(f, "Duplicate category id '{id}'"),
            Issue::MissingFile { src, expected } => {
                write!(f, "Missing local file: {src} (expected at {})", expected.display())
            }
            Issue::Unreferenced { path } => write!(f, "Unreferenced image: {path}"),
            Issue::MissingRemote { src, status, .. } => match status {
                Some(code) => write!(f, "Missing remotely (HTTP {code}): {src}"),
                None => write!(f, "Missing remotely (request failed): {src}"),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of image references checked.
    pub checked: usize,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Image references pulled out of the raw document, plus structural issues.
struct References {
    srcs: Vec<String>,
    issues: Vec<Issue>,
}

fn read_document(data_path: &Path) -> Result<Value, ValidateError> {
    if !data_path.exists() {
        return Err(ValidateError::NotFound(data_path.to_path_buf()));
    }
    let content = std::fs::read_to_string(data_path)?;
    let value: Value = serde_json::from_str(&content)?;
    match value.get("categories") {
        Some(Value::Array(_)) => Ok(value),
        _ => Err(ValidateError::MissingCategories),
    }
}

fn collect_references(document: &Value) -> References {
    let mut srcs = Vec::new();
    let mut issues = Vec::new();
    let mut seen_ids = HashSet::new();

    let categories = document
        .get("categories")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    for category in categories {
        let name = category
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("N/A")
            .to_string();

        if let Some(id) = category.get("id").and_then(Value::as_str) {
            if !seen_ids.insert(id) {
                issues.push(Issue::DuplicateCategoryId { id: id.to_string() });
            }
        }

        let Some(images) = category.get("images").and_then(Value::as_array) else {
            issues.push(Issue::MissingImagesList { category: name });
            continue;
        };
        for image in images {
            match image.get("src").and_then(Value::as_str) {
                Some(src) => srcs.push(src.to_string()),
                None => issues.push(Issue::MissingSrc {
                    category: name.clone(),
                }),
            }
        }
    }

    References { srcs, issues }
}

/// Check references against local files and look for unreferenced images.
pub fn validate_local(
    data_path: &Path,
    images_root: &Path,
    gallery_dir: &str,
) -> Result<ValidationReport, ValidateError> {
    let document = read_document(data_path)?;
    let References { srcs, mut issues } = collect_references(&document);
    log::info!("Found {} image references in {}", srcs.len(), data_path.display());

    for src in &srcs {
        let expected = images_root.join(src);
        if !expected.exists() {
            issues.push(Issue::MissingFile {
                src: src.clone(),
                expected,
            });
        }
    }

    let referenced: HashSet<&str> = srcs.iter().map(String::as_str).collect();
    let mut unreferenced: Vec<String> = gallery_files(images_root, gallery_dir)
        .into_iter()
        .filter(|path| !referenced.contains(path.as_str()))
        .collect();
    unreferenced.sort();
    issues.extend(unreferenced.into_iter().map(|path| Issue::Unreferenced { path }));

    Ok(ValidationReport {
        checked: srcs.len(),
        issues,
    })
}

/// Every file under `<images_root>/<gallery_dir>`, relative to `images_root`
/// with `/` separators.
fn gallery_files(images_root: &Path, gallery_dir: &str) -> Vec<String> {
    let gallery_path = images_root.join(gallery_dir);
    if !gallery_path.is_dir() {
        log::info!(
            "{} does not exist, skipping unreferenced check",
            gallery_path.display()
        );
        return Vec::new();
    }
    WalkDir::new(&gallery_path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            e.path().strip_prefix(images_root).ok().map(|rel| {
                rel.components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/")
            })
        })
        .collect()
}

// =============================================================================
// Remote checks
// =============================================================================

/// Looks up the HTTP status for a URL. `None` means the request failed.
pub trait RemoteCheck: Sync {
    fn status(&self, url: &str) -> Option<u16>;
}

/// `HEAD` requests with a short timeout.
pub struct HttpHeadCheck {
    client: reqwest::blocking::Client,
}

impl HttpHeadCheck {
    pub fn new() -> Result<Self, ValidateError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()?;
        Ok(Self { client })
    }
}

impl RemoteCheck for HttpHeadCheck {
    fn status(&self, url: &str) -> Option<u16> {
        match self.client.head(url).send() {
            Ok(response) => Some(response.status().as_u16()),
            Err(e) => {
                log::debug!("HEAD {url} failed: {e}");
                None
            }
        }
    }
}

/// Check every referenced image against its production URL, in parallel.
///
/// Anything other than a `200` counts as missing.
pub fn validate_remote(
    data_path: &Path,
    resolver: &crate::config::ImageResolver,
    check: &impl RemoteCheck,
) -> Result<ValidationReport, ValidateError> {
    let document = read_document(data_path)?;
    let References { srcs, mut issues } = collect_references(&document);
    log::info!("Checking {} image references remotely", srcs.len());

    let statuses: HashMap<&str, Option<u16>> = srcs
        .par_iter()
        .map(|src| (src.as_str(), check.status(&resolver.remote_url(src))))
        .collect();

    for src in &srcs {
        let status = statuses.get(src.as_str()).copied().flatten();
        if status != Some(200) {
            issues.push(Issue::MissingRemote {
                src: src.clone(),
                url: resolver.remote_url(src),
                status,
            });
        }
    }

    Ok(ValidationReport {
        checked: srcs.len(),
        issues,
    })
}
