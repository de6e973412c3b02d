//! Where the gallery document comes from.
//!
//! Loading is a single await: [`fetch_document`] asks a [`DocumentSource`]
//! for the body once, then parses it. There is no retry and no timeout on the
//! fetch itself; a hung server leaves the caller waiting.
//!
//! Failures are classified in two kinds ([`FailureKind`]): transport problems
//! (bad status, network, unreadable file, malformed JSON) and data problems
//! (a well-formed document with nothing to show).

use crate::types::GalleryDocument;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("no categories found")]
    NoCategories,
}

/// Coarse failure classes shown to the user as different messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Data,
}

impl LoadError {
    pub fn kind(&self) -> FailureKind {
        match self {
            LoadError::NoCategories => FailureKind::Data,
            _ => FailureKind::Transport,
        }
    }
}

/// Something that can produce the raw gallery document.
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    async fn fetch(&self) -> Result<String, LoadError>;

    /// Where the document is fetched from, for log messages.
    fn describe(&self) -> String;
}

/// Fetch the document over HTTP(S) with a GET request.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: url::Url,
}

impl HttpSource {
    pub fn new(url: &str) -> Result<Self, LoadError> {
        Ok(Self {
            client: reqwest::Client::new(),
            url: url::Url::parse(url)?,
        })
    }

    /// Resolve `data_path` against the page URL, the way a relative `fetch`
    /// from the page would.
    pub fn relative_to(page_url: &str, data_path: &str) -> Result<Self, LoadError> {
        let page = url::Url::parse(page_url)?;
        Ok(Self {
            client: reqwest::Client::new(),
            url: page.join(data_path)?,
        })
    }

    pub fn url(&self) -> &url::Url {
        &self.url
    }
}

impl DocumentSource for HttpSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Read the document from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FileSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fetch and parse the gallery document.
///
/// A document that parses but has no categories is a [`LoadError::NoCategories`].
pub async fn fetch_document(source: &impl DocumentSource) -> Result<GalleryDocument, LoadError> {
    log::debug!("fetching gallery document from {}", source.describe());
    let body = source.fetch().await?;
    let document = GalleryDocument::parse(&body)?;
    if document.categories.is_empty() {
        return Err(LoadError::NoCategories);
    }
    log::info!(
        "loaded {} categories ({} images) from {}",
        document.categories.len(),
        document.image_count(),
        source.describe()
    );
    Ok(document)
}
