//! Site configuration module.
//!
//! Handles loading, validating, and resolving `config.toml`. The file lives in
//! the site root (next to `gallery-data.json`) and is layered over stock
//! defaults: a user file only needs the keys it wants to override.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [images]
//! local_base = "images/"            # Base for image paths during development
//! local_hosts = ["localhost", "127.0.0.1", "[::1]", ""]
//!
//! [storage]
//! bucket = "photos-joyfulphotographs-com"
//! prefix = "website-images/"
//! aws_profile = "joyful-photos"
//!
//! [gallery]
//! data_path = "gallery-data.json"   # Fetched by the gallery renderer
//! images_dir = "images"             # Local image root, relative to the site root
//! gallery_dir = "gallery"           # Category folders live under images/gallery/
//! gutter = 10.0                     # Horizontal space between tiles (px)
//! columns = 3                       # Tiles per row at full container width
//! container_width = 1200.0          # Width used for offline layout (px)
//! caption_height = 40.0             # Height reserved for a tile caption (px)
//!
//! [colors]
//! primary = "#333333"
//! accent = "#007acc"
//! light = "#f5f5f5"
//! dark = "#212121"
//! text = "#333333"
//! text_light = "#ffffff"
//!
//! [forms]
//! contact_form_id = ""
//! ```
//!
//! ## Image Resolution
//!
//! Gallery entries store image paths relative to the image root
//! (`gallery/animals/fox.jpg`). The [`ImageResolver`] turns those into URLs:
//! pages served from a development host load from `images/`, everything else
//! loads from the object-storage bucket. Which one applies is decided once from
//! the page's host via [`Environment::detect`].
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. The value is built once and handed to whatever
/// needs it; nothing mutates it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Image URL bases for development and production.
    pub images: ImagesConfig,
    /// Object storage holding production images.
    pub storage: StorageConfig,
    /// Gallery data location and layout settings.
    pub gallery: GalleryConfig,
    /// Theme colors by role.
    pub colors: ColorScheme,
    /// Contact form settings.
    pub forms: FormsConfig,
    /// Homepage hero and featured images.
    pub homepage: HomepageImages,
    /// Non-gallery site images.
    pub site_images: SiteImages,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gallery.columns == 0 {
            return Err(ConfigError::Validation(
                "gallery.columns must be non-zero".into(),
            ));
        }
        if self.gallery.gutter < 0.0 {
            return Err(ConfigError::Validation(
                "gallery.gutter must not be negative".into(),
            ));
        }
        if self.gallery.container_width <= 0.0 {
            return Err(ConfigError::Validation(
                "gallery.container_width must be positive".into(),
            ));
        }
        if self.gallery.data_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "gallery.data_path must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Build the image resolver for a page served from `host`.
    pub fn resolver_for_host(&self, host: &str) -> ImageResolver {
        let env = Environment::detect(host, &self.images.local_hosts);
        ImageResolver::new(env, &self.images.local_base, &self.storage.base_url())
    }

    /// Contact form endpoint, if a form id is configured.
    pub fn form_endpoint(&self) -> Option<String> {
        let id = self.forms.contact_form_id.trim();
        if id.is_empty() {
            None
        } else {
            Some(format!("https://formspree.io/f/{id}"))
        }
    }
}

/// Image URL bases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Base prepended to relative image paths on development hosts.
    pub local_base: String,
    /// Hosts that count as development. The empty string matches `file://` pages.
    pub local_hosts: Vec<String>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            local_base: "images/".to_string(),
            local_hosts: vec![
                "localhost".to_string(),
                "127.0.0.1".to_string(),
                "[::1]".to_string(),
                String::new(),
            ],
        }
    }
}

/// Object storage settings for production images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    pub bucket: String,
    /// Key prefix inside the bucket, with trailing slash.
    pub prefix: String,
    /// AWS CLI profile used by `sync`.
    pub aws_profile: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: "photos-joyfulphotographs-com".to_string(),
            prefix: "website-images/".to_string(),
            aws_profile: "joyful-photos".to_string(),
        }
    }
}

impl StorageConfig {
    /// Public HTTPS base for objects under the prefix.
    pub fn base_url(&self) -> String {
        join_url(
            &format!("https://{}.s3.amazonaws.com/", self.bucket),
            &self.prefix,
        )
    }

    /// `s3://bucket/prefix` target used by the sync command.
    pub fn s3_uri(&self) -> String {
        join_url(&format!("s3://{}/", self.bucket), &self.prefix)
    }
}

/// Gallery data location and masonry settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Path of the gallery document, relative to the site root.
    pub data_path: String,
    /// Local image root, relative to the site root.
    pub images_dir: String,
    /// Folder under the image root holding one subfolder per category.
    pub gallery_dir: String,
    pub gutter: f64,
    pub columns: u32,
    pub container_width: f64,
    pub caption_height: f64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            data_path: "gallery-data.json".to_string(),
            images_dir: "images".to_string(),
            gallery_dir: "gallery".to_string(),
            gutter: 10.0,
            columns: 3,
            container_width: 1200.0,
            caption_height: 40.0,
        }
    }
}

/// Theme colors keyed by role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub primary: String,
    pub accent: String,
    /// Light surface color (page backgrounds, tab strip).
    pub light: String,
    /// Dark surface color (footer, active tab).
    pub dark: String,
    pub text: String,
    /// Text placed on dark surfaces.
    pub text_light: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            primary: "#333333".to_string(),
            accent: "#007acc".to_string(),
            light: "#f5f5f5".to_string(),
            dark: "#212121".to_string(),
            text: "#333333".to_string(),
            text_light: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormsConfig {
    /// Opaque id of the external form-relay form. Empty when not set up.
    pub contact_form_id: String,
}

/// Homepage images, relative to the image root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HomepageImages {
    pub hero: String,
    /// Featured tiles keyed by slot name (`portrait`, `landscape`, ...).
    pub featured: BTreeMap<String, String>,
}

impl Default for HomepageImages {
    fn default() -> Self {
        let featured = [
            ("portrait", "sample-animal.jpg"),
            ("landscape", "sample-nature.jpg"),
            ("wildlife", "sample-animal.jpg"),
            ("street", "sample-city.jpg"),
        ]
        .into_iter()
        .map(|(slot, file)| (slot.to_string(), file.to_string()))
        .collect();
        Self {
            hero: "sample-nature.jpg".to_string(),
            featured,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteImages {
    pub logo: String,
    pub about_hero: String,
    pub contact_banner: String,
}

impl Default for SiteImages {
    fn default() -> Self {
        Self {
            logo: "logo.jpg".to_string(),
            about_hero: "sample-architecture.jpg".to_string(),
            contact_banner: "sample-city.jpg".to_string(),
        }
    }
}

// =============================================================================
// Environment detection and image resolution
// =============================================================================

/// Where the page is being served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Development host: images come from the local `images/` folder.
    Local,
    /// Anything else: images come from object storage.
    Production,
}

impl Environment {
    /// Classify a host name against the configured development hosts.
    ///
    /// Comparison ignores ASCII case and any `:port` suffix.
    pub fn detect(host: &str, local_hosts: &[String]) -> Self {
        let host = strip_port(host.trim());
        if local_hosts.iter().any(|h| h.eq_ignore_ascii_case(host)) {
            Environment::Local
        } else {
            Environment::Production
        }
    }

    /// Classify the page at `page_url`. `file://` pages have an empty host.
    pub fn from_page_url(page_url: &str, local_hosts: &[String]) -> Result<Self, url::ParseError> {
        let url = url::Url::parse(page_url)?;
        let host = match url.host() {
            Some(url::Host::Ipv6(addr)) => format!("[{addr}]"),
            Some(host) => host.to_string(),
            None => String::new(),
        };
        Ok(Self::detect(&host, local_hosts))
    }
}

fn strip_port(host: &str) -> &str {
    if let Some(end) = host.strip_prefix('[').and_then(|_| host.find(']')) {
        return &host[..=end];
    }
    match host.rsplit_once(':') {
        Some((name, port)) if !name.contains(':') && port.chars().all(|c| c.is_ascii_digit()) => {
            name
        }
        _ => host,
    }
}

/// Maps relative image paths to absolute URLs for one environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    environment: Environment,
    local_base: String,
    remote_base: String,
}

impl ImageResolver {
    pub fn new(environment: Environment, local_base: &str, remote_base: &str) -> Self {
        Self {
            environment,
            local_base: local_base.to_string(),
            remote_base: remote_base.to_string(),
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Resolve a path stored in the gallery document.
    ///
    /// Absolute URLs pass through untouched.
    pub fn resolve(&self, relative: &str) -> String {
        if is_absolute_url(relative) {
            return relative.to_string();
        }
        let base = match self.environment {
            Environment::Local => &self.local_base,
            Environment::Production => &self.remote_base,
        };
        join_url(base, relative)
    }

    /// Production URL regardless of environment.
    pub fn remote_url(&self, relative: &str) -> String {
        if is_absolute_url(relative) {
            return relative.to_string();
        }
        join_url(&self.remote_base, relative)
    }
}

fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

/// Join a base and a relative path with exactly one `/` between them.
fn join_url(base: &str, relative: &str) -> String {
    let relative = relative.strip_prefix("./").unwrap_or(relative);
    let relative = relative.trim_start_matches('/');
    if base.is_empty() {
        return relative.to_string();
    }
    if relative.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), relative)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the site root.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    let config = resolve_config(base, overlay)?;
    log::debug!("loaded config from {}", root.display());
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Joyful Gallery Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Image URL bases
# ---------------------------------------------------------------------------
[images]
# Prepended to gallery image paths when the page is served from a
# development host.
local_base = "images/"

# Hosts treated as development. "" matches pages opened via file://.
local_hosts = ["localhost", "127.0.0.1", "[::1]", ""]

# ---------------------------------------------------------------------------
# Object storage (production images)
# ---------------------------------------------------------------------------
[storage]
bucket = "photos-joyfulphotographs-com"
prefix = "website-images/"
# Profile passed to `aws s3 sync`.
aws_profile = "joyful-photos"

# ---------------------------------------------------------------------------
# Gallery
# ---------------------------------------------------------------------------
[gallery]
# Gallery document, relative to the site root.
data_path = "gallery-data.json"

# Local image root and the category folder beneath it.
images_dir = "images"
gallery_dir = "gallery"

# Masonry layout: horizontal gutter (px), tiles per row, and the container
# width and caption height used when laying out offline.
gutter = 10.0
columns = 3
container_width = 1200.0
caption_height = 40.0

# ---------------------------------------------------------------------------
# Theme colors
# ---------------------------------------------------------------------------
[colors]
primary = "#333333"
accent = "#007acc"
light = "#f5f5f5"
dark = "#212121"
text = "#333333"
text_light = "#ffffff"

# ---------------------------------------------------------------------------
# Forms
# ---------------------------------------------------------------------------
[forms]
# Id of the hosted contact form. Leave empty to disable the form.
contact_form_id = ""

# ---------------------------------------------------------------------------
# Homepage and site images (relative to the image root)
# ---------------------------------------------------------------------------
[homepage]
hero = "sample-nature.jpg"

[homepage.featured]
landscape = "sample-nature.jpg"
portrait = "sample-animal.jpg"
street = "sample-city.jpg"
wildlife = "sample-animal.jpg"

[site_images]
logo = "logo.jpg"
about_hero = "sample-architecture.jpg"
contact_banner = "sample-city.jpg"
"##
}

/// Generate CSS custom properties from the color scheme.
pub fn generate_color_css(colors: &ColorScheme) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-accent: {accent};
    --color-light: {light};
    --color-dark: {dark};
    --color-text: {text};
    --color-text-light: {text_light};
}}"#,
        primary = colors.primary,
        accent = colors.accent,
        light = colors.light,
        dark = colors.dark,
        text = colors.text,
        text_light = colors.text_light,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn local_hosts() -> Vec<String> {
        ImagesConfig::default().local_hosts
    }

    #[test]
    fn default_config_has_colors() {
        let config = SiteConfig::default();
        assert_eq!(config.colors.primary, "#333333");
        assert_eq!(config.colors.accent, "#007acc");
        assert_eq!(config.colors.text_light, "#ffffff");
    }

    #[test]
    fn default_config_has_gallery_settings() {
        let config = SiteConfig::default();
        assert_eq!(config.gallery.data_path, "gallery-data.json");
        assert_eq!(config.gallery.gutter, 10.0);
        assert_eq!(config.gallery.columns, 3);
        assert_eq!(config.storage.prefix, "website-images/");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors]
accent = "#ff0000"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.colors.accent, "#ff0000");
        // Unspecified values keep their defaults
        assert_eq!(config.colors.primary, "#333333");
        assert_eq!(config.gallery.columns, 3);
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let colors = ColorScheme {
            accent: "#abcdef".to_string(),
            ..ColorScheme::default()
        };
        let css = generate_color_css(&colors);
        assert!(css.contains("--color-accent: #abcdef"));
        assert!(css.contains("--color-text-light: #ffffff"));
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[storage]
bucket = "my-photos"

[forms]
contact_form_id = "abc123"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.storage.bucket, "my-photos");
        assert_eq!(config.storage.prefix, "website-images/");
        assert_eq!(config.forms.contact_form_id, "abc123");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[gallery\ncolumns = 3").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[gallery]\ncolumnz = 4\n");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[thumbnails]\nsize = 4\n");
        assert!(result.is_err());
    }

    #[test]
    fn validate_zero_columns() {
        let mut config = SiteConfig::default();
        config.gallery.columns = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[gallery]\ngutter = -1.0\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn merge_toml_preserves_base_keys() {
        let base: toml::Value = toml::from_str("[a]\nx = 1\ny = 2\n").unwrap();
        let overlay: toml::Value = toml::from_str("[a]\ny = 3\n").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"]["x"].as_integer(), Some(1));
        assert_eq!(merged["a"]["y"].as_integer(), Some(3));
    }

    #[test]
    fn stock_config_toml_parses_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    // =========================================================================
    // Environment and resolver
    // =========================================================================

    #[test]
    fn detect_local_hosts() {
        let hosts = local_hosts();
        assert_eq!(Environment::detect("localhost", &hosts), Environment::Local);
        assert_eq!(Environment::detect("127.0.0.1", &hosts), Environment::Local);
        assert_eq!(Environment::detect("LOCALHOST:8080", &hosts), Environment::Local);
        assert_eq!(Environment::detect("[::1]:3000", &hosts), Environment::Local);
        assert_eq!(Environment::detect("", &hosts), Environment::Local);
    }

    #[test]
    fn detect_production_host() {
        let hosts = local_hosts();
        assert_eq!(
            Environment::detect("joyfulphotographs.com", &hosts),
            Environment::Production
        );
    }

    #[test]
    fn environment_from_page_url() {
        let hosts = local_hosts();
        assert_eq!(
            Environment::from_page_url("http://localhost:8000/gallery.html", &hosts).unwrap(),
            Environment::Local
        );
        assert_eq!(
            Environment::from_page_url("file:///home/me/site/gallery.html", &hosts).unwrap(),
            Environment::Local
        );
        assert_eq!(
            Environment::from_page_url("http://[::1]:8000/", &hosts).unwrap(),
            Environment::Local
        );
        assert_eq!(
            Environment::from_page_url("https://joyfulphotographs.com/gallery.html", &hosts)
                .unwrap(),
            Environment::Production
        );
        assert!(Environment::from_page_url("not a url", &hosts).is_err());
    }

    #[test]
    fn resolver_uses_local_base_on_dev_host() {
        let resolver = SiteConfig::default().resolver_for_host("localhost");
        assert_eq!(resolver.environment(), Environment::Local);
        assert_eq!(
            resolver.resolve("gallery/animals/fox.jpg"),
            "images/gallery/animals/fox.jpg"
        );
    }

    #[test]
    fn resolver_uses_bucket_in_production() {
        let resolver = SiteConfig::default().resolver_for_host("joyfulphotographs.com");
        assert_eq!(
            resolver.resolve("gallery/animals/fox.jpg"),
            "https://photos-joyfulphotographs-com.s3.amazonaws.com/website-images/gallery/animals/fox.jpg"
        );
    }

    #[test]
    fn resolver_normalizes_slashes() {
        let resolver = ImageResolver::new(Environment::Local, "images/", "https://cdn/x/");
        assert_eq!(resolver.resolve("/a.jpg"), "images/a.jpg");
        assert_eq!(resolver.resolve("./a.jpg"), "images/a.jpg");
        assert_eq!(resolver.remote_url("a.jpg"), "https://cdn/x/a.jpg");
    }

    #[test]
    fn resolver_passes_absolute_urls_through() {
        let resolver = SiteConfig::default().resolver_for_host("localhost");
        assert_eq!(
            resolver.resolve("https://example.com/a.jpg"),
            "https://example.com/a.jpg"
        );
        assert_eq!(resolver.resolve("//cdn.example.com/a.jpg"), "//cdn.example.com/a.jpg");
    }

    #[test]
    fn storage_urls() {
        let storage = StorageConfig::default();
        assert_eq!(
            storage.s3_uri(),
            "s3://photos-joyfulphotographs-com/website-images/"
        );
        assert!(storage.base_url().ends_with(".s3.amazonaws.com/website-images/"));
    }

    #[test]
    fn form_endpoint_only_when_configured() {
        let mut config = SiteConfig::default();
        assert_eq!(config.form_endpoint(), None);
        config.forms.contact_form_id = "mdkzoddy".to_string();
        assert_eq!(
            config.form_endpoint().as_deref(),
            Some("https://formspree.io/f/mdkzoddy")
        );
    }
}
