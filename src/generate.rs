//! Static HTML rendering of the gallery.
//!
//! Turns a [`View`] (and, when one is active, the masonry positions) into
//! markup. The CLI writes one page per category, and each tab links to its
//! category's page, so the gallery can be served without any script.
//!
//! ## Generated Pages
//!
//! ```text
//! dist/
//! ├── gallery.html              # First category
//! ├── gallery-animals.html      # One page per category id
//! └── gallery-street-art.html
//! ```
//!
//! Pages sit side by side so relative image URLs (`images/...`) resolve the
//! same way from each of them. Ids that map to the same file name
//! (`black white` and `black-white`) get a numeric suffix on the later page
//! (`gallery-black-white-2.html`).
//!
//! ## Markup
//!
//! ```text
//! section.gallery-section
//! ├── div#gallery-tabs          a.gallery-tab[href][data-category] per category
//! ├── h2#category-title
//! ├── p#category-description
//! └── div#gallery-container     div.gallery-item (img + p.gallery-item-description)
//!                               or a single p.gallery-message
//! ```
//!
//! Tiles are absolutely positioned from the layout when one is present;
//! otherwise they flow in document order.
//!
//! ## CSS
//!
//! `static/gallery.css` is embedded at compile time and prefixed with the
//! color custom properties generated from config.
//!
//! Uses [maud](https://maud.lambda.xyz/): all interpolation is escaped.

use crate::config::{self, ImageResolver, SiteConfig};
use crate::gallery::{Content, Gallery, Surface, TabView, TileView, View};
use crate::imaging::{ImageProbe, probe_tiles};
use crate::layout::{LayoutOptions, MasonryLayout};
use crate::source::DocumentSource;
use maud::{DOCTYPE, Markup, html};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS_STATIC: &str = include_str!("../static/gallery.css");

/// Full stylesheet: color properties followed by the static rules.
pub fn page_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    )
}

/// Write rendered markup to `output_dir/relative`, creating parent folders.
pub fn write_page(
    output_dir: &Path,
    relative: &str,
    markup: Markup,
) -> Result<PathBuf, GenerateError> {
    let path = output_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, markup.into_string())?;
    log::debug!("wrote {}", path.display());
    Ok(path)
}

// ============================================================================
// HTML Components
// ============================================================================

fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (css) }
            }
            body {
                (content)
            }
        }
    }
}

fn site_header(title: &str, logo: Option<&str>) -> Markup {
    html! {
        header.site-header {
            @if let Some(src) = logo {
                img.site-logo src=(src) alt=(title);
            }
            h1.site-title { (title) }
        }
    }
}

/// One link per category; the active one carries the `active` class.
///
/// Tabs whose category has no page in `pages` are rendered without `href`.
pub fn render_tabs(tabs: &[TabView], pages: &PageNames) -> Markup {
    html! {
        div #gallery-tabs .gallery-tabs {
            @for tab in tabs {
                a.gallery-tab.active[tab.active]
                    href=[pages.get(&tab.category_id)]
                    data-category=(tab.category_id) {
                    (tab.label)
                }
            }
        }
    }
}

fn render_tile(tile: &TileView, style: Option<String>) -> Markup {
    html! {
        div.gallery-item style=[style] {
            img src=(tile.src) alt=(tile.alt) loading="lazy";
            p.gallery-item-description { (tile.caption) }
        }
    }
}

/// Inline position for tile `index`, when the layout covers it.
fn tile_style(layout: Option<&MasonryLayout>, index: usize) -> Option<String> {
    let layout = layout?;
    let position = layout.positions().get(index)?;
    Some(format!(
        "position: absolute; left: {}; top: {};",
        layout.left_css(position),
        layout.top_css(position)
    ))
}

/// The gallery container and whatever it currently holds.
pub fn render_content(content: &Content, layout: Option<&MasonryLayout>) -> Markup {
    let container_style = match (content, layout) {
        (Content::Tiles(_), Some(layout)) => Some(format!(
            "position: relative; height: {}px;",
            layout.container_height().round()
        )),
        _ => None,
    };
    html! {
        div #gallery-container style=[container_style] {
            @match content {
                Content::Empty => {}
                Content::Message(text) => {
                    p.gallery-message { (text) }
                }
                Content::Tiles(tiles) => {
                    @for (i, tile) in tiles.iter().enumerate() {
                        (render_tile(tile, tile_style(layout, i)))
                    }
                }
            }
        }
    }
}

/// Tabs, heading, description, and container, each only when the view has it.
pub fn render_gallery_section(
    view: &View,
    layout: Option<&MasonryLayout>,
    pages: &PageNames,
) -> Markup {
    html! {
        section.gallery-section {
            @if let Some(tabs) = &view.tabs {
                (render_tabs(tabs, pages))
            }
            @if let Some(heading) = &view.heading {
                h2 #category-title { (heading) }
            }
            @if let Some(description) = &view.description {
                p #category-description { (description) }
            }
            (render_content(&view.content, layout))
        }
    }
}

fn render_contact_form(endpoint: &str) -> Markup {
    html! {
        form.contact-form action=(endpoint) method="POST" {
            input type="text" name="name" placeholder="Name" required;
            input type="email" name="email" placeholder="Email" required;
            textarea name="message" placeholder="Message" rows="4" required {}
            button type="submit" { "Send" }
        }
    }
}

/// A complete gallery page.
pub fn render_gallery_page(
    config: &SiteConfig,
    resolver: &ImageResolver,
    title: &str,
    view: &View,
    layout: Option<&MasonryLayout>,
    pages: &PageNames,
) -> Markup {
    let logo = (!config.site_images.logo.is_empty())
        .then(|| resolver.resolve(&config.site_images.logo));
    let endpoint = config.form_endpoint();
    let content = html! {
        (site_header(title, logo.as_deref()))
        main {
            (render_gallery_section(view, layout, pages))
            @if let Some(endpoint) = &endpoint {
                (render_contact_form(endpoint))
            }
        }
    };
    base_document(title, &page_css(config), content)
}

// ============================================================================
// Site rendering
// ============================================================================

/// Index page holding the first category (or the failure message).
pub const INDEX_PAGE: &str = "gallery.html";
const DEFAULT_TITLE: &str = "Gallery";

/// One written page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub title: String,
    /// Path relative to the output directory.
    pub path: String,
    pub tiles: usize,
    /// Tiles whose natural size was read from disk.
    pub probed: usize,
    pub columns: Option<usize>,
    pub height: Option<f64>,
    pub message: Option<String>,
}

/// Load the document once, then render every category to its own page.
///
/// Each category goes through the same steps a browser would: display it,
/// let its images "load" (by probing the files under `images_root`), and lay
/// out once per completion. The first category is also written as
/// [`INDEX_PAGE`]. If loading fails only the index page is written, carrying
/// the failure message.
pub async fn render_site(
    config: &SiteConfig,
    resolver: &ImageResolver,
    source: &impl DocumentSource,
    probe: &impl ImageProbe,
    images_root: &Path,
    output_dir: &Path,
) -> Result<Vec<RenderedPage>, GenerateError> {
    let mut gallery = Gallery::new(
        resolver.clone(),
        LayoutOptions::from_config(&config.gallery),
        Surface::full(),
    );
    gallery.load(source).await;

    let mut ids: Vec<String> = Vec::new();
    if let Some(document) = gallery.document() {
        for id in document.duplicate_ids() {
            log::warn!("duplicate category id '{id}', only the first is rendered");
        }
        for category in &document.categories {
            if !ids.contains(&category.id) {
                ids.push(category.id.clone());
            }
        }
    }

    if ids.is_empty() {
        let markup = render_gallery_page(
            config,
            resolver,
            DEFAULT_TITLE,
            gallery.view(),
            None,
            &PageNames::default(),
        );
        write_page(output_dir, INDEX_PAGE, markup)?;
        return Ok(vec![RenderedPage {
            title: DEFAULT_TITLE.to_string(),
            path: INDEX_PAGE.to_string(),
            tiles: 0,
            probed: 0,
            columns: None,
            height: None,
            message: gallery.view().message().map(str::to_string),
        }]);
    }

    let page_names = PageNames::for_ids(&ids);
    let mut pages = Vec::with_capacity(ids.len() + 1);
    for (i, (id, relative)) in page_names.iter().enumerate() {
        gallery.display(id);

        let paths = local_paths(gallery.view().tiles(), images_root);
        let (tx, rx) = mpsc::channel();
        let probed = probe_tiles(probe, &paths, tx);
        let passes = gallery.drain_image_events(rx);
        log::debug!("category {id}: {probed} images probed, {passes} layout passes");

        let view = gallery.view();
        let layout = gallery.layout();
        let title = view.heading.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let markup = render_gallery_page(config, resolver, &title, view, layout, &page_names);

        let page = RenderedPage {
            title,
            path: relative.to_string(),
            tiles: view.tiles().len(),
            probed,
            columns: layout.map(MasonryLayout::columns),
            height: layout.map(MasonryLayout::container_height),
            message: view.message().map(str::to_string),
        };

        if i == 0 {
            write_page(output_dir, INDEX_PAGE, markup.clone())?;
            pages.push(RenderedPage {
                path: INDEX_PAGE.to_string(),
                ..page.clone()
            });
        }
        write_page(output_dir, relative, markup)?;
        pages.push(page);
    }

    log::info!("Rendered {} pages to {}", pages.len(), output_dir.display());
    Ok(pages)
}

/// Local file behind each tile, if there is one on disk.
fn local_paths(tiles: &[TileView], images_root: &Path) -> Vec<Option<PathBuf>> {
    tiles
        .iter()
        .map(|tile| {
            let path = images_root.join(&tile.source_path);
            path.is_file().then_some(path)
        })
        .collect()
}

/// Output file for each category page, in category order.
#[derive(Debug, Clone, Default)]
pub struct PageNames {
    files: Vec<(String, String)>,
}

impl PageNames {
    /// Assign `gallery-<slug>.html` to each id. A name already taken (compared
    /// ignoring case) gets `-2`, `-3`, ... appended to the slug.
    pub fn for_ids(ids: &[String]) -> Self {
        let mut taken = HashSet::new();
        let mut files = Vec::with_capacity(ids.len());
        for id in ids {
            let slug = page_slug(id);
            let mut file = format!("gallery-{slug}.html");
            let mut n = 2;
            while !taken.insert(file.to_lowercase()) {
                file = format!("gallery-{slug}-{n}.html");
                n += 1;
            }
            if n > 2 {
                log::warn!("category id '{id}' shares a page name with another category, using {file}");
            }
            files.push((id.clone(), file));
        }
        Self { files }
    }

    /// Page file for a category id.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|(i, _)| i == id)
            .map(|(_, file)| file.as_str())
    }

    /// `(id, file)` pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(id, file)| (id.as_str(), file.as_str()))
    }
}

/// File name for a category page: anything outside `[A-Za-z0-9_-]` becomes `-`.
fn page_slug(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
