//! The gallery renderer.
//!
//! Owns the loaded document, the active category, and the current layout
//! engine, and describes what the gallery section should show as a [`View`].
//! Nothing here touches a DOM: callers render the view (see
//! [`crate::generate`]) and feed image-load events back in.
//!
//! ## States
//!
//! ```text
//!            load ok            display(id) / click_tab(id)
//! Loading ───────────▶ Ready ◀──────────────────────────┐
//!    │                   └──────────────────────────────┘
//!    │ load failed
//!    ▼
//!  Error
//! ```
//!
//! `Ready` and `Error` are final with respect to loading; only category
//! switches happen afterwards. Recovery from `Error` means building a new
//! renderer (a page reload).
//!
//! ## Leniency
//!
//! A missing gallery container makes every operation a no-op, missing optional
//! elements are skipped, and displaying an unknown category id does nothing.
//! None of these are logged.

use crate::config::ImageResolver;
use crate::layout::{ImageEvent, LayoutOptions, MasonryLayout};
use crate::source::{DocumentSource, FailureKind, LoadError, fetch_document};
use crate::types::{Category, GalleryDocument};
use std::sync::mpsc::Receiver;

/// Shown when the document could not be fetched or parsed.
pub const TRANSPORT_ERROR_MESSAGE: &str =
    "Sorry, something went wrong while loading the gallery. Please try again later.";
/// Shown when the document has no categories.
pub const NO_CATEGORIES_MESSAGE: &str = "No images to display at the moment. Check back soon!";
/// Shown when the active category has no images.
pub const NO_IMAGES_MESSAGE: &str = "No images in this category yet.";

/// Which page elements the gallery can write into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    /// `#gallery-container`. Without it the renderer does nothing.
    pub container: bool,
    /// `#gallery-tabs`
    pub tabs: bool,
    /// `#category-title`
    pub heading: bool,
    /// `#category-description`
    pub description: bool,
}

impl Surface {
    /// A page with every element present.
    pub fn full() -> Self {
        Self {
            container: true,
            tabs: true,
            heading: true,
            description: true,
        }
    }

    /// A page with only the gallery container.
    pub fn container_only() -> Self {
        Self {
            container: true,
            tabs: false,
            heading: false,
            description: false,
        }
    }

    /// A page without a gallery.
    pub fn none() -> Self {
        Self {
            container: false,
            tabs: false,
            heading: false,
            description: false,
        }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::full()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryState {
    /// Fetch in flight (or not started).
    Loading,
    /// Document loaded; `active` is the displayed category id.
    Ready { active: String },
    Error(FailureKind),
}

/// One tab control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub category_id: String,
    pub label: String,
    pub active: bool,
}

/// One image plus caption in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    /// Resolved URL.
    pub src: String,
    pub alt: String,
    pub caption: String,
    /// Document-relative path, kept for probing local files.
    pub source_path: String,
}

/// What the gallery container holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Nothing rendered yet.
    Empty,
    /// A static message paragraph.
    Message(String),
    Tiles(Vec<TileView>),
}

/// Desired state of the gallery section.
///
/// `None` for an optional element means "leave it alone": either the element
/// does not exist or nothing has been written to it yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub tabs: Option<Vec<TabView>>,
    pub heading: Option<String>,
    pub description: Option<String>,
    pub content: Content,
}

impl View {
    fn empty() -> Self {
        Self {
            tabs: None,
            heading: None,
            description: None,
            content: Content::Empty,
        }
    }

    pub fn active_tab(&self) -> Option<&TabView> {
        self.tabs.as_ref()?.iter().find(|t| t.active)
    }

    pub fn tiles(&self) -> &[TileView] {
        match &self.content {
            Content::Tiles(tiles) => tiles,
            _ => &[],
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.content {
            Content::Message(text) => Some(text),
            _ => None,
        }
    }
}

/// The renderer for one page view.
#[derive(Debug)]
pub struct Gallery {
    resolver: ImageResolver,
    layout_options: LayoutOptions,
    surface: Surface,
    state: GalleryState,
    document: Option<GalleryDocument>,
    view: View,
    layout: Option<MasonryLayout>,
}

impl Gallery {
    pub fn new(resolver: ImageResolver, layout_options: LayoutOptions, surface: Surface) -> Self {
        Self {
            resolver,
            layout_options,
            surface,
            state: GalleryState::Loading,
            document: None,
            view: View::empty(),
            layout: None,
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn layout(&self) -> Option<&MasonryLayout> {
        self.layout.as_ref()
    }

    pub fn document(&self) -> Option<&GalleryDocument> {
        self.document.as_ref()
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Id of the displayed category, once ready.
    pub fn active_category(&self) -> Option<&str> {
        match &self.state {
            GalleryState::Ready { active } => Some(active),
            _ => None,
        }
    }

    /// Fetch the document once and show the first category.
    pub async fn load(&mut self, source: &impl DocumentSource) -> &GalleryState {
        if !self.surface.container {
            return &self.state;
        }
        self.state = GalleryState::Loading;
        let result = fetch_document(source).await;
        self.apply_load(result);
        &self.state
    }

    /// Transition out of `Loading` with the outcome of a fetch.
    pub fn apply_load(&mut self, result: Result<GalleryDocument, LoadError>) {
        if !self.surface.container {
            return;
        }
        match result {
            Ok(document) => {
                let Some(first) = document.first_category().map(|c| c.id.clone()) else {
                    self.fail(&LoadError::NoCategories);
                    return;
                };
                self.document = Some(document);
                self.state = GalleryState::Ready {
                    active: first.clone(),
                };
                self.display(&first);
            }
            Err(e) => self.fail(&e),
        }
    }

    fn fail(&mut self, error: &LoadError) {
        log::error!("Error fetching or processing gallery data: {error}");
        let kind = error.kind();
        let message = match kind {
            FailureKind::Transport => TRANSPORT_ERROR_MESSAGE,
            FailureKind::Data => NO_CATEGORIES_MESSAGE,
        };
        self.state = GalleryState::Error(kind);
        self.layout = None;
        self.view.content = Content::Message(message.to_string());
    }

    /// Show a category. Unknown ids are ignored; returns whether anything changed.
    pub fn display(&mut self, category_id: &str) -> bool {
        if !self.surface.container {
            return false;
        }
        let Some(category) = self
            .document
            .as_ref()
            .and_then(|doc| doc.category(category_id))
        else {
            return false;
        };

        let tabs = self.build_tabs(category_id);
        let (heading, description) = self.heading_text(category);
        let content = if category.images.is_empty() {
            Content::Message(NO_IMAGES_MESSAGE.to_string())
        } else {
            Content::Tiles(self.build_tiles(category))
        };

        self.view = View {
            tabs,
            heading,
            description,
            content,
        };
        self.state = GalleryState::Ready {
            active: category_id.to_string(),
        };

        let tile_count = self.view.tiles().len();
        // The container was cleared, so whatever layout was bound to it is gone
        self.layout = None;
        if tile_count > 0 {
            self.relayout();
        }
        true
    }

    /// A tab was clicked.
    pub fn click_tab(&mut self, category_id: &str) -> bool {
        self.display(category_id)
    }

    /// Replace the layout engine with a fresh one over the current tiles.
    pub fn relayout(&mut self) {
        self.layout.take();
        let tile_count = self.view.tiles().len();
        if tile_count == 0 {
            return;
        }
        self.layout = Some(MasonryLayout::new(self.layout_options, tile_count));
    }

    /// An image finished loading. Returns whether a layout pass ran.
    pub fn image_loaded(&mut self, event: &ImageEvent) -> bool {
        match self.layout.as_mut() {
            Some(layout) => layout.image_loaded(event),
            None => false,
        }
    }

    /// Apply every event from `events` in arrival order until the channel
    /// closes. Returns the number of layout passes triggered.
    pub fn drain_image_events(&mut self, events: Receiver<ImageEvent>) -> usize {
        events
            .iter()
            .filter(|event| self.image_loaded(event))
            .count()
    }

    fn build_tabs(&self, active_id: &str) -> Option<Vec<TabView>> {
        if !self.surface.tabs {
            return None;
        }
        let document = self.document.as_ref()?;
        Some(
            document
                .categories
                .iter()
                .map(|c| TabView {
                    category_id: c.id.clone(),
                    label: c.name.clone(),
                    active: c.id == active_id,
                })
                .collect(),
        )
    }

    fn heading_text(&self, category: &Category) -> (Option<String>, Option<String>) {
        let heading = self.surface.heading.then(|| category.name.clone());
        let description = self
            .surface
            .description
            .then(|| category.description.clone());
        (heading, description)
    }

    fn build_tiles(&self, category: &Category) -> Vec<TileView> {
        category
            .images
            .iter()
            .map(|image| TileView {
                src: self.resolver.resolve(&image.src),
                alt: image.alt.clone(),
                caption: image.caption().to_string(),
                source_path: image.src.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::source::tests::StaticSource;
    use crate::test_helpers::*;
    use std::sync::mpsc;

    const ANIMALS: &str = r#"{"categories":[{"id":"a","name":"Animals","description":"d1","images":[{"src":"x.jpg","alt":"x","description":"c1"}]}]}"#;

    fn gallery(surface: Surface) -> Gallery {
        let config = SiteConfig::default();
        Gallery::new(
            config.resolver_for_host("localhost"),
            LayoutOptions::from_config(&config.gallery),
            surface,
        )
    }

    async fn loaded(json: &str) -> Gallery {
        let mut g = gallery(Surface::full());
        g.load(&StaticSource::body(json)).await;
        g
    }

    #[test]
    fn starts_loading() {
        let g = gallery(Surface::full());
        assert_eq!(g.state(), &GalleryState::Loading);
        assert_eq!(g.view().content, Content::Empty);
    }

    #[tokio::test]
    async fn load_shows_first_category() {
        let g = loaded(ANIMALS).await;

        assert_eq!(
            g.state(),
            &GalleryState::Ready {
                active: "a".to_string()
            }
        );
        assert_eq!(g.view().active_tab().unwrap().label, "Animals");
        let tiles = g.view().tiles();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].src, "images/x.jpg");
        assert_eq!(tiles[0].caption, "c1");
        assert_eq!(g.view().heading.as_deref(), Some("Animals"));
        assert_eq!(g.view().description.as_deref(), Some("d1"));
        assert!(g.layout().is_some());
    }

    #[tokio::test]
    async fn tabs_follow_document_order() {
        let g = loaded(&two_category_json()).await;
        assert_eq!(tab_labels(g.view()), vec!["Animals", "Birds"]);
        assert_eq!(active_tab_id(g.view()), Some("a"));
    }

    #[tokio::test]
    async fn http_error_shows_transport_message() {
        let mut g = gallery(Surface::full());
        g.load(&StaticSource::status(500)).await;

        assert_eq!(g.state(), &GalleryState::Error(FailureKind::Transport));
        assert_eq!(g.view().message(), Some(TRANSPORT_ERROR_MESSAGE));
        assert!(g.layout().is_none());
    }

    #[tokio::test]
    async fn malformed_body_shows_transport_message() {
        let g = loaded("{not json").await;
        assert_eq!(g.state(), &GalleryState::Error(FailureKind::Transport));
        assert_eq!(g.view().message(), Some(TRANSPORT_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn empty_document_shows_no_categories_message() {
        let g = loaded(r#"{"categories":[]}"#).await;
        assert_eq!(g.state(), &GalleryState::Error(FailureKind::Data));
        assert_eq!(g.view().message(), Some(NO_CATEGORIES_MESSAGE));
    }

    #[tokio::test]
    async fn missing_container_is_silent_noop() {
        let mut g = gallery(Surface::none());
        g.load(&StaticSource::body(ANIMALS)).await;

        assert_eq!(g.state(), &GalleryState::Loading);
        assert_eq!(g.view().content, Content::Empty);
        assert!(g.document().is_none());
        assert!(!g.display("a"));
    }

    #[tokio::test]
    async fn optional_elements_are_skipped() {
        let mut g = gallery(Surface::container_only());
        g.load(&StaticSource::body(ANIMALS)).await;

        assert!(g.view().tabs.is_none());
        assert!(g.view().heading.is_none());
        assert!(g.view().description.is_none());
        assert_eq!(g.view().tiles().len(), 1);
        assert_eq!(g.active_category(), Some("a"));
    }

    #[tokio::test]
    async fn display_switches_category() {
        let mut g = loaded(&two_category_json()).await;
        assert!(g.display("b"));

        let tabs = g.view().tabs.as_ref().unwrap();
        assert!(!tabs[0].active);
        assert!(tabs[1].active);
        assert_eq!(
            tile_captions(g.view()),
            vec!["Heron in the reeds", "Kingfisher"]
        );
        assert_eq!(g.active_category(), Some("b"));
    }

    #[tokio::test]
    async fn display_is_idempotent() {
        let mut g = loaded(&two_category_json()).await;
        g.display("b");
        let first = g.view().clone();
        g.click_tab("b");
        assert_eq!(g.view(), &first);
    }

    #[tokio::test]
    async fn display_unknown_id_changes_nothing() {
        let mut g = loaded(&two_category_json()).await;
        g.image_loaded(&ImageEvent::loaded(0, 100, 100));
        let before = g.view().clone();
        let passes = g.layout().unwrap().passes();

        assert!(!g.display("missing"));
        assert_eq!(g.view(), &before);
        assert_eq!(g.active_category(), Some("a"));
        assert_eq!(g.layout().unwrap().passes(), passes);
    }

    #[tokio::test]
    async fn empty_category_shows_message_without_layout() {
        let json = r#"{"categories":[
            {"id":"a","name":"A","description":"","images":[{"src":"1.jpg","alt":"1"}]},
            {"id":"e","name":"Empty","description":"soon","images":[]}
        ]}"#;
        let mut g = loaded(json).await;
        assert!(g.layout().is_some());

        g.display("e");
        assert_eq!(g.view().message(), Some(NO_IMAGES_MESSAGE));
        assert!(g.layout().is_none());
        assert_eq!(g.view().heading.as_deref(), Some("Empty"));
        assert_eq!(active_tab_id(g.view()), Some("e"));
    }

    #[tokio::test]
    async fn relayout_replaces_engine() {
        let mut g = loaded(&two_category_json()).await;
        g.image_loaded(&ImageEvent::loaded(0, 100, 100));
        assert_eq!(g.layout().unwrap().passes(), 2);

        g.relayout();
        assert_eq!(g.layout().unwrap().passes(), 1);
        g.relayout();
        assert_eq!(g.layout().unwrap().passes(), 1);
    }

    #[tokio::test]
    async fn image_events_recompute_layout() {
        let mut g = loaded(&two_category_json()).await;
        g.display("b");

        assert!(g.image_loaded(&ImageEvent::loaded(1, 400, 300)));
        assert!(g.image_loaded(&ImageEvent::failed(0)));
        // Stale event from a tile that does not exist in this category
        assert!(!g.image_loaded(&ImageEvent::loaded(5, 10, 10)));
        assert_eq!(g.layout().unwrap().passes(), 3);
    }

    #[tokio::test]
    async fn drain_applies_events_in_arrival_order() {
        let mut g = loaded(&two_category_json()).await;
        g.display("b");
        let (tx, rx) = mpsc::channel();
        tx.send(ImageEvent::loaded(1, 200, 100)).unwrap();
        tx.send(ImageEvent::loaded(0, 200, 300)).unwrap();
        tx.send(ImageEvent::loaded(9, 1, 1)).unwrap();
        drop(tx);

        assert_eq!(g.drain_image_events(rx), 2);
        let layout = g.layout().unwrap();
        assert!(layout.positions()[0].height > layout.positions()[1].height);
    }

    #[test]
    fn events_without_layout_are_ignored() {
        let mut g = gallery(Surface::full());
        assert!(!g.image_loaded(&ImageEvent::loaded(0, 1, 1)));
    }

    #[test]
    fn production_host_resolves_to_bucket() {
        let config = SiteConfig::default();
        let mut g = Gallery::new(
            config.resolver_for_host("joyfulphotographs.com"),
            LayoutOptions::default(),
            Surface::full(),
        );
        g.apply_load(Ok(sample_document()));
        assert!(g.view().tiles()[0].src.starts_with("https://photos-joyfulphotographs-com"));
    }
}
