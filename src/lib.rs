//! # Joyful Gallery
//!
//! The gallery behind a static photography portfolio: a tabbed, masonry-laid-out
//! view of categorized photos, plus the tooling that keeps its data file honest.
//!
//! # Architecture
//!
//! One JSON document drives everything. The tools maintain it; the renderer
//! reads it.
//!
//! ```text
//! images/gallery/<category>/*.jpg ──update──▶ gallery-data.json ──render──▶ dist/*.html
//!                 │                                  │
//!                 └──────────── validate ────────────┘
//!                 └──sync──▶ s3://bucket/prefix/
//! ```
//!
//! Rendering follows the page lifecycle a browser would go through: fetch the
//! document once, show the first category, and as each image reports its
//! natural size, run another masonry pass. Offline, probing the image file
//! stands in for the browser's load event.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.toml` loading and validation, environment detection, image URL resolution |
//! | [`types`] | The gallery document: categories and images |
//! | [`source`] | Where the document comes from (HTTP or file) and how loading fails |
//! | [`gallery`] | The renderer: load state, tabs, tiles, messages, as a declarative `View` |
//! | [`layout`] | Masonry layout engine: column measurement and shortest-column placement |
//! | [`imaging`] | Natural-size probing that feeds image-load events to the layout |
//! | [`generate`] | Maud rendering of views into static HTML pages |
//! | [`scan`] | Category folder scan of the image tree |
//! | [`naming`] | Display names and alt text from folder and file names |
//! | [`update`] | Merges a scan into the document, keeping hand-written captions |
//! | [`validate`] | Local and remote checks of the document's image references |
//! | [`sync`] | `aws s3 sync` wrapper for publishing images |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Configuration Is Passed In
//!
//! The site config is loaded once, validated, and handed to whatever needs it.
//! The environment (development or production) is decided once from the page
//! host and baked into an [`config::ImageResolver`]; nothing reads ambient
//! state later.
//!
//! ## The Renderer Describes, It Does Not Draw
//!
//! [`gallery::Gallery`] produces a [`gallery::View`]: which tabs exist and which
//! is active, what the heading says, which tiles or message the container
//! holds. [`generate`] turns that into markup. The renderer can be tested
//! without any HTML at all.
//!
//! ## Layout Passes Are Idempotent
//!
//! Every image completion triggers a full layout pass over all tiles. Passes
//! are cheap and order-independent, so completions are simply drained from a
//! channel one at a time; the final positions only depend on which images
//! have loaded, not on the order they did.

pub mod config;
pub mod gallery;
pub mod generate;
pub mod imaging;
pub mod layout;
pub mod naming;
pub mod output;
pub mod scan;
pub mod source;
pub mod sync;
pub mod types;
pub mod update;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
