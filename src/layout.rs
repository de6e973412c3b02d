//! Masonry layout engine.
//!
//! Tiles in the gallery share one width but have different heights, and a
//! tile's height is only known once its image has loaded. The engine packs
//! tiles into columns, always dropping the next tile into the shortest column
//! (leftmost on ties), and is re-run every time another image reports its
//! natural size. Each pass starts from scratch, so running it again with the
//! same inputs gives the same result no matter in which order the images
//! finished loading.
//!
//! ## Column Measurement
//!
//! Column count follows the masonry library used on the original page:
//!
//! ```text
//! column_width = tile_width + gutter
//! cols         = (container_width + gutter) / column_width
//! ```
//!
//! rounded down, except that a shortfall of less than one pixel rounds up
//! (floating-point widths like `33.333%` would otherwise lose a column).
//!
//! ## Positions
//!
//! With proportional positioning, `left` is reported as a percentage of the
//! container so the grid stays correct when the container resizes; `top` is
//! always in pixels. The gutter is horizontal only; vertical spacing belongs to
//! the tile's own margin, which is folded into `caption_height`.

use crate::config::GalleryConfig;
use crate::imaging::Dimensions;

/// Geometry inputs for one layout instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub container_width: f64,
    pub columns: u32,
    pub gutter: f64,
    /// Height reserved below each image for its caption.
    pub caption_height: f64,
    /// Report `left` as a percentage of the container instead of pixels.
    pub percent_position: bool,
}

impl LayoutOptions {
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self {
            container_width: config.container_width,
            columns: config.columns,
            gutter: config.gutter,
            caption_height: config.caption_height,
            percent_position: true,
        }
    }

    /// Width of one tile when `columns` tiles and their gutters fill the container.
    pub fn tile_width(&self) -> f64 {
        let columns = f64::from(self.columns.max(1));
        ((self.container_width - self.gutter * (columns - 1.0)) / columns).max(0.0)
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::from_config(&GalleryConfig::default())
    }
}

/// What the engine knows about a tile's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSize {
    /// Not loaded yet.
    Pending,
    Loaded(Dimensions),
    /// The image failed to load; the tile keeps its caption height.
    Broken,
}

/// Outcome of loading one tile's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Dimensions),
    Failed,
}

/// One image finished loading (or failed to).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageEvent {
    /// Tile index in display order.
    pub tile: usize,
    pub outcome: LoadOutcome,
}

impl ImageEvent {
    pub fn loaded(tile: usize, width: u32, height: u32) -> Self {
        Self {
            tile,
            outcome: LoadOutcome::Loaded(Dimensions { width, height }),
        }
    }

    pub fn failed(tile: usize) -> Self {
        Self {
            tile,
            outcome: LoadOutcome::Failed,
        }
    }
}

/// Computed placement of one tile, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePosition {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A layout instance bound to one set of displayed tiles.
///
/// Constructing one runs the first pass immediately, with every image still
/// pending. Dropping it is the "destroy" step; nothing else holds on to it.
#[derive(Debug, Clone)]
pub struct MasonryLayout {
    options: LayoutOptions,
    sizes: Vec<TileSize>,
    positions: Vec<TilePosition>,
    cols: usize,
    column_width: f64,
    container_height: f64,
    passes: usize,
}

impl MasonryLayout {
    pub fn new(options: LayoutOptions, tile_count: usize) -> Self {
        let mut layout = Self {
            options,
            sizes: vec![TileSize::Pending; tile_count],
            positions: Vec::with_capacity(tile_count),
            cols: 1,
            column_width: 0.0,
            container_height: 0.0,
            passes: 0,
        };
        layout.layout();
        layout
    }

    /// Record a load completion and recompute positions.
    ///
    /// Returns `false` (and does nothing) when the event names a tile this
    /// instance does not have, e.g. one from a category displayed earlier.
    pub fn image_loaded(&mut self, event: &ImageEvent) -> bool {
        let Some(slot) = self.sizes.get_mut(event.tile) else {
            return false;
        };
        *slot = match event.outcome {
            LoadOutcome::Loaded(dims) if dims.width > 0 => TileSize::Loaded(dims),
            _ => TileSize::Broken,
        };
        self.layout();
        true
    }

    /// Run a full layout pass over all tiles.
    pub fn layout(&mut self) {
        self.measure_columns();
        let tile_width = self.options.tile_width();
        let mut col_ys = vec![0.0_f64; self.cols];

        self.positions.clear();
        for size in &self.sizes {
            let height = self.options.caption_height + image_height(size, tile_width);
            let (col, y) = shortest_column(&col_ys);
            self.positions.push(TilePosition {
                x: self.column_width * col as f64,
                y,
                width: tile_width,
                height,
            });
            col_ys[col] = y + height;
        }

        self.container_height = col_ys.iter().copied().fold(0.0, f64::max);
        self.passes += 1;
    }

    fn measure_columns(&mut self) {
        let gutter = self.options.gutter;
        let column_width = self.options.tile_width() + gutter;
        let container_width = self.options.container_width + gutter;

        let cols = if column_width > 0.0 {
            let raw = container_width / column_width;
            let excess = column_width - container_width % column_width;
            if excess > 0.0 && excess < 1.0 {
                raw.round()
            } else {
                raw.floor()
            }
        } else {
            1.0
        };

        self.column_width = column_width;
        self.cols = (cols as usize).max(1);
    }

    pub fn positions(&self) -> &[TilePosition] {
        &self.positions
    }

    pub fn sizes(&self) -> &[TileSize] {
        &self.sizes
    }

    pub fn tile_count(&self) -> usize {
        self.sizes.len()
    }

    pub fn columns(&self) -> usize {
        self.cols
    }

    pub fn container_height(&self) -> f64 {
        self.container_height
    }

    /// Number of layout passes run so far, including the initial one.
    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// CSS `left` value for a position.
    pub fn left_css(&self, position: &TilePosition) -> String {
        if self.options.percent_position && self.options.container_width > 0.0 {
            let percent = position.x / self.options.container_width * 100.0;
            format!("{}%", round_css(percent))
        } else {
            format!("{}px", round_css(position.x))
        }
    }

    /// CSS `top` value for a position.
    pub fn top_css(&self, position: &TilePosition) -> String {
        format!("{}px", round_css(position.y))
    }
}

/// Displayed image height once scaled to the tile width.
fn image_height(size: &TileSize, tile_width: f64) -> f64 {
    match size {
        TileSize::Loaded(dims) if dims.width > 0 => {
            f64::from(dims.height) * tile_width / f64::from(dims.width)
        }
        _ => 0.0,
    }
}

/// Index and height of the shortest column, leftmost on ties.
fn shortest_column(col_ys: &[f64]) -> (usize, f64) {
    let mut best = (0, col_ys[0]);
    for (idx, &y) in col_ys.iter().enumerate().skip(1) {
        if y < best.1 {
            best = (idx, y);
        }
    }
    best
}

fn round_css(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
