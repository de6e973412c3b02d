//! Natural-size probing for gallery images.
//!
//! A browser learns an image's natural size when the image finishes loading,
//! and the layout engine waits on exactly that event. Offline, reading the
//! file header stands in for the load:
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Parallel probing** | `rayon` `par_iter`, results sent over `mpsc` |
//!
//! The module is split into:
//! - **Backend**: [`ImageProbe`] trait + [`FileProbe`]
//! - **Operations**: [`probe_tiles`], which turns probes into layout events

pub mod backend;
pub mod operations;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageProbe};
pub use operations::probe_tiles;
pub use rust_backend::FileProbe;
