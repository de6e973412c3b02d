//! High-level probing operations that feed the layout engine.

use super::backend::ImageProbe;
use crate::layout::{ImageEvent, LoadOutcome};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::mpsc::Sender;

/// Probe every tile in parallel, sending one event per tile as it completes.
///
/// `paths[i]` is the local file behind tile `i`; `None` marks a tile whose
/// image is not on disk (remote URL), which gets no event and stays pending.
/// Events arrive in completion order, not tile order. Returns the number of
/// events sent.
pub fn probe_tiles(
    probe: &impl ImageProbe,
    paths: &[Option<PathBuf>],
    events: Sender<ImageEvent>,
) -> usize {
    paths
        .par_iter()
        .enumerate()
        .filter_map(|(tile, path)| path.as_ref().map(|p| (tile, p)))
        .map_with(events, |tx, (tile, path)| {
            let outcome = match probe.identify(path) {
                Ok(dims) => LoadOutcome::Loaded(dims),
                Err(e) => {
                    log::warn!("image failed to load: {e}");
                    LoadOutcome::Failed
                }
            };
            // Receiver gone means nobody is laying out anymore
            tx.send(ImageEvent { tile, outcome }).is_ok()
        })
        .filter(|sent| *sent)
        .count()
}
