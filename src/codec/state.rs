//! The shared per-stream codec state.
//!
//! One `CodecState` is created at the start of every encode or decode call
//! and dropped at the end of it. Nothing here is global or shared between
//! images; concurrent calls on independent images cannot interact.

use crate::types::pixel::{Pixel, CACHE_SIZE};

/// Running cache plus previous-pixel register.
///
/// Invariant: after processing the same number of pixels, the encoder's and
/// decoder's `CodecState` are bit-identical. Every pixel that is emitted or
/// reconstructed outside a run writes its cache slot; run continuations touch
/// neither field.
pub(crate) struct CodecState {
    pub(crate) cache: [Pixel; CACHE_SIZE],
    pub(crate) prev: Pixel,
}

impl CodecState {
    pub(crate) fn new() -> Self {
        Self {
            cache: [Pixel::ZERO; CACHE_SIZE],
            prev: Pixel::default(), // opaque black
        }
    }

    /// Records a freshly processed pixel: overwrites its hash slot in the
    /// cache (collisions are overwritten, never chained) and advances the
    /// previous-pixel register.
    pub(crate) fn record(&mut self, px: Pixel) {
        self.cache[px.cache_index()] = px;
        self.prev = px;
    }
}
