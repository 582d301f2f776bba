// In: src/error.rs

//! This module defines the single, unified error type for the entire qoi-core
//! library. It uses the `thiserror` crate to provide ergonomic, context-aware
//! error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QoiError {
    /// The image width or height is zero, or the pixel count exceeds the
    /// format's hard ceiling.
    #[error("Invalid image dimensions: {0}x{1}")]
    InvalidDimensions(u32, u32),

    /// The caller-supplied pixel buffer does not match width*height*channels.
    #[error("Pixel buffer size mismatch: expected {0} bytes, got {1}")]
    BufferSizeMismatch(usize, usize),

    /// The byte stream is structurally not a QOI stream: bad magic, invalid
    /// channel or colorspace tag, or a corrupt end marker.
    #[error("Stream format error: {0}")]
    FormatError(String),

    /// The byte stream ran out before the declared pixel count was reached,
    /// mid-chunk, or before the end marker.
    #[error("Truncated stream: {0}")]
    TruncatedStreamError(String),

    /// An error for states the codec should never reach.
    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),
}
