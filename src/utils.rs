//! This module provides shared, low-level conversions between raw byte
//! buffers and typed pixel slices.
//!
//! Its primary responsibilities are:
//! 1.  Providing safe, validated reinterpretation of 4-channel byte buffers
//!     as `&[Pixel]` without copying (via `bytemuck`).
//! 2.  Performing the widening/narrowing copies for 3-channel buffers, which
//!     cannot be zero-copy.

use std::borrow::Cow;

use crate::bridge::format::Channels;
use crate::error::QoiError;
use crate::types::Pixel;

/// Views a raw interleaved buffer as a pixel slice.
///
/// 4-channel buffers are reinterpreted in place; 3-channel buffers are
/// widened into an owned vector with alpha pinned to 255. The caller has
/// already validated the buffer length against the image dimensions, so a
/// cast failure here is a contract violation, not a stream defect.
pub(crate) fn as_pixels(buf: &[u8], channels: Channels) -> Result<Cow<'_, [Pixel]>, QoiError> {
    match channels {
        Channels::Rgba => bytemuck::try_cast_slice(buf)
            .map(Cow::Borrowed)
            .map_err(|e| QoiError::InternalError(format!("Failed to cast pixel buffer: {}", e))),
        Channels::Rgb => Ok(Cow::Owned(
            buf.chunks_exact(3)
                .map(|rgb| Pixel::new(rgb[0], rgb[1], rgb[2], 255))
                .collect(),
        )),
    }
}

/// Flattens decoded pixels into a raw interleaved buffer at the requested
/// channel count. Narrowing to 3 channels drops alpha.
pub(crate) fn pixels_to_bytes(pixels: &[Pixel], channels: Channels) -> Vec<u8> {
    match channels {
        Channels::Rgba => bytemuck::cast_slice(pixels).to_vec(),
        Channels::Rgb => {
            let mut out = Vec::with_capacity(pixels.len() * 3);
            for px in pixels {
                out.extend_from_slice(&[px.r, px.g, px.b]);
            }
            out
        }
    }
}
