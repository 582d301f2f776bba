// In: src/bridge/stateless_api.rs

//! The stateless public entry points: whole buffers in, whole buffers out.
//!
//! This layer owns everything around the chunk grammar: buffer-length
//! validation, header and end-marker bracketing, and the optional channel
//! coercion post-pass. It never returns partial output; encode and decode
//! either fully succeed or fail before producing a result.

use crate::bridge::format::{Channels, Colorspace, QoiHeader, END_MARKER, HEADER_LEN};
use crate::codec;
use crate::error::QoiError;
use crate::utils;

/// A fully decoded image: the flat pixel buffer plus the metadata needed to
/// interpret it. `channels` describes the returned buffer, which may differ
/// from the stream's native channel count when coercion was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub channels: Channels,
    pub colorspace: Colorspace,
}

/// Encodes a raw interleaved pixel buffer into a complete QOI byte stream:
/// header ++ chunk stream ++ end marker.
///
/// `pixels` must hold exactly `width * height * channels` bytes, row-major.
/// The buffer is only read; the codec retains no reference to it past this
/// call, and concurrent calls on independent images share no state.
pub fn encode(
    pixels: &[u8],
    width: u32,
    height: u32,
    channels: Channels,
    colorspace: Colorspace,
) -> Result<Vec<u8>, QoiError> {
    let header = QoiHeader::new(width, height, channels, colorspace)?;

    let expected = header.pixel_count() * channels.count();
    if pixels.len() != expected {
        return Err(QoiError::BufferSizeMismatch(expected, pixels.len()));
    }

    let marshalled = utils::as_pixels(pixels, channels)?;

    // Worst case is one literal chunk per pixel.
    let worst_case = HEADER_LEN + header.pixel_count() * (channels.count() + 1) + END_MARKER.len();
    let mut out = Vec::with_capacity(worst_case);
    out.extend_from_slice(&header.to_bytes());
    codec::encode_chunks(&marshalled, &mut out);
    out.extend_from_slice(&END_MARKER);

    log::debug!(
        "encoded {}x{} ({:?}) image: {} -> {} bytes",
        width,
        height,
        channels,
        pixels.len(),
        out.len()
    );
    Ok(out)
}

/// Decodes a complete QOI byte stream back into a raw pixel buffer.
///
/// When `desired_channels` is set, the output buffer is coerced to that
/// channel count as a post-pass: widening 3 -> 4 synthesizes alpha 255,
/// narrowing 4 -> 3 drops alpha. The chunk grammar itself always runs at the
/// stream's native channel semantics.
pub fn decode(stream: &[u8], desired_channels: Option<Channels>) -> Result<DecodedImage, QoiError> {
    let header = QoiHeader::from_bytes(stream)?;

    let (pixels, consumed) = codec::decode_chunks(&stream[HEADER_LEN..], header.pixel_count())?;

    // The end marker must follow the chunk stream; it is verified here, not
    // reinterpreted as chunks.
    let trailer = &stream[HEADER_LEN + consumed..];
    if trailer.len() < END_MARKER.len() {
        return Err(QoiError::TruncatedStreamError(format!(
            "Stream ends {} byte(s) short of the end marker",
            END_MARKER.len() - trailer.len()
        )));
    }
    if trailer[..END_MARKER.len()] != END_MARKER {
        return Err(QoiError::FormatError(
            "End marker mismatch after chunk stream".into(),
        ));
    }

    let out_channels = desired_channels.unwrap_or(header.channels);
    let out = utils::pixels_to_bytes(&pixels, out_channels);

    log::debug!(
        "decoded {} byte stream: {}x{}, native {:?}, delivered {:?}",
        stream.len(),
        header.width,
        header.height,
        header.channels,
        out_channels
    );
    Ok(DecodedImage {
        pixels: out,
        width: header.width,
        height: header.height,
        channels: out_channels,
        colorspace: header.colorspace,
    })
}
