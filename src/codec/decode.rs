//! The decoder direction of the chunk grammar.
//!
//! Consumes the byte stream one tag at a time until exactly the declared
//! number of pixels has been produced. Tag dispatch is on the top two bits,
//! with the two full-byte literal tags (0xFE/0xFF) taking precedence over the
//! generic RUN tag they would otherwise fall into. Cache and register updates
//! mirror the encoder exactly: every chunk except RUN records its pixel; run
//! replays count toward the pixel total but leave the cache untouched, since
//! the replayed pixel already sits in its slot unchanged.

use crate::bridge::format::{
    PAYLOAD_MASK, TAG_DIFF, TAG_INDEX, TAG_LUMA, TAG_MASK, TAG_RGB, TAG_RGBA, TAG_RUN,
};
use crate::codec::state::CodecState;
use crate::error::QoiError;
use crate::types::Pixel;

//==================================================================================
// 1. Crate-Internal API
//==================================================================================

/// Decodes `pixel_count` pixels from the front of `stream`.
///
/// Returns the pixels together with the number of bytes consumed, so the
/// caller can verify what follows the chunk stream. Trailing bytes are never
/// reinterpreted as chunks.
pub(crate) fn decode_chunks(
    stream: &[u8],
    pixel_count: usize,
) -> Result<(Vec<Pixel>, usize), QoiError> {
    let mut pixels = Vec::with_capacity(pixel_count);
    let mut state = CodecState::new();
    let mut pos = 0usize;
    let mut run: u8 = 0;

    for produced in 0..pixel_count {
        if run > 0 {
            run -= 1;
            pixels.push(state.prev);
            continue;
        }

        let tag = next_byte(stream, &mut pos, produced, pixel_count)?;

        // RUN is the one chunk that must not refresh the cache.
        if (tag & TAG_MASK) == TAG_RUN && tag != TAG_RGB && tag != TAG_RGBA {
            run = tag & PAYLOAD_MASK;
            pixels.push(state.prev);
            continue;
        }

        let px = decode_pixel(&state, tag, stream, &mut pos, produced, pixel_count)?;
        state.record(px);
        pixels.push(px);
    }

    Ok((pixels, pos))
}

//==================================================================================
// 2. Tag Dispatch
//==================================================================================

/// Reconstructs one pixel from a non-RUN chunk.
fn decode_pixel(
    state: &CodecState,
    tag: u8,
    stream: &[u8],
    pos: &mut usize,
    produced: usize,
    pixel_count: usize,
) -> Result<Pixel, QoiError> {
    let prev = state.prev;

    if tag == TAG_RGB {
        let rgb = take(stream, pos, 3, produced, pixel_count)?;
        return Ok(Pixel::new(rgb[0], rgb[1], rgb[2], prev.a));
    }
    if tag == TAG_RGBA {
        let rgba = take(stream, pos, 4, produced, pixel_count)?;
        return Ok(Pixel::new(rgba[0], rgba[1], rgba[2], rgba[3]));
    }

    match tag & TAG_MASK {
        TAG_INDEX => Ok(state.cache[(tag & PAYLOAD_MASK) as usize]),
        TAG_DIFF => {
            let dr = ((tag >> 4) & 0x03).wrapping_sub(2);
            let dg = ((tag >> 2) & 0x03).wrapping_sub(2);
            let db = (tag & 0x03).wrapping_sub(2);
            Ok(Pixel::new(
                prev.r.wrapping_add(dr),
                prev.g.wrapping_add(dg),
                prev.b.wrapping_add(db),
                prev.a,
            ))
        }
        TAG_LUMA => {
            let second = next_byte(stream, pos, produced, pixel_count)?;
            let dg = (tag & PAYLOAD_MASK).wrapping_sub(32);
            let dr = dg.wrapping_add((second >> 4) & 0x0f).wrapping_sub(8);
            let db = dg.wrapping_add(second & 0x0f).wrapping_sub(8);
            Ok(Pixel::new(
                prev.r.wrapping_add(dr),
                prev.g.wrapping_add(dg),
                prev.b.wrapping_add(db),
                prev.a,
            ))
        }
        // RUN and the literal tags are intercepted by the caller; the 2-bit
        // tag space has no other values.
        other => Err(QoiError::InternalError(format!(
            "Unhandled chunk tag 0b{:08b}",
            other
        ))),
    }
}

//==================================================================================
// 3. Bounds-Checked Byte Access
//==================================================================================

fn next_byte(
    stream: &[u8],
    pos: &mut usize,
    produced: usize,
    pixel_count: usize,
) -> Result<u8, QoiError> {
    let byte = stream.get(*pos).copied().ok_or_else(|| {
        QoiError::TruncatedStreamError(format!(
            "Chunk stream ended after {} of {} pixels",
            produced, pixel_count
        ))
    })?;
    *pos += 1;
    Ok(byte)
}

fn take<'a>(
    stream: &'a [u8],
    pos: &mut usize,
    len: usize,
    produced: usize,
    pixel_count: usize,
) -> Result<&'a [u8], QoiError> {
    let end = *pos + len;
    let bytes = stream.get(*pos..end).ok_or_else(|| {
        QoiError::TruncatedStreamError(format!(
            "Chunk at byte {} is cut short after {} of {} pixels",
            *pos, produced, pixel_count
        ))
    })?;
    *pos = end;
    Ok(bytes)
}

//==================================================================================
// 4. Unit Tests
//==================================================================================
