//! The encoder direction of the chunk grammar.
//!
//! A single pass over the pixel sequence, choosing one chunk per pixel (or
//! per run of identical pixels) through a fixed greedy priority:
//! RUN > INDEX > DIFF > LUMA > literal. The cascade never backtracks; the
//! first encoding whose deltas fit is the one emitted. All delta arithmetic
//! is wrapping mod 256.

use crate::bridge::format::{MAX_RUN, TAG_DIFF, TAG_INDEX, TAG_LUMA, TAG_RGB, TAG_RGBA, TAG_RUN};
use crate::codec::state::CodecState;
use crate::types::Pixel;

//==================================================================================
// 1. Crate-Internal API
//==================================================================================

/// Encodes `pixels` as a chunk stream appended to `out`.
///
/// Emits chunks only; the caller brackets the stream with the header and end
/// marker. Infallible: every pixel has a literal fallback encoding.
pub(crate) fn encode_chunks(pixels: &[Pixel], out: &mut Vec<u8>) {
    let mut state = CodecState::new();
    let mut run: u8 = 0;

    for &px in pixels {
        if px == state.prev {
            run += 1;
            // A full run must flush immediately: counts 62 and 63 are the
            // literal tags.
            if run == MAX_RUN {
                flush_run(&mut run, out);
            }
            continue;
        }

        flush_run(&mut run, out);
        encode_pixel(&state, px, out);
        state.record(px);
    }

    // The stream may end mid-run.
    flush_run(&mut run, out);
}

//==================================================================================
// 2. Chunk Selection
//==================================================================================

/// Emits the pending RUN chunk, if any. The tag byte carries count-1 in its
/// low 6 bits.
fn flush_run(run: &mut u8, out: &mut Vec<u8>) {
    if *run > 0 {
        out.push(TAG_RUN | (*run - 1));
        *run = 0;
    }
}

/// The per-pixel decision cascade for everything below RUN priority.
///
/// Does not mutate `state`; the caller records the pixel afterwards so that
/// the cache write and register advance stay in one place.
fn encode_pixel(state: &CodecState, px: Pixel, out: &mut Vec<u8>) {
    let slot = px.cache_index();
    if state.cache[slot] == px {
        out.push(TAG_INDEX | slot as u8);
        return;
    }

    let prev = state.prev;
    if px.a != prev.a {
        out.extend_from_slice(&[TAG_RGBA, px.r, px.g, px.b, px.a]);
        return;
    }

    let dr = px.r.wrapping_sub(prev.r);
    let dg = px.g.wrapping_sub(prev.g);
    let db = px.b.wrapping_sub(prev.b);

    // DIFF: each delta in -2..1, stored with bias +2 in 2 bits.
    let dr2 = dr.wrapping_add(2);
    let dg2 = dg.wrapping_add(2);
    let db2 = db.wrapping_add(2);
    if dr2 < 4 && dg2 < 4 && db2 < 4 {
        out.push(TAG_DIFF | (dr2 << 4) | (dg2 << 2) | db2);
        return;
    }

    // LUMA: green delta in -32..31 (bias 32), red/blue expressed relative to
    // green in -8..7 (bias 8).
    let dg32 = dg.wrapping_add(32);
    let dr_dg = dr.wrapping_sub(dg).wrapping_add(8);
    let db_dg = db.wrapping_sub(dg).wrapping_add(8);
    if dg32 < 64 && dr_dg < 16 && db_dg < 16 {
        out.push(TAG_LUMA | dg32);
        out.push((dr_dg << 4) | db_dg);
        return;
    }

    out.extend_from_slice(&[TAG_RGB, px.r, px.g, px.b]);
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
