//! G.711 Lookup Tables
//!
//! A companded word has only 256 possible values, so decoding is done once
//! per value and cached. Table entries are produced by the curves in
//! [`reference`](super::reference) and are bit-identical to evaluating them.
//!
//! ## Memory Usage
//!
//! - μ-law decode table: 1024 bytes (256 samples × 4 bytes)
//! - A-law decode table: 1024 bytes (256 samples × 4 bytes)

use super::reference::{alaw_expand, mulaw_expand};
use once_cell::sync::Lazy;

/// Pre-computed μ-law decoding table (8-bit μ-law → normalized sample)
static MULAW_DECODE_TABLE: Lazy<[f32; 256]> = Lazy::new(|| {
    tracing::trace!("Building μ-law decode table");
    let mut table = [0.0f32; 256];

    for (i, entry) in table.iter_mut().enumerate() {
        *entry = mulaw_expand(i as u64);
    }

    table
});

/// Pre-computed A-law decoding table (8-bit A-law → normalized sample)
static ALAW_DECODE_TABLE: Lazy<[f32; 256]> = Lazy::new(|| {
    tracing::trace!("Building A-law decode table");
    let mut table = [0.0f32; 256];

    for (i, entry) in table.iter_mut().enumerate() {
        *entry = alaw_expand(i as u64);
    }

    table
});

/// Force both tables to be built
///
/// Optional: tables are built lazily on first use. Calling this up front
/// moves the cost out of the first conversion.
pub fn init_tables() {
    Lazy::force(&MULAW_DECODE_TABLE);
    Lazy::force(&ALAW_DECODE_TABLE);
}

/// Decode a μ-law byte through the table
#[inline]
pub fn mulaw_decode_table(byte: u8) -> f32 {
    MULAW_DECODE_TABLE[byte as usize]
}

/// Decode an A-law byte through the table
#[inline]
pub fn alaw_decode_table(byte: u8) -> f32 {
    ALAW_DECODE_TABLE[byte as usize]
}
