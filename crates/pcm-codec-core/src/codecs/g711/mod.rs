//! G.711 μ-law / A-law companding
//!
//! Converts between normalized float samples and 8-bit companded words.
//! The transforms are lossy and piecewise near the origin, and the two
//! directions are not exact inverses: decode(encode(x)) lands within the
//! quantization step of the curve at `x`, and silence may come back as a
//! value close to, but not always exactly, zero.
//!
//! Decoding goes through 256-entry lookup tables; encoding evaluates the
//! curve directly since the input is continuous.
//!
//! ## Usage
//!
//! ```rust
//! use pcm_codec_core::codecs::g711::{decode_mulaw, encode_mulaw};
//!
//! let word = encode_mulaw(0.25);
//! let restored = decode_mulaw(word);
//! assert!((restored - 0.25).abs() < 0.02);
//! ```

pub mod reference;
pub mod tables;

pub use reference::{alaw_compress, alaw_expand, mulaw_compress, mulaw_expand, A, MU, RE_A};
pub use tables::init_tables;

/// Decode a μ-law word to a normalized sample
#[inline]
pub fn decode_mulaw(raw: u64) -> f32 {
    tables::mulaw_decode_table((raw & 0xFF) as u8)
}

/// Encode a normalized sample to a μ-law word
#[inline]
pub fn encode_mulaw(sample: f32) -> u64 {
    mulaw_compress(sample)
}

/// Decode an A-law word to a normalized sample
#[inline]
pub fn decode_alaw(raw: u64) -> f32 {
    tables::alaw_decode_table((raw & 0xFF) as u8)
}

/// Encode a normalized sample to an A-law word
#[inline]
pub fn encode_alaw(sample: f32) -> u64 {
    alaw_compress(sample)
}

#[cfg(test)]
mod tests;
