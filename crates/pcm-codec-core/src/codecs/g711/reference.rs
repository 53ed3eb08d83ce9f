//! G.711 companding curves
//!
//! Continuous μ-law and A-law transforms evaluated on normalized samples,
//! quantized to 8-bit sign-magnitude words.
//!
//! ## Word layout
//!
//! The magnitude occupies the low 7 bits and bit 7 carries the sign. The
//! word is then masked: μ-law inverts all bits (`^ 0xFF`), A-law toggles the
//! even bits (`^ 0x55`).
//!
//! ## Precision
//!
//! Intermediate results are narrowed to `f32` at the same points on both
//! encode and decode, and every constant is derived from `MU = 255` and
//! `A = 87.7`. Changing either (e.g. the other common choice `A = 87.6`)
//! changes every encoded byte.

use crate::types::{full_scale, COMPANDED_BITS_PER_SAMPLE};

/// μ-law compression parameter
pub const MU: f64 = 255.0;

/// A-law compression parameter
pub const A: f64 = 87.7;

/// Reciprocal of A; below this magnitude the A-law encoder is linear
pub const RE_A: f64 = 1.0 / A;

/// μ-law inversion mask
pub const MULAW_MASK: u64 = 0xFF;

/// A-law even-bit mask
pub const ALAW_MASK: u64 = 0x55;

const SIGN_BIT: u64 = 0x80;

/// Natural logarithm of A
#[inline]
pub fn ln_a() -> f64 {
    A.ln()
}

/// Below this normalized word magnitude the A-law exponent is 0
#[inline]
pub fn exp_0() -> f64 {
    1.0 / (1.0 + ln_a())
}

/// Sign of `x` as `-1`, `0` or `1`; zero and NaN are returned unchanged
#[inline]
fn signum(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

/// Normalized value of an unmasked sign-magnitude word
#[inline]
fn from_sign_magnitude(word: u64) -> f32 {
    let signed = if word & SIGN_BIT == SIGN_BIT {
        -((word ^ SIGN_BIT) as i64)
    } else {
        word as i64
    };
    (signed as f64 / full_scale(COMPANDED_BITS_PER_SAMPLE)) as f32
}

/// Quantize a normalized value to an unmasked sign-magnitude word
#[inline]
fn to_sign_magnitude(x: f32) -> u64 {
    let word = (f64::from(x) * full_scale(COMPANDED_BITS_PER_SAMPLE)) as i64;
    if word < 0 {
        (word.wrapping_neg() ^ SIGN_BIT as i64) as u64
    } else {
        word as u64
    }
}

/// μ-law expansion: 8-bit word to normalized sample
pub fn mulaw_expand(raw: u64) -> f32 {
    let x = from_sign_magnitude(raw ^ MULAW_MASK);

    (f64::from(signum(x)) * (1.0 / MU) * ((1.0 + MU).powf(f64::from(x.abs())) - 1.0)) as f32
}

/// μ-law compression: normalized sample to 8-bit word
///
/// Out-of-range samples are not clipped; bits above the low byte are
/// discarded by the word packer.
pub fn mulaw_compress(sample: f32) -> u64 {
    let sign = f64::from(signum(sample));
    let magnitude = f64::from(sample.abs());

    let x = (sign * ((1.0 + MU * magnitude).ln() / (1.0 + MU).ln())) as f32;

    to_sign_magnitude(x) ^ MULAW_MASK
}

/// A-law expansion: 8-bit word to normalized sample
pub fn alaw_expand(raw: u64) -> f32 {
    let x = from_sign_magnitude(raw ^ ALAW_MASK);

    let sign = signum(x);
    let magnitude = f64::from(x.abs());

    let expanded = if magnitude < exp_0() {
        (magnitude * ((1.0 + ln_a()) / A)) as f32
    } else {
        ((magnitude * (1.0 + ln_a()) - 1.0).exp() / A) as f32
    };

    sign * expanded
}

/// A-law compression: normalized sample to 8-bit word
pub fn alaw_compress(sample: f32) -> u64 {
    let sign = f64::from(signum(sample));
    let magnitude = f64::from(sample.abs());

    let compressed = if magnitude < RE_A {
        ((A * magnitude) / (1.0 + ln_a())) as f32
    } else {
        ((1.0 + (A * magnitude).ln()) / (1.0 + ln_a())) as f32
    };

    let x = (f64::from(compressed) * sign) as f32;

    to_sign_magnitude(x) ^ ALAW_MASK
}
