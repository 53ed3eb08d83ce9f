//! Linear PCM (signed and unsigned integer samples)
//!
//! Decoding divides the signed word by full scale; encoding multiplies and
//! truncates toward zero. No clipping is applied: a sample of exactly `1.0`
//! encodes to full scale, which wraps when it is packed into the word.

use super::sign::{from_offset_binary, sign_extend, to_offset_binary};
use crate::types::full_scale;

/// Decode a two's-complement word
#[inline]
pub fn decode_signed(raw: u64, bits: i32) -> f32 {
    (sign_extend(raw, bits) as f64 / full_scale(bits)) as f32
}

/// Decode an offset-binary word
#[inline]
pub fn decode_unsigned(raw: u64, bits: i32) -> f32 {
    (from_offset_binary(raw, bits) as f64 / full_scale(bits)) as f32
}

/// Encode a sample as a two's-complement word
///
/// Only the low `bits` bits are meaningful; the word writer keeps the low
/// `bytes_per_sample` bytes.
#[inline]
pub fn encode_signed(sample: f32, bits: i32) -> u64 {
    quantize(sample, bits) as u64
}

/// Encode a sample as an offset-binary word
#[inline]
pub fn encode_unsigned(sample: f32, bits: i32) -> u64 {
    to_offset_binary(quantize(sample, bits), bits)
}

/// Scale to full scale and truncate toward zero
///
/// The float-to-int cast saturates out-of-range values and maps NaN to 0.
#[inline]
fn quantize(sample: f32, bits: i32) -> i64 {
    (f64::from(sample) * full_scale(bits)) as i64
}
