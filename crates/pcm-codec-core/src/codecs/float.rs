//! IEEE-754 float samples
//!
//! Words are reinterpreted bit-for-bit. 64-bit words are narrowed to `f32`
//! on decode and widened from `f32` on encode. Widths other than 32 and 64
//! are rejected when the format is validated, so these functions only see
//! those two.

use crate::error::{CodecError, Result};

/// Decode a 32- or 64-bit IEEE word
pub fn decode(raw: u64, bits: i32) -> Result<f32> {
    match bits {
        32 => Ok(f32::from_bits(raw as u32)),
        64 => Ok(f64::from_bits(raw) as f32),
        _ => Err(CodecError::UnsupportedFloatWidth {
            bits_per_sample: bits,
        }),
    }
}

/// Encode a sample as a 32- or 64-bit IEEE word
pub fn encode(sample: f32, bits: i32) -> Result<u64> {
    match bits {
        32 => Ok(u64::from(sample.to_bits())),
        64 => Ok(f64::from(sample).to_bits()),
        _ => Err(CodecError::UnsupportedFloatWidth {
            bits_per_sample: bits,
        }),
    }
}
