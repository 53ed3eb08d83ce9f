//! Sample encodings and per-block dispatch
//!
//! Each submodule converts one raw word to or from a normalized sample for
//! one family of encodings. [`decode_word`] and [`encode_sample`] pick the
//! right one for a [`FormatDescriptor`]; the stream layer calls them once
//! per block.

pub mod float;
pub mod g711;
pub mod linear;
pub mod sign;
pub mod word;

use crate::error::Result;
use crate::types::{EncodingKind, FormatDescriptor};

/// Decode one raw word to a normalized sample
///
/// # Errors
///
/// Returns an error if the format is invalid (see [`FormatDescriptor::validate`]).
pub fn decode_word(raw: u64, format: &FormatDescriptor) -> Result<f32> {
    format.validate()?;
    decode_validated(raw, format)
}

/// Encode one normalized sample to a raw word
///
/// Only the low `bits_per_sample` bits of the result are meaningful.
///
/// # Errors
///
/// Returns an error if the format is invalid (see [`FormatDescriptor::validate`]).
pub fn encode_sample(sample: f32, format: &FormatDescriptor) -> Result<u64> {
    format.validate()?;
    encode_validated(sample, format)
}

/// Decode against a format that has already passed validation
#[inline]
pub(crate) fn decode_validated(raw: u64, format: &FormatDescriptor) -> Result<f32> {
    let bits = format.bits_per_sample;

    let sample = match format.encoding {
        EncodingKind::PcmSigned => linear::decode_signed(raw, bits),
        EncodingKind::PcmUnsigned => linear::decode_unsigned(raw, bits),
        EncodingKind::PcmFloat => float::decode(raw, bits)?,
        EncodingKind::MuLaw => g711::decode_mulaw(raw),
        EncodingKind::ALaw => g711::decode_alaw(raw),
    };

    Ok(sample)
}

/// Encode against a format that has already passed validation
#[inline]
pub(crate) fn encode_validated(sample: f32, format: &FormatDescriptor) -> Result<u64> {
    let bits = format.bits_per_sample;

    let raw = match format.encoding {
        EncodingKind::PcmSigned => linear::encode_signed(sample, bits),
        EncodingKind::PcmUnsigned => linear::encode_unsigned(sample, bits),
        EncodingKind::PcmFloat => float::encode(sample, bits)?,
        EncodingKind::MuLaw => g711::encode_mulaw(sample),
        EncodingKind::ALaw => g711::encode_alaw(sample),
    };

    Ok(raw)
}
