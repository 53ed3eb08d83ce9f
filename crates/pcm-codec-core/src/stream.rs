//! Buffer-level conversion entry points
//!
//! [`unpack`] walks a byte buffer one block (`bytes_per_sample` bytes) at a
//! time and decodes each block into a normalized `f32`; [`pack`] is the
//! mirror. Both are pure functions of their inputs: no state survives a
//! call and disjoint buffers can be converted from any number of threads.
//!
//! The `_parallel` variants split the buffer at block boundaries, convert
//! the pieces on the rayon pool and reassemble them in order. Their output
//! is identical to the serial functions.
//!
//! ## Usage
//!
//! ```rust
//! use pcm_codec_core::{pack, unpack, FormatDescriptor};
//!
//! let format = FormatDescriptor::pcm_s16_le();
//! let bytes = [0x00, 0x80, 0xFF, 0x7F];
//!
//! let samples = unpack(&bytes, bytes.len(), &format)?;
//! assert_eq!(samples[0], -1.0);
//!
//! let packed = pack(&samples, samples.len(), &format)?;
//! assert_eq!(packed, bytes);
//! # Ok::<(), pcm_codec_core::CodecError>(())
//! ```

use bytes::{Bytes, BytesMut};
use rayon::prelude::*;

use crate::codecs::{decode_validated, encode_validated, word};
use crate::error::Result;
use crate::types::FormatDescriptor;
use crate::utils::validation::{
    validate_format, validate_output_buffer, validate_sample_count, validate_unpack_request,
};

/// Blocks handed to one rayon task by the parallel variants
pub const PARALLEL_BLOCKS_PER_TASK: usize = 4096;

/// Decode the first `length` bytes of `bytes` into normalized samples
///
/// Returns one sample per block. A trailing partial block is decoded as a
/// whole block, so the buffer must extend to the next block boundary.
/// `length == 0` yields an empty vector.
///
/// # Errors
///
/// - [`CodecError::InvalidFormat`](crate::CodecError::InvalidFormat),
///   [`CodecError::UnsupportedFloatWidth`](crate::CodecError::UnsupportedFloatWidth) or
///   [`CodecError::UnsupportedCompandedWidth`](crate::CodecError::UnsupportedCompandedWidth)
///   for a bad format
/// - [`CodecError::BufferTooShort`](crate::CodecError::BufferTooShort) if
///   `bytes` does not cover `length` rounded up to a whole block
pub fn unpack(bytes: &[u8], length: usize, format: &FormatDescriptor) -> Result<Vec<f32>> {
    let mut samples = Vec::new();
    unpack_into(bytes, length, format, &mut samples)?;
    Ok(samples)
}

/// Decode into a caller-owned vector, appending after any existing samples
///
/// Returns the number of samples appended. On error `samples` is untouched.
pub fn unpack_into(
    bytes: &[u8],
    length: usize,
    format: &FormatDescriptor,
    samples: &mut Vec<f32>,
) -> Result<usize> {
    let bytes_per_sample = validate_format(format)?;
    let blocks = validate_unpack_request(bytes.len(), length, bytes_per_sample)?;

    tracing::debug!(
        "Unpacking {} bytes as {} ({} samples)",
        length,
        format,
        blocks
    );

    samples.reserve(blocks);
    for block in 0..blocks {
        let raw = word::read_word(
            bytes,
            block * bytes_per_sample,
            bytes_per_sample,
            format.big_endian,
        );
        samples.push(decode_validated(raw, format)?);
    }

    Ok(blocks)
}

/// Encode the first `count` samples into a new byte buffer
///
/// The result is exactly `count * bytes_per_sample` bytes long. Samples are
/// not clipped.
///
/// # Errors
///
/// - format errors as for [`unpack`]
/// - [`CodecError::BufferTooShort`](crate::CodecError::BufferTooShort) if
///   `samples` holds fewer than `count` samples
pub fn pack(samples: &[f32], count: usize, format: &FormatDescriptor) -> Result<Vec<u8>> {
    let bytes_per_sample = validate_format(format)?;
    validate_sample_count(samples.len(), count)?;
    let length = validate_output_buffer(usize::MAX, count, bytes_per_sample)?;

    let mut bytes = vec![0u8; length];
    pack_into(samples, count, format, &mut bytes)?;
    Ok(bytes)
}

/// Encode into a caller-owned byte buffer
///
/// Returns the number of bytes written (`count * bytes_per_sample`). Bytes
/// past that point are left as they were.
///
/// # Errors
///
/// As for [`pack`], plus [`CodecError::BufferTooShort`](crate::CodecError::BufferTooShort)
/// if `bytes` cannot hold `count` blocks.
pub fn pack_into(
    samples: &[f32],
    count: usize,
    format: &FormatDescriptor,
    bytes: &mut [u8],
) -> Result<usize> {
    let bytes_per_sample = validate_format(format)?;
    validate_sample_count(samples.len(), count)?;
    let written = validate_output_buffer(bytes.len(), count, bytes_per_sample)?;

    tracing::debug!("Packing {} samples as {} ({} bytes)", count, format, written);

    for (i, &sample) in samples[..count].iter().enumerate() {
        let raw = encode_validated(sample, format)?;
        word::write_word(
            bytes,
            i * bytes_per_sample,
            raw,
            bytes_per_sample,
            format.big_endian,
        );
    }

    Ok(written)
}

/// Encode into a frozen [`Bytes`] buffer for handing off to transport code
pub fn pack_bytes(samples: &[f32], count: usize, format: &FormatDescriptor) -> Result<Bytes> {
    let bytes_per_sample = validate_format(format)?;
    validate_sample_count(samples.len(), count)?;
    let length = validate_output_buffer(usize::MAX, count, bytes_per_sample)?;

    let mut buffer = BytesMut::zeroed(length);
    pack_into(samples, count, format, &mut buffer)?;
    Ok(buffer.freeze())
}

/// Re-encode a buffer from one format to another
///
/// Both formats are validated before any conversion starts.
pub fn transcode(
    bytes: &[u8],
    length: usize,
    from: &FormatDescriptor,
    to: &FormatDescriptor,
) -> Result<Vec<u8>> {
    validate_format(to)?;

    tracing::debug!("Transcoding {} bytes from {} to {}", length, from, to);

    let samples = unpack(bytes, length, from)?;
    pack(&samples, samples.len(), to)
}

/// [`unpack`] on the rayon thread pool
pub fn unpack_parallel(bytes: &[u8], length: usize, format: &FormatDescriptor) -> Result<Vec<f32>> {
    let bytes_per_sample = validate_format(format)?;
    let blocks = validate_unpack_request(bytes.len(), length, bytes_per_sample)?;

    tracing::debug!(
        "Unpacking {} bytes as {} ({} samples, parallel)",
        length,
        format,
        blocks
    );

    let format = *format;
    bytes[..blocks * bytes_per_sample]
        .par_chunks(bytes_per_sample * PARALLEL_BLOCKS_PER_TASK)
        .flat_map_iter(|chunk| {
            chunk.chunks_exact(bytes_per_sample).map(move |block| {
                let raw = word::read_word(block, 0, bytes_per_sample, format.big_endian);
                decode_validated(raw, &format)
            })
        })
        .collect()
}

/// [`pack`] on the rayon thread pool
pub fn pack_parallel(samples: &[f32], count: usize, format: &FormatDescriptor) -> Result<Vec<u8>> {
    let bytes_per_sample = validate_format(format)?;
    validate_sample_count(samples.len(), count)?;
    let length = validate_output_buffer(usize::MAX, count, bytes_per_sample)?;

    tracing::debug!(
        "Packing {} samples as {} ({} bytes, parallel)",
        count,
        format,
        length
    );

    let format = *format;
    let mut bytes = vec![0u8; length];

    bytes
        .par_chunks_mut(bytes_per_sample * PARALLEL_BLOCKS_PER_TASK)
        .zip(samples[..count].par_chunks(PARALLEL_BLOCKS_PER_TASK))
        .try_for_each(|(out, chunk)| -> Result<()> {
            for (i, &sample) in chunk.iter().enumerate() {
                let raw = encode_validated(sample, &format)?;
                word::write_word(
                    out,
                    i * bytes_per_sample,
                    raw,
                    bytes_per_sample,
                    format.big_endian,
                );
            }
            Ok(())
        })?;

    Ok(bytes)
}
