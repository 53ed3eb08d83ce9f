//! Input validation utilities for pack/unpack operations
//!
//! Every request is checked up front so that a conversion either runs to
//! completion or fails before producing any output.

use crate::error::{CodecError, Result};
use crate::types::FormatDescriptor;

/// Validate a format and return its block size in bytes
pub fn validate_format(format: &FormatDescriptor) -> Result<usize> {
    if let Err(err) = format.validate() {
        tracing::warn!("Rejected format {:?}: {}", format, err);
        return Err(err);
    }

    Ok(format.bytes_per_sample())
}

/// Block-aligned byte count needed to decode `length` bytes
///
/// A trailing partial block still counts as a whole block, so the buffer
/// must hold it in full.
pub fn aligned_length(length: usize, bytes_per_sample: usize) -> usize {
    length.div_ceil(bytes_per_sample).saturating_mul(bytes_per_sample)
}

/// Validate an unpack request and return the number of blocks to decode
pub fn validate_unpack_request(
    available: usize,
    length: usize,
    bytes_per_sample: usize,
) -> Result<usize> {
    let needed = aligned_length(length, bytes_per_sample);

    if available < needed {
        tracing::warn!(
            "Unpack of {} bytes needs {} buffered bytes, only {} available",
            length,
            needed,
            available
        );
        return Err(CodecError::buffer_too_short(needed, available));
    }

    Ok(needed / bytes_per_sample)
}

/// Validate that `count` samples are available for packing
pub fn validate_sample_count(available: usize, count: usize) -> Result<()> {
    if available < count {
        tracing::warn!("Pack of {} samples requested, only {} available", count, available);
        return Err(CodecError::buffer_too_short(count, available));
    }

    Ok(())
}

/// Validate that an output buffer can hold `count` packed samples
///
/// Returns the number of bytes that will be written.
pub fn validate_output_buffer(
    capacity: usize,
    count: usize,
    bytes_per_sample: usize,
) -> Result<usize> {
    let needed = count
        .checked_mul(bytes_per_sample)
        .ok_or_else(|| CodecError::buffer_too_short(usize::MAX, capacity))?;

    if capacity < needed {
        tracing::warn!("Output buffer holds {} bytes, {} needed", capacity, needed);
        return Err(CodecError::buffer_too_short(needed, capacity));
    }

    Ok(needed)
}
