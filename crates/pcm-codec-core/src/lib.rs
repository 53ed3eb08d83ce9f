//! # PCM-Codec-Core: Raw Audio Sample Conversion
//!
//! This library converts between raw interleaved audio byte buffers and
//! normalized `f32` sample sequences. It is the layer that sits between
//! container/stream code (which knows where the bytes come from) and signal
//! processing code (which wants plain floats).
//!
//! ## Encodings
//!
//! - **Linear PCM**: signed (two's complement) and unsigned (offset binary),
//!   any bit depth from 1 to 64, both byte orders
//! - **IEEE float**: 32-bit and 64-bit, both byte orders
//! - **G.711**: μ-law (PCMU) and A-law (PCMA) 8-bit companded words
//!
//! Bit depths that are not a multiple of 8 occupy whole bytes: a 20-bit
//! sample is stored in a 3-byte block, a 31-bit sample in a 4-byte block.
//!
//! ## Usage
//!
//! ```rust
//! use pcm_codec_core::{pack, unpack, FormatDescriptor};
//!
//! let wav: FormatDescriptor = "s16le".parse()?;
//! let telephony = FormatDescriptor::mulaw();
//!
//! let bytes = [0x00, 0x40, 0x00, 0xC0];
//! let samples = unpack(&bytes, bytes.len(), &wav)?;
//! assert_eq!(samples, vec![0.5, -0.5]);
//!
//! let companded = pack(&samples, samples.len(), &telephony)?;
//! assert_eq!(companded.len(), 2);
//! # Ok::<(), pcm_codec_core::CodecError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`FormatDescriptor`] and [`EncodingKind`]

#![deny(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod codecs;
pub mod error;
pub mod stream;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use codecs::{decode_word, encode_sample};
pub use error::{CodecError, ErrorCategory, Result};
pub use stream::{
    pack, pack_bytes, pack_into, pack_parallel, transcode, unpack, unpack_into, unpack_parallel,
};
pub use types::{bytes_per_sample, full_scale, EncodingKind, FormatDescriptor};

/// Version information for the codec library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Supported encoding names
pub const SUPPORTED_ENCODINGS: &[&str] = &["pcm_signed", "pcm_unsigned", "pcm_float", "mulaw", "alaw"];

/// Initialize the codec library
///
/// Installs a default `tracing` subscriber if none is set and builds the
/// G.711 lookup tables. Calling it is optional and safe to repeat.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for setup that can fail.
pub fn init() -> Result<()> {
    // Initialize logging if not already done
    let _ = tracing_subscriber::fmt::try_init();

    codecs::g711::init_tables();

    tracing::info!("PCM-Codec-Core v{} initialized", VERSION);
    tracing::info!("Supported encodings: {:?}", SUPPORTED_ENCODINGS);

    Ok(())
}

/// Get library information
pub fn info() -> LibraryInfo {
    LibraryInfo {
        version: VERSION,
        supported_encodings: SUPPORTED_ENCODINGS.to_vec(),
        max_bits_per_sample: types::MAX_BITS_PER_SAMPLE,
    }
}

/// Library information structure
#[derive(Debug, Clone)]
pub struct LibraryInfo {
    /// Library version
    pub version: &'static str,
    /// Names of supported encodings
    pub supported_encodings: Vec<&'static str>,
    /// Widest supported linear PCM word
    pub max_bits_per_sample: i32,
}

#[cfg(test)]
mod tests;
