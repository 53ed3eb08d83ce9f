//! Error handling for the sample codec
//!
//! Every failure is detected before any output is produced, so a caller
//! either gets the whole buffer converted or one of these errors.

use std::fmt;
use thiserror::Error;

use crate::types::EncodingKind;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Error type for pack/unpack operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Bit depth outside `1..=64`
    #[error("Invalid audio format: {bits_per_sample} bits per sample ({reason})")]
    InvalidFormat {
        /// Offending bit depth
        bits_per_sample: i32,
        /// Why it was rejected
        reason: String,
    },

    /// Requested length or count exceeds the supplied buffer
    #[error("Buffer too short: need {needed}, got {actual}")]
    BufferTooShort {
        /// Elements the operation needs
        needed: usize,
        /// Elements the buffer holds
        actual: usize,
    },

    /// `PcmFloat` with a width other than 32 or 64 bits
    #[error("Unsupported float width: {bits_per_sample} bits (supported: 32, 64)")]
    UnsupportedFloatWidth {
        /// Offending bit depth
        bits_per_sample: i32,
    },

    /// μ-law / A-law with a word that is not 8 bits wide
    #[error("Unsupported {encoding} width: {bits_per_sample} bits (companded words are 8 bits)")]
    UnsupportedCompandedWidth {
        /// Companded encoding that was requested
        encoding: EncodingKind,
        /// Offending bit depth
        bits_per_sample: i32,
    },

    /// Format name that does not match any known preset
    #[error("Unknown format: {name}")]
    UnknownFormat {
        /// Name as given by the caller
        name: String,
    },
}

impl CodecError {
    /// Create a new invalid format error
    pub fn invalid_format(bits_per_sample: i32, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            bits_per_sample,
            reason: reason.into(),
        }
    }

    /// Create a new buffer too short error
    pub fn buffer_too_short(needed: usize, actual: usize) -> Self {
        Self::BufferTooShort { needed, actual }
    }

    /// Create a new unknown format error
    pub fn unknown_format(name: impl Into<String>) -> Self {
        Self::UnknownFormat { name: name.into() }
    }

    /// Check if this error is recoverable
    ///
    /// A short buffer can be retried with a larger one; a bad descriptor
    /// will fail the same way every time.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::BufferTooShort { .. } => true,

            Self::InvalidFormat { .. }
            | Self::UnsupportedFloatWidth { .. }
            | Self::UnsupportedCompandedWidth { .. }
            | Self::UnknownFormat { .. } => false,
        }
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidFormat { .. }
            | Self::UnsupportedFloatWidth { .. }
            | Self::UnsupportedCompandedWidth { .. }
            | Self::UnknownFormat { .. } => ErrorCategory::Configuration,

            Self::BufferTooShort { .. } => ErrorCategory::Memory,
        }
    }
}

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Format descriptor and parameter errors
    Configuration,
    /// Buffer sizing errors
    Memory,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Memory => write!(f, "Memory"),
        }
    }
}
