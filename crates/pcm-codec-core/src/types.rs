//! Core types for the sample codec
//!
//! A [`FormatDescriptor`] is the whole configuration surface of the codec:
//! bit depth, byte order and sample encoding. It is a small `Copy` value,
//! built once by the caller and passed into every pack/unpack call.

use crate::error::{CodecError, Result};
use std::fmt;
use std::str::FromStr;

/// Widest raw word the codec can hold
pub const MAX_BITS_PER_SAMPLE: i32 = 64;

/// Width of a G.711 companded word
pub const COMPANDED_BITS_PER_SAMPLE: i32 = 8;

/// Sample encodings understood by the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EncodingKind {
    /// Two's-complement linear PCM
    PcmSigned,
    /// Offset-binary linear PCM (silence at half scale)
    PcmUnsigned,
    /// IEEE-754 single or double precision
    PcmFloat,
    /// ITU-T G.711 μ-law (PCMU)
    #[cfg_attr(feature = "serde", serde(rename = "mulaw"))]
    MuLaw,
    /// ITU-T G.711 A-law (PCMA)
    #[cfg_attr(feature = "serde", serde(rename = "alaw"))]
    ALaw,
}

impl EncodingKind {
    /// All encodings, in declaration order
    pub const ALL: [EncodingKind; 5] = [
        Self::PcmSigned,
        Self::PcmUnsigned,
        Self::PcmFloat,
        Self::MuLaw,
        Self::ALaw,
    ];

    /// Get the encoding name
    pub fn name(self) -> &'static str {
        match self {
            Self::PcmSigned => "pcm_signed",
            Self::PcmUnsigned => "pcm_unsigned",
            Self::PcmFloat => "pcm_float",
            Self::MuLaw => "mulaw",
            Self::ALaw => "alaw",
        }
    }

    /// μ-law or A-law
    pub fn is_companded(self) -> bool {
        matches!(self, Self::MuLaw | Self::ALaw)
    }

    /// Signed or unsigned integer PCM
    pub fn is_linear(self) -> bool {
        matches!(self, Self::PcmSigned | Self::PcmUnsigned)
    }
}

impl fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for EncodingKind {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pcm_signed" | "signed" => Ok(Self::PcmSigned),
            "pcm_unsigned" | "unsigned" => Ok(Self::PcmUnsigned),
            "pcm_float" | "float" => Ok(Self::PcmFloat),
            "mulaw" | "ulaw" | "pcmu" => Ok(Self::MuLaw),
            "alaw" | "pcma" => Ok(Self::ALaw),
            _ => Err(CodecError::unknown_format(s)),
        }
    }
}

/// Block-aligned bytes per sample, `ceil(bits_per_sample / 8)`
///
/// Formats with bit depths that are not a multiple of 8 pad up to the next
/// byte, so a 31-bit sample occupies 4 bytes. Non-positive depths yield 0.
pub fn bytes_per_sample(bits_per_sample: i32) -> usize {
    if bits_per_sample <= 0 {
        return 0;
    }
    (bits_per_sample as usize).div_ceil(8)
}

/// Largest magnitude representable at a bit depth, `2^(bits_per_sample - 1)`
///
/// Computed in floating point: at 64 bits the integer form would overflow.
pub fn full_scale(bits_per_sample: i32) -> f64 {
    2.0_f64.powi(bits_per_sample - 1)
}

/// Bit depth, byte order and encoding of a raw sample buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatDescriptor {
    /// Significant bits in each sample
    pub bits_per_sample: i32,
    /// Most significant byte first
    pub big_endian: bool,
    /// Sample encoding
    pub encoding: EncodingKind,
}

impl FormatDescriptor {
    /// Create a new format descriptor
    pub fn new(bits_per_sample: i32, big_endian: bool, encoding: EncodingKind) -> Self {
        Self {
            bits_per_sample,
            big_endian,
            encoding,
        }
    }

    /// Signed 8-bit PCM
    pub fn pcm_s8() -> Self {
        Self::new(8, false, EncodingKind::PcmSigned)
    }

    /// Unsigned 8-bit PCM (WAV 8-bit)
    pub fn pcm_u8() -> Self {
        Self::new(8, false, EncodingKind::PcmUnsigned)
    }

    /// Signed 16-bit little-endian PCM (WAV, CD audio)
    pub fn pcm_s16_le() -> Self {
        Self::new(16, false, EncodingKind::PcmSigned)
    }

    /// Signed 16-bit big-endian PCM (AIFF)
    pub fn pcm_s16_be() -> Self {
        Self::new(16, true, EncodingKind::PcmSigned)
    }

    /// Signed 24-bit little-endian PCM
    pub fn pcm_s24_le() -> Self {
        Self::new(24, false, EncodingKind::PcmSigned)
    }

    /// Signed 24-bit big-endian PCM
    pub fn pcm_s24_be() -> Self {
        Self::new(24, true, EncodingKind::PcmSigned)
    }

    /// Signed 32-bit little-endian PCM
    pub fn pcm_s32_le() -> Self {
        Self::new(32, false, EncodingKind::PcmSigned)
    }

    /// 32-bit little-endian IEEE float
    pub fn pcm_f32_le() -> Self {
        Self::new(32, false, EncodingKind::PcmFloat)
    }

    /// 32-bit big-endian IEEE float
    pub fn pcm_f32_be() -> Self {
        Self::new(32, true, EncodingKind::PcmFloat)
    }

    /// 64-bit little-endian IEEE float
    pub fn pcm_f64_le() -> Self {
        Self::new(64, false, EncodingKind::PcmFloat)
    }

    /// G.711 μ-law
    pub fn mulaw() -> Self {
        Self::new(COMPANDED_BITS_PER_SAMPLE, false, EncodingKind::MuLaw)
    }

    /// G.711 A-law
    pub fn alaw() -> Self {
        Self::new(COMPANDED_BITS_PER_SAMPLE, false, EncodingKind::ALaw)
    }

    /// Set byte order
    pub fn with_big_endian(mut self, big_endian: bool) -> Self {
        self.big_endian = big_endian;
        self
    }

    /// Set bit depth
    pub fn with_bits_per_sample(mut self, bits_per_sample: i32) -> Self {
        self.bits_per_sample = bits_per_sample;
        self
    }

    /// Set encoding
    pub fn with_encoding(mut self, encoding: EncodingKind) -> Self {
        self.encoding = encoding;
        self
    }

    /// Block-aligned bytes per sample
    pub fn bytes_per_sample(&self) -> usize {
        bytes_per_sample(self.bits_per_sample)
    }

    /// Full-scale magnitude as a double
    pub fn full_scale(&self) -> f64 {
        full_scale(self.bits_per_sample)
    }

    /// Validate the descriptor
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidFormat`] if the bit depth is outside `1..=64`
    /// - [`CodecError::UnsupportedFloatWidth`] for float widths other than 32/64
    /// - [`CodecError::UnsupportedCompandedWidth`] for μ-law/A-law not 8 bits wide
    pub fn validate(&self) -> Result<()> {
        let bits = self.bits_per_sample;

        if bits <= 0 {
            return Err(CodecError::invalid_format(bits, "must be positive"));
        }

        if bits > MAX_BITS_PER_SAMPLE {
            return Err(CodecError::invalid_format(
                bits,
                format!("exceeds the {}-bit word limit", MAX_BITS_PER_SAMPLE),
            ));
        }

        match self.encoding {
            EncodingKind::PcmFloat if bits != 32 && bits != 64 => {
                Err(CodecError::UnsupportedFloatWidth {
                    bits_per_sample: bits,
                })
            }
            EncodingKind::MuLaw | EncodingKind::ALaw if bits != COMPANDED_BITS_PER_SAMPLE => {
                Err(CodecError::UnsupportedCompandedWidth {
                    encoding: self.encoding,
                    bits_per_sample: bits,
                })
            }
            _ => Ok(()),
        }
    }
}

impl Default for FormatDescriptor {
    fn default() -> Self {
        Self::pcm_s16_le()
    }
}

impl fmt::Display for FormatDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.encoding {
            EncodingKind::MuLaw | EncodingKind::ALaw => {
                return write!(f, "{}", self.encoding.name());
            }
            EncodingKind::PcmSigned => 's',
            EncodingKind::PcmUnsigned => 'u',
            EncodingKind::PcmFloat => 'f',
        };

        write!(f, "{}{}", prefix, self.bits_per_sample)?;
        if self.bytes_per_sample() > 1 {
            write!(f, "{}", if self.big_endian { "be" } else { "le" })?;
        }
        Ok(())
    }
}

impl FromStr for FormatDescriptor {
    type Err = CodecError;

    /// Parse a short format name such as `s16le`, `u8`, `f32be` or `mulaw`
    ///
    /// Single-byte formats may omit the byte order; wider formats must
    /// carry an `le` or `be` suffix. The parsed descriptor is validated.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();

        if let Ok(encoding) = name.parse::<EncodingKind>() {
            if encoding.is_companded() {
                return Ok(Self::new(COMPANDED_BITS_PER_SAMPLE, false, encoding));
            }
            return Err(CodecError::unknown_format(s));
        }

        let mut chars = name.chars();
        let encoding = match chars.next() {
            Some('s') => EncodingKind::PcmSigned,
            Some('u') => EncodingKind::PcmUnsigned,
            Some('f') => EncodingKind::PcmFloat,
            _ => return Err(CodecError::unknown_format(s)),
        };

        let rest = chars.as_str();
        let (digits, big_endian) = if let Some(digits) = rest.strip_suffix("le") {
            (digits, Some(false))
        } else if let Some(digits) = rest.strip_suffix("be") {
            (digits, Some(true))
        } else {
            (rest, None)
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::unknown_format(s));
        }
        let bits: i32 = digits.parse().map_err(|_| CodecError::unknown_format(s))?;

        let big_endian = match big_endian {
            Some(big_endian) => big_endian,
            None if bytes_per_sample(bits) <= 1 => false,
            None => return Err(CodecError::unknown_format(s)),
        };

        let format = Self::new(bits, big_endian, encoding);
        format.validate()?;
        Ok(format)
    }
}
