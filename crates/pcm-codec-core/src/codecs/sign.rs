//! Sign handling for linear PCM words
//!
//! All functions take a bit depth in `1..=64`; the stream layer validates
//! the format before any word reaches them.

/// Sign-extend the low `bits` bits of `raw` into a full `i64`
///
/// Shifts the sample's sign bit up to bit 63, then arithmetic-shifts it
/// back down so the sign propagates through the high bits.
#[inline]
pub fn sign_extend(raw: u64, bits: i32) -> i64 {
    let extension = 64 - bits as u32;
    ((raw << extension) as i64) >> extension
}

/// Offset-binary bias for a bit depth, `2^(bits - 1)`
#[inline]
fn offset(bits: i32) -> u64 {
    1u64 << (bits - 1) as u32
}

/// Two's complement to offset binary (adds full scale)
#[inline]
pub fn to_offset_binary(signed: i64, bits: i32) -> u64 {
    (signed as u64).wrapping_add(offset(bits))
}

/// Offset binary to two's complement (subtracts full scale)
#[inline]
pub fn from_offset_binary(raw: u64, bits: i32) -> i64 {
    raw.wrapping_sub(offset(bits)) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_extend_8_bit() {
        assert_eq!(sign_extend(0x7F, 8), 127);
        assert_eq!(sign_extend(0x80, 8), -128);
        assert_eq!(sign_extend(0xFF, 8), -1);
        assert_eq!(sign_extend(0x00, 8), 0);
    }

    #[test]
    fn test_sign_extend_odd_widths() {
        // 12-bit sample in a 16-bit container
        assert_eq!(sign_extend(0x0800, 12), -2048);
        assert_eq!(sign_extend(0x07FF, 12), 2047);
        // 1-bit: the only bit is the sign bit
        assert_eq!(sign_extend(1, 1), -1);
        assert_eq!(sign_extend(0, 1), 0);
    }

    #[test]
    fn test_sign_extend_ignores_padding_bits() {
        // Bits above the sample width are discarded, not propagated
        assert_eq!(sign_extend(0xF07F, 8), 127);
        assert_eq!(sign_extend(0x1_8000, 16), -32768);
    }

    #[test]
    fn test_sign_extend_64_bit() {
        assert_eq!(sign_extend(u64::MAX, 64), -1);
        assert_eq!(sign_extend(1u64 << 63, 64), i64::MIN);
    }

    #[test]
    fn test_offset_binary() {
        assert_eq!(from_offset_binary(0x80, 8), 0);
        assert_eq!(from_offset_binary(0x00, 8), -128);
        assert_eq!(from_offset_binary(0xFF, 8), 127);

        assert_eq!(to_offset_binary(0, 16), 0x8000);
        assert_eq!(to_offset_binary(-32768, 16), 0);
        assert_eq!(to_offset_binary(32767, 16), 0xFFFF);
    }

    #[test]
    fn test_offset_binary_64_bit() {
        assert_eq!(from_offset_binary(1u64 << 63, 64), 0);
        assert_eq!(from_offset_binary(0, 64), i64::MIN);
        assert_eq!(to_offset_binary(i64::MIN, 64), 0);
        assert_eq!(to_offset_binary(i64::MAX, 64), u64::MAX);
    }

    #[test]
    fn test_offset_binary_inverse() {
        for bits in [4, 8, 12, 16, 24, 32] {
            for raw in [0u64, 1, 7, (1u64 << bits) - 1] {
                assert_eq!(to_offset_binary(from_offset_binary(raw, bits), bits), raw);
            }
        }
    }
}
