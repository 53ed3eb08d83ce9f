//! Raw word packing
//!
//! Reads and writes an N-byte unsigned word at a byte offset, honoring byte
//! order. Widths of 1, 2 and 3 bytes take unrolled paths; every other width
//! (up to 8) goes through the generic loop. All paths produce identical
//! results for the same width.
//!
//! Callers are responsible for bounds: `offset + width` must not exceed the
//! buffer length.

/// Read a `width`-byte word starting at `offset`
pub fn read_word(bytes: &[u8], offset: usize, width: usize, big_endian: bool) -> u64 {
    match width {
        1 => read_8(bytes, offset),
        2 => read_16(bytes, offset, big_endian),
        3 => read_24(bytes, offset, big_endian),
        _ => read_any(bytes, offset, width, big_endian),
    }
}

/// Write the low `width` bytes of `value` starting at `offset`
pub fn write_word(bytes: &mut [u8], offset: usize, value: u64, width: usize, big_endian: bool) {
    match width {
        1 => write_8(bytes, offset, value),
        2 => write_16(bytes, offset, value, big_endian),
        3 => write_24(bytes, offset, value, big_endian),
        _ => write_any(bytes, offset, value, width, big_endian),
    }
}

#[inline]
fn read_8(bytes: &[u8], i: usize) -> u64 {
    u64::from(bytes[i])
}

#[inline]
fn read_16(bytes: &[u8], i: usize, big_endian: bool) -> u64 {
    let (b0, b1) = (u64::from(bytes[i]), u64::from(bytes[i + 1]));
    if big_endian {
        (b0 << 8) | b1
    } else {
        b0 | (b1 << 8)
    }
}

#[inline]
fn read_24(bytes: &[u8], i: usize, big_endian: bool) -> u64 {
    let (b0, b1, b2) = (
        u64::from(bytes[i]),
        u64::from(bytes[i + 1]),
        u64::from(bytes[i + 2]),
    );
    if big_endian {
        (b0 << 16) | (b1 << 8) | b2
    } else {
        b0 | (b1 << 8) | (b2 << 16)
    }
}

fn read_any(bytes: &[u8], i: usize, width: usize, big_endian: bool) -> u64 {
    let block = &bytes[i..i + width];
    let mut word = 0u64;

    if big_endian {
        for (b, &byte) in block.iter().enumerate() {
            word |= u64::from(byte) << (8 * (width - 1 - b));
        }
    } else {
        for (b, &byte) in block.iter().enumerate() {
            word |= u64::from(byte) << (8 * b);
        }
    }

    word
}

#[inline]
fn write_8(bytes: &mut [u8], i: usize, value: u64) {
    bytes[i] = (value & 0xFF) as u8;
}

#[inline]
fn write_16(bytes: &mut [u8], i: usize, value: u64, big_endian: bool) {
    if big_endian {
        bytes[i] = ((value >> 8) & 0xFF) as u8;
        bytes[i + 1] = (value & 0xFF) as u8;
    } else {
        bytes[i] = (value & 0xFF) as u8;
        bytes[i + 1] = ((value >> 8) & 0xFF) as u8;
    }
}

#[inline]
fn write_24(bytes: &mut [u8], i: usize, value: u64, big_endian: bool) {
    if big_endian {
        bytes[i] = ((value >> 16) & 0xFF) as u8;
        bytes[i + 1] = ((value >> 8) & 0xFF) as u8;
        bytes[i + 2] = (value & 0xFF) as u8;
    } else {
        bytes[i] = (value & 0xFF) as u8;
        bytes[i + 1] = ((value >> 8) & 0xFF) as u8;
        bytes[i + 2] = ((value >> 16) & 0xFF) as u8;
    }
}

fn write_any(bytes: &mut [u8], i: usize, value: u64, width: usize, big_endian: bool) {
    let block = &mut bytes[i..i + width];

    if big_endian {
        for (b, byte) in block.iter_mut().enumerate() {
            *byte = ((value >> (8 * (width - 1 - b))) & 0xFF) as u8;
        }
    } else {
        for (b, byte) in block.iter_mut().enumerate() {
            *byte = ((value >> (8 * b)) & 0xFF) as u8;
        }
    }
}
