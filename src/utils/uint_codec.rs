//! Fixed-width big-endian unsigned integer codec.
//!
//! Every reader takes the whole input buffer plus an offset and returns the
//! value together with the number of bytes it consumed, so callers can walk
//! a buffer without slicing it up front.

use crate::frame::FrameCodecError;

/// Copies exactly `N` bytes starting at `offset`, or reports how short the input is.
#[inline]
pub fn read_array<const N: usize>(
    buf: &[u8],
    offset: usize,
) -> Result<[u8; N], FrameCodecError> {
    buf.get(offset..offset.saturating_add(N))
        .and_then(|bytes| <[u8; N]>::try_from(bytes).ok())
        .ok_or(FrameCodecError::Truncated {
            needed: N,
            available: buf.len().saturating_sub(offset),
        })
}

#[inline]
pub fn read_u8(buf: &[u8], offset: usize) -> Result<(u8, usize), FrameCodecError> {
    let [byte] = read_array::<1>(buf, offset)?;
    Ok((byte, 1))
}

#[inline]
pub fn read_u16(buf: &[u8], offset: usize) -> Result<(u16, usize), FrameCodecError> {
    Ok((u16::from_be_bytes(read_array::<2>(buf, offset)?), 2))
}

/// Reads 3 big-endian bytes as the low-order bytes of a `u32` whose top byte is zero.
#[inline]
pub fn read_u24(buf: &[u8], offset: usize) -> Result<(u32, usize), FrameCodecError> {
    let [b0, b1, b2] = read_array::<3>(buf, offset)?;
    Ok((u32::from_be_bytes([0, b0, b1, b2]), 3))
}

#[inline]
pub fn read_u32(buf: &[u8], offset: usize) -> Result<(u32, usize), FrameCodecError> {
    Ok((u32::from_be_bytes(read_array::<4>(buf, offset)?), 4))
}

#[inline]
pub fn write_u8(value: u8) -> [u8; 1] {
    [value]
}

#[inline]
pub fn write_u16(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

/// Writes the low 3 bytes of `value`, rejecting anything at or above 2^24.
#[inline]
pub fn write_u24(value: u32) -> Result<[u8; 3], FrameCodecError> {
    match value.to_be_bytes() {
        [0, b0, b1, b2] => Ok([b0, b1, b2]),
        _ => Err(FrameCodecError::ValueOutOfRange {
            value: u64::from(value),
            bits: 24,
        }),
    }
}

#[inline]
pub fn write_u32(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}
