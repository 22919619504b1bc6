use crate::frame::FrameCodecError;
use crate::utils::{read_u32, write_u32};

/// Splits a 32-bit word into its `HIGH_BITS` most-significant bits and the
/// remaining `32 - HIGH_BITS` low bits.
///
/// Unpacking always masks, so a stray high bit never leaks into the low
/// value. Packing rejects either half that does not fit its width.
pub struct BitfieldU32<const HIGH_BITS: u32>;

impl<const HIGH_BITS: u32> BitfieldU32<HIGH_BITS> {
    const VALID_SPLIT: () = assert!(HIGH_BITS >= 1 && HIGH_BITS <= 31);

    pub const LOW_BITS: u32 = 32 - HIGH_BITS;
    pub const LOW_MASK: u32 = u32::MAX >> HIGH_BITS;
    pub const HIGH_MAX: u32 = u32::MAX >> (32 - HIGH_BITS);

    #[inline]
    pub fn unpack(word: u32) -> (u32, u32) {
        let () = Self::VALID_SPLIT;
        (word >> Self::LOW_BITS, word & Self::LOW_MASK)
    }

    #[inline]
    pub fn pack(high: u32, low: u32) -> Result<u32, FrameCodecError> {
        let () = Self::VALID_SPLIT;

        if high > Self::HIGH_MAX {
            return Err(FrameCodecError::ValueOutOfRange {
                value: u64::from(high),
                bits: HIGH_BITS,
            });
        }

        if low > Self::LOW_MASK {
            return Err(FrameCodecError::ValueOutOfRange {
                value: u64::from(low),
                bits: Self::LOW_BITS,
            });
        }

        Ok((high << Self::LOW_BITS) | low)
    }
}

/// One flag bit packed above a 31-bit value (stream ids, priority
/// dependencies, window increments).
pub type FlaggedU31 = BitfieldU32<1>;

/// Reads a `(flag, u31)` pair from 4 big-endian bytes at `offset`.
pub fn read_flagged_u31(
    buf: &[u8],
    offset: usize,
) -> Result<((bool, u32), usize), FrameCodecError> {
    let (word, consumed) = read_u32(buf, offset)?;
    let (flag, value) = FlaggedU31::unpack(word);
    Ok(((flag == 1, value), consumed))
}

/// Writes a `(flag, u31)` pair; `value` must fit in 31 bits.
pub fn write_flagged_u31(flag: bool, value: u32) -> Result<[u8; 4], FrameCodecError> {
    Ok(write_u32(FlaggedU31::pack(u32::from(flag), value)?))
}
