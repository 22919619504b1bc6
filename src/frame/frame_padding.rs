//! Optional padding shared by DATA and HEADERS payloads.
//!
//! On the wire a padded payload is `[pad_length] inner [filler; pad_length]`.
//! In the value model padding is only ever `Option<Vec<u8>>`: the pad length
//! byte and the PADDED flag are computed from it, so the two cannot disagree.

use crate::{
    constants::PAD_LENGTH_FIELD_SIZE,
    frame::{FrameCodecError, flags::PADDED},
    utils::{read_u8, write_u8},
};

/// Splits a payload region into its padding filler and inner payload.
///
/// Filler content is not validated.
pub fn split_padding(
    flags: u8,
    payload: &[u8],
) -> Result<(Option<Vec<u8>>, &[u8]), FrameCodecError> {
    if flags & PADDED == 0 {
        return Ok((None, payload));
    }

    let (pad_length, consumed) = read_u8(payload, 0)?;
    let length = payload.len();

    if usize::from(pad_length) + PAD_LENGTH_FIELD_SIZE > length {
        return Err(FrameCodecError::PaddingOverflow { pad_length, length });
    }

    let (inner, filler) = payload[consumed..].split_at(length - consumed - usize::from(pad_length));

    Ok((Some(filler.to_vec()), inner))
}

/// Writes `inner` to `dst`, surrounded by the pad length and filler when
/// `padding` is present.
///
/// Filler longer than 255 bytes cannot be described by the pad length byte
/// and is rejected before anything is written.
pub fn write_padded<F>(
    padding: Option<&[u8]>,
    dst: &mut Vec<u8>,
    write_inner: F,
) -> Result<(), FrameCodecError>
where
    F: FnOnce(&mut Vec<u8>) -> Result<(), FrameCodecError>,
{
    let Some(filler) = padding else {
        return write_inner(dst);
    };

    let pad_length = u8::try_from(filler.len()).map_err(|_| FrameCodecError::ValueOutOfRange {
        value: filler.len() as u64,
        bits: 8,
    })?;

    dst.extend_from_slice(&write_u8(pad_length));
    write_inner(dst)?;
    dst.extend_from_slice(filler);

    Ok(())
}

/// The flag bits a padding value implies.
#[inline]
pub fn padding_flags(padding: Option<&[u8]>) -> u8 {
    if padding.is_some() { PADDED } else { 0 }
}

/// Serialized size of `inner_len` bytes wrapped in `padding`.
#[inline]
pub fn padded_len(padding: Option<&[u8]>, inner_len: usize) -> usize {
    match padding {
        Some(filler) => PAD_LENGTH_FIELD_SIZE + inner_len + filler.len(),
        None => inner_len,
    }
}
