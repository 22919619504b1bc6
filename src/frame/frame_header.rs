use crate::{
    constants::{
        FRAME_FLAGS_OFFSET, FRAME_HEADER_SIZE, FRAME_LENGTH_FIELD_SIZE, FRAME_STREAM_ID_OFFSET,
        FRAME_TYPE_OFFSET,
    },
    frame::{FrameCodecError, FrameType},
    utils::{read_flagged_u31, read_u8, read_u24, write_flagged_u31, write_u24},
};

/// The fixed 9-byte header that precedes every frame payload.
///
/// `length` counts payload bytes only. When encoding a `Frame` it is always
/// derived from the serialized payload; nothing outside this crate sets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Payload length in bytes (24 bits on the wire).
    pub length: u32,

    /// Raw type code. Codes without a `FrameType` are still valid here.
    pub frame_type: u8,

    /// Type-dependent flag bits.
    pub flags: u8,

    /// Stream identifier (31 bits on the wire). The reserved bit above it
    /// is masked off on decode and never surfaced.
    pub stream_id: u32,
}

impl FrameHeader {
    /// The known frame type, if the type code has one.
    pub fn kind(&self) -> Option<FrameType> {
        FrameType::try_from(self.frame_type).ok()
    }

    pub fn has_flag(&self, flag: u8) -> bool {
        self.flags & flag != 0
    }
}

/// Decodes the common header from the front of `buf`.
///
/// Only the first 9 bytes are inspected; whether `length` payload bytes
/// follow is left to the caller.
pub fn decode_header(buf: &[u8]) -> Result<(FrameHeader, usize), FrameCodecError> {
    if buf.len() < FRAME_HEADER_SIZE {
        return Err(FrameCodecError::Truncated {
            needed: FRAME_HEADER_SIZE,
            available: buf.len(),
        });
    }

    let (length, _) = read_u24(buf, 0)?;
    let (frame_type, _) = read_u8(buf, FRAME_TYPE_OFFSET)?;
    let (flags, _) = read_u8(buf, FRAME_FLAGS_OFFSET)?;

    // Peers may set the reserved bit; it is ignored rather than rejected.
    let ((_reserved, stream_id), _) = read_flagged_u31(buf, FRAME_STREAM_ID_OFFSET)?;

    Ok((
        FrameHeader {
            length,
            frame_type,
            flags,
            stream_id,
        },
        FRAME_HEADER_SIZE,
    ))
}

/// Encodes the common header, always writing the reserved bit as 0.
pub fn encode_header(header: &FrameHeader) -> Result<[u8; FRAME_HEADER_SIZE], FrameCodecError> {
    let mut buf = [0u8; FRAME_HEADER_SIZE];

    buf[..FRAME_LENGTH_FIELD_SIZE].copy_from_slice(&write_u24(header.length)?);
    buf[FRAME_TYPE_OFFSET] = header.frame_type;
    buf[FRAME_FLAGS_OFFSET] = header.flags;
    buf[FRAME_STREAM_ID_OFFSET..].copy_from_slice(&write_flagged_u31(false, header.stream_id)?);

    Ok(buf)
}
