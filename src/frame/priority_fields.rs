use crate::{
    constants::PRIORITY_FIELDS_SIZE,
    frame::{FrameCodecError, FramePayloadCodec, FrameType},
    utils::{read_flagged_u31, read_u8, write_flagged_u31, write_u8},
};

/// Stream dependency record carried by PRIORITY frames and, when the
/// PRIORITY flag is set, at the front of a HEADERS payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityFields {
    pub exclusive: bool,

    /// Stream this one depends on (31 bits on the wire).
    pub stream_dependency: u32,

    /// Weight minus one, as transmitted.
    pub weight: u8,
}

impl PriorityFields {
    /// Reads the 5-byte record at `offset`.
    pub fn read(buf: &[u8], offset: usize) -> Result<(Self, usize), FrameCodecError> {
        let ((exclusive, stream_dependency), dep_len) = read_flagged_u31(buf, offset)?;
        let (weight, weight_len) = read_u8(buf, offset + dep_len)?;

        Ok((
            Self {
                exclusive,
                stream_dependency,
                weight,
            },
            dep_len + weight_len,
        ))
    }

    pub fn write(&self, dst: &mut Vec<u8>) -> Result<(), FrameCodecError> {
        dst.extend_from_slice(&write_flagged_u31(self.exclusive, self.stream_dependency)?);
        dst.extend_from_slice(&write_u8(self.weight));
        Ok(())
    }
}

impl FramePayloadCodec for PriorityFields {
    const FRAME_TYPE: FrameType = FrameType::Priority;

    fn decode_payload(_flags: u8, payload: &[u8]) -> Result<(Self, usize), FrameCodecError> {
        Self::read(payload, 0)
    }

    fn encode_payload(&self, dst: &mut Vec<u8>) -> Result<(), FrameCodecError> {
        self.write(dst)
    }

    fn encoded_len(&self) -> usize {
        PRIORITY_FIELDS_SIZE
    }
}
