//! Payloads that carry a (compressed) header block fragment besides HEADERS.

use crate::{
    constants::PUSH_PROMISE_FIXED_SIZE,
    frame::{FrameCodecError, FramePayloadCodec, FrameType},
    utils::{read_flagged_u31, write_flagged_u31},
};

/// PUSH_PROMISE payload.
///
/// Not padded by this codec: a PADDED bit stays in the frame's raw flags
/// and any pad bytes remain part of `header_block_fragment`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushPromiseFramePayload {
    /// Stream reserved by the promise (31 bits on the wire).
    pub promised_stream_id: u32,
    pub header_block_fragment: Vec<u8>,
}

impl FramePayloadCodec for PushPromiseFramePayload {
    const FRAME_TYPE: FrameType = FrameType::PushPromise;

    fn decode_payload(_flags: u8, payload: &[u8]) -> Result<(Self, usize), FrameCodecError> {
        let ((_reserved, promised_stream_id), consumed) = read_flagged_u31(payload, 0)?;

        Ok((
            Self {
                promised_stream_id,
                header_block_fragment: payload[consumed..].to_vec(),
            },
            payload.len(),
        ))
    }

    fn encode_payload(&self, dst: &mut Vec<u8>) -> Result<(), FrameCodecError> {
        dst.extend_from_slice(&write_flagged_u31(false, self.promised_stream_id)?);
        dst.extend_from_slice(&self.header_block_fragment);
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        PUSH_PROMISE_FIXED_SIZE + self.header_block_fragment.len()
    }
}

/// CONTINUATION payload: the whole payload is header block fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContinuationFramePayload {
    pub header_block_fragment: Vec<u8>,
}

impl FramePayloadCodec for ContinuationFramePayload {
    const FRAME_TYPE: FrameType = FrameType::Continuation;

    fn decode_payload(_flags: u8, payload: &[u8]) -> Result<(Self, usize), FrameCodecError> {
        Ok((
            Self {
                header_block_fragment: payload.to_vec(),
            },
            payload.len(),
        ))
    }

    fn encode_payload(&self, dst: &mut Vec<u8>) -> Result<(), FrameCodecError> {
        dst.extend_from_slice(&self.header_block_fragment);
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        self.header_block_fragment.len()
    }
}
