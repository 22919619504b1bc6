//! Fixed-or-bounded payloads of the connection and stream control frames.
//!
//! None of these are padded. A payload shorter than its fixed layout fails
//! with `Truncated`; one that is longer leaves bytes unconsumed, which the
//! frame decoder reports as `TrailingPayloadBytes`.

use crate::{
    constants::{
        GOAWAY_FIXED_SIZE, PING_PAYLOAD_SIZE, RST_STREAM_PAYLOAD_SIZE, SETTING_ENTRY_SIZE,
        WINDOW_UPDATE_PAYLOAD_SIZE,
    },
    frame::{FrameCodecError, FramePayloadCodec, FrameType},
    utils::{
        read_array, read_flagged_u31, read_u16, read_u32, write_flagged_u31, write_u16, write_u32,
    },
};

/// RST_STREAM payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RstStreamFramePayload {
    /// See `frame::error_code`.
    pub error_code: u32,
}

impl FramePayloadCodec for RstStreamFramePayload {
    const FRAME_TYPE: FrameType = FrameType::RstStream;

    fn decode_payload(_flags: u8, payload: &[u8]) -> Result<(Self, usize), FrameCodecError> {
        let (error_code, consumed) = read_u32(payload, 0)?;
        Ok((Self { error_code }, consumed))
    }

    fn encode_payload(&self, dst: &mut Vec<u8>) -> Result<(), FrameCodecError> {
        dst.extend_from_slice(&write_u32(self.error_code));
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        RST_STREAM_PAYLOAD_SIZE
    }
}

/// One SETTINGS parameter.
///
/// Identifiers this crate has no name for are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting {
    pub id: u16,
    pub value: u32,
}

impl Setting {
    pub const HEADER_TABLE_SIZE: u16 = 0x1;
    pub const ENABLE_PUSH: u16 = 0x2;
    pub const MAX_CONCURRENT_STREAMS: u16 = 0x3;
    pub const INITIAL_WINDOW_SIZE: u16 = 0x4;
    pub const MAX_FRAME_SIZE: u16 = 0x5;
    pub const MAX_HEADER_LIST_SIZE: u16 = 0x6;

    pub fn new(id: u16, value: u32) -> Self {
        Self { id, value }
    }
}

/// SETTINGS payload: zero or more 6-byte `(id, value)` entries filling the
/// whole payload. The ACK bit stays in the frame's flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsFramePayload {
    pub settings: Vec<Setting>,
}

impl FramePayloadCodec for SettingsFramePayload {
    const FRAME_TYPE: FrameType = FrameType::Settings;

    fn decode_payload(_flags: u8, payload: &[u8]) -> Result<(Self, usize), FrameCodecError> {
        if payload.len() % SETTING_ENTRY_SIZE != 0 {
            return Err(FrameCodecError::SettingsLengthNotMultipleOf6 {
                length: payload.len(),
            });
        }

        let mut settings = Vec::with_capacity(payload.len() / SETTING_ENTRY_SIZE);
        let mut offset = 0;

        while offset < payload.len() {
            let (id, id_len) = read_u16(payload, offset)?;
            let (value, value_len) = read_u32(payload, offset + id_len)?;
            settings.push(Setting { id, value });
            offset += id_len + value_len;
        }

        Ok((Self { settings }, offset))
    }

    fn encode_payload(&self, dst: &mut Vec<u8>) -> Result<(), FrameCodecError> {
        for setting in &self.settings {
            dst.extend_from_slice(&write_u16(setting.id));
            dst.extend_from_slice(&write_u32(setting.value));
        }
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        self.settings.len() * SETTING_ENTRY_SIZE
    }
}

/// PING payload: exactly 8 opaque bytes, echoed back in the ACK.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PingFramePayload {
    pub opaque_data: [u8; PING_PAYLOAD_SIZE],
}

impl FramePayloadCodec for PingFramePayload {
    const FRAME_TYPE: FrameType = FrameType::Ping;

    fn decode_payload(_flags: u8, payload: &[u8]) -> Result<(Self, usize), FrameCodecError> {
        let opaque_data = read_array::<PING_PAYLOAD_SIZE>(payload, 0)?;
        Ok((Self { opaque_data }, PING_PAYLOAD_SIZE))
    }

    fn encode_payload(&self, dst: &mut Vec<u8>) -> Result<(), FrameCodecError> {
        dst.extend_from_slice(&self.opaque_data);
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        PING_PAYLOAD_SIZE
    }
}

/// GOAWAY payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoAwayFramePayload {
    /// Highest stream the sender may have processed (31 bits on the wire).
    pub last_stream_id: u32,
    pub error_code: u32,
    /// Everything after the fixed 8 bytes.
    pub debug_data: Vec<u8>,
}

impl FramePayloadCodec for GoAwayFramePayload {
    const FRAME_TYPE: FrameType = FrameType::GoAway;

    fn decode_payload(_flags: u8, payload: &[u8]) -> Result<(Self, usize), FrameCodecError> {
        let ((_reserved, last_stream_id), id_len) = read_flagged_u31(payload, 0)?;
        let (error_code, code_len) = read_u32(payload, id_len)?;

        Ok((
            Self {
                last_stream_id,
                error_code,
                debug_data: payload[id_len + code_len..].to_vec(),
            },
            payload.len(),
        ))
    }

    fn encode_payload(&self, dst: &mut Vec<u8>) -> Result<(), FrameCodecError> {
        dst.extend_from_slice(&write_flagged_u31(false, self.last_stream_id)?);
        dst.extend_from_slice(&write_u32(self.error_code));
        dst.extend_from_slice(&self.debug_data);
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        GOAWAY_FIXED_SIZE + self.debug_data.len()
    }
}

/// WINDOW_UPDATE payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowUpdateFramePayload {
    /// 31 bits on the wire; the reserved bit above it is ignored on decode.
    pub window_size_increment: u32,
}

impl FramePayloadCodec for WindowUpdateFramePayload {
    const FRAME_TYPE: FrameType = FrameType::WindowUpdate;

    fn decode_payload(_flags: u8, payload: &[u8]) -> Result<(Self, usize), FrameCodecError> {
        let ((_reserved, window_size_increment), consumed) = read_flagged_u31(payload, 0)?;
        Ok((
            Self {
                window_size_increment,
            },
            consumed,
        ))
    }

    fn encode_payload(&self, dst: &mut Vec<u8>) -> Result<(), FrameCodecError> {
        dst.extend_from_slice(&write_flagged_u31(false, self.window_size_increment)?);
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        WINDOW_UPDATE_PAYLOAD_SIZE
    }
}
