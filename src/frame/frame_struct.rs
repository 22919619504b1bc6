use crate::{
    constants::FRAME_HEADER_SIZE,
    frame::{FramePayload, FrameType, frame_type_registry::frame_type_entry_for_code},
};

/// A single decoded (or to-be-encoded) frame.
///
/// A frame is one self-contained protocol message: a 9-byte header followed
/// by a type-specific payload. The header is not stored. Its length and type
/// code are computed from the payload, and so are the flag bits the payload
/// owns (PADDED for DATA; PADDED and PRIORITY for HEADERS).
///
/// Fields are only reachable through accessors so that `Frame::new` (which
/// `FrameCodec::decode_one` also goes through) is the single way to build a
/// value. A frame can therefore never carry PADDED without also carrying the
/// padding it describes.
///
/// A decoded frame owns its bytes; it never borrows from the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Identifies the stream this frame belongs to.
    ///
    /// 31 bits on the wire; the reserved high bit is dropped on decode and
    /// written as zero on encode. Stream 0 addresses the connection as a
    /// whole (SETTINGS, PING, GOAWAY).
    stream_id: u32,

    /// Flag bits not derived from the payload.
    ///
    /// Holds caller-controlled bits such as END_STREAM, END_HEADERS or ACK,
    /// plus any bit this codec assigns no meaning to for the frame's type.
    /// Bits the payload owns are always clear here.
    flags: u8,

    /// The type-specific part of the frame.
    ///
    /// Its variant decides the type code written to the header, and its
    /// encoded size decides the header's length field.
    payload: FramePayload,
}

impl Frame {
    /// Builds a frame, clearing any bits of `flags` that `payload` derives itself.
    ///
    /// An `Unknown` payload whose type code names a known frame type is
    /// decoded into that type's payload when its bytes parse completely
    /// under `flags`. That keeps `new` consistent with what `decode_one`
    /// would produce for the same bytes. Bytes that do not parse are kept
    /// as `Unknown`.
    ///
    /// # Arguments
    ///
    /// * `stream_id` - The stream identifier, at most 31 bits wide.
    /// * `flags` - The flags byte. Payload-owned bits are dropped.
    /// * `payload` - Any typed payload, or a `FramePayload`.
    pub fn new(stream_id: u32, flags: u8, payload: impl Into<FramePayload>) -> Self {
        let payload = normalize_payload(flags, payload.into());
        let flags = flags & !payload.owned_flags();

        Self {
            stream_id,
            flags,
            payload,
        }
    }

    pub fn stream_id(&self) -> u32 {
        self.stream_id
    }

    /// Flag bits stored on the frame, excluding those the payload derives.
    ///
    /// See `wire_flags` for the byte actually written to the header.
    pub fn flags(&self) -> u8 {
        self.flags
    }

    pub fn payload(&self) -> &FramePayload {
        &self.payload
    }

    pub fn into_payload(self) -> FramePayload {
        self.payload
    }

    pub fn frame_type(&self) -> Option<FrameType> {
        self.payload.frame_type()
    }

    pub fn frame_type_code(&self) -> u8 {
        self.payload.frame_type_code()
    }

    /// The flags byte exactly as `encode` writes it.
    pub fn wire_flags(&self) -> u8 {
        self.flags | self.payload.derived_flags()
    }

    pub fn has_flag(&self, flag: u8) -> bool {
        self.wire_flags() & flag != 0
    }

    /// Total encoded size, header included.
    pub fn encoded_len(&self) -> usize {
        FRAME_HEADER_SIZE + self.payload.encoded_len()
    }
}

fn normalize_payload(flags: u8, payload: FramePayload) -> FramePayload {
    let FramePayload::Unknown { frame_type, raw } = payload else {
        return payload;
    };

    let Some(entry) = frame_type_entry_for_code(frame_type) else {
        return FramePayload::Unknown { frame_type, raw };
    };

    match (entry.decode)(flags, &raw) {
        Ok((decoded, consumed)) if consumed == raw.len() => decoded,
        _ => FramePayload::Unknown { frame_type, raw },
    }
}
