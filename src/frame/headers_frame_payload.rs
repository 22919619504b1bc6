use crate::{
    constants::PRIORITY_FIELDS_SIZE,
    frame::{
        FrameCodecError, FramePayloadCodec, FrameType, PriorityFields,
        flags::{PADDED, PRIORITY},
        frame_padding::{padded_len, padding_flags, split_padding, write_padded},
    },
};

/// HEADERS payload.
///
/// Wire order is `[pad_length] [priority] header_block_fragment [filler]`:
/// padding is stripped first, then the priority record from the front of
/// what remains. Frames using both features misparse if the order is
/// swapped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadersFramePayload {
    /// `Some` sets PADDED on the wire.
    pub padding: Option<Vec<u8>>,

    /// `Some` sets PRIORITY on the wire.
    pub priority: Option<PriorityFields>,

    /// Compressed header block; opaque to this codec.
    pub header_block_fragment: Vec<u8>,
}

impl HeadersFramePayload {
    pub fn new(header_block_fragment: impl Into<Vec<u8>>) -> Self {
        Self {
            padding: None,
            priority: None,
            header_block_fragment: header_block_fragment.into(),
        }
    }

    pub fn with_padding(mut self, filler: impl Into<Vec<u8>>) -> Self {
        self.padding = Some(filler.into());
        self
    }

    pub fn with_priority(mut self, priority: PriorityFields) -> Self {
        self.priority = Some(priority);
        self
    }
}

impl FramePayloadCodec for HeadersFramePayload {
    const FRAME_TYPE: FrameType = FrameType::Headers;
    const OWNED_FLAGS: u8 = PADDED | PRIORITY;

    fn decode_payload(flags: u8, payload: &[u8]) -> Result<(Self, usize), FrameCodecError> {
        let (padding, inner) = split_padding(flags, payload)?;

        let (priority, fragment_offset) = if flags & PRIORITY != 0 {
            let (priority, consumed) = PriorityFields::read(inner, 0)?;
            (Some(priority), consumed)
        } else {
            (None, 0)
        };

        Ok((
            Self {
                padding,
                priority,
                header_block_fragment: inner[fragment_offset..].to_vec(),
            },
            payload.len(),
        ))
    }

    fn encode_payload(&self, dst: &mut Vec<u8>) -> Result<(), FrameCodecError> {
        write_padded(self.padding.as_deref(), dst, |dst| {
            if let Some(priority) = &self.priority {
                priority.write(dst)?;
            }
            dst.extend_from_slice(&self.header_block_fragment);
            Ok(())
        })
    }

    fn encoded_len(&self) -> usize {
        let priority_len = if self.priority.is_some() {
            PRIORITY_FIELDS_SIZE
        } else {
            0
        };

        padded_len(
            self.padding.as_deref(),
            priority_len + self.header_block_fragment.len(),
        )
    }

    fn derived_flags(&self) -> u8 {
        let priority_flag = if self.priority.is_some() { PRIORITY } else { 0 };
        padding_flags(self.padding.as_deref()) | priority_flag
    }
}
