use crate::frame::{
    FrameCodecError, FramePayloadCodec, FrameType,
    flags::PADDED,
    frame_padding::{padded_len, padding_flags, split_padding, write_padded},
};

/// DATA payload: opaque application bytes, optionally padded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataFramePayload {
    /// Filler appended after `data`; `Some` sets PADDED on the wire.
    pub padding: Option<Vec<u8>>,
    pub data: Vec<u8>,
}

impl DataFramePayload {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            padding: None,
            data: data.into(),
        }
    }

    pub fn with_padding(mut self, filler: impl Into<Vec<u8>>) -> Self {
        self.padding = Some(filler.into());
        self
    }
}

impl FramePayloadCodec for DataFramePayload {
    const FRAME_TYPE: FrameType = FrameType::Data;
    const OWNED_FLAGS: u8 = PADDED;

    fn decode_payload(flags: u8, payload: &[u8]) -> Result<(Self, usize), FrameCodecError> {
        let (padding, inner) = split_padding(flags, payload)?;

        Ok((
            Self {
                padding,
                data: inner.to_vec(),
            },
            payload.len(),
        ))
    }

    fn encode_payload(&self, dst: &mut Vec<u8>) -> Result<(), FrameCodecError> {
        write_padded(self.padding.as_deref(), dst, |dst| {
            dst.extend_from_slice(&self.data);
            Ok(())
        })
    }

    fn encoded_len(&self) -> usize {
        padded_len(self.padding.as_deref(), self.data.len())
    }

    fn derived_flags(&self) -> u8 {
        padding_flags(self.padding.as_deref())
    }
}
