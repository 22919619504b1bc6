use crate::{
    constants::FRAME_HEADER_SIZE,
    frame::{
        Frame, FrameCodecError, FrameHeader, FramePayload, decode_header, encode_header,
        frame_type_registry::frame_type_entry_for_code,
    },
};

/// Encodes `Frame` values to bytes and decodes bytes back into `Frame`s.
///
/// The `FrameCodec` serializes a `Frame` into its 9-byte header followed by
/// the type-specific payload, and parses such bytes back. The header's length,
/// type code and payload-owned flag bits are always computed from the payload,
/// never taken from the caller.
///
/// Stateless: every call runs to completion on the calling thread and
/// nothing is retained between calls. Use `FrameStreamDecoder` when bytes
/// arrive in pieces.
pub struct FrameCodec;

impl FrameCodec {
    /// Decodes the frame at the front of `buf`.
    ///
    /// Bytes after the first frame are left untouched, so a caller walking a
    /// buffer advances by the returned size and calls again.
    ///
    /// # Arguments
    ///
    /// * `buf` - Bytes starting at a frame boundary.
    ///
    /// # Returns
    ///
    /// Returns a `Result` where:
    /// - `Ok((Frame, usize))` holds the frame and the number of bytes it
    ///   occupied (header plus declared payload).
    /// - `Err(FrameCodecError::Truncated)` if `buf` holds less than a whole frame.
    /// - `Err(FrameCodecError::TrailingPayloadBytes)` if the payload decoder
    ///   finished before the declared length was used up.
    /// - Any payload-level error (`PaddingOverflow`, `SettingsLengthNotMultipleOf6`).
    pub fn decode_one(buf: &[u8]) -> Result<(Frame, usize), FrameCodecError> {
        let (header, header_len) = decode_header(buf)?;

        let total = header_len + header.length as usize;
        let payload = buf
            .get(header_len..total)
            .ok_or(FrameCodecError::Truncated {
                needed: total,
                available: buf.len(),
            })?;

        let (decoded_payload, consumed) = match frame_type_entry_for_code(header.frame_type) {
            Some(entry) => (entry.decode)(header.flags, payload)?,
            None => {
                tracing::debug!(
                    frame_type = header.frame_type,
                    length = header.length,
                    "Preserving frame of unknown type as opaque bytes"
                );
                let raw = FramePayload::Unknown {
                    frame_type: header.frame_type,
                    raw: payload.to_vec(),
                };
                (raw, payload.len())
            }
        };

        if consumed != payload.len() {
            return Err(FrameCodecError::TrailingPayloadBytes {
                declared: payload.len(),
                consumed,
            });
        }

        tracing::trace!(
            frame_type = header.frame_type,
            flags = header.flags,
            stream_id = header.stream_id,
            length = header.length,
            "Decoded frame"
        );

        Ok((Frame::new(header.stream_id, header.flags, decoded_payload), total))
    }

    /// Lazily decodes every frame in `buf`, front to back.
    ///
    /// The sequence ends cleanly at the end of `buf`. A malformed or partial
    /// trailing frame yields one `Err` and ends the sequence; there is no
    /// attempt to resynchronize. Calling this again over the same buffer
    /// yields the same sequence.
    pub fn decode_all(buf: &[u8]) -> FrameIter<'_> {
        FrameIter {
            buf,
            offset: 0,
            is_done: false,
        }
    }

    /// Encodes `frame` into a new buffer.
    ///
    /// # Arguments
    ///
    /// * `frame` - The `Frame` to be encoded.
    ///
    /// # Returns
    ///
    /// Returns the header followed by the payload. Fails with `ValueOutOfRange`
    /// when a field does not fit its wire width (a payload of 2^24 bytes or
    /// more, a stream id above 31 bits, more than 255 bytes of padding).
    pub fn encode(frame: &Frame) -> Result<Vec<u8>, FrameCodecError> {
        let mut buf = Vec::with_capacity(frame.encoded_len());
        Self::encode_into(frame, &mut buf)?;
        Ok(buf)
    }

    /// Appends the encoding of `frame` to `dst`.
    ///
    /// The payload is written first behind a placeholder header, which is
    /// then back-patched with the real length. On error `dst` is restored
    /// to its original length.
    pub fn encode_into(frame: &Frame, dst: &mut Vec<u8>) -> Result<usize, FrameCodecError> {
        let start = dst.len();

        let result = Self::write_frame(frame, dst, start);
        if result.is_err() {
            dst.truncate(start);
        }

        result
    }

    fn write_frame(
        frame: &Frame,
        dst: &mut Vec<u8>,
        start: usize,
    ) -> Result<usize, FrameCodecError> {
        dst.extend_from_slice(&[0u8; FRAME_HEADER_SIZE]);

        frame.payload().encode_payload(dst)?;

        let payload_len = dst.len() - start - FRAME_HEADER_SIZE;
        let expected_len = frame.payload().encoded_len();
        if payload_len != expected_len {
            return Err(FrameCodecError::LengthMismatch {
                declared: expected_len,
                actual: payload_len,
            });
        }

        let length = u32::try_from(payload_len).map_err(|_| FrameCodecError::ValueOutOfRange {
            value: payload_len as u64,
            bits: 24,
        })?;

        let header = FrameHeader {
            length,
            frame_type: frame.frame_type_code(),
            flags: frame.wire_flags(),
            stream_id: frame.stream_id(),
        };

        dst[start..start + FRAME_HEADER_SIZE].copy_from_slice(&encode_header(&header)?);

        tracing::trace!(
            frame_type = header.frame_type,
            flags = header.flags,
            stream_id = header.stream_id,
            length = header.length,
            "Encoded frame"
        );

        Ok(FRAME_HEADER_SIZE + payload_len)
    }
}

/// Iterator returned by `FrameCodec::decode_all`.
#[derive(Debug, Clone)]
pub struct FrameIter<'a> {
    buf: &'a [u8],
    offset: usize,
    is_done: bool,
}

impl FrameIter<'_> {
    /// Bytes consumed by the frames yielded so far.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for FrameIter<'_> {
    type Item = Result<Frame, FrameCodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done || self.offset >= self.buf.len() {
            return None;
        }

        match FrameCodec::decode_one(&self.buf[self.offset..]) {
            Ok((frame, consumed)) => {
                self.offset += consumed;
                Some(Ok(frame))
            }
            Err(e) => {
                self.is_done = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for FrameIter<'_> {}
