use crate::constants::FRAME_HEADER_SIZE;
use crate::frame::{Frame, FrameCodec, FrameCodecError, FrameDecoderConfig, decode_header};
use std::collections::VecDeque;

/// Incremental decoder for frames arriving in arbitrary chunks.
///
/// Bytes are appended with `read_bytes`; every frame that is complete after
/// the append is returned, and a trailing partial frame stays buffered
/// until more bytes arrive.
///
/// ### Behavior Summary:
/// - Frame lengths above `FrameDecoderConfig::max_frame_length` are rejected
///   from the header alone, before the payload is buffered.
/// - Any error is terminal. The buffer is discarded, and every later
///   `read_bytes` call yields that same error once. A bad length field
///   leaves no safe point to resynchronize from.
pub struct FrameStreamDecoder {
    config: FrameDecoderConfig,
    buffer: Vec<u8>,
    failure: Option<FrameCodecError>,
}

pub struct FrameDecoderIterator {
    queue: VecDeque<Result<Frame, FrameCodecError>>,
}

impl Iterator for FrameDecoderIterator {
    type Item = Result<Frame, FrameCodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front()
    }
}

impl Default for FrameStreamDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStreamDecoder {
    pub fn new() -> Self {
        Self::with_config(FrameDecoderConfig::default())
    }

    pub fn with_config(config: FrameDecoderConfig) -> Self {
        Self {
            config,
            buffer: Vec::new(),
            failure: None,
        }
    }

    pub fn config(&self) -> &FrameDecoderConfig {
        &self.config
    }

    /// Bytes received but not yet part of a complete frame.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    // Reads new bytes and attempts to decode them into frames
    pub fn read_bytes(&mut self, data: &[u8]) -> FrameDecoderIterator {
        let mut queue = VecDeque::new();

        if let Some(failure) = &self.failure {
            queue.push_back(Err(failure.clone()));
            return FrameDecoderIterator { queue };
        }

        self.buffer.extend_from_slice(data);

        let mut offset = 0;
        let mut failure = None;

        while self.buffer.len() - offset >= FRAME_HEADER_SIZE {
            let pending = &self.buffer[offset..];

            let header = match decode_header(pending) {
                Ok((header, _)) => header,
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            };

            if header.length > self.config.max_frame_length {
                failure = Some(FrameCodecError::FrameTooLarge {
                    length: header.length,
                    max: self.config.max_frame_length,
                });
                break;
            }

            // Wait for the rest of the payload
            if pending.len() < FRAME_HEADER_SIZE + header.length as usize {
                break;
            }

            match FrameCodec::decode_one(pending) {
                Ok((frame, consumed)) => {
                    offset += consumed;
                    queue.push_back(Ok(frame));
                }
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }

        match failure {
            Some(e) => {
                tracing::warn!(
                    error = %e,
                    discarded_bytes = self.buffer.len() - offset,
                    "Frame stream decoding failed; discarding buffered input"
                );
                self.buffer.clear();
                self.failure = Some(e.clone());
                queue.push_back(Err(e));
            }
            None => {
                self.buffer.drain(..offset);
            }
        }

        FrameDecoderIterator { queue }
    }
}
