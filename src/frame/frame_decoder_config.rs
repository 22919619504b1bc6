use crate::constants::{DEFAULT_MAX_FRAME_LENGTH, MAX_FRAME_LENGTH};

/// Limits applied by `FrameStreamDecoder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDecoderConfig {
    /// Largest payload length accepted, checked as soon as a header arrives.
    pub max_frame_length: u32,
}

impl FrameDecoderConfig {
    /// Sets `max_frame_length`, clamped to the range HTTP/2 allows
    /// (`16_384..=16_777_215`).
    pub fn with_max_frame_length(mut self, max_frame_length: u32) -> Self {
        self.max_frame_length = max_frame_length.clamp(DEFAULT_MAX_FRAME_LENGTH, MAX_FRAME_LENGTH);
        self
    }
}

impl Default for FrameDecoderConfig {
    fn default() -> Self {
        Self {
            max_frame_length: DEFAULT_MAX_FRAME_LENGTH,
        }
    }
}
