use std::fmt;

/// Every way encoding or decoding a frame can fail.
///
/// Input is untrusted network data, so nothing in this crate panics on
/// malformed bytes; each failure is reported through this type and the
/// whole frame is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameCodecError {
    /// Fewer bytes were available than a field or the declared length requires.
    Truncated { needed: usize, available: usize },

    /// An integer does not fit the width of the wire field it is written to.
    ValueOutOfRange { value: u64, bits: u32 },

    /// The declared pad length leaves no room for the inner payload.
    PaddingOverflow { pad_length: u8, length: usize },

    /// A SETTINGS payload is not a whole number of 6-byte entries.
    SettingsLengthNotMultipleOf6 { length: usize },

    /// A payload decoder stopped short of the length the header declared.
    TrailingPayloadBytes { declared: usize, consumed: usize },

    /// An encoded payload disagrees with the length recorded for it.
    ///
    /// Not reachable through `encode`; exposed so tests can assert as much.
    LengthMismatch { declared: usize, actual: usize },

    /// The declared length exceeds the limit configured on a `FrameStreamDecoder`.
    FrameTooLarge { length: u32, max: u32 },
}

impl fmt::Display for FrameCodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameCodecError::Truncated { needed, available } => write!(
                f,
                "Truncated input: needed {} bytes, {} available",
                needed, available
            ),
            FrameCodecError::ValueOutOfRange { value, bits } => {
                write!(f, "Value {} does not fit in {} bits", value, bits)
            }
            FrameCodecError::PaddingOverflow { pad_length, length } => write!(
                f,
                "Pad length {} overflows payload of {} bytes",
                pad_length, length
            ),
            FrameCodecError::SettingsLengthNotMultipleOf6 { length } => write!(
                f,
                "SETTINGS payload length {} is not a multiple of 6",
                length
            ),
            FrameCodecError::TrailingPayloadBytes { declared, consumed } => write!(
                f,
                "Payload declared {} bytes but only {} were consumed",
                declared, consumed
            ),
            FrameCodecError::LengthMismatch { declared, actual } => write!(
                f,
                "Declared length {} does not match encoded length {}",
                declared, actual
            ),
            FrameCodecError::FrameTooLarge { length, max } => {
                write!(f, "Frame length {} exceeds maximum of {}", length, max)
            }
        }
    }
}

impl std::error::Error for FrameCodecError {}
