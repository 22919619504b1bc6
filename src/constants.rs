// Frame header layout
pub const FRAME_LENGTH_FIELD_SIZE: usize = 3;
pub const FRAME_TYPE_OFFSET: usize = 3;
pub const FRAME_FLAGS_OFFSET: usize = 4;
pub const FRAME_STREAM_ID_OFFSET: usize = 5;
pub const FRAME_HEADER_SIZE: usize = 9;

/// Largest value the 24-bit length field can carry (2^24 - 1).
pub const MAX_FRAME_LENGTH: u32 = 0x00FF_FFFF;

/// Largest value a 31-bit field (stream id, increment) can carry.
pub const MAX_U31: u32 = 0x7FFF_FFFF;

/// HTTP/2's initial `SETTINGS_MAX_FRAME_SIZE`.
///
/// Used as the default limit of `FrameStreamDecoder`; the codec functions
/// themselves accept anything the 24-bit length field can express.
pub const DEFAULT_MAX_FRAME_LENGTH: u32 = 16_384;

/// Size of the 1-byte pad length prefix written when PADDED is set.
pub const PAD_LENGTH_FIELD_SIZE: usize = 1;

/// Size of the priority record: exclusive bit + 31-bit dependency, then weight.
pub const PRIORITY_FIELDS_SIZE: usize = 5;

/// Size of one `(u16 id, u32 value)` SETTINGS entry.
pub const SETTING_ENTRY_SIZE: usize = 6;

pub const RST_STREAM_PAYLOAD_SIZE: usize = 4;
pub const PING_PAYLOAD_SIZE: usize = 8;
pub const WINDOW_UPDATE_PAYLOAD_SIZE: usize = 4;

/// Fixed prefix of a GOAWAY payload (last stream id + error code).
pub const GOAWAY_FIXED_SIZE: usize = 8;

/// Fixed prefix of a PUSH_PROMISE payload (promised stream id).
pub const PUSH_PROMISE_FIXED_SIZE: usize = 4;
