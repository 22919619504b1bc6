//! Flag bits of the header's flags byte.
//!
//! Meaning is type-dependent; bits sharing a value (`END_STREAM` and `ACK`)
//! are told apart by the frame type they appear on.

/// Last frame the sender will send on this stream (DATA, HEADERS).
pub const END_STREAM: u8 = 0x1;

/// Acknowledgement (SETTINGS, PING).
pub const ACK: u8 = 0x1;

/// The header block is complete (HEADERS, PUSH_PROMISE, CONTINUATION).
pub const END_HEADERS: u8 = 0x4;

/// A pad length byte and trailing filler surround the payload.
///
/// Derived from the payload's padding on encode; never stored on a `Frame`
/// whose payload owns it.
pub const PADDED: u8 = 0x8;

/// A priority record precedes the header block fragment (HEADERS).
///
/// Derived from `HeadersFramePayload::priority` on encode.
pub const PRIORITY: u8 = 0x20;
