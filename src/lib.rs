//! Binary codec for HTTP/2-style frames.
//!
//! Every frame is a fixed 9-byte header (24-bit length, type, flags, and a
//! reserved bit packed with a 31-bit stream id) followed by a payload whose
//! layout depends on the type and its flags. `frame::FrameCodec` turns
//! bytes into typed `frame::Frame` values and back; `frame::FrameStreamDecoder`
//! does the same for bytes arriving in arbitrary chunks.
//!
//! Connection state, header compression and transport are left to the
//! caller.

pub mod constants;
pub mod frame;
pub mod utils;
