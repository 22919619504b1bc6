pub mod error_code;
pub mod flags;

mod control_frame_payloads;
mod data_frame_payload;
mod frame_codec;
mod frame_decoder_config;
mod frame_error;
mod frame_header;
mod frame_padding;
mod frame_payload;
mod frame_stream_decoder;
mod frame_struct;
mod frame_type;
mod frame_type_registry;
mod header_block_frame_payloads;
mod headers_frame_payload;
mod priority_fields;

pub use control_frame_payloads::{
    GoAwayFramePayload, PingFramePayload, RstStreamFramePayload, Setting, SettingsFramePayload,
    WindowUpdateFramePayload,
};
pub use data_frame_payload::DataFramePayload;
pub use frame_codec::{FrameCodec, FrameIter};
pub use frame_decoder_config::FrameDecoderConfig;
pub use frame_error::FrameCodecError;
pub use frame_header::{FrameHeader, decode_header, encode_header};
pub use frame_padding::{padded_len, padding_flags, split_padding, write_padded};
pub use frame_payload::{FramePayload, FramePayloadCodec};
pub use frame_stream_decoder::{FrameDecoderIterator, FrameStreamDecoder};
pub use frame_struct::Frame;
pub use frame_type::FrameType;
pub use frame_type_registry::{
    FrameTypeEntry, PayloadDecodeFn, frame_type_entry, frame_type_entry_for_code,
};
pub use header_block_frame_payloads::{ContinuationFramePayload, PushPromiseFramePayload};
pub use headers_frame_payload::HeadersFramePayload;
pub use priority_fields::PriorityFields;
