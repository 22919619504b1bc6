use crate::frame::{
    ContinuationFramePayload, DataFramePayload, FrameCodecError, FramePayload, FramePayloadCodec,
    FrameType, GoAwayFramePayload, HeadersFramePayload, PingFramePayload, PriorityFields,
    PushPromiseFramePayload, RstStreamFramePayload, SettingsFramePayload,
    WindowUpdateFramePayload,
};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub type PayloadDecodeFn = fn(u8, &[u8]) -> Result<(FramePayload, usize), FrameCodecError>;

/// How to decode one known frame type.
///
/// Encoding needs no table: a `FramePayload` variant already names its
/// codec, and `FramePayload::encode_payload` matches on it exhaustively.
#[derive(Debug, Clone, Copy)]
pub struct FrameTypeEntry {
    pub frame_type: FrameType,

    /// Flag bits the payload derives; cleared from decoded frames.
    pub owned_flags: u8,

    pub decode: PayloadDecodeFn,
}

/// Built on first use and never mutated afterwards, so it is shared freely
/// across threads.
static FRAME_TYPE_REGISTRY: Lazy<HashMap<FrameType, FrameTypeEntry>> = Lazy::new(|| {
    let mut registry = HashMap::with_capacity(FrameType::ALL.len());

    register::<DataFramePayload>(&mut registry);
    register::<HeadersFramePayload>(&mut registry);
    register::<PriorityFields>(&mut registry);
    register::<RstStreamFramePayload>(&mut registry);
    register::<SettingsFramePayload>(&mut registry);
    register::<PushPromiseFramePayload>(&mut registry);
    register::<PingFramePayload>(&mut registry);
    register::<GoAwayFramePayload>(&mut registry);
    register::<WindowUpdateFramePayload>(&mut registry);
    register::<ContinuationFramePayload>(&mut registry);

    registry
});

fn register<T>(registry: &mut HashMap<FrameType, FrameTypeEntry>)
where
    T: FramePayloadCodec + Into<FramePayload>,
{
    registry.insert(
        T::FRAME_TYPE,
        FrameTypeEntry {
            frame_type: T::FRAME_TYPE,
            owned_flags: T::OWNED_FLAGS,
            decode: decode_as::<T>,
        },
    );
}

fn decode_as<T>(flags: u8, payload: &[u8]) -> Result<(FramePayload, usize), FrameCodecError>
where
    T: FramePayloadCodec + Into<FramePayload>,
{
    let (decoded, consumed) = T::decode_payload(flags, payload)?;
    Ok((decoded.into(), consumed))
}

/// Looks up the codec for a known frame type.
pub fn frame_type_entry(frame_type: FrameType) -> Option<&'static FrameTypeEntry> {
    FRAME_TYPE_REGISTRY.get(&frame_type)
}

/// Looks up the codec for a raw type code; `None` means the frame is
/// carried as `FramePayload::Unknown`.
pub fn frame_type_entry_for_code(code: u8) -> Option<&'static FrameTypeEntry> {
    FrameType::try_from(code).ok().and_then(frame_type_entry)
}
