use crate::frame::{
    ContinuationFramePayload, DataFramePayload, FrameCodecError, FrameType, GoAwayFramePayload,
    HeadersFramePayload, PingFramePayload, PriorityFields, PushPromiseFramePayload,
    RstStreamFramePayload, SettingsFramePayload, WindowUpdateFramePayload,
};

/// Encoding and decoding of one frame type's payload region.
///
/// Implementors see only the payload bytes (never the 9-byte header) and
/// the flags byte. Length and derived flags are computed by the caller
/// from `encoded_len` and `derived_flags`.
pub trait FramePayloadCodec: Sized {
    const FRAME_TYPE: FrameType;

    /// Flag bits computed from the payload value rather than stored on the
    /// frame (e.g. PADDED).
    const OWNED_FLAGS: u8 = 0;

    /// Decodes a payload from `payload`, which is exactly the region the
    /// header declared. Returns the value and the number of bytes consumed.
    fn decode_payload(flags: u8, payload: &[u8]) -> Result<(Self, usize), FrameCodecError>;

    /// Appends the serialized payload to `dst`.
    fn encode_payload(&self, dst: &mut Vec<u8>) -> Result<(), FrameCodecError>;

    /// Size `encode_payload` will write.
    fn encoded_len(&self) -> usize;

    /// The subset of `OWNED_FLAGS` this value sets on the wire.
    fn derived_flags(&self) -> u8 {
        0
    }
}

/// The type-specific part of a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FramePayload {
    Data(DataFramePayload),
    Headers(HeadersFramePayload),
    Priority(PriorityFields),
    RstStream(RstStreamFramePayload),
    Settings(SettingsFramePayload),
    PushPromise(PushPromiseFramePayload),
    Ping(PingFramePayload),
    GoAway(GoAwayFramePayload),
    WindowUpdate(WindowUpdateFramePayload),
    Continuation(ContinuationFramePayload),

    /// A type code this codec does not interpret. The payload is kept
    /// verbatim and re-emitted unchanged on encode.
    ///
    /// `Frame::new` turns an `Unknown` carrying a known type code into the
    /// typed variant when `raw` parses completely. If it does not parse, the
    /// value stays `Unknown` and encodes to bytes that `decode_one` rejects.
    Unknown { frame_type: u8, raw: Vec<u8> },
}

macro_rules! impl_from_payload {
    ($($variant:ident => $payload:ty),+ $(,)?) => {
        $(
            impl From<$payload> for FramePayload {
                fn from(payload: $payload) -> Self {
                    FramePayload::$variant(payload)
                }
            }
        )+
    };
}

impl_from_payload! {
    Data => DataFramePayload,
    Headers => HeadersFramePayload,
    Priority => PriorityFields,
    RstStream => RstStreamFramePayload,
    Settings => SettingsFramePayload,
    PushPromise => PushPromiseFramePayload,
    Ping => PingFramePayload,
    GoAway => GoAwayFramePayload,
    WindowUpdate => WindowUpdateFramePayload,
    Continuation => ContinuationFramePayload,
}

/// Expands `$body` once per known variant with `$p` bound to the inner
/// payload and `$t` naming its type; `Unknown` is handled by `$unknown`.
macro_rules! dispatch_payload {
    ($self:expr, $p:ident: $t:ident => $body:expr, $unknown:pat => $unknown_body:expr) => {
        match $self {
            FramePayload::Data($p) => { type $t = DataFramePayload; $body }
            FramePayload::Headers($p) => { type $t = HeadersFramePayload; $body }
            FramePayload::Priority($p) => { type $t = PriorityFields; $body }
            FramePayload::RstStream($p) => { type $t = RstStreamFramePayload; $body }
            FramePayload::Settings($p) => { type $t = SettingsFramePayload; $body }
            FramePayload::PushPromise($p) => { type $t = PushPromiseFramePayload; $body }
            FramePayload::Ping($p) => { type $t = PingFramePayload; $body }
            FramePayload::GoAway($p) => { type $t = GoAwayFramePayload; $body }
            FramePayload::WindowUpdate($p) => { type $t = WindowUpdateFramePayload; $body }
            FramePayload::Continuation($p) => { type $t = ContinuationFramePayload; $body }
            $unknown => $unknown_body,
        }
    };
}

impl FramePayload {
    /// The type code written to the header for this payload.
    pub fn frame_type_code(&self) -> u8 {
        dispatch_payload!(self, _p: T => u8::from(T::FRAME_TYPE),
            FramePayload::Unknown { frame_type, .. } => *frame_type)
    }

    pub fn frame_type(&self) -> Option<FrameType> {
        FrameType::try_from(self.frame_type_code()).ok()
    }

    /// Flag bits this payload computes itself and that a `Frame` must not store.
    pub fn owned_flags(&self) -> u8 {
        dispatch_payload!(self, _p: T => T::OWNED_FLAGS,
            FramePayload::Unknown { .. } => 0)
    }

    pub fn derived_flags(&self) -> u8 {
        dispatch_payload!(self, p: T => <T as FramePayloadCodec>::derived_flags(p),
            FramePayload::Unknown { .. } => 0)
    }

    pub fn encoded_len(&self) -> usize {
        dispatch_payload!(self, p: T => <T as FramePayloadCodec>::encoded_len(p),
            FramePayload::Unknown { raw, .. } => raw.len())
    }

    pub fn encode_payload(&self, dst: &mut Vec<u8>) -> Result<(), FrameCodecError> {
        dispatch_payload!(self, p: T => <T as FramePayloadCodec>::encode_payload(p, dst),
            FramePayload::Unknown { raw, .. } => {
                dst.extend_from_slice(raw);
                Ok(())
            })
    }
}
