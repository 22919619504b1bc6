use h2wire::frame::{
    ContinuationFramePayload, DataFramePayload, Frame, FrameCodec, FrameCodecError, FramePayload,
    FrameType, GoAwayFramePayload, HeadersFramePayload, PingFramePayload, PriorityFields,
    PushPromiseFramePayload, RstStreamFramePayload, Setting, SettingsFramePayload,
    WindowUpdateFramePayload, decode_header, error_code, flags, frame_type_entry,
    frame_type_entry_for_code,
};

fn assert_round_trip(frame: &Frame) -> Vec<u8> {
    let bytes = FrameCodec::encode(frame).expect("encode failed");
    let (decoded, consumed) = FrameCodec::decode_one(&bytes).expect("decode failed");

    assert_eq!(&decoded, frame);
    assert_eq!(consumed, bytes.len());
    assert_eq!(frame.encoded_len(), bytes.len());

    bytes
}

#[test]
fn data_frame_encodes_to_expected_bytes() {
    let frame = Frame::new(1, flags::END_STREAM, DataFramePayload::new(b"hi".to_vec()));

    let bytes = assert_round_trip(&frame);
    assert_eq!(
        bytes,
        [0x00, 0x00, 0x02, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x68, 0x69]
    );
}

#[test]
fn padded_data_frame_derives_flag_and_pad_length() {
    let frame = Frame::new(
        1,
        flags::END_STREAM,
        DataFramePayload::new(b"hi".to_vec()).with_padding(vec![0x00, 0x00]),
    );

    assert_eq!(frame.wire_flags(), flags::END_STREAM | flags::PADDED);

    let bytes = assert_round_trip(&frame);
    assert_eq!(
        bytes,
        [
            0x00, 0x00, 0x05, 0x00, 0x09, 0x00, 0x00, 0x00, 0x01, 0x02, 0x68, 0x69, 0x00, 0x00
        ]
    );
}

#[test]
fn headers_frame_strips_padding_before_priority() {
    let bytes = [
        0x00, 0x00, 0x0A, // length = 1 + 5 + 3 + 1
        0x01, // HEADERS
        0x2C, // PRIORITY | PADDED | END_HEADERS
        0x00, 0x00, 0x00, 0x03, // stream 3
        0x01, // pad length
        0x80, 0x00, 0x00, 0x01, // exclusive, depends on stream 1
        0x0F, // weight
        b'a', b'b', b'c', // header block fragment
        0xFF, // filler
    ];

    let (frame, consumed) = FrameCodec::decode_one(&bytes).expect("decode failed");
    assert_eq!(consumed, bytes.len());
    assert_eq!(frame.stream_id(), 3);
    assert_eq!(frame.flags(), flags::END_HEADERS);
    assert_eq!(frame.wire_flags(), 0x2C);

    let FramePayload::Headers(headers) = frame.payload() else {
        panic!("expected HEADERS payload, got {:?}", frame.payload());
    };
    assert_eq!(headers.padding, Some(vec![0xFF]));
    assert_eq!(
        headers.priority,
        Some(PriorityFields {
            exclusive: true,
            stream_dependency: 1,
            weight: 0x0F,
        })
    );
    assert_eq!(headers.header_block_fragment, b"abc");

    assert_eq!(FrameCodec::encode(&frame).expect("encode failed"), bytes);
}

#[test]
fn headers_frame_without_optional_parts() {
    let frame = Frame::new(
        5,
        flags::END_STREAM | flags::END_HEADERS,
        HeadersFramePayload::new(b"\x82\x86".to_vec()),
    );

    let bytes = assert_round_trip(&frame);
    assert_eq!(bytes[4], flags::END_STREAM | flags::END_HEADERS);
    assert_eq!(&bytes[9..], b"\x82\x86");
}

#[test]
fn headers_priority_needs_five_bytes_inside_the_padding() {
    // Padded with 2 filler bytes, leaving only 4 bytes where 5 are needed.
    let bytes = [
        0x00, 0x00, 0x07, 0x01, 0x28, 0x00, 0x00, 0x00, 0x01, 0x02, 0x00, 0x00, 0x00, 0x01, 0x00,
        0x00,
    ];

    assert!(matches!(
        FrameCodec::decode_one(&bytes),
        Err(FrameCodecError::Truncated { .. })
    ));
}

#[test]
fn settings_length_must_be_a_multiple_of_six() {
    let bytes = [
        0x00, 0x00, 0x05, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x10,
    ];

    assert_eq!(
        FrameCodec::decode_one(&bytes),
        Err(FrameCodecError::SettingsLengthNotMultipleOf6 { length: 5 })
    );
}

#[test]
fn settings_frame_round_trips_known_and_unknown_ids() {
    let frame = Frame::new(
        0,
        0,
        SettingsFramePayload {
            settings: vec![
                Setting::new(Setting::HEADER_TABLE_SIZE, 4096),
                Setting::new(Setting::INITIAL_WINDOW_SIZE, 65_535),
                Setting::new(0xF00D, 7),
            ],
        },
    );

    let bytes = assert_round_trip(&frame);
    assert_eq!(bytes.len(), 9 + 18);
    assert_eq!(&bytes[9..15], &[0x00, 0x01, 0x00, 0x00, 0x10, 0x00]);
}

#[test]
fn settings_ack_is_empty() {
    let frame = Frame::new(0, flags::ACK, SettingsFramePayload::default());

    let bytes = assert_round_trip(&frame);
    assert_eq!(bytes, [0x00, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn control_frames_round_trip() {
    let frames = [
        Frame::new(
            3,
            0,
            PriorityFields {
                exclusive: false,
                stream_dependency: 0x7FFF_FFFF,
                weight: 255,
            },
        ),
        Frame::new(
            3,
            0,
            RstStreamFramePayload {
                error_code: error_code::CANCEL,
            },
        ),
        Frame::new(
            0,
            flags::ACK,
            PingFramePayload {
                opaque_data: *b"pingpong",
            },
        ),
        Frame::new(
            0,
            0,
            GoAwayFramePayload {
                last_stream_id: 41,
                error_code: error_code::ENHANCE_YOUR_CALM,
                debug_data: b"slow down".to_vec(),
            },
        ),
        Frame::new(
            0,
            0,
            WindowUpdateFramePayload {
                window_size_increment: 1 << 20,
            },
        ),
        Frame::new(
            2,
            flags::END_HEADERS,
            PushPromiseFramePayload {
                promised_stream_id: 4,
                header_block_fragment: b"\x88".to_vec(),
            },
        ),
        Frame::new(
            2,
            flags::END_HEADERS,
            ContinuationFramePayload {
                header_block_fragment: b"more headers".to_vec(),
            },
        ),
    ];

    let expected_types = [
        FrameType::Priority,
        FrameType::RstStream,
        FrameType::Ping,
        FrameType::GoAway,
        FrameType::WindowUpdate,
        FrameType::PushPromise,
        FrameType::Continuation,
    ];

    for (frame, expected_type) in frames.iter().zip(expected_types) {
        let bytes = assert_round_trip(frame);
        assert_eq!(frame.frame_type(), Some(expected_type));
        assert_eq!(bytes[3], u8::from(expected_type));
    }
}

#[test]
fn fixed_size_payloads_reject_wrong_lengths() {
    // PING with 7 bytes
    let mut short_ping = vec![0x00, 0x00, 0x07, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00];
    short_ping.extend_from_slice(&[0; 7]);
    assert_eq!(
        FrameCodec::decode_one(&short_ping),
        Err(FrameCodecError::Truncated {
            needed: 8,
            available: 7
        })
    );

    // PING with 9 bytes
    let mut long_ping = vec![0x00, 0x00, 0x09, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00];
    long_ping.extend_from_slice(&[0; 9]);
    assert_eq!(
        FrameCodec::decode_one(&long_ping),
        Err(FrameCodecError::TrailingPayloadBytes {
            declared: 9,
            consumed: 8
        })
    );

    // WINDOW_UPDATE with 5 bytes
    let window_update = [
        0x00, 0x00, 0x05, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00,
    ];
    assert_eq!(
        FrameCodec::decode_one(&window_update),
        Err(FrameCodecError::TrailingPayloadBytes {
            declared: 5,
            consumed: 4
        })
    );

    // GOAWAY shorter than its fixed part
    let goaway = [
        0x00, 0x00, 0x04, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
    ];
    assert!(matches!(
        FrameCodec::decode_one(&goaway),
        Err(FrameCodecError::Truncated { .. })
    ));
}

#[test]
fn reserved_bits_inside_payloads_are_ignored() {
    let bytes = [
        0x00, 0x00, 0x04, 0x08, 0x00, 0x80, 0x00, 0x00, 0x01, 0x80, 0x00, 0x01, 0x00,
    ];

    let (frame, _) = FrameCodec::decode_one(&bytes).expect("decode failed");
    assert_eq!(frame.stream_id(), 1);
    assert_eq!(
        frame.payload(),
        &FramePayload::WindowUpdate(WindowUpdateFramePayload {
            window_size_increment: 0x100,
        })
    );

    let reencoded = FrameCodec::encode(&frame).expect("encode failed");
    assert_eq!(reencoded[5], 0x00);
    assert_eq!(reencoded[9], 0x00);
}

#[test]
fn unknown_frame_types_are_preserved() {
    let frame = Frame::new(
        9,
        0xA5,
        FramePayload::Unknown {
            frame_type: 0xFF,
            raw: b"opaque extension".to_vec(),
        },
    );

    let bytes = assert_round_trip(&frame);
    assert_eq!(bytes[3], 0xFF);
    assert_eq!(bytes[4], 0xA5);
    assert_eq!(frame.frame_type(), None);
    assert_eq!(frame.frame_type_code(), 0xFF);
}

#[test]
fn frame_new_clears_flags_the_payload_derives() {
    let data = Frame::new(
        1,
        flags::END_STREAM | flags::PADDED,
        DataFramePayload::new(b"x".to_vec()),
    );
    assert_eq!(data.flags(), flags::END_STREAM);
    assert_eq!(data.wire_flags(), flags::END_STREAM);

    let headers = Frame::new(
        1,
        flags::PADDED | flags::PRIORITY | flags::END_HEADERS,
        HeadersFramePayload::new(Vec::new()),
    );
    assert_eq!(headers.flags(), flags::END_HEADERS);

    // PUSH_PROMISE keeps PADDED as a raw flag bit.
    let push = Frame::new(1, flags::PADDED, PushPromiseFramePayload::default());
    assert_eq!(push.flags(), flags::PADDED);
    assert_round_trip(&push);
}

#[test]
fn padded_flag_is_never_stored_without_padding() {
    let frame = Frame::new(1, flags::PADDED, DataFramePayload::new(b"hi".to_vec()));
    assert_eq!(frame.flags(), 0);
    assert!(!frame.has_flag(flags::PADDED));

    let bytes = assert_round_trip(&frame);
    assert_eq!(bytes[4], 0x00);
    assert_eq!(bytes.len(), 9 + 2);

    let padded = Frame::new(
        1,
        0,
        DataFramePayload::new(b"hi".to_vec()).with_padding(vec![0; 3]),
    );
    assert_eq!(padded.flags(), 0);
    assert!(padded.has_flag(flags::PADDED));
    assert_round_trip(&padded);
}

#[test]
fn unknown_payload_with_known_type_code_is_decoded_on_construction() {
    let frame = Frame::new(
        7,
        flags::END_STREAM | flags::PADDED,
        FramePayload::Unknown {
            frame_type: 0x0,
            raw: vec![0x01, b'h', b'i', 0x00],
        },
    );

    assert_eq!(frame.frame_type(), Some(FrameType::Data));
    assert_eq!(frame.flags(), flags::END_STREAM);
    assert_eq!(
        frame.payload(),
        &FramePayload::Data(DataFramePayload::new(b"hi".to_vec()).with_padding(vec![0x00]))
    );

    let bytes = assert_round_trip(&frame);
    assert_eq!(bytes[3], 0x0);
    assert_eq!(bytes[4], flags::END_STREAM | flags::PADDED);
}

#[test]
fn unknown_payload_with_unparseable_known_type_code_stays_opaque() {
    let raw = vec![0x00, 0x01, 0x02];
    let frame = Frame::new(
        0,
        0,
        FramePayload::Unknown {
            frame_type: u8::from(FrameType::Settings),
            raw: raw.clone(),
        },
    );

    assert_eq!(
        frame.payload(),
        &FramePayload::Unknown {
            frame_type: 0x4,
            raw,
        }
    );

    let bytes = FrameCodec::encode(&frame).expect("encode failed");
    assert_eq!(
        FrameCodec::decode_one(&bytes),
        Err(FrameCodecError::SettingsLengthNotMultipleOf6 { length: 3 })
    );
}

#[test]
fn decode_reports_consumed_bytes_and_leaves_the_rest() {
    let first = FrameCodec::encode(&Frame::new(1, 0, DataFramePayload::new(b"one".to_vec())))
        .expect("encode failed");
    let second = FrameCodec::encode(&Frame::new(3, 0, DataFramePayload::new(b"two".to_vec())))
        .expect("encode failed");

    let mut buf = first.clone();
    buf.extend_from_slice(&second);

    let (frame, consumed) = FrameCodec::decode_one(&buf).expect("decode failed");
    assert_eq!(consumed, first.len());
    assert_eq!(frame.stream_id(), 1);

    let (frame, _) = FrameCodec::decode_one(&buf[consumed..]).expect("decode failed");
    assert_eq!(frame.stream_id(), 3);
}

#[test]
fn missing_payload_bytes_are_truncated() {
    let bytes = [0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, b'a', b'b'];

    assert_eq!(
        FrameCodec::decode_one(&bytes),
        Err(FrameCodecError::Truncated {
            needed: 13,
            available: 11
        })
    );
}

#[test]
fn encoding_rejects_out_of_range_values_and_leaves_buffer_intact() {
    let mut dst = b"prefix".to_vec();

    let bad_stream = Frame::new(0x8000_0000, 0, DataFramePayload::new(b"x".to_vec()));
    assert_eq!(
        FrameCodec::encode_into(&bad_stream, &mut dst),
        Err(FrameCodecError::ValueOutOfRange {
            value: 0x8000_0000,
            bits: 31
        })
    );
    assert_eq!(dst, b"prefix");

    let bad_padding = Frame::new(
        1,
        0,
        DataFramePayload::new(b"x".to_vec()).with_padding(vec![0; 300]),
    );
    assert!(matches!(
        FrameCodec::encode_into(&bad_padding, &mut dst),
        Err(FrameCodecError::ValueOutOfRange { bits: 8, .. })
    ));
    assert_eq!(dst, b"prefix");

    let bad_increment = Frame::new(
        0,
        0,
        WindowUpdateFramePayload {
            window_size_increment: u32::MAX,
        },
    );
    assert!(matches!(
        FrameCodec::encode(&bad_increment),
        Err(FrameCodecError::ValueOutOfRange { bits: 31, .. })
    ));
}

#[test]
fn payload_longer_than_24_bits_cannot_be_encoded() {
    let frame = Frame::new(1, 0, DataFramePayload::new(vec![0u8; 1 << 24]));

    assert_eq!(
        FrameCodec::encode(&frame),
        Err(FrameCodecError::ValueOutOfRange {
            value: 1 << 24,
            bits: 24
        })
    );
}

#[test]
fn encode_into_appends_after_existing_bytes() {
    let frame = Frame::new(7, 0, DataFramePayload::new(b"abc".to_vec()));
    let mut dst = vec![0xAA, 0xBB];

    let written = FrameCodec::encode_into(&frame, &mut dst).expect("encode failed");
    assert_eq!(written, 12);
    assert_eq!(&dst[..2], &[0xAA, 0xBB]);

    let (header, _) = decode_header(&dst[2..]).expect("decode header failed");
    assert_eq!(header.length, 3);
    assert_eq!(header.stream_id, 7);
}

#[test]
fn registry_covers_every_known_frame_type() {
    for frame_type in FrameType::ALL {
        let entry = frame_type_entry(frame_type).expect("missing registry entry");
        assert_eq!(entry.frame_type, frame_type);
        assert_eq!(
            frame_type_entry_for_code(u8::from(frame_type)).map(|e| e.frame_type),
            Some(frame_type)
        );
    }

    assert_eq!(
        frame_type_entry(FrameType::Headers).map(|e| e.owned_flags),
        Some(flags::PADDED | flags::PRIORITY)
    );
    assert!(frame_type_entry_for_code(0x0A).is_none());
    assert!(frame_type_entry_for_code(0xFF).is_none());
}
