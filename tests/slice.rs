use robot_state::{
    Point, RobotState,
    avec::{DecodeError, decode_slice},
    sans::field::{Field, TextCause},
};

/// Parse whitespace-separated hex octets.
fn hex(s: &str) -> Vec<u8> {
    let s: String = s.split_whitespace().collect();
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

/// Version, id, position and activity flag.
fn head(version: i32, is_active: u8) -> Vec<u8> {
    let mut b = Vec::new();
    b.extend(version.to_le_bytes());
    b.extend(7i32.to_le_bytes());
    b.extend(0.25f64.to_le_bytes());
    b.extend((-8.0f64).to_le_bytes());
    b.push(is_active);
    b
}

fn push_utf16(b: &mut Vec<u8>, s: &str) {
    let units: Vec<u16> = s.encode_utf16().collect();
    b.extend((units.len() as i32).to_le_bytes());
    units.iter().for_each(|u| b.extend(u.to_le_bytes()));
}

fn push_utf8(b: &mut Vec<u8>, s: &[u8]) {
    b.extend((s.len() as i32).to_le_bytes());
    b.extend(s);
}

/// A snapshot touching every variable-length section.
fn full() -> Vec<u8> {
    let mut b = head(1, 1);
    b.push(1);
    push_utf16(&mut b, "Róbot 🤖");
    b.extend(3i32.to_le_bytes());
    for c in [1.0f64, -2.5, 1e300] {
        b.extend(c.to_le_bytes());
    }
    b.extend(3i32.to_le_bytes());
    b.push(1);
    push_utf8(&mut b, b"a");
    b.push(0);
    b.push(1);
    push_utf8(&mut b, "bb→".as_bytes());
    b.extend(5i32.to_le_bytes());
    b.extend((-6i32).to_le_bytes());
    b
}

/// Empty name, coordinates and log, then the point.
fn minimal_tail(b: &mut Vec<u8>) {
    b.extend(hex("00000000 00000000 05000000 FAFFFFFF"));
}

#[test]
fn decode_concrete_scenario() {
    let data = hex(
        "01000000 2A000000 000000000000F83F 00000000000004C0 00 00 \
         00000000 00000000 05000000 FAFFFFFF",
    );

    let state = decode_slice(&data).unwrap();

    assert_eq!(
        state,
        RobotState {
            protocol_version: 1,
            id: 42,
            position_x: 1.5,
            position_y: -2.5,
            is_active: false,
            name: None,
            coordinates: vec![],
            command_log: vec![],
            point: Point { x: 5, y: -6 },
        }
    );
}

#[test]
fn decode_full() {
    let state = decode_slice(&full()).unwrap();

    assert_eq!(state.id, 7);
    assert_eq!(state.position_x, 0.25);
    assert_eq!(state.position_y, -8.0);
    assert!(state.is_active);
    assert_eq!(state.name.as_deref(), Some("Róbot 🤖"));
    assert_eq!(state.coordinates, [1.0, -2.5, 1e300]);
    assert_eq!(state.point, Point { x: 5, y: -6 });
}

#[test]
fn command_log_keeps_order_and_absent_entries() {
    let state = decode_slice(&full()).unwrap();

    assert_eq!(
        state.command_log,
        [Some("a".to_string()), None, Some("bb→".to_string())]
    );
}

#[test]
fn version_gate_ignores_remaining_content() {
    for version in [0, 2, -1, i32::MAX] {
        let only_version = version.to_le_bytes();
        assert_eq!(
            decode_slice(&only_version),
            Err(DecodeError::UnsupportedVersion { got: version })
        );

        let mut data = full();
        data[..4].copy_from_slice(&version.to_le_bytes());
        assert_eq!(
            decode_slice(&data),
            Err(DecodeError::UnsupportedVersion { got: version })
        );
    }
}

#[test]
fn truncation_at_every_boundary() {
    let data = full();

    for len in 0..data.len() {
        match decode_slice(&data[..len]) {
            Err(DecodeError::BufferTooShort { needed, available }) => {
                assert_eq!(available, len);
                assert!(needed > len, "needed {needed} at length {len}");
            }
            other => panic!("length {len} decoded to {other:?}"),
        }
    }

    assert!(decode_slice(&data).is_ok());
}

#[test]
fn truncated_point_reports_both_coordinates() {
    let mut data = head(1, 0);
    data.extend(hex("00 00000000 00000000 05000000"));

    assert_eq!(
        decode_slice(&data),
        Err(DecodeError::BufferTooShort {
            needed: data.len() + 4,
            available: data.len(),
        })
    );
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut data = full();
    let expected = decode_slice(&data).unwrap();
    data.extend([0xAB; 16]);

    assert_eq!(decode_slice(&data).unwrap(), expected);
}

#[test]
fn absent_name_consumes_no_length() {
    let mut data = head(1, 0);
    data.push(0);
    minimal_tail(&mut data);

    let state = decode_slice(&data).unwrap();
    assert_eq!(state.name, None);
    assert_eq!(state.point, Point { x: 5, y: -6 });
}

#[test]
fn empty_name_is_present() {
    let mut data = head(1, 0);
    data.push(1);
    push_utf16(&mut data, "");
    minimal_tail(&mut data);

    assert_eq!(decode_slice(&data).unwrap().name.as_deref(), Some(""));
}

#[test]
fn only_one_marks_active() {
    for (byte, expected) in [(0, false), (1, true), (2, false), (0xFF, false)] {
        let mut data = head(1, byte);
        data.push(0);
        minimal_tail(&mut data);

        assert_eq!(decode_slice(&data).unwrap().is_active, expected);
    }
}

#[test]
fn any_nonzero_byte_marks_presence() {
    let mut data = head(1, 0);
    data.push(0x7F);
    push_utf16(&mut data, "r2");
    data.extend(0i32.to_le_bytes());
    data.extend(1i32.to_le_bytes());
    data.push(2);
    push_utf8(&mut data, b"go");
    data.extend([0; 8]);

    let state = decode_slice(&data).unwrap();
    assert_eq!(state.name.as_deref(), Some("r2"));
    assert_eq!(state.command_log, [Some("go".to_string())]);
}

#[test]
fn unpaired_surrogate_in_name() {
    let mut data = head(1, 0);
    data.push(1);
    data.extend(1i32.to_le_bytes());
    data.extend(0xD800u16.to_le_bytes());
    minimal_tail(&mut data);

    assert!(matches!(
        decode_slice(&data),
        Err(DecodeError::MalformedText {
            field: Field::Name,
            cause: TextCause::Utf16(_),
        })
    ));
}

#[test]
fn invalid_utf8_in_command() {
    let mut data = head(1, 0);
    data.push(0);
    data.extend(0i32.to_le_bytes());
    data.extend(2i32.to_le_bytes());
    data.push(1);
    push_utf8(&mut data, b"ok");
    data.push(1);
    push_utf8(&mut data, &[0xC3, 0x28]);
    data.extend([0; 8]);

    let err = decode_slice(&data).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MalformedText {
            field: Field::Command(1),
            cause: TextCause::Utf8(_),
        }
    ));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn negative_text_lengths_are_rejected() {
    let mut data = head(1, 0);
    data.push(1);
    data.extend((-2i32).to_le_bytes());
    assert_eq!(
        decode_slice(&data),
        Err(DecodeError::NegativeLength {
            field: Field::Name,
            length: -2,
        })
    );

    let mut data = head(1, 0);
    data.push(0);
    data.extend(0i32.to_le_bytes());
    data.extend(1i32.to_le_bytes());
    data.push(1);
    data.extend(i32::MIN.to_le_bytes());
    assert_eq!(
        decode_slice(&data),
        Err(DecodeError::NegativeLength {
            field: Field::Command(0),
            length: i32::MIN,
        })
    );
}

#[test]
fn negative_counts_read_as_empty() {
    let data = hex(
        "01000000 2A000000 000000000000F83F 00000000000004C0 00 00 \
         FFFFFFFF 00000080 05000000 FAFFFFFF",
    );

    let state = decode_slice(&data).unwrap();
    assert!(state.coordinates.is_empty());
    assert!(state.command_log.is_empty());
    assert_eq!(state.point, Point { x: 5, y: -6 });
}

#[test]
fn fixed_fields_report_their_own_size() {
    let data = full();

    // Cut inside the id, position_x, position_y and activity flag.
    for (len, needed) in [(6, 8), (8, 16), (15, 16), (16, 24), (20, 24), (24, 25)] {
        assert_eq!(
            decode_slice(&data[..len]),
            Err(DecodeError::BufferTooShort {
                needed,
                available: len,
            })
        );
    }
}

#[test]
fn oversized_count_fails_without_reading_past_end() {
    let mut data = head(1, 0);
    data.push(0);
    data.extend(i32::MAX.to_le_bytes());
    data.extend(1.0f64.to_le_bytes());

    assert_eq!(
        decode_slice(&data),
        Err(DecodeError::BufferTooShort {
            needed: data.len() + 8,
            available: data.len(),
        })
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        DecodeError::UnsupportedVersion { got: 3 }.to_string(),
        "Unsupported protocol version (3)."
    );
    assert_eq!(
        DecodeError::BufferTooShort {
            needed: 12,
            available: 10,
        }
        .to_string(),
        "Buffer too short: needed 12 bytes, found 10."
    );
    assert_eq!(
        DecodeError::NegativeLength {
            field: Field::Command(4),
            length: -1,
        }
        .to_string(),
        "Negative length (-1) for command 4."
    );
}
