#![allow(missing_docs)]

use growbuf::ByteBuffer;
use insta::assert_snapshot;

fn sample() -> ByteBuffer {
    let mut buf = ByteBuffer::new();
    for byte in b"growable buffer: power-of-two capacity" {
        buf.push_back(*byte).unwrap();
    }
    buf.push_back(0).unwrap();
    buf.push_back(0xFF).unwrap();
    buf
}

#[test]
fn snapshot_hex_dump() {
    assert_snapshot!(sample().hex_dump(), @r"
    67 72 6F 77 61 62 6C 65 20 62 75 66 66 65 72 3A
    20 70 6F 77 65 72 2D 6F 66 2D 74 77 6F 20 63 61
    70 61 63 69 74 79 00 FF
    ");
}

#[test]
fn snapshot_text_view() {
    assert_snapshot!(sample().text(), @"growable buffer: power-of-two capacity");
}

#[test]
fn snapshot_debug() {
    let buf = ByteBuffer::from_slice(b"@AB").unwrap();
    assert_snapshot!(format!("{buf:?}"), @r#"ByteBuffer { len: 3, cap: 4, data: "@AB" }"#);
}

#[test]
fn snapshot_error_messages() {
    let mut buf = ByteBuffer::from_slice(b"abc").unwrap();
    let rendered = [
        buf.insert(9, 0).unwrap_err().to_string(),
        ByteBuffer::new().compare(&buf).unwrap_err().to_string(),
        ByteBuffer::from_slice(&[]).unwrap_err().to_string(),
    ]
    .join("\n");
    assert_snapshot!(rendered, @r"
    index 9 out of range for buffer of length 3
    buffer has no allocated storage
    input is empty
    ");
}
