use crate::codec::CodecError;
use crate::codec::bytes::{Cursor, Writer};

#[test]
fn cursor_reads_little_endian_fields() {
	let mut bytes = vec![7_u8];
	bytes.extend_from_slice(&0x0102_0304_u32.to_le_bytes());
	bytes.extend_from_slice(&9_u64.to_le_bytes());
	bytes.extend_from_slice(&10_u64.to_le_bytes());

	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_u8().expect("u8"), 7);
	assert_eq!(cursor.read_u32_le().expect("u32"), 0x0102_0304);
	assert_eq!(cursor.read_u64_run(2).expect("run"), vec![9, 10]);
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn cursor_reports_truncation_position() {
	let bytes = [1_u8, 2, 3];
	let mut cursor = Cursor::at(&bytes, 1).expect("offset in range");
	let err = cursor.read_u32_le().expect_err("too short");
	assert!(matches!(err, CodecError::Truncated { at: 1, need: 4, rem: 2 }));
	assert_eq!(cursor.pos(), 1, "failed reads do not advance");
}

#[test]
fn cursor_rejects_offset_past_end() {
	let bytes = [0_u8; 2];
	assert!(Cursor::at(&bytes, 2).is_ok());
	assert!(matches!(Cursor::at(&bytes, 3), Err(CodecError::OffsetOutOfRange { offset: 3, len: 2 })));
}

#[test]
fn writer_refuses_to_overrun_buffer() {
	let mut buf = [0_u8; 5];
	let mut writer = Writer::new(&mut buf, 0);
	writer.put_u8(0xAB).expect("fits");
	writer.put_u32_le(1).expect("fits");
	let err = writer.put_u8(0).expect_err("buffer full");
	assert!(matches!(err, CodecError::SizeMismatch { expected: 5, written: 6 }));
	assert_eq!(buf, [0xAB, 1, 0, 0, 0]);
}
