use crate::codec::test_support::{Blob, sample_registry};
use crate::codec::{
	CodecError, CodecOptions, Collection, ElementKind, HostRef, NoObjects, NumericArray, ObjectModel, Record, Result, Shape, SparseMatrix, Strategy,
	Value, encode, encode_into, size_of,
};

fn bytes(value: &Value) -> Vec<u8> {
	encode(value, &NoObjects, &CodecOptions::default()).expect("encode")
}

#[test]
fn double_scalar_layout() {
	let mut expected = vec![0x23, 1, 0, 0, 0];
	expected.extend_from_slice(&3.5_f64.to_le_bytes());
	assert_eq!(bytes(&Value::from(3.5)), expected);
}

#[test]
fn empty_logical_is_a_single_tag() {
	assert_eq!(bytes(&Value::Numeric(NumericArray::empty(ElementKind::Logical))), vec![0x00]);
}

#[test]
fn general_tier_writes_every_extent() {
	let matrix = NumericArray::from_slice(Shape::from([2, 1, 2]), &[1_u8, 2, 3, 4]).expect("matrix");
	assert_eq!(bytes(&matrix.into()), vec![0x46, 3, 2, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 1, 2, 3, 4]);
}

#[test]
fn complex_planes_are_written_back_to_back() {
	let array = NumericArray::from_complex(Shape::row(2), &[1_i8, 2], &[-1, -2]).expect("complex");
	assert_eq!(bytes(&array.into()), vec![0x20 | 15, 2, 0, 0, 0, 1, 2, 0xFF, 0xFE]);
}

#[test]
fn record_layout_lists_lengths_then_names_then_values() {
	let record = Record::scalar(vec![("a", Value::from(1.0)), ("bc", Value::from(true))]).expect("record");
	let out = bytes(&record.into());

	let mut expected = vec![0x20 | 24, 1, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, b'a', b'b', b'c'];
	expected.extend_from_slice(&[0x40 | 23, 2, 2, 0, 0, 0, 1, 0, 0, 0]);
	expected.extend_from_slice(&[0x23, 1, 0, 0, 0]);
	expected.extend_from_slice(&1.0_f64.to_le_bytes());
	expected.extend_from_slice(&[0x20, 1, 0, 0, 0, 1]);
	assert_eq!(out, expected);
}

#[test]
fn absent_slots_encode_as_canonical_empty() {
	let mut items = Collection::with_shape(Shape::row(2)).expect("collection");
	items.set(1, Value::from("x")).expect("set");
	assert_eq!(bytes(&items.into()), vec![0x20 | 23, 2, 0, 0, 0, 0x03, 0x20 | 1, 1, 0, 0, 0, b'x']);
}

#[test]
fn sparse_writes_row_indices_then_column_assignment() {
	let matrix = SparseMatrix::from_triplets(2, 2, &[(1, 1, 4.0)]).expect("sparse");
	let out = bytes(&matrix.into());

	let mut expected = vec![0x40 | 30, 2, 2, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0];
	expected.extend_from_slice(&1_u64.to_le_bytes());
	expected.extend_from_slice(&1_u64.to_le_bytes());
	expected.extend_from_slice(&4.0_f64.to_le_bytes());
	assert_eq!(out, expected);
}

#[test]
fn self_serializing_object_layout() {
	let registry = sample_registry();
	let value = Value::Object(HostRef::new(Blob(vec![0xAA, 0xBB])));
	let out = encode(&value, &registry, &CodecOptions::default()).expect("encode");

	let mut expected = vec![26, 0x20 | 1, 4, 0, 0, 0];
	expected.extend_from_slice(b"Blob");
	expected.extend_from_slice(&[Strategy::SelfSerializing.code(), 2, 0xAA, 0xBB]);
	assert_eq!(out, expected);
}

#[test]
fn encode_into_appends_at_cursor() {
	let value = Value::from(1.0);
	let options = CodecOptions::default();
	let size = size_of(&value, &NoObjects, &options).expect("size") as usize;

	let mut buf = vec![0_u8; 3 + 2 * size];
	let mut pos = 3;
	encode_into(&value, &mut buf, &mut pos, &NoObjects, &options).expect("first");
	encode_into(&value, &mut buf, &mut pos, &NoObjects, &options).expect("second");
	assert_eq!(pos, buf.len());
	assert_eq!(buf[3..3 + size], buf[3 + size..]);
}

#[test]
fn short_buffer_reports_size_mismatch() {
	let mut buf = vec![0_u8; 4];
	let mut pos = 0;
	let err = encode_into(&Value::from(1.0), &mut buf, &mut pos, &NoObjects, &CodecOptions::default()).expect_err("short buffer");
	assert!(matches!(err, CodecError::SizeMismatch { expected: 4, .. }));
	assert_eq!(pos, 0);
}

/// Model whose blob grows every time it is asked for one.
#[derive(Default)]
struct Drifting(std::cell::Cell<usize>);

impl ObjectModel for Drifting {
	fn class_name(&self, _: &HostRef) -> Result<String> {
		Ok("Drift".to_owned())
	}

	fn strategy(&self, _: &HostRef) -> Result<Strategy> {
		Ok(Strategy::SelfSerializing)
	}

	fn self_serialize(&self, _: &HostRef) -> Result<Vec<u8>> {
		let calls = self.0.get() + 1;
		self.0.set(calls);
		Ok(vec![0; calls])
	}
}

#[test]
fn nondeterministic_model_is_caught() {
	let value = Value::Object(HostRef::new(Blob(Vec::new())));
	let err = encode(&value, &Drifting::default(), &CodecOptions::default()).expect_err("drift");
	assert!(matches!(err, CodecError::SizeMismatch { .. }));
}

#[test]
fn exception_records_cannot_be_structural() {
	let record = Record::scalar(vec![("message", Value::from("boom"))]).expect("record").with_class("MException");
	let err = encode(&record.into(), &NoObjects, &CodecOptions::default()).expect_err("exception record");
	assert!(matches!(err, CodecError::Delegation { class_name, .. } if class_name == "MException"));
}
