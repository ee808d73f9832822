use crate::codec::{CodecError, Collection, ElementKind, Kind, NumericArray, Record, Shape, SparseKind, SparseMatrix, Value};

#[test]
fn typed_arrays_keep_little_endian_planes() {
	let array = NumericArray::row(&[1_i16, -2, 300]);
	assert_eq!(array.kind(), Kind::Int16);
	assert_eq!(array.numel(), 3);
	assert_eq!(array.real_bytes(), &[1, 0, 0xFE, 0xFF, 0x2C, 0x01]);
	assert_eq!(array.to_vec::<i16>(), Some(vec![1, -2, 300]));
	assert_eq!(array.to_vec::<u16>(), None);
}

#[test]
fn complex_arrays_report_complex_kind() {
	let array = NumericArray::from_complex(Shape::row(2), &[1.0_f32, 2.0], &[-1.0, 0.5]).expect("complex single");
	assert!(array.is_complex());
	assert_eq!(array.kind(), Kind::ComplexSingle);
	assert_eq!(array.imag_to_vec::<f32>(), Some(vec![-1.0, 0.5]));
}

#[test]
fn raw_payload_length_is_checked() {
	let err = NumericArray::from_raw(ElementKind::Double, Shape::from([2, 2]), vec![0; 24], None).expect_err("short payload");
	assert!(matches!(err, CodecError::ShapeMismatch { expected: 32, actual: 24, .. }));

	let err = NumericArray::from_raw(ElementKind::Logical, Shape::scalar(), vec![1], Some(vec![0])).expect_err("complex logical");
	assert!(matches!(err, CodecError::ShapeMismatch { .. }));
}

#[test]
fn text_arrays_hold_raw_bytes() {
	let value = Value::from("hi");
	assert_eq!(value.as_text().as_deref(), Some("hi"));
	assert_eq!(value.shape(), Some(Shape::row(2)));
	assert_eq!(value.kind_name(), "CHAR");
}

#[test]
fn records_are_element_major_and_reject_duplicate_fields() {
	let record = Record::new(
		Shape::row(2),
		&["a", "b"],
		vec![Value::from(1.0), Value::from(2.0), Value::from(3.0), Value::from(4.0)],
	)
	.expect("record");
	assert_eq!(record.numel(), 2);
	assert_eq!(record.get(1, "a"), Some(&Value::from(3.0)));
	assert_eq!(record.get(0, "b"), Some(&Value::from(2.0)));
	assert_eq!(record.get(2, "a"), None);

	let err = Record::scalar(vec![("x", Value::empty()), ("x", Value::empty())]).expect_err("duplicate field");
	assert!(matches!(err, CodecError::DuplicateField { name } if name == "x"));

	let err = Record::new(Shape::row(2), &["a"], vec![Value::empty()]).expect_err("value count");
	assert!(matches!(err, CodecError::ShapeMismatch { what: "record values", .. }));
}

#[test]
fn classed_records_report_object_kind() {
	let record = Record::scalar(vec![("v", Value::from(1.0))]).expect("record").with_class("Point");
	assert_eq!(record.class_name(), Some("Point"));
	assert_eq!(Value::from(record.clone()).kind_name(), "VALUE_OBJECT");
	assert_eq!(Value::from(record.without_class()).kind_name(), "STRUCT");
}

#[test]
fn absent_collection_slots_equal_canonical_empty() {
	let mut sparse = Collection::with_shape(Shape::row(2)).expect("collection");
	sparse.set(1, Value::from(true)).expect("set");

	let dense = Collection::row(vec![Value::empty(), Value::from(true)]);
	assert_eq!(sparse, dense);
	assert!(sparse.get(0).is_none());
	assert!(sparse.set(5, Value::empty()).is_err());
}

#[test]
fn canonical_empty_ignores_empty_extents() {
	let empty_row = NumericArray::from_slice::<f64>(Shape::from([1, 0]), &[]).expect("empty row");
	assert!(Value::from(empty_row).is_canonical_empty());
	assert!(!Value::Numeric(NumericArray::empty(ElementKind::Single)).is_canonical_empty());
}

#[test]
fn sparse_triplets_build_csc_parts() {
	let matrix = SparseMatrix::from_triplets(3, 3, &[(2, 2, 9.0), (0, 0, 1.0), (1, 0, 2.0)]).expect("triplets");
	assert_eq!(matrix.kind(), SparseKind::Double);
	assert_eq!(matrix.col_ptr(), &[0, 2, 2, 3]);
	assert_eq!(matrix.row_idx(), &[0, 1, 2]);
	assert_eq!(matrix.values_f64(), Some(vec![1.0, 2.0, 9.0]));
	assert_eq!(matrix.nnz(), 3);
}

#[test]
fn sparse_structure_is_validated() {
	let err = SparseMatrix::double(2, 2, vec![0, 1, 1], vec![5], &[1.0]).expect_err("row out of range");
	assert!(matches!(err, CodecError::ShapeMismatch { what: "sparse row index bound", .. }));

	let err = SparseMatrix::double(2, 2, vec![0, 2], vec![0, 1], &[1.0, 2.0]).expect_err("short pointers");
	assert!(matches!(err, CodecError::ShapeMismatch { what: "sparse column pointers", .. }));

	let complex = SparseMatrix::complex(1, 1, vec![0, 1], vec![0], &[1.0], &[2.0]).expect("complex");
	assert_eq!(complex.imag_bytes().map(<[u8]>::len), Some(8));
}
