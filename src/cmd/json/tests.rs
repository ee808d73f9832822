use mxcodec::codec::{ElementKind, NumericArray, Record, Shape, SparseMatrix, Value};
use serde_json::json;

use crate::cmd::json::{json_to_value, value_to_json};

#[test]
fn json_documents_map_onto_values() {
	let doc = json!({ "a": 1, "b": [1, 2, 3], "flags": [true, false], "name": "x", "items": [1, "two", null] });
	let value = json_to_value(&doc).expect("convert");
	let record = value.as_record().expect("record");

	assert_eq!(record.field("a"), Some(&Value::from(1.0)));
	assert_eq!(record.field("b"), Some(&NumericArray::row(&[1.0, 2.0, 3.0]).into()));
	assert_eq!(record.field("flags"), Some(&NumericArray::row(&[true, false]).into()));
	assert_eq!(record.field("name").and_then(Value::as_text).as_deref(), Some("x"));

	let items = record.field("items").and_then(Value::as_collection).expect("collection");
	assert_eq!(items.len(), 3);
	assert!(items.get(2).is_some_and(Value::is_canonical_empty));
}

#[test]
fn values_render_back_to_json() {
	let doc = json!({ "flag": true, "name": "abc", "items": ["x", null, []] });
	assert_eq!(value_to_json(&json_to_value(&doc).expect("convert")), doc);

	let numbers = value_to_json(&NumericArray::row(&[1.5, 2.5]).into());
	assert_eq!(numbers, json!([1.5, 2.5]));
}

#[test]
fn complex_and_typed_arrays_render_planes() {
	let array = NumericArray::from_complex(Shape::row(2), &[1_i32, 2], &[3, 4]).expect("complex");
	assert_eq!(value_to_json(&array.into()), json!({ "re": [1, 2], "im": [3, 4] }));

	let empty_single = NumericArray::empty(ElementKind::Single);
	assert_eq!(value_to_json(&empty_single.into()), json!([]));
}

#[test]
fn classed_records_and_sparse_render_with_metadata() {
	let record = Record::scalar(vec![("v", Value::from(true))]).expect("record").with_class("Thing");
	assert_eq!(value_to_json(&record.into()), json!({ "class": "Thing", "fields": { "v": true } }));

	let matrix = SparseMatrix::from_triplets(2, 2, &[(1, 0, 5.0)]).expect("sparse");
	let rendered = value_to_json(&matrix.into());
	assert_eq!(rendered["sparse"], "SPARSE_DOUBLE");
	assert_eq!(rendered["col_ptr"], json!([0, 1, 1]));
	assert_eq!(rendered["values"], json!([5.0]));
}
