use mxcodec::codec::{Collection, ElementKind, NumericArray, Record, SparseKind, SparseMatrix, Value};
use serde_json::{Map, Value as JsonValue, json};

use crate::cmd::error::Result;

/// Map a JSON document onto a value tree.
///
/// Numbers become double scalars, all-number arrays double rows, booleans and
/// all-boolean arrays logical values, strings character rows, objects scalar
/// records, other arrays collections, and `null` the canonical empty value.
pub(crate) fn json_to_value(json: &JsonValue) -> Result<Value> {
	Ok(match json {
		JsonValue::Null => Value::empty(),
		JsonValue::Bool(flag) => Value::from(*flag),
		JsonValue::Number(number) => Value::from(number.as_f64().unwrap_or(f64::NAN)),
		JsonValue::String(text) => Value::from(text.as_str()),
		JsonValue::Array(items) if !items.is_empty() && items.iter().all(JsonValue::is_number) => {
			let numbers: Vec<f64> = items.iter().map(|item| item.as_f64().unwrap_or(f64::NAN)).collect();
			NumericArray::row(&numbers).into()
		}
		JsonValue::Array(items) if !items.is_empty() && items.iter().all(JsonValue::is_boolean) => {
			let flags: Vec<bool> = items.iter().map(|item| item.as_bool().unwrap_or(false)).collect();
			NumericArray::row(&flags).into()
		}
		JsonValue::Array(items) => Collection::row(items.iter().map(json_to_value).collect::<Result<Vec<_>>>()?).into(),
		JsonValue::Object(map) => {
			let mut pairs = Vec::with_capacity(map.len());
			for (name, item) in map {
				pairs.push((name.as_str(), json_to_value(item)?));
			}
			Record::scalar(pairs)?.into()
		}
	})
}

/// Render a value tree as JSON, the inverse of [`json_to_value`] where one exists.
pub(crate) fn value_to_json(value: &Value) -> JsonValue {
	match value {
		Value::Numeric(array) => numeric_json(array),
		Value::Sparse(matrix) => sparse_json(matrix),
		Value::Record(record) => record_json(record),
		Value::Collection(items) => JsonValue::Array(items.items().iter().map(|slot| slot.as_ref().map_or(JsonValue::Null, value_to_json)).collect()),
		Value::Object(_) => json!("<object>"),
		Value::Handle(_) => json!("<handle>"),
	}
}

fn numeric_json(array: &NumericArray) -> JsonValue {
	if array.element() == ElementKind::Double && !array.is_complex() && array.shape().is_empty() {
		return JsonValue::Null;
	}
	if let Some(text) = array.as_text() {
		return JsonValue::String(text);
	}

	let mut real = element_json(array, false);
	if array.is_complex() {
		return json!({ "re": real, "im": element_json(array, true) });
	}
	match real.len() {
		1 => real.pop().unwrap_or(JsonValue::Null),
		_ => JsonValue::Array(real),
	}
}

/// One JSON number or boolean per element of the chosen plane.
pub(crate) fn element_json(array: &NumericArray, imag: bool) -> Vec<JsonValue> {
	macro_rules! plane {
		($ty:ty) => {
			(if imag { array.imag_to_vec::<$ty>() } else { array.to_vec::<$ty>() })
				.unwrap_or_default()
				.into_iter()
				.map(|item| json!(item))
				.collect()
		};
	}
	match array.element() {
		ElementKind::Logical => plane!(bool),
		ElementKind::Char => array.real_bytes().iter().map(|byte| json!(byte)).collect(),
		ElementKind::Double => plane!(f64),
		ElementKind::Single => plane!(f32),
		ElementKind::Int8 => plane!(i8),
		ElementKind::UInt8 => plane!(u8),
		ElementKind::Int16 => plane!(i16),
		ElementKind::UInt16 => plane!(u16),
		ElementKind::Int32 => plane!(i32),
		ElementKind::UInt32 => plane!(u32),
		ElementKind::Int64 => plane!(i64),
		ElementKind::UInt64 => plane!(u64),
	}
}

fn sparse_json(matrix: &SparseMatrix) -> JsonValue {
	let values = match matrix.kind() {
		SparseKind::Logical => json!(matrix.values_bool()),
		SparseKind::Double | SparseKind::ComplexDouble => json!(matrix.values_f64()),
	};
	let mut out = json!({
		"sparse": matrix.kind().kind().name(),
		"rows": matrix.rows(),
		"cols": matrix.cols(),
		"col_ptr": matrix.col_ptr(),
		"row_idx": matrix.row_idx(),
		"values": values,
	});
	if let Some(imag) = matrix.imag_values_f64() {
		out["imag"] = json!(imag);
	}
	out
}

fn record_json(record: &Record) -> JsonValue {
	let elements: Vec<JsonValue> = (0..record.numel())
		.map(|elem| {
			let mut map = Map::new();
			for name in record.field_names() {
				let value = record.get(elem, name).map_or(JsonValue::Null, value_to_json);
				map.insert(String::from_utf8_lossy(name).into_owned(), value);
			}
			JsonValue::Object(map)
		})
		.collect();
	let body = if record.shape().numel() == 1 {
		elements.into_iter().next().unwrap_or(JsonValue::Null)
	} else {
		JsonValue::Array(elements)
	};
	match record.class_name() {
		Some(class_name) => json!({ "class": class_name, "fields": body }),
		None => body,
	}
}

#[cfg(test)]
mod tests;
