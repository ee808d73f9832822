use tracing::debug;

use crate::codec::object::{ObjectRepr, ResolvedObject, resolve_classed_record, resolve_host_object};
use crate::codec::shape::MAX_EXTENT;
use crate::codec::tag::{COUNT_SIZE, INDEX_SIZE, NDIMS_SIZE, TAG_SIZE};
use crate::codec::{CodecError, CodecOptions, Collection, HandleRepr, NumericArray, ObjectModel, Record, Result, Shape, SparseMatrix, Value};

/// Exact encoded size of `value` in bytes.
///
/// Must agree with what [`encode`](crate::codec::encode) writes for the same
/// value and object model.
pub fn size_of(value: &Value, model: &dyn ObjectModel, options: &CodecOptions) -> Result<u64> {
	let size = value_size(value, model, options, 0)?;
	debug!(size, kind = value.kind_name(), "estimated encoded size");
	Ok(size)
}

fn value_size(value: &Value, model: &dyn ObjectModel, options: &CodecOptions, depth: u32) -> Result<u64> {
	let depth = options.enter(depth)?;
	match value {
		Value::Numeric(array) => numeric_size(array),
		Value::Sparse(matrix) => sparse_size(matrix),
		Value::Record(record) => match record.class_name() {
			Some(class_name) => object_size(&resolve_classed_record(record, class_name, options)?, model, options, depth),
			None => record_size(record, model, options, depth),
		},
		Value::Collection(items) => collection_size(items, model, options, depth),
		Value::Object(object) => object_size(&resolve_host_object(object, model, options)?, model, options, depth),
		Value::Handle(handle) => handle_size(&model.describe_handle(handle)?, model, options, depth),
	}
}

fn add(a: u64, b: u64) -> Result<u64> {
	a.checked_add(b).ok_or(CodecError::DimensionOverflow {
		what: "encoded size",
		value: u64::MAX,
		max: u64::MAX,
	})
}

fn mul(a: u64, b: u64) -> Result<u64> {
	a.checked_mul(b).ok_or(CodecError::DimensionOverflow {
		what: "encoded size",
		value: u64::MAX,
		max: u64::MAX,
	})
}

pub(crate) fn count_field(what: &'static str, value: usize) -> Result<u32> {
	u32::try_from(value).map_err(|_| CodecError::DimensionOverflow {
		what,
		value: value as u64,
		max: MAX_EXTENT,
	})
}

/// A parented chain must end in the innermost handle.
pub(crate) fn check_chain(chain: &[Value]) -> Result<()> {
	match chain.last() {
		Some(Value::Handle(_)) => Ok(()),
		_ => Err(CodecError::delegation("parented handle", "handle chain must end in a handle")),
	}
}

fn numeric_size(array: &NumericArray) -> Result<u64> {
	array.shape().check_encodable()?;
	let payload = mul(array.shape().numel(), array.kind().width() as u64)?;
	add(array.shape().header_size(), payload)
}

fn sparse_size(matrix: &SparseMatrix) -> Result<u64> {
	if matrix.rows() == 0 && matrix.cols() == 0 {
		return Ok(TAG_SIZE as u64);
	}
	matrix.shape().check_encodable()?;
	count_field("sparse non-zero count", matrix.nnz())?;

	let nnz = matrix.nnz() as u64;
	let header = (TAG_SIZE + NDIMS_SIZE + 2 * COUNT_SIZE + COUNT_SIZE) as u64;
	let indices = mul(nnz, 2 * INDEX_SIZE as u64)?;
	let values = mul(nnz, matrix.kind().kind().width() as u64)?;
	add(add(header, indices)?, values)
}

/// Size of a text block encoded as a character row.
pub(crate) fn char_row_size(bytes: &[u8]) -> Result<u64> {
	count_field("name length", bytes.len())?;
	add(Shape::row(bytes.len() as u64).header_size(), bytes.len() as u64)
}

/// Shape of the collection holding all record values.
pub(crate) fn record_values_shape(record: &Record) -> Shape {
	Shape::new(vec![record.nfields() as u64, record.numel() as u64])
}

fn record_size(record: &Record, model: &dyn ObjectModel, options: &CodecOptions, depth: u32) -> Result<u64> {
	record.shape().check_encodable()?;
	count_field("field count", record.nfields())?;

	let mut size = add(record.shape().header_size(), COUNT_SIZE as u64)?;
	for name in record.field_names() {
		count_field("field name length", name.len())?;
		size = add(size, (COUNT_SIZE + name.len()) as u64)?;
	}

	if record.nfields() > 0 {
		let inner = record_values_shape(record);
		inner.check_encodable()?;
		size = add(size, inner.header_size())?;
		for value in record.values() {
			size = add(size, value_size(value, model, options, depth)?)?;
		}
	}
	Ok(size)
}

/// Cost of an absent collection slot: the canonical empty value's tag byte.
pub(crate) const ABSENT_SIZE: u64 = TAG_SIZE as u64;

fn collection_size(items: &Collection, model: &dyn ObjectModel, options: &CodecOptions, depth: u32) -> Result<u64> {
	items.shape().check_encodable()?;
	let mut size = items.shape().header_size();
	for item in items.items() {
		let item_size = match item {
			Some(value) => value_size(value, model, options, depth)?,
			None => {
				options.enter(depth)?;
				ABSENT_SIZE
			}
		};
		size = add(size, item_size)?;
	}
	Ok(size)
}

fn object_size(object: &ResolvedObject<'_>, model: &dyn ObjectModel, options: &CodecOptions, depth: u32) -> Result<u64> {
	let header = add(add(TAG_SIZE as u64, char_row_size(object.class_name.as_bytes())?)?, 1)?;
	let body = match &object.repr {
		ObjectRepr::Blob(blob) => blob.len() as u64,
		ObjectRepr::State(state) => value_size(state, model, options, depth)?,
		ObjectRepr::Structural(record) => record_size(record, model, options, depth)?,
	};
	add(header, body)
}

fn handle_size(repr: &HandleRepr, model: &dyn ObjectModel, options: &CodecOptions, depth: u32) -> Result<u64> {
	let body = match repr {
		HandleRepr::Named { name } => char_row_size(name.as_bytes())?,
		HandleRepr::Closure { name, captured } | HandleRepr::Anonymous { name, captured } => {
			add(char_row_size(name.as_bytes())?, value_size(captured, model, options, depth)?)?
		}
		HandleRepr::Parented { chain } => {
			check_chain(chain)?;
			count_field("handle chain length", chain.len())?;
			let mut size = Shape::row(chain.len() as u64).header_size();
			for link in chain {
				size = add(size, value_size(link, model, options, depth)?)?;
			}
			size
		}
	};
	add(TAG_SIZE as u64, body)
}
