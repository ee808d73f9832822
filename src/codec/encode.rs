use tracing::{debug, error, trace};

use crate::codec::bytes::Writer;
use crate::codec::object::{ObjectRepr, ResolvedObject, resolve_classed_record, resolve_host_object};
use crate::codec::size::{check_chain, count_field, record_values_shape};
use crate::codec::tag::{Tag, Tier};
use crate::codec::{
	CodecError, CodecOptions, Collection, HandleRepr, Kind, NumericArray, ObjectModel, Record, Result, Shape, SparseMatrix, Value, size_of, sparse,
};

/// Encode `value` into a freshly allocated buffer of exactly [`size_of`] bytes.
pub fn encode(value: &Value, model: &dyn ObjectModel, options: &CodecOptions) -> Result<Vec<u8>> {
	let size = size_of(value, model, options)?;
	let len = usize::try_from(size).map_err(|_| CodecError::DimensionOverflow {
		what: "encoded size",
		value: size,
		max: usize::MAX as u64,
	})?;

	let mut buf = vec![0_u8; len];
	let mut pos = 0;
	encode_into(value, &mut buf, &mut pos, model, options)?;
	if pos != len {
		error!(expected = len, written = pos, "encoder and size estimate disagree");
		return Err(CodecError::SizeMismatch {
			expected: size,
			written: pos as u64,
		});
	}
	debug!(bytes = len, kind = value.kind_name(), "encoded value");
	Ok(buf)
}

/// Encode `value` into `buf` starting at `*pos`, advancing `*pos` past it.
///
/// `buf` must have room for [`size_of`] bytes after `*pos`; running out of
/// room fails with [`CodecError::SizeMismatch`]. On error `*pos` is left
/// unchanged and the buffer contents past it are unspecified.
pub fn encode_into(value: &Value, buf: &mut [u8], pos: &mut usize, model: &dyn ObjectModel, options: &CodecOptions) -> Result<()> {
	let mut out = Writer::new(buf, *pos);
	encode_value(&mut out, value, model, options, 0)?;
	*pos = out.pos();
	Ok(())
}

fn encode_value(out: &mut Writer<'_>, value: &Value, model: &dyn ObjectModel, options: &CodecOptions, depth: u32) -> Result<()> {
	let depth = options.enter(depth)?;
	match value {
		Value::Numeric(array) => encode_numeric(out, array),
		Value::Sparse(matrix) => encode_sparse(out, matrix),
		Value::Record(record) => match record.class_name() {
			Some(class_name) => encode_object(out, &resolve_classed_record(record, class_name, options)?, model, options, depth),
			None => encode_record(out, record, model, options, depth),
		},
		Value::Collection(items) => encode_collection(out, items, model, options, depth),
		Value::Object(object) => encode_object(out, &resolve_host_object(object, model, options)?, model, options, depth),
		Value::Handle(handle) => encode_handle(out, &model.describe_handle(handle)?, model, options, depth),
	}
}

/// Write the tag byte and the shape fields its tier calls for.
fn write_header(out: &mut Writer<'_>, kind: Kind, shape: &Shape) -> Result<()> {
	shape.check_encodable()?;
	let tier = shape.tier();
	out.put_u8(Tag::Value { kind, tier }.to_byte())?;
	match tier {
		Tier::Null => Ok(()),
		Tier::ScalarOrList => out.put_u32_le(shape.numel() as u32),
		Tier::General => {
			out.put_u8(shape.ndims() as u8)?;
			for dim in shape.dims() {
				out.put_u32_le(*dim as u32)?;
			}
			Ok(())
		}
	}
}

fn encode_numeric(out: &mut Writer<'_>, array: &NumericArray) -> Result<()> {
	write_header(out, array.kind(), array.shape())?;
	out.put(array.real_bytes())?;
	if let Some(imag) = array.imag_bytes() {
		out.put(imag)?;
	}
	Ok(())
}

fn encode_sparse(out: &mut Writer<'_>, matrix: &SparseMatrix) -> Result<()> {
	let kind = matrix.kind().kind();
	if matrix.rows() == 0 && matrix.cols() == 0 {
		return out.put_u8(Tag::Value { kind, tier: Tier::Null }.to_byte());
	}
	matrix.shape().check_encodable()?;
	let nnz = count_field("sparse non-zero count", matrix.nnz())?;

	out.put_u8(Tag::Value { kind, tier: Tier::General }.to_byte())?;
	out.put_u8(2)?;
	out.put_u32_le(matrix.rows() as u32)?;
	out.put_u32_le(matrix.cols() as u32)?;
	out.put_u32_le(nnz)?;
	for row in matrix.row_idx() {
		out.put_u64_le(*row)?;
	}
	for col in sparse::column_assignment(matrix.col_ptr()) {
		out.put_u64_le(col)?;
	}
	out.put(matrix.real_bytes())?;
	if let Some(imag) = matrix.imag_bytes() {
		out.put(imag)?;
	}
	Ok(())
}

/// Text block written as a character row.
fn write_char_row(out: &mut Writer<'_>, bytes: &[u8]) -> Result<()> {
	count_field("name length", bytes.len())?;
	write_header(out, Kind::Char, &Shape::row(bytes.len() as u64))?;
	out.put(bytes)
}

fn encode_record(out: &mut Writer<'_>, record: &Record, model: &dyn ObjectModel, options: &CodecOptions, depth: u32) -> Result<()> {
	write_header(out, Kind::Struct, record.shape())?;
	out.put_u32_le(count_field("field count", record.nfields())?)?;
	for name in record.field_names() {
		out.put_u32_le(count_field("field name length", name.len())?)?;
	}
	for name in record.field_names() {
		out.put(name)?;
	}

	if record.nfields() > 0 {
		write_header(out, Kind::Cell, &record_values_shape(record))?;
		for value in record.values() {
			encode_value(out, value, model, options, depth)?;
		}
	}
	Ok(())
}

fn encode_collection(out: &mut Writer<'_>, items: &Collection, model: &dyn ObjectModel, options: &CodecOptions, depth: u32) -> Result<()> {
	write_header(out, Kind::Cell, items.shape())?;
	for item in items.items() {
		match item {
			Some(value) => encode_value(out, value, model, options, depth)?,
			None => {
				options.enter(depth)?;
				write_header(out, Kind::Double, &Shape::empty())?;
			}
		}
	}
	Ok(())
}

fn encode_object(out: &mut Writer<'_>, object: &ResolvedObject<'_>, model: &dyn ObjectModel, options: &CodecOptions, depth: u32) -> Result<()> {
	let strategy = object.strategy();
	trace!(class_name = %object.class_name, ?strategy, "encoding object");

	out.put_u8(Tag::Value {
		kind: Kind::ValueObject,
		tier: Tier::Null,
	}
	.to_byte())?;
	write_char_row(out, object.class_name.as_bytes())?;
	out.put_u8(strategy.code())?;
	match &object.repr {
		ObjectRepr::Blob(blob) => out.put(blob),
		ObjectRepr::State(state) => encode_value(out, state, model, options, depth),
		ObjectRepr::Structural(record) => encode_record(out, record, model, options, depth),
	}
}

fn encode_handle(out: &mut Writer<'_>, repr: &HandleRepr, model: &dyn ObjectModel, options: &CodecOptions, depth: u32) -> Result<()> {
	let kind = repr.kind();
	trace!(?kind, "encoding handle");

	out.put_u8(Tag::Handle(kind).to_byte())?;
	match repr {
		HandleRepr::Named { name } => write_char_row(out, name.as_bytes()),
		HandleRepr::Closure { name, captured } | HandleRepr::Anonymous { name, captured } => {
			write_char_row(out, name.as_bytes())?;
			encode_value(out, captured, model, options, depth)
		}
		HandleRepr::Parented { chain } => {
			check_chain(chain)?;
			count_field("handle chain length", chain.len())?;
			write_header(out, Kind::Cell, &Shape::row(chain.len() as u64))?;
			for link in chain {
				encode_value(out, link, model, options, depth)?;
			}
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests;
