use tracing::{debug, trace};

use crate::codec::bytes::Cursor;
use crate::codec::tag::{COUNT_SIZE, INDEX_SIZE, Tag, Tier};
use crate::codec::{
	CodecError, CodecOptions, Collection, ElementKind, HandleKind, HostRef, Kind, NumericArray, ObjectModel, Record, Result, Shape, SparseKind,
	SparseMatrix, Strategy, Value, sparse,
};

/// Decode one value starting at `offset`.
///
/// Returns the value and the number of bytes it occupied, so a caller can
/// resume at `offset + consumed` to read the next back-to-back value.
pub fn decode(bytes: &[u8], offset: usize, model: &dyn ObjectModel, options: &CodecOptions) -> Result<(Value, usize)> {
	let mut cursor = Cursor::at(bytes, offset)?;
	let value = decode_value(&mut cursor, model, options, 0)?;
	let consumed = cursor.pos() - offset;
	debug!(offset, consumed, kind = value.kind_name(), "decoded value");
	Ok((value, consumed))
}

/// Decode every back-to-back value in `bytes`.
pub fn decode_all(bytes: &[u8], model: &dyn ObjectModel, options: &CodecOptions) -> Result<Vec<Value>> {
	let mut cursor = Cursor::new(bytes);
	let mut values = Vec::new();
	while cursor.remaining() > 0 {
		values.push(decode_value(&mut cursor, model, options, 0)?);
	}
	debug!(count = values.len(), bytes = bytes.len(), "decoded stream");
	Ok(values)
}

fn decode_value(cursor: &mut Cursor<'_>, model: &dyn ObjectModel, options: &CodecOptions, depth: u32) -> Result<Value> {
	let depth = options.enter(depth)?;
	let at = cursor.pos();
	let tag = Tag::from_byte(cursor.read_u8()?, at)?;
	let (kind, tier) = match tag {
		Tag::Handle(form) => return decode_handle(cursor, form, model, options, depth).map(Value::Handle),
		Tag::Value { kind, tier } => (kind, tier),
	};

	if let Some((element, complex)) = ElementKind::from_kind(kind) {
		return decode_numeric(cursor, element, complex, tier).map(Value::Numeric);
	}
	if let Some(sparse_kind) = SparseKind::from_kind(kind) {
		return decode_sparse(cursor, sparse_kind, tier, at).map(Value::Sparse);
	}
	match kind {
		Kind::Struct => decode_record(cursor, tier, model, options, depth).map(Value::Record),
		Kind::Cell => decode_collection(cursor, tier, model, options, depth).map(Value::Collection),
		Kind::ValueObject => decode_object(cursor, tier, at, model, options, depth),
		_ => Err(CodecError::UnsupportedKind { tag: tag.to_byte(), at }),
	}
}

/// Read the shape fields that follow a tag of the given tier.
fn read_shape(cursor: &mut Cursor<'_>, tier: Tier) -> Result<Shape> {
	match tier {
		Tier::Null => Ok(Shape::empty()),
		Tier::ScalarOrList => match cursor.read_u32_le()? {
			1 => Ok(Shape::scalar()),
			count => Ok(Shape::row(u64::from(count))),
		},
		Tier::General => {
			let ndims = usize::from(cursor.read_u8()?);
			cursor.ensure(ndims * COUNT_SIZE)?;
			let mut dims = Vec::with_capacity(ndims);
			for _ in 0..ndims {
				dims.push(u64::from(cursor.read_u32_le()?));
			}
			Ok(Shape::new(dims))
		}
	}
}

/// Byte count of `count` items of `width` bytes, checked against the input.
fn payload_len(cursor: &Cursor<'_>, count: u64, width: usize) -> Result<usize> {
	let need = count.checked_mul(width as u64).and_then(|need| usize::try_from(need).ok());
	let Some(need) = need else {
		return Err(CodecError::Truncated {
			at: cursor.pos(),
			need: usize::MAX,
			rem: cursor.remaining(),
		});
	};
	cursor.ensure(need)?;
	Ok(need)
}

fn decode_numeric(cursor: &mut Cursor<'_>, element: ElementKind, complex: bool, tier: Tier) -> Result<NumericArray> {
	let shape = read_shape(cursor, tier)?;
	let planes = if complex { 2 } else { 1 };
	payload_len(cursor, shape.numel(), element.width() * planes)?;

	let plane = payload_len(cursor, shape.numel(), element.width())?;
	let real = cursor.read_exact(plane)?.to_vec();
	let imag = if complex { Some(cursor.read_exact(plane)?.to_vec()) } else { None };
	NumericArray::from_raw(element, shape, real, imag)
}

fn decode_sparse(cursor: &mut Cursor<'_>, kind: SparseKind, tier: Tier, at: usize) -> Result<SparseMatrix> {
	match tier {
		Tier::Null => return Ok(SparseMatrix::empty(kind)),
		Tier::ScalarOrList => {
			return Err(CodecError::Malformed {
				at,
				reason: "sparse matrix with a scalar header",
			});
		}
		Tier::General => {}
	}
	if cursor.read_u8()? != 2 {
		return Err(CodecError::Malformed {
			at,
			reason: "sparse matrix must be two-dimensional",
		});
	}
	let rows = u64::from(cursor.read_u32_le()?);
	let cols = u64::from(cursor.read_u32_le()?);
	let nnz = u64::from(cursor.read_u32_le()?);
	payload_len(cursor, nnz, 2 * INDEX_SIZE + kind.kind().width())?;

	let nnz = nnz as usize;
	let row_idx = cursor.read_u64_run(nnz)?;
	let assignment_at = cursor.pos();
	let assignment = cursor.read_u64_run(nnz)?;
	let col_ptr = sparse::column_pointers(cols, &assignment, assignment_at)?;

	let plane = nnz * kind.plane_width();
	let real = cursor.read_exact(plane)?.to_vec();
	let imag = match kind {
		SparseKind::ComplexDouble => Some(cursor.read_exact(plane)?.to_vec()),
		_ => None,
	};
	SparseMatrix::from_raw(kind, rows, cols, col_ptr, row_idx, real, imag)
}

/// Read a character block and return its raw bytes.
fn read_char_row(cursor: &mut Cursor<'_>) -> Result<Vec<u8>> {
	let at = cursor.pos();
	let tag = Tag::from_byte(cursor.read_u8()?, at)?;
	let Tag::Value { kind: Kind::Char, tier } = tag else {
		return Err(CodecError::Malformed {
			at,
			reason: "expected a character block",
		});
	};
	let shape = read_shape(cursor, tier)?;
	let len = payload_len(cursor, shape.numel(), 1)?;
	Ok(cursor.read_exact(len)?.to_vec())
}

fn read_name(cursor: &mut Cursor<'_>) -> Result<String> {
	Ok(String::from_utf8_lossy(&read_char_row(cursor)?).into_owned())
}

/// Read a collection header that must be present at this point in the stream.
fn read_collection_header(cursor: &mut Cursor<'_>, reason: &'static str) -> Result<Shape> {
	let at = cursor.pos();
	match Tag::from_byte(cursor.read_u8()?, at)? {
		Tag::Value { kind: Kind::Cell, tier } => read_shape(cursor, tier),
		_ => Err(CodecError::Malformed { at, reason }),
	}
}

/// Decode `count` values, each at least one byte long.
fn decode_run(cursor: &mut Cursor<'_>, count: u64, model: &dyn ObjectModel, options: &CodecOptions, depth: u32) -> Result<Vec<Value>> {
	let count = payload_len(cursor, count, 1)?;
	let mut values = Vec::with_capacity(count);
	for _ in 0..count {
		values.push(decode_value(cursor, model, options, depth)?);
	}
	Ok(values)
}

fn decode_record(cursor: &mut Cursor<'_>, tier: Tier, model: &dyn ObjectModel, options: &CodecOptions, depth: u32) -> Result<Record> {
	let shape = read_shape(cursor, tier)?;
	let nfields = u64::from(cursor.read_u32_le()?);
	let nfields = payload_len(cursor, nfields, COUNT_SIZE)? / COUNT_SIZE;

	let mut lens = Vec::with_capacity(nfields);
	for _ in 0..nfields {
		lens.push(cursor.read_u32_le()? as usize);
	}
	let mut names = Vec::with_capacity(nfields);
	for len in lens {
		names.push(cursor.read_exact(len)?);
	}

	let values = if nfields > 0 {
		let at = cursor.pos();
		let inner = read_collection_header(cursor, "record values must follow field names")?;
		let expected = shape.numel().saturating_mul(nfields as u64);
		if inner.numel() != expected {
			return Err(CodecError::Malformed {
				at,
				reason: "record value count does not match shape and fields",
			});
		}
		decode_run(cursor, expected, model, options, depth)?
	} else {
		Vec::new()
	};
	Record::new(shape, &names, values)
}

fn decode_collection(cursor: &mut Cursor<'_>, tier: Tier, model: &dyn ObjectModel, options: &CodecOptions, depth: u32) -> Result<Collection> {
	let shape = read_shape(cursor, tier)?;
	let values = decode_run(cursor, shape.numel(), model, options, depth)?;
	Collection::from_values(shape, values)
}

fn decode_object(cursor: &mut Cursor<'_>, tier: Tier, at: usize, model: &dyn ObjectModel, options: &CodecOptions, depth: u32) -> Result<Value> {
	if tier != Tier::Null {
		return Err(CodecError::Malformed {
			at,
			reason: "object tag carries shape bits",
		});
	}
	let mut class_name = read_name(cursor)?;
	let strategy_at = cursor.pos();
	let mut strategy = Strategy::from_code(cursor.read_u8()?).ok_or(CodecError::Malformed {
		at: strategy_at,
		reason: "unknown object strategy",
	})?;
	if options.is_exception_class(&class_name) {
		strategy = Strategy::SelfSerializing;
		class_name = options.exception_restore_class.to_string();
	}
	trace!(class_name = %class_name, ?strategy, "decoding object");

	match strategy {
		Strategy::SelfSerializing => {
			let rest = cursor.rest();
			let (object, consumed) = model.self_deserialize(&class_name, rest)?;
			if consumed > rest.len() {
				return Err(CodecError::Truncated {
					at: cursor.pos(),
					need: consumed,
					rem: rest.len(),
				});
			}
			cursor.skip(consumed)?;
			Ok(Value::Object(object))
		}
		Strategy::State => {
			let state = decode_value(cursor, model, options, depth)?;
			Ok(Value::Object(model.from_state_value(&class_name, state)?))
		}
		Strategy::Structural => {
			let body_at = cursor.pos();
			match Tag::from_byte(cursor.read_u8()?, body_at)? {
				Tag::Value { kind: Kind::Struct, tier } => {
					let record = decode_record(cursor, tier, model, options, depth)?;
					Ok(Value::Record(record.with_class(class_name)))
				}
				_ => Err(CodecError::Malformed {
					at: body_at,
					reason: "structural object body is not a record",
				}),
			}
		}
	}
}

fn decode_handle(cursor: &mut Cursor<'_>, form: HandleKind, model: &dyn ObjectModel, options: &CodecOptions, depth: u32) -> Result<HostRef> {
	trace!(kind = ?form, "decoding handle");
	match form {
		HandleKind::Named => model.resolve_callable(&read_name(cursor)?),
		HandleKind::Closure => {
			let name = read_name(cursor)?;
			let captured = decode_value(cursor, model, options, depth)?;
			model.rebuild_closure(&name, captured)
		}
		HandleKind::Anonymous => {
			let name = read_name(cursor)?;
			let captured = decode_value(cursor, model, options, depth)?;
			model.rebuild_anonymous(&name, captured)
		}
		HandleKind::Parented => {
			let at = cursor.pos();
			let shape = read_collection_header(cursor, "handle chain must be a collection")?;
			let mut chain = decode_run(cursor, shape.numel(), model, options, depth)?;
			let Some(Value::Handle(mut current)) = chain.pop() else {
				return Err(CodecError::Malformed {
					at,
					reason: "handle chain must end in a handle",
				});
			};
			for wrapper in chain.iter().rev() {
				current = model.wrap_handle(current, wrapper)?;
			}
			Ok(current)
		}
	}
}
