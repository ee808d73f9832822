use std::collections::HashSet;

use crate::codec::sparse;
use crate::codec::{CodecError, HostRef, Kind, Result, Shape};

/// Element type of a dense numeric array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
	/// Boolean, one byte per element.
	Logical,
	/// Raw byte character.
	Char,
	/// `f64`.
	Double,
	/// `f32`.
	Single,
	/// `i8`.
	Int8,
	/// `u8`.
	UInt8,
	/// `i16`.
	Int16,
	/// `u16`.
	UInt16,
	/// `i32`.
	Int32,
	/// `u32`.
	UInt32,
	/// `i64`.
	Int64,
	/// `u64`.
	UInt64,
}

impl ElementKind {
	/// Real wire kind for this element type.
	pub fn kind(self) -> Kind {
		match self {
			Self::Logical => Kind::Logical,
			Self::Char => Kind::Char,
			Self::Double => Kind::Double,
			Self::Single => Kind::Single,
			Self::Int8 => Kind::Int8,
			Self::UInt8 => Kind::UInt8,
			Self::Int16 => Kind::Int16,
			Self::UInt16 => Kind::UInt16,
			Self::Int32 => Kind::Int32,
			Self::UInt32 => Kind::UInt32,
			Self::Int64 => Kind::Int64,
			Self::UInt64 => Kind::UInt64,
		}
	}

	/// Split a dense wire kind into element type and complexity.
	pub fn from_kind(kind: Kind) -> Option<(Self, bool)> {
		let (real, complex) = match kind.to_real() {
			Some(real) => (real, true),
			None => (kind, false),
		};
		let element = match real {
			Kind::Logical => Self::Logical,
			Kind::Char => Self::Char,
			Kind::Double => Self::Double,
			Kind::Single => Self::Single,
			Kind::Int8 => Self::Int8,
			Kind::UInt8 => Self::UInt8,
			Kind::Int16 => Self::Int16,
			Kind::UInt16 => Self::UInt16,
			Kind::Int32 => Self::Int32,
			Kind::UInt32 => Self::UInt32,
			Kind::Int64 => Self::Int64,
			Kind::UInt64 => Self::UInt64,
			_ => return None,
		};
		Some((element, complex))
	}

	/// Bytes per element of one plane.
	pub fn width(self) -> usize {
		self.kind().width()
	}

	/// Whether a complex variant exists.
	pub fn supports_complex(self) -> bool {
		self.kind().to_complex().is_some()
	}
}

/// Rust scalar types that map onto one [`ElementKind`].
pub trait Element: Copy {
	/// Element type tag.
	const KIND: ElementKind;

	/// Append the little-endian bytes of `self`.
	fn write_le(self, out: &mut Vec<u8>);

	/// Read one element from exactly `Self::KIND.width()` bytes.
	fn read_le(bytes: &[u8]) -> Self;
}

macro_rules! impl_element {
	($($ty:ty => $kind:ident),* $(,)?) => {
		$(
			impl Element for $ty {
				const KIND: ElementKind = ElementKind::$kind;

				fn write_le(self, out: &mut Vec<u8>) {
					out.extend_from_slice(&self.to_le_bytes());
				}

				fn read_le(bytes: &[u8]) -> Self {
					let mut buf = [0_u8; std::mem::size_of::<$ty>()];
					buf.copy_from_slice(bytes);
					<$ty>::from_le_bytes(buf)
				}
			}
		)*
	};
}

impl_element! {
	f64 => Double,
	f32 => Single,
	i8 => Int8,
	u8 => UInt8,
	i16 => Int16,
	u16 => UInt16,
	i32 => Int32,
	u32 => UInt32,
	i64 => Int64,
	u64 => UInt64,
}

impl Element for bool {
	const KIND: ElementKind = ElementKind::Logical;

	fn write_le(self, out: &mut Vec<u8>) {
		out.push(u8::from(self));
	}

	fn read_le(bytes: &[u8]) -> Self {
		bytes[0] != 0
	}
}

fn pack<T: Element>(items: &[T]) -> Vec<u8> {
	let mut out = Vec::with_capacity(items.len() * T::KIND.width());
	for item in items {
		item.write_le(&mut out);
	}
	out
}

fn unpack<T: Element>(bytes: &[u8]) -> Vec<T> {
	bytes.chunks_exact(T::KIND.width()).map(T::read_le).collect()
}

fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
	if expected != actual {
		return Err(CodecError::ShapeMismatch { what, expected, actual });
	}
	Ok(())
}

/// Dense N-D array of fixed-width elements, real or complex.
///
/// Payload planes hold little-endian element bytes in storage order.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericArray {
	element: ElementKind,
	shape: Shape,
	real: Vec<u8>,
	imag: Option<Vec<u8>>,
}

impl NumericArray {
	/// Build from raw little-endian planes, validating lengths.
	pub fn from_raw(element: ElementKind, shape: Shape, real: Vec<u8>, imag: Option<Vec<u8>>) -> Result<Self> {
		let expected = shape.numel_usize()?.checked_mul(element.width()).ok_or(CodecError::DimensionOverflow {
			what: "payload bytes",
			value: shape.numel(),
			max: usize::MAX as u64,
		})?;
		check_len("real payload bytes", expected, real.len())?;
		if let Some(imag) = &imag {
			if !element.supports_complex() {
				return Err(CodecError::ShapeMismatch {
					what: "complex planes for real-only element",
					expected: 0,
					actual: imag.len(),
				});
			}
			check_len("imaginary payload bytes", expected, imag.len())?;
		}
		Ok(Self { element, shape, real, imag })
	}

	/// Build a real array from typed elements.
	pub fn from_slice<T: Element>(shape: Shape, items: &[T]) -> Result<Self> {
		Self::from_raw(T::KIND, shape, pack(items), None)
	}

	/// Build a complex array from typed real and imaginary parts.
	pub fn from_complex<T: Element>(shape: Shape, re: &[T], im: &[T]) -> Result<Self> {
		Self::from_raw(T::KIND, shape, pack(re), Some(pack(im)))
	}

	/// `1 x 1` real scalar.
	pub fn scalar<T: Element>(item: T) -> Self {
		Self {
			element: T::KIND,
			shape: Shape::scalar(),
			real: pack(&[item]),
			imag: None,
		}
	}

	/// `1 x n` real row.
	pub fn row<T: Element>(items: &[T]) -> Self {
		Self {
			element: T::KIND,
			shape: Shape::row(items.len() as u64),
			real: pack(items),
			imag: None,
		}
	}

	/// `1 x n` character row holding raw bytes.
	pub fn text(text: impl AsRef<[u8]>) -> Self {
		let bytes = text.as_ref().to_vec();
		Self {
			element: ElementKind::Char,
			shape: Shape::row(bytes.len() as u64),
			real: bytes,
			imag: None,
		}
	}

	/// Character array of arbitrary shape.
	pub fn chars(shape: Shape, bytes: Vec<u8>) -> Result<Self> {
		Self::from_raw(ElementKind::Char, shape, bytes, None)
	}

	/// Zero-element array of the given element type.
	pub fn empty(element: ElementKind) -> Self {
		Self {
			element,
			shape: Shape::empty(),
			real: Vec::new(),
			imag: None,
		}
	}

	/// Element type.
	pub fn element(&self) -> ElementKind {
		self.element
	}

	/// Wire kind, accounting for complexity.
	pub fn kind(&self) -> Kind {
		let real = self.element.kind();
		if self.imag.is_some() {
			real.to_complex().unwrap_or(real)
		} else {
			real
		}
	}

	/// Array shape.
	pub fn shape(&self) -> &Shape {
		&self.shape
	}

	/// Number of elements.
	pub fn numel(&self) -> usize {
		self.real.len() / self.element.width()
	}

	/// Whether an imaginary plane is present.
	pub fn is_complex(&self) -> bool {
		self.imag.is_some()
	}

	/// Real plane bytes.
	pub fn real_bytes(&self) -> &[u8] {
		&self.real
	}

	/// Imaginary plane bytes, if complex.
	pub fn imag_bytes(&self) -> Option<&[u8]> {
		self.imag.as_deref()
	}

	/// Typed copy of the real plane, if `T` matches the element type.
	pub fn to_vec<T: Element>(&self) -> Option<Vec<T>> {
		(T::KIND == self.element).then(|| unpack(&self.real))
	}

	/// Typed copy of the imaginary plane, if complex and `T` matches.
	pub fn imag_to_vec<T: Element>(&self) -> Option<Vec<T>> {
		let imag = self.imag.as_ref()?;
		(T::KIND == self.element).then(|| unpack(imag))
	}

	/// Character payload as text, if this is a char array.
	pub fn as_text(&self) -> Option<String> {
		(self.element == ElementKind::Char).then(|| String::from_utf8_lossy(&self.real).into_owned())
	}
}

/// Element type of a sparse matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SparseKind {
	/// Boolean non-zeros.
	Logical,
	/// `f64` non-zeros.
	Double,
	/// Complex `f64` non-zeros.
	ComplexDouble,
}

impl SparseKind {
	/// Wire kind.
	pub fn kind(self) -> Kind {
		match self {
			Self::Logical => Kind::SparseLogical,
			Self::Double => Kind::SparseDouble,
			Self::ComplexDouble => Kind::SparseComplexDouble,
		}
	}

	/// Map a sparse wire kind back.
	pub fn from_kind(kind: Kind) -> Option<Self> {
		match kind {
			Kind::SparseLogical => Some(Self::Logical),
			Kind::SparseDouble => Some(Self::Double),
			Kind::SparseComplexDouble => Some(Self::ComplexDouble),
			_ => None,
		}
	}

	/// Bytes per non-zero of one value plane.
	pub fn plane_width(self) -> usize {
		match self {
			Self::ComplexDouble => self.kind().width() / 2,
			_ => self.kind().width(),
		}
	}
}

/// Compressed-sparse-column 2-D matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
	kind: SparseKind,
	rows: u64,
	cols: u64,
	col_ptr: Vec<u64>,
	row_idx: Vec<u64>,
	real: Vec<u8>,
	imag: Option<Vec<u8>>,
}

impl SparseMatrix {
	/// Build from CSC parts with raw value planes, validating structure.
	pub fn from_raw(
		kind: SparseKind,
		rows: u64,
		cols: u64,
		col_ptr: Vec<u64>,
		row_idx: Vec<u64>,
		real: Vec<u8>,
		imag: Option<Vec<u8>>,
	) -> Result<Self> {
		let nnz = row_idx.len();
		let cols_usize = usize::try_from(cols).map_err(|_| CodecError::DimensionOverflow {
			what: "sparse columns",
			value: cols,
			max: usize::MAX as u64,
		})?;
		check_len("sparse column pointers", cols_usize.saturating_add(1), col_ptr.len())?;
		sparse::validate_column_pointers(&col_ptr, nnz)?;
		if let Some(row) = row_idx.iter().find(|row| **row >= rows) {
			return Err(CodecError::ShapeMismatch {
				what: "sparse row index bound",
				expected: usize::try_from(rows).unwrap_or(usize::MAX),
				actual: usize::try_from(*row).unwrap_or(usize::MAX),
			});
		}

		let expected = nnz * kind.plane_width();
		check_len("sparse value bytes", expected, real.len())?;
		match (kind, &imag) {
			(SparseKind::ComplexDouble, Some(imag)) => check_len("sparse imaginary bytes", expected, imag.len())?,
			(SparseKind::ComplexDouble, None) => check_len("sparse imaginary bytes", expected, 0)?,
			(_, Some(imag)) => check_len("sparse imaginary bytes", 0, imag.len())?,
			(_, None) => {}
		}
		let imag = if kind == SparseKind::ComplexDouble { imag.or_else(|| Some(Vec::new())) } else { None };

		Ok(Self {
			kind,
			rows,
			cols,
			col_ptr,
			row_idx,
			real,
			imag,
		})
	}

	/// Real sparse matrix from CSC parts.
	pub fn double(rows: u64, cols: u64, col_ptr: Vec<u64>, row_idx: Vec<u64>, values: &[f64]) -> Result<Self> {
		Self::from_raw(SparseKind::Double, rows, cols, col_ptr, row_idx, pack(values), None)
	}

	/// Boolean sparse matrix from CSC parts.
	pub fn logical(rows: u64, cols: u64, col_ptr: Vec<u64>, row_idx: Vec<u64>, values: &[bool]) -> Result<Self> {
		Self::from_raw(SparseKind::Logical, rows, cols, col_ptr, row_idx, pack(values), None)
	}

	/// Complex sparse matrix from CSC parts.
	pub fn complex(rows: u64, cols: u64, col_ptr: Vec<u64>, row_idx: Vec<u64>, re: &[f64], im: &[f64]) -> Result<Self> {
		Self::from_raw(SparseKind::ComplexDouble, rows, cols, col_ptr, row_idx, pack(re), Some(pack(im)))
	}

	/// Real sparse matrix from `(row, col, value)` triplets in any order.
	pub fn from_triplets(rows: u64, cols: u64, triplets: &[(u64, u64, f64)]) -> Result<Self> {
		let mut sorted = triplets.to_vec();
		sorted.sort_by_key(|(row, col, _)| (*col, *row));
		if let Some((_, col, _)) = sorted.iter().find(|(_, col, _)| *col >= cols) {
			return Err(CodecError::ShapeMismatch {
				what: "sparse column index bound",
				expected: usize::try_from(cols).unwrap_or(usize::MAX),
				actual: usize::try_from(*col).unwrap_or(usize::MAX),
			});
		}
		let assignment: Vec<u64> = sorted.iter().map(|(_, col, _)| *col).collect();
		let col_ptr = sparse::column_pointers(cols, &assignment, 0)?;
		let row_idx = sorted.iter().map(|(row, _, _)| *row).collect();
		let values: Vec<f64> = sorted.iter().map(|(_, _, value)| *value).collect();
		Self::double(rows, cols, col_ptr, row_idx, &values)
	}

	/// `0 x 0` matrix.
	pub fn empty(kind: SparseKind) -> Self {
		Self {
			kind,
			rows: 0,
			cols: 0,
			col_ptr: vec![0],
			row_idx: Vec::new(),
			real: Vec::new(),
			imag: (kind == SparseKind::ComplexDouble).then(Vec::new),
		}
	}

	/// Element type.
	pub fn kind(&self) -> SparseKind {
		self.kind
	}

	/// Row count.
	pub fn rows(&self) -> u64 {
		self.rows
	}

	/// Column count.
	pub fn cols(&self) -> u64 {
		self.cols
	}

	/// `rows x cols` shape.
	pub fn shape(&self) -> Shape {
		Shape::new(vec![self.rows, self.cols])
	}

	/// Number of stored non-zeros.
	pub fn nnz(&self) -> usize {
		self.row_idx.len()
	}

	/// Column pointers (`cols + 1` entries).
	pub fn col_ptr(&self) -> &[u64] {
		&self.col_ptr
	}

	/// Row index of every non-zero, column by column.
	pub fn row_idx(&self) -> &[u64] {
		&self.row_idx
	}

	/// Real value plane bytes.
	pub fn real_bytes(&self) -> &[u8] {
		&self.real
	}

	/// Imaginary value plane bytes for complex matrices.
	pub fn imag_bytes(&self) -> Option<&[u8]> {
		self.imag.as_deref()
	}

	/// Non-zero values of a real matrix.
	pub fn values_f64(&self) -> Option<Vec<f64>> {
		(self.kind != SparseKind::Logical).then(|| unpack(&self.real))
	}

	/// Imaginary parts of a complex matrix.
	pub fn imag_values_f64(&self) -> Option<Vec<f64>> {
		(self.kind == SparseKind::ComplexDouble).then(|| unpack(self.imag.as_deref().unwrap_or_default()))
	}

	/// Non-zero values of a boolean matrix.
	pub fn values_bool(&self) -> Option<Vec<bool>> {
		(self.kind == SparseKind::Logical).then(|| unpack(&self.real))
	}
}

/// Struct-like array: every element carries the same ordered fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
	shape: Shape,
	class_name: Option<Box<str>>,
	fields: Vec<Box<[u8]>>,
	values: Vec<Value>,
}

impl Record {
	/// Build from field names and element-major values
	/// (`values[elem * nfields + field]`).
	pub fn new<N: AsRef<[u8]>>(shape: Shape, fields: &[N], values: Vec<Value>) -> Result<Self> {
		let mut seen = HashSet::with_capacity(fields.len());
		let mut names = Vec::with_capacity(fields.len());
		for field in fields {
			let name = field.as_ref();
			if !seen.insert(name) {
				return Err(CodecError::DuplicateField {
					name: String::from_utf8_lossy(name).into_owned(),
				});
			}
			names.push(Box::<[u8]>::from(name));
		}

		let expected = shape.numel_usize()?.saturating_mul(names.len());
		check_len("record values", expected, values.len())?;
		Ok(Self {
			shape,
			class_name: None,
			fields: names,
			values,
		})
	}

	/// Single-element record from `(name, value)` pairs.
	pub fn scalar<N: AsRef<[u8]>>(pairs: Vec<(N, Value)>) -> Result<Self> {
		let mut fields = Vec::with_capacity(pairs.len());
		let mut values = Vec::with_capacity(pairs.len());
		for (name, value) in pairs {
			fields.push(name);
			values.push(value);
		}
		Self::new(Shape::scalar(), &fields, values)
	}

	/// Attach a host class name; such records encode as structural objects.
	pub fn with_class(mut self, class_name: impl Into<Box<str>>) -> Self {
		self.class_name = Some(class_name.into());
		self
	}

	/// Drop the host class name.
	pub fn without_class(mut self) -> Self {
		self.class_name = None;
		self
	}

	/// Record array shape.
	pub fn shape(&self) -> &Shape {
		&self.shape
	}

	/// Host class name, when this record is an object's structural form.
	pub fn class_name(&self) -> Option<&str> {
		self.class_name.as_deref()
	}

	/// Field names in order.
	pub fn field_names(&self) -> &[Box<[u8]>] {
		&self.fields
	}

	/// Number of fields.
	pub fn nfields(&self) -> usize {
		self.fields.len()
	}

	/// Number of record elements.
	pub fn numel(&self) -> usize {
		if self.fields.is_empty() {
			return usize::try_from(self.shape.numel()).unwrap_or(usize::MAX);
		}
		self.values.len() / self.fields.len()
	}

	/// All values, element-major.
	pub fn values(&self) -> &[Value] {
		&self.values
	}

	/// Value of `field` in element `elem`.
	pub fn get(&self, elem: usize, field: impl AsRef<[u8]>) -> Option<&Value> {
		let idx = self.fields.iter().position(|name| **name == *field.as_ref())?;
		self.values.get(elem.checked_mul(self.fields.len())?.checked_add(idx)?)
	}

	/// Value of `field` in the first element.
	pub fn field(&self, field: impl AsRef<[u8]>) -> Option<&Value> {
		self.get(0, field)
	}
}

/// Cell-like N-D array of heterogeneous values.
///
/// `None` slots are absent elements; they encode as the canonical empty value
/// and compare equal to it.
#[derive(Debug, Clone)]
pub struct Collection {
	shape: Shape,
	items: Vec<Option<Value>>,
}

impl Collection {
	/// Build from slots in storage order.
	pub fn new(shape: Shape, items: Vec<Option<Value>>) -> Result<Self> {
		check_len("collection elements", shape.numel_usize()?, items.len())?;
		Ok(Self { shape, items })
	}

	/// Build from present values in storage order.
	pub fn from_values(shape: Shape, items: Vec<Value>) -> Result<Self> {
		Self::new(shape, items.into_iter().map(Some).collect())
	}

	/// `1 x n` row of values.
	pub fn row(items: Vec<Value>) -> Self {
		Self {
			shape: Shape::row(items.len() as u64),
			items: items.into_iter().map(Some).collect(),
		}
	}

	/// Collection of the given shape with every slot absent.
	pub fn with_shape(shape: Shape) -> Result<Self> {
		let numel = shape.numel_usize()?;
		Ok(Self {
			shape,
			items: vec![None; numel],
		})
	}

	/// Collection shape.
	pub fn shape(&self) -> &Shape {
		&self.shape
	}

	/// Number of slots.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// True when there are no slots.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Slots in storage order.
	pub fn items(&self) -> &[Option<Value>] {
		&self.items
	}

	/// Slot `idx`, flattening absent slots to `None`.
	pub fn get(&self, idx: usize) -> Option<&Value> {
		self.items.get(idx)?.as_ref()
	}

	/// Fill slot `idx`.
	pub fn set(&mut self, idx: usize, value: Value) -> Result<()> {
		let len = self.items.len();
		let slot = self.items.get_mut(idx).ok_or(CodecError::ShapeMismatch {
			what: "collection index bound",
			expected: len,
			actual: idx,
		})?;
		*slot = Some(value);
		Ok(())
	}
}

impl PartialEq for Collection {
	fn eq(&self, other: &Self) -> bool {
		self.shape == other.shape && self.items.len() == other.items.len() && self.items.iter().zip(&other.items).all(|(a, b)| slot_eq(a, b))
	}
}

fn slot_eq(a: &Option<Value>, b: &Option<Value>) -> bool {
	match (a, b) {
		(Some(a), Some(b)) => a == b,
		(None, None) => true,
		(Some(value), None) | (None, Some(value)) => value.is_canonical_empty(),
	}
}

/// One node of the value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Dense numeric, logical, or character array.
	Numeric(NumericArray),
	/// Sparse 2-D matrix.
	Sparse(SparseMatrix),
	/// Struct-like record array.
	Record(Record),
	/// Cell-like heterogeneous array.
	Collection(Collection),
	/// Live host object.
	Object(HostRef),
	/// Live host callable.
	Handle(HostRef),
}

impl Value {
	/// Canonical empty value: `0 x 0` real double.
	pub fn empty() -> Self {
		Self::Numeric(NumericArray::empty(ElementKind::Double))
	}

	/// True for any zero-element real double array.
	pub fn is_canonical_empty(&self) -> bool {
		matches!(self, Self::Numeric(array) if array.element() == ElementKind::Double && !array.is_complex() && array.shape().is_empty())
	}

	/// Short label of the value's kind.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Numeric(array) => array.kind().name(),
			Self::Sparse(matrix) => matrix.kind().kind().name(),
			Self::Record(record) if record.class_name().is_some() => Kind::ValueObject.name(),
			Self::Record(_) => Kind::Struct.name(),
			Self::Collection(_) => Kind::Cell.name(),
			Self::Object(_) => Kind::ValueObject.name(),
			Self::Handle(_) => Kind::FunctionHandle.name(),
		}
	}

	/// Array shape, for array-shaped kinds.
	pub fn shape(&self) -> Option<Shape> {
		match self {
			Self::Numeric(array) => Some(array.shape().clone()),
			Self::Sparse(matrix) => Some(matrix.shape()),
			Self::Record(record) => Some(record.shape().clone()),
			Self::Collection(items) => Some(items.shape().clone()),
			Self::Object(_) | Self::Handle(_) => None,
		}
	}

	/// Borrow as a numeric array.
	pub fn as_numeric(&self) -> Option<&NumericArray> {
		match self {
			Self::Numeric(array) => Some(array),
			_ => None,
		}
	}

	/// Borrow as a record.
	pub fn as_record(&self) -> Option<&Record> {
		match self {
			Self::Record(record) => Some(record),
			_ => None,
		}
	}

	/// Borrow as a collection.
	pub fn as_collection(&self) -> Option<&Collection> {
		match self {
			Self::Collection(items) => Some(items),
			_ => None,
		}
	}

	/// Borrow as a sparse matrix.
	pub fn as_sparse(&self) -> Option<&SparseMatrix> {
		match self {
			Self::Sparse(matrix) => Some(matrix),
			_ => None,
		}
	}

	/// Text of a character array.
	pub fn as_text(&self) -> Option<String> {
		self.as_numeric()?.as_text()
	}
}

impl From<NumericArray> for Value {
	fn from(value: NumericArray) -> Self {
		Self::Numeric(value)
	}
}

impl From<SparseMatrix> for Value {
	fn from(value: SparseMatrix) -> Self {
		Self::Sparse(value)
	}
}

impl From<Record> for Value {
	fn from(value: Record) -> Self {
		Self::Record(value)
	}
}

impl From<Collection> for Value {
	fn from(value: Collection) -> Self {
		Self::Collection(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Numeric(NumericArray::scalar(value))
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Numeric(NumericArray::scalar(value))
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Numeric(NumericArray::text(value))
	}
}

#[cfg(test)]
mod tests;
