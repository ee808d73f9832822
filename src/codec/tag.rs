use crate::codec::{CodecError, Result};

/// Size of the tag byte.
pub const TAG_SIZE: usize = 1;
/// Size of the dimension-count byte used by the general tier.
pub const NDIMS_SIZE: usize = 1;
/// Size of an element count or a single extent.
pub const COUNT_SIZE: usize = 4;
/// Size of one sparse row index or column assignment.
pub const INDEX_SIZE: usize = 8;

const KIND_MASK: u8 = 0x1F;
const TIER_SHIFT: u8 = 5;
const HANDLE_SHIFT: u8 = 6;

/// Closed table of encoded value kinds.
///
/// The discriminant is the on-wire kind code (low five bits of the tag byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Kind {
	/// Boolean array.
	Logical = 0,
	/// Byte character array.
	Char = 1,
	/// Reserved: host string array.
	MatlabString = 2,
	/// `f64` array.
	Double = 3,
	/// `f32` array.
	Single = 4,
	/// `i8` array.
	Int8 = 5,
	/// `u8` array.
	UInt8 = 6,
	/// `i16` array.
	Int16 = 7,
	/// `u16` array.
	UInt16 = 8,
	/// `i32` array.
	Int32 = 9,
	/// `u32` array.
	UInt32 = 10,
	/// `i64` array.
	Int64 = 11,
	/// `u64` array.
	UInt64 = 12,
	/// Complex `f64` array.
	ComplexDouble = 13,
	/// Complex `f32` array.
	ComplexSingle = 14,
	/// Complex `i8` array.
	ComplexInt8 = 15,
	/// Complex `u8` array.
	ComplexUInt8 = 16,
	/// Complex `i16` array.
	ComplexInt16 = 17,
	/// Complex `u16` array.
	ComplexUInt16 = 18,
	/// Complex `i32` array.
	ComplexInt32 = 19,
	/// Complex `u32` array.
	ComplexUInt32 = 20,
	/// Complex `i64` array.
	ComplexInt64 = 21,
	/// Complex `u64` array.
	ComplexUInt64 = 22,
	/// Heterogeneous collection.
	Cell = 23,
	/// Record array.
	Struct = 24,
	/// Callable handle.
	FunctionHandle = 25,
	/// Host object.
	ValueObject = 26,
	/// Reserved: host reference object.
	HandleObjectRef = 27,
	/// Reserved: host enumeration.
	Enum = 28,
	/// Sparse boolean matrix.
	SparseLogical = 29,
	/// Sparse `f64` matrix.
	SparseDouble = 30,
	/// Sparse complex `f64` matrix.
	SparseComplexDouble = 31,
}

const KINDS: [Kind; 32] = [
	Kind::Logical,
	Kind::Char,
	Kind::MatlabString,
	Kind::Double,
	Kind::Single,
	Kind::Int8,
	Kind::UInt8,
	Kind::Int16,
	Kind::UInt16,
	Kind::Int32,
	Kind::UInt32,
	Kind::Int64,
	Kind::UInt64,
	Kind::ComplexDouble,
	Kind::ComplexSingle,
	Kind::ComplexInt8,
	Kind::ComplexUInt8,
	Kind::ComplexInt16,
	Kind::ComplexUInt16,
	Kind::ComplexInt32,
	Kind::ComplexUInt32,
	Kind::ComplexInt64,
	Kind::ComplexUInt64,
	Kind::Cell,
	Kind::Struct,
	Kind::FunctionHandle,
	Kind::ValueObject,
	Kind::HandleObjectRef,
	Kind::Enum,
	Kind::SparseLogical,
	Kind::SparseDouble,
	Kind::SparseComplexDouble,
];

const WIDTHS: [usize; 32] = [
	1, 1, 2, 8, 4, 1, 1, 2, 2, 4, 4, 8, 8, // real
	16, 8, 2, 2, 4, 4, 8, 8, 16, 16, // complex
	0, 0, 0, 0, 0, 0, // variable length
	1, 8, 16, // sparse values
];

const NAMES: [&str; 32] = [
	"LOGICAL",
	"CHAR",
	"MATLAB_STRING",
	"DOUBLE",
	"SINGLE",
	"INT8",
	"UINT8",
	"INT16",
	"UINT16",
	"INT32",
	"UINT32",
	"INT64",
	"UINT64",
	"COMPLEX_DOUBLE",
	"COMPLEX_SINGLE",
	"COMPLEX_INT8",
	"COMPLEX_UINT8",
	"COMPLEX_INT16",
	"COMPLEX_UINT16",
	"COMPLEX_INT32",
	"COMPLEX_UINT32",
	"COMPLEX_INT64",
	"COMPLEX_UINT64",
	"CELL",
	"STRUCT",
	"FUNCTION_HANDLE",
	"VALUE_OBJECT",
	"HANDLE_OBJECT_REF",
	"ENUM",
	"SPARSE_LOGICAL",
	"SPARSE_DOUBLE",
	"SPARSE_COMPLEX_DOUBLE",
];

/// Offset between a real numeric kind code and its complex counterpart.
const COMPLEX_OFFSET: u8 = 10;

impl Kind {
	/// Map a five-bit kind code back to its kind.
	pub fn from_code(code: u8) -> Option<Self> {
		KINDS.get(usize::from(code)).copied()
	}

	/// On-wire kind code.
	pub fn code(self) -> u8 {
		self as u8
	}

	/// Fixed element width in bytes, or 0 for variable-length kinds.
	///
	/// Complex widths cover both parts of one element.
	pub fn width(self) -> usize {
		WIDTHS[self as usize]
	}

	/// Stable upper-case label.
	pub fn name(self) -> &'static str {
		NAMES[self as usize]
	}

	/// True for complex dense numeric kinds and complex sparse.
	pub fn is_complex(self) -> bool {
		matches!(self.code(), 13..=22) || self == Kind::SparseComplexDouble
	}

	/// True for sparse matrix kinds.
	pub fn is_sparse(self) -> bool {
		matches!(self, Kind::SparseLogical | Kind::SparseDouble | Kind::SparseComplexDouble)
	}

	/// True for kinds no value can produce.
	pub fn is_reserved(self) -> bool {
		matches!(self, Kind::MatlabString | Kind::HandleObjectRef | Kind::Enum)
	}

	/// Complex counterpart of a real numeric kind.
	pub fn to_complex(self) -> Option<Self> {
		match self.code() {
			3..=12 => Self::from_code(self.code() + COMPLEX_OFFSET),
			_ => None,
		}
	}

	/// Real counterpart of a complex numeric kind.
	pub fn to_real(self) -> Option<Self> {
		match self.code() {
			13..=22 => Self::from_code(self.code() - COMPLEX_OFFSET),
			_ => None,
		}
	}
}

/// Header tier chosen from element count and dimensionality only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
	/// Zero elements: tag byte only.
	Null,
	/// One element, or a `1 x n` row: tag byte plus a 4-byte count.
	ScalarOrList,
	/// Anything else: tag, dimension count, one 4-byte extent per dimension.
	General,
}

impl Tier {
	fn bits(self) -> u8 {
		match self {
			Self::Null => 0,
			Self::ScalarOrList => 1,
			Self::General => 2,
		}
	}

	fn from_bits(bits: u8) -> Option<Self> {
		match bits {
			0 => Some(Self::Null),
			1 => Some(Self::ScalarOrList),
			2 => Some(Self::General),
			_ => None,
		}
	}
}

/// Callable handle sub-kind, carried in the top two bits of the tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
	/// Reference to a named function.
	Named,
	/// Named closure with captured state.
	Closure,
	/// Anonymous function with captured state.
	Anonymous,
	/// Wrapped handle chain.
	Parented,
}

impl HandleKind {
	/// Offset added to the base handle tag.
	pub fn offset(self) -> u8 {
		match self {
			Self::Named => 0,
			Self::Closure => 64,
			Self::Anonymous => 128,
			Self::Parented => 192,
		}
	}

	fn from_bits(bits: u8) -> Self {
		match bits & 0b11 {
			0 => Self::Named,
			1 => Self::Closure,
			2 => Self::Anonymous,
			_ => Self::Parented,
		}
	}
}

/// Decoded meaning of one tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
	/// Any non-handle kind with its header tier.
	Value {
		/// Encoded kind.
		kind: Kind,
		/// Header tier that follows the tag.
		tier: Tier,
	},
	/// Callable handle of a given sub-kind.
	Handle(HandleKind),
}

impl Tag {
	/// Pack into a single byte.
	pub fn to_byte(self) -> u8 {
		match self {
			Self::Value { kind, tier } => kind.code() | (tier.bits() << TIER_SHIFT),
			Self::Handle(form) => Kind::FunctionHandle.code() + form.offset(),
		}
	}

	/// Unpack a tag byte read at offset `at`.
	pub fn from_byte(byte: u8, at: usize) -> Result<Self> {
		let unsupported = CodecError::UnsupportedKind { tag: byte, at };
		let kind = Kind::from_code(byte & KIND_MASK).ok_or_else(|| CodecError::UnsupportedKind { tag: byte, at })?;

		if kind == Kind::FunctionHandle {
			if byte & (1 << TIER_SHIFT) != 0 {
				return Err(unsupported);
			}
			return Ok(Self::Handle(HandleKind::from_bits(byte >> HANDLE_SHIFT)));
		}

		if kind.is_reserved() {
			return Err(unsupported);
		}

		let tier = Tier::from_bits(byte >> TIER_SHIFT).ok_or(unsupported)?;
		Ok(Self::Value { kind, tier })
	}
}
