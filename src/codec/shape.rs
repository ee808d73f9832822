use std::fmt;

use crate::codec::tag::{COUNT_SIZE, NDIMS_SIZE, TAG_SIZE, Tier};
use crate::codec::{CodecError, Result};

/// Largest extent or element count that fits a wire count field.
pub const MAX_EXTENT: u64 = u32::MAX as u64;
/// Largest dimension count that fits the general-tier dimension byte.
pub const MAX_DIMS: usize = u8::MAX as usize;

/// N-dimensional array shape in canonical form.
///
/// At least two extents are kept and trailing singleton extents beyond the
/// second are dropped, so `[5]` becomes `[5, 1]` and `[2, 3, 1]` becomes `[2, 3]`.
/// All zero-element shapes compare equal.
#[derive(Clone, Eq)]
pub struct Shape {
	dims: Vec<u64>,
}

impl Shape {
	/// Build a canonical shape from raw extents.
	pub fn new(mut dims: Vec<u64>) -> Self {
		while dims.len() < 2 {
			dims.push(1);
		}
		while dims.len() > 2 && dims.last() == Some(&1) {
			dims.pop();
		}
		Self { dims }
	}

	/// `1 x 1`.
	pub fn scalar() -> Self {
		Self { dims: vec![1, 1] }
	}

	/// `0 x 0`, the canonical empty shape.
	pub fn empty() -> Self {
		Self { dims: vec![0, 0] }
	}

	/// `1 x n` row.
	pub fn row(n: u64) -> Self {
		Self { dims: vec![1, n] }
	}

	/// `n x 1` column.
	pub fn column(n: u64) -> Self {
		Self { dims: vec![n, 1] }
	}

	/// Canonical extents.
	pub fn dims(&self) -> &[u64] {
		&self.dims
	}

	/// Number of extents.
	pub fn ndims(&self) -> usize {
		self.dims.len()
	}

	/// Product of extents, saturating at `u64::MAX`.
	pub fn numel(&self) -> u64 {
		self.dims.iter().fold(1_u64, |acc, dim| acc.saturating_mul(*dim))
	}

	/// Element count as `usize`, failing on targets where it does not fit.
	pub fn numel_usize(&self) -> Result<usize> {
		let numel = self.numel();
		usize::try_from(numel).map_err(|_| CodecError::DimensionOverflow {
			what: "element count",
			value: numel,
			max: usize::MAX as u64,
		})
	}

	/// True when the shape holds no elements.
	pub fn is_empty(&self) -> bool {
		self.numel() == 0
	}

	/// Header tier for this shape. Depends on element count and dimensionality only.
	pub fn tier(&self) -> Tier {
		let numel = self.numel();
		if numel == 0 {
			Tier::Null
		} else if numel == 1 || (self.dims.len() == 2 && self.dims[0] == 1) {
			Tier::ScalarOrList
		} else {
			Tier::General
		}
	}

	/// Encoded header size in bytes, including the tag byte.
	pub fn header_size(&self) -> u64 {
		match self.tier() {
			Tier::Null => TAG_SIZE as u64,
			Tier::ScalarOrList => (TAG_SIZE + COUNT_SIZE) as u64,
			Tier::General => (TAG_SIZE + NDIMS_SIZE + COUNT_SIZE * self.dims.len()) as u64,
		}
	}

	/// Fail when any extent or the dimension count exceeds its wire field.
	pub fn check_encodable(&self) -> Result<()> {
		if self.tier() == Tier::General && self.dims.len() > MAX_DIMS {
			return Err(CodecError::DimensionOverflow {
				what: "dimension count",
				value: self.dims.len() as u64,
				max: MAX_DIMS as u64,
			});
		}
		for dim in &self.dims {
			if *dim > MAX_EXTENT {
				return Err(CodecError::DimensionOverflow {
					what: "extent",
					value: *dim,
					max: MAX_EXTENT,
				});
			}
		}
		Ok(())
	}
}

impl PartialEq for Shape {
	fn eq(&self, other: &Self) -> bool {
		if self.is_empty() && other.is_empty() {
			return true;
		}
		self.dims == other.dims
	}
}

impl fmt::Debug for Shape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Shape({self})")
	}
}

impl fmt::Display for Shape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, dim) in self.dims.iter().enumerate() {
			if idx > 0 {
				f.write_str("x")?;
			}
			write!(f, "{dim}")?;
		}
		Ok(())
	}
}

impl From<&[u64]> for Shape {
	fn from(dims: &[u64]) -> Self {
		Self::new(dims.to_vec())
	}
}

impl<const N: usize> From<[u64; N]> for Shape {
	fn from(dims: [u64; N]) -> Self {
		Self::new(dims.to_vec())
	}
}
