//! Column-pointer <-> column-assignment remapping for sparse matrices.
//!
//! The stream stores, per non-zero, the column it belongs to, so a reader can
//! rebuild column pointers in one pass without knowing column boundaries up
//! front.

use crate::codec::{CodecError, Result};

/// Expand column pointers into one column index per non-zero.
pub fn column_assignment(col_ptr: &[u64]) -> Vec<u64> {
	let nnz = col_ptr.last().copied().unwrap_or(0);
	let mut out = Vec::with_capacity(usize::try_from(nnz).unwrap_or(0));
	for (col, bounds) in col_ptr.windows(2).enumerate() {
		for _ in bounds[0]..bounds[1] {
			out.push(col as u64);
		}
	}
	out
}

/// Rebuild `cols + 1` column pointers from per-non-zero column indices.
///
/// Counts non-zeros per column into `ptr[c + 1]`, then prefix-sums left to
/// right. Assignments do not need to be sorted. `at` is the stream offset
/// reported on failure.
pub fn column_pointers(cols: u64, assignment: &[u64], at: usize) -> Result<Vec<u64>> {
	let len = usize::try_from(cols)
		.ok()
		.and_then(|cols| cols.checked_add(1))
		.ok_or(CodecError::Malformed {
			at,
			reason: "sparse column count does not fit in memory",
		})?;
	let mut ptr = vec![0_u64; len];
	for col in assignment {
		if *col >= cols {
			return Err(CodecError::Malformed {
				at,
				reason: "sparse column assignment out of range",
			});
		}
		ptr[*col as usize + 1] += 1;
	}
	for idx in 1..ptr.len() {
		ptr[idx] += ptr[idx - 1];
	}
	Ok(ptr)
}

/// Check that column pointers start at zero, never decrease, and end at `nnz`.
pub fn validate_column_pointers(col_ptr: &[u64], nnz: usize) -> Result<()> {
	let bad = |expected: usize, actual: u64| CodecError::ShapeMismatch {
		what: "sparse column pointers",
		expected,
		actual: usize::try_from(actual).unwrap_or(usize::MAX),
	};

	match col_ptr.first() {
		Some(0) => {}
		Some(first) => return Err(bad(0, *first)),
		None => return Err(bad(1, 0)),
	}
	if col_ptr.windows(2).any(|pair| pair[1] < pair[0]) {
		return Err(CodecError::ShapeMismatch {
			what: "monotone sparse column pointers",
			expected: 0,
			actual: 1,
		});
	}
	let last = col_ptr.last().copied().unwrap_or(0);
	if last != nnz as u64 {
		return Err(bad(nnz, last));
	}
	Ok(())
}

#[cfg(test)]
mod tests;
