use crate::codec::{CodecError, Result};

/// Bounded cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Create a cursor starting at `offset`.
	pub fn at(bytes: &'a [u8], offset: usize) -> Result<Self> {
		if offset > bytes.len() {
			return Err(CodecError::OffsetOutOfRange { offset, len: bytes.len() });
		}
		Ok(Self { bytes, pos: offset })
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Unread tail of the input, without advancing.
	pub fn rest(&self) -> &'a [u8] {
		&self.bytes[self.pos..]
	}

	/// Fail unless at least `n` bytes remain.
	pub fn ensure(&self, n: usize) -> Result<()> {
		if n > self.remaining() {
			return Err(CodecError::Truncated {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}
		Ok(())
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		self.ensure(n)?;
		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Advance by `n` bytes without reading them.
	pub fn skip(&mut self, n: usize) -> Result<()> {
		let _ = self.read_exact(n)?;
		Ok(())
	}

	/// Read one byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_exact(1)?[0])
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(u32::from_le_bytes(buf))
	}

	/// Read `count` little-endian `u64` values.
	pub fn read_u64_run(&mut self, count: usize) -> Result<Vec<u64>> {
		let need = count.checked_mul(8).ok_or(CodecError::Truncated {
			at: self.pos,
			need: usize::MAX,
			rem: self.remaining(),
		})?;
		let raw = self.read_exact(need)?;
		Ok(raw
			.chunks_exact(8)
			.map(|chunk| {
				let mut buf = [0_u8; 8];
				buf.copy_from_slice(chunk);
				u64::from_le_bytes(buf)
			})
			.collect())
	}
}

/// Forward-only writer into a pre-sized mutable slice.
///
/// Running out of room means the size estimate and the encoder disagree.
pub struct Writer<'a> {
	buf: &'a mut [u8],
	pos: usize,
}

impl<'a> Writer<'a> {
	/// Create a writer starting at `pos`.
	pub fn new(buf: &'a mut [u8], pos: usize) -> Self {
		Self { buf, pos }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Write raw bytes.
	pub fn put(&mut self, bytes: &[u8]) -> Result<()> {
		let end = self.pos.checked_add(bytes.len()).filter(|end| *end <= self.buf.len());
		let Some(end) = end else {
			return Err(CodecError::SizeMismatch {
				expected: self.buf.len() as u64,
				written: (self.pos as u64).saturating_add(bytes.len() as u64),
			});
		};
		self.buf[self.pos..end].copy_from_slice(bytes);
		self.pos = end;
		Ok(())
	}

	/// Write one byte.
	pub fn put_u8(&mut self, value: u8) -> Result<()> {
		self.put(&[value])
	}

	/// Write a little-endian `u32`.
	pub fn put_u32_le(&mut self, value: u32) -> Result<()> {
		self.put(&value.to_le_bytes())
	}

	/// Write a little-endian `u64`.
	pub fn put_u64_le(&mut self, value: u64) -> Result<()> {
		self.put(&value.to_le_bytes())
	}
}

#[cfg(test)]
mod tests;
