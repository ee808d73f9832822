use crate::codec::{CodecError, CodecOptions, ObjectModel, Result, Value, decode, decode_all, encode, encode_into, size_of};

/// Object model and options bundled for repeated use.
#[derive(Clone, Copy)]
pub struct Codec<'m> {
	model: &'m dyn ObjectModel,
	options: &'m CodecOptions,
}

impl<'m> Codec<'m> {
	/// Bundle a model with options.
	pub fn new(model: &'m dyn ObjectModel, options: &'m CodecOptions) -> Self {
		Self { model, options }
	}

	/// Options in effect.
	pub fn options(&self) -> &CodecOptions {
		self.options
	}

	/// See [`size_of`].
	pub fn size_of(&self, value: &Value) -> Result<u64> {
		size_of(value, self.model, self.options)
	}

	/// See [`encode`].
	pub fn encode(&self, value: &Value) -> Result<Vec<u8>> {
		encode(value, self.model, self.options)
	}

	/// See [`encode_into`].
	pub fn encode_into(&self, value: &Value, buf: &mut [u8], pos: &mut usize) -> Result<()> {
		encode_into(value, buf, pos, self.model, self.options)
	}

	/// Encode several values back to back into one buffer.
	pub fn encode_all(&self, values: &[Value]) -> Result<Vec<u8>> {
		let mut total = 0_u64;
		for value in values {
			total = total.saturating_add(self.size_of(value)?);
		}
		let len = usize::try_from(total).map_err(|_| CodecError::DimensionOverflow {
			what: "encoded size",
			value: total,
			max: usize::MAX as u64,
		})?;
		let mut buf = vec![0_u8; len];
		let mut pos = 0;
		for value in values {
			self.encode_into(value, &mut buf, &mut pos)?;
		}
		if pos != len {
			return Err(CodecError::SizeMismatch {
				expected: total,
				written: pos as u64,
			});
		}
		Ok(buf)
	}

	/// See [`decode`].
	pub fn decode(&self, bytes: &[u8], offset: usize) -> Result<(Value, usize)> {
		decode(bytes, offset, self.model, self.options)
	}

	/// See [`decode_all`].
	pub fn decode_all(&self, bytes: &[u8]) -> Result<Vec<Value>> {
		decode_all(bytes, self.model, self.options)
	}
}

impl std::fmt::Debug for Codec<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Codec").field("options", self.options).finish_non_exhaustive()
	}
}
