/// Runtime limits and host conventions for sizing, encoding, and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
	/// Maximum nesting depth of records, collections, objects, and handles.
	pub max_depth: u32,
	/// Host exception class; always stored self-serializing.
	pub exception_class: Box<str>,
	/// Class name handed to the self-deserialize hook for exception blobs.
	pub exception_restore_class: Box<str>,
}

impl Default for CodecOptions {
	fn default() -> Self {
		Self {
			max_depth: 128,
			exception_class: "MException".into(),
			exception_restore_class: "MException_her".into(),
		}
	}
}

impl CodecOptions {
	/// Override the depth budget.
	pub fn with_max_depth(mut self, max_depth: u32) -> Self {
		self.max_depth = max_depth;
		self
	}

	/// Override the exception class and the class its blobs are restored as.
	pub fn with_exception_class(mut self, class_name: impl Into<Box<str>>, restore_as: impl Into<Box<str>>) -> Self {
		self.exception_class = class_name.into();
		self.exception_restore_class = restore_as.into();
		self
	}

	/// True when `class_name` is the reserved exception class.
	pub fn is_exception_class(&self, class_name: &str) -> bool {
		*self.exception_class == *class_name
	}

	pub(crate) fn enter(&self, depth: u32) -> crate::codec::Result<u32> {
		if depth >= self.max_depth {
			return Err(crate::codec::CodecError::DepthExceeded { max_depth: self.max_depth });
		}
		Ok(depth + 1)
	}
}
