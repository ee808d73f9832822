use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors produced while sizing, encoding, and decoding values.
#[derive(Debug, Error)]
pub enum CodecError {
	/// Tag byte outside the closed kind table, or a reserved kind.
	#[error("unsupported kind tag 0x{tag:02x} at offset {at}")]
	UnsupportedKind {
		/// Raw tag byte.
		tag: u8,
		/// Byte offset of the tag.
		at: usize,
	},
	/// Encoder wrote a different number of bytes than the estimator predicted.
	#[error("size/encode mismatch: estimated {expected} bytes, wrote {written}")]
	SizeMismatch {
		/// Estimated size.
		expected: u64,
		/// Bytes actually written (or attempted).
		written: u64,
	},
	/// Not enough bytes remained for a requested read.
	#[error("truncated buffer at offset {at}, need {need} bytes, remaining {rem}")]
	Truncated {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// A shape or count does not fit the field reserved for it on the wire.
	#[error("{what} {value} exceeds wire limit {max}")]
	DimensionOverflow {
		/// Which quantity overflowed.
		what: &'static str,
		/// Offending value.
		value: u64,
		/// Largest encodable value.
		max: u64,
	},
	/// The object model could not produce or rebuild a delegated value.
	#[error("delegation failed for {class_name}: {reason}")]
	Delegation {
		/// Class or callable name the request was about.
		class_name: String,
		/// Collaborator-provided explanation.
		reason: String,
	},
	/// Value nesting exceeded the configured depth budget.
	#[error("nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Stream content is structurally invalid.
	#[error("malformed stream at offset {at}: {reason}")]
	Malformed {
		/// Byte offset where the problem was detected.
		at: usize,
		/// Short description.
		reason: &'static str,
	},
	/// A value was constructed with inconsistent parts.
	#[error("{what}: expected {expected}, got {actual}")]
	ShapeMismatch {
		/// Which part was inconsistent.
		what: &'static str,
		/// Expected length or count.
		expected: usize,
		/// Actual length or count.
		actual: usize,
	},
	/// Record field names must be unique.
	#[error("duplicate record field {name:?}")]
	DuplicateField {
		/// Offending field name, lossily rendered.
		name: String,
	},
	/// Decode start offset lies beyond the input.
	#[error("offset {offset} out of range for buffer of {len} bytes")]
	OffsetOutOfRange {
		/// Requested start offset.
		offset: usize,
		/// Input length.
		len: usize,
	},
}

impl CodecError {
	/// Build a delegation failure from any displayable reason.
	pub fn delegation(class_name: impl Into<String>, reason: impl std::fmt::Display) -> Self {
		Self::Delegation {
			class_name: class_name.into(),
			reason: reason.to_string(),
		}
	}
}
