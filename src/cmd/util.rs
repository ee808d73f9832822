use std::path::Path;

use mxcodec::codec::{CodecOptions, Value};
use serde::Serialize;

use crate::cmd::error::Result;

/// Read a whole input file.
pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>> {
	Ok(std::fs::read(path)?)
}

/// Pretty-print a serializable payload as JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Codec options with an optional depth override.
pub(crate) fn codec_options(max_depth: Option<u32>) -> CodecOptions {
	let options = CodecOptions::default();
	match max_depth {
		Some(max_depth) => options.with_max_depth(max_depth),
		None => options,
	}
}

/// Shape label such as `2x3`, or `-` for shapeless values.
pub(crate) fn shape_label(value: &Value) -> String {
	value.shape().map_or_else(|| "-".to_owned(), |shape| shape.to_string())
}

/// Truncate text to `max_chars` Unicode scalar values, marking the cut.
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
	let mut out: String = text.chars().take(max_chars).collect();
	if text.chars().count() > max_chars {
		out.push_str("...");
	}
	out
}
