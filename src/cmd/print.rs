use std::fmt::Write;

use mxcodec::codec::{NumericArray, Record, Value};

use crate::cmd::json::element_json;
use crate::cmd::util::{shape_label, truncate};

/// Output truncation limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of fields printed for a single record element.
	pub max_fields_per_record: usize,
	/// Maximum number of Unicode scalar values printed for text.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays and collections.
	pub max_array_items: usize,
	/// Maximum recursive print depth.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_fields_per_record: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 6,
		}
	}
}

/// Render one value tree as indented text.
pub fn render_value(value: &Value, indent: usize, depth: u32, options: PrintOptions, out: &mut String) {
	let pad = " ".repeat(indent);
	let head = format!("{}{} {}", pad, value.kind_name(), shape_label(value));
	match value {
		Value::Numeric(array) => {
			let _ = writeln!(out, "{head} = {}", numeric_summary(array, options));
		}
		Value::Sparse(matrix) => {
			let _ = writeln!(out, "{head} nnz={}", matrix.nnz());
		}
		Value::Record(record) => render_record(record, &head, &pad, indent, depth, options, out),
		Value::Collection(items) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{head} [... {} items]", items.len());
				return;
			}
			let _ = writeln!(out, "{head} [");
			for slot in items.items().iter().take(options.max_array_items) {
				match slot {
					Some(item) => render_value(item, indent + 2, depth + 1, options, out),
					None => {
						let _ = writeln!(out, "{pad}  (absent)");
					}
				}
			}
			if items.len() > options.max_array_items {
				let _ = writeln!(out, "{pad}  ... {} more", items.len() - options.max_array_items);
			}
			let _ = writeln!(out, "{pad}]");
		}
		Value::Object(object) => {
			let _ = writeln!(out, "{pad}object {:?}", object.instance());
		}
		Value::Handle(handle) => {
			let _ = writeln!(out, "{pad}handle {:?}", handle.instance());
		}
	}
}

fn render_record(record: &Record, head: &str, pad: &str, indent: usize, depth: u32, options: PrintOptions, out: &mut String) {
	let head = match record.class_name() {
		Some(class_name) => format!("{head} {class_name}"),
		None => head.to_owned(),
	};
	if depth >= options.max_print_depth {
		let _ = writeln!(out, "{head} {{ ... }}");
		return;
	}
	let _ = writeln!(out, "{head} {{");
	for elem in 0..record.numel().min(options.max_array_items) {
		if record.numel() > 1 {
			let _ = writeln!(out, "{pad}  [{elem}]");
		}
		for name in record.field_names().iter().take(options.max_fields_per_record) {
			let _ = writeln!(out, "{pad}  {} =", String::from_utf8_lossy(name));
			if let Some(item) = record.get(elem, name) {
				render_value(item, indent + 4, depth + 1, options, out);
			}
		}
		if record.nfields() > options.max_fields_per_record {
			let _ = writeln!(out, "{pad}  ... {} more fields", record.nfields() - options.max_fields_per_record);
		}
	}
	if record.numel() > options.max_array_items {
		let _ = writeln!(out, "{pad}  ... {} more elements", record.numel() - options.max_array_items);
	}
	let _ = writeln!(out, "{pad}}}");
}

fn numeric_summary(array: &NumericArray, options: PrintOptions) -> String {
	if let Some(text) = array.as_text() {
		return format!("\"{}\"", truncate(&text, options.max_string_len));
	}
	let mut items = plane_summary(array, false, options);
	if array.is_complex() {
		items = format!("re {items} im {}", plane_summary(array, true, options));
	}
	items
}

fn plane_summary(array: &NumericArray, imag: bool, options: PrintOptions) -> String {
	let items = element_json(array, imag);
	let shown: Vec<String> = items.iter().take(options.max_array_items).map(ToString::to_string).collect();
	let more = items.len().saturating_sub(options.max_array_items);
	match (items.len(), more) {
		(1, _) => shown.join(""),
		(_, 0) => format!("[{}]", shown.join(", ")),
		_ => format!("[{}, ... {more} more]", shown.join(", ")),
	}
}

#[cfg(test)]
mod tests;
