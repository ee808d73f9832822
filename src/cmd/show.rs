use std::path::PathBuf;

use mxcodec::codec::{Codec, NoObjects};

use crate::cmd::error::Result;
use crate::cmd::json::value_to_json;
use crate::cmd::print::{PrintOptions, render_value};
use crate::cmd::util::{codec_options, emit_json, read_input, shape_label};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long, default_value_t = 0)]
	pub offset: usize,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "max-array")]
	pub max_array: Option<usize>,
	#[arg(long = "max-print-depth")]
	pub max_print_depth: Option<u32>,
}

/// Decode one value and print its tree.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		offset,
		json,
		max_depth,
		max_array,
		max_print_depth,
	} = args;

	let bytes = read_input(&path)?;
	let options = codec_options(max_depth);
	let (value, consumed) = Codec::new(&NoObjects, &options).decode(&bytes, offset)?;

	if json {
		return emit_json(&ShowJson {
			path: path.display().to_string(),
			offset,
			consumed,
			kind: value.kind_name(),
			shape: shape_label(&value),
			value: value_to_json(&value),
		});
	}

	let mut print = PrintOptions::default();
	if let Some(max_array) = max_array {
		print.max_array_items = max_array;
	}
	if let Some(max_print_depth) = max_print_depth {
		print.max_print_depth = max_print_depth;
	}

	let mut out = String::new();
	render_value(&value, 2, 0, print, &mut out);
	println!("path: {}", path.display());
	println!("offset: {offset}");
	println!("consumed: {consumed}");
	println!("value:");
	print!("{out}");
	Ok(())
}

#[derive(serde::Serialize)]
struct ShowJson {
	path: String,
	offset: usize,
	consumed: usize,
	kind: &'static str,
	shape: String,
	value: serde_json::Value,
}
