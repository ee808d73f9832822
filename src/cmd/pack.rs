use std::path::PathBuf;

use mxcodec::codec::{Codec, NoObjects, Value};
use serde_json::Value as JsonValue;
use tracing::info;

use crate::cmd::error::Result;
use crate::cmd::json::json_to_value;
use crate::cmd::util::{codec_options, read_input};

#[derive(clap::Args)]
pub struct Args {
	pub input: PathBuf,
	pub output: PathBuf,
	/// Encode each element of a top-level JSON array as its own value.
	#[arg(long)]
	pub split: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
}

/// Convert a JSON document to values and write their encoding.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		output,
		split,
		max_depth,
	} = args;

	let doc: JsonValue = serde_json::from_slice(&read_input(&input)?)?;
	let values = match (&doc, split) {
		(JsonValue::Array(items), true) => items.iter().map(json_to_value).collect::<Result<Vec<Value>>>()?,
		_ => vec![json_to_value(&doc)?],
	};

	let options = codec_options(max_depth);
	let bytes = Codec::new(&NoObjects, &options).encode_all(&values)?;
	std::fs::write(&output, &bytes)?;
	info!(values = values.len(), bytes = bytes.len(), output = %output.display(), "packed");

	println!("wrote {} bytes ({} values) to {}", bytes.len(), values.len(), output.display());
	Ok(())
}
