use std::path::PathBuf;

use mxcodec::codec::{Codec, NoObjects};

use crate::cmd::error::Result;
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
}

/// List every back-to-back value stored in a file.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		offset,
		json,
		max_depth,
	} = args;

	let bytes = read_input(&path)?;
	let options = codec_options(max_depth);
	let codec = Codec::new(&NoObjects, &options);

	let mut entries = Vec::new();
	let mut pos = offset;
	loop {
		let (value, consumed) = codec.decode(&bytes, pos)?;
		entries.push(EntryJson {
			offset: pos,
			kind: value.kind_name(),
			shape: shape_label(&value),
			bytes: consumed,
		});
		pos += consumed;
		if pos >= bytes.len() {
			break;
		}
	}

	if json {
		return emit_json(&InfoJson {
			path: path.display().to_string(),
			total_bytes: bytes.len(),
			start_offset: offset,
			values: entries,
		});
	}

	println!("path: {}", path.display());
	println!("total_bytes: {}", bytes.len());
	println!("start_offset: {offset}");
	println!("values: {}", entries.len());
	for entry in &entries {
		println!("  @{} {} {} ({} bytes)", entry.offset, entry.kind, entry.shape, entry.bytes);
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	total_bytes: usize,
	start_offset: usize,
	values: Vec<EntryJson>,
}

#[derive(serde::Serialize)]
struct EntryJson {
	offset: usize,
	kind: &'static str,
	shape: String,
	bytes: usize,
}
