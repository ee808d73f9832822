#![allow(missing_docs)]

use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::{Value, json};

fn scratch_path(name: &str) -> PathBuf {
	std::env::temp_dir().join(format!("mxcodec-{}-{name}", std::process::id()))
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_mxcodec")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(
		output.status.success(),
		"mxcodec failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn pack(name: &str, doc: &Value, extra: &[&str]) -> PathBuf {
	let input = scratch_path(&format!("{name}.json"));
	let output = scratch_path(&format!("{name}.bin"));
	std::fs::write(&input, serde_json::to_vec(doc).expect("json")).expect("write input");

	let input_arg = input.display().to_string();
	let output_arg = output.display().to_string();
	let mut args = vec!["pack", input_arg.as_str(), output_arg.as_str()];
	args.extend_from_slice(extra);
	let result = run(&args);
	assert!(result.status.success(), "pack failed: {}", String::from_utf8_lossy(&result.stderr));
	output
}

#[test]
fn packed_document_shows_back_as_json() {
	let doc = json!({ "name": "probe", "flag": true, "items": ["x", null] });
	let path = pack("show", &doc, &[]);
	let path_arg = path.display().to_string();

	let json = run_json(&["show", &path_arg, "--json"]);
	assert_eq!(json["kind"], "STRUCT");
	assert_eq!(json["offset"], 0);
	assert_eq!(json["value"], doc);
}

#[test]
fn split_pack_lists_every_value() {
	let doc = json!([1.5, "two", [true, false]]);
	let path = pack("info", &doc, &["--split"]);
	let path_arg = path.display().to_string();

	let json = run_json(&["info", &path_arg, "--json"]);
	let values = json["values"].as_array().expect("values array");
	assert_eq!(values.len(), 3);
	assert_eq!(values[0]["kind"], "DOUBLE");
	assert_eq!(values[0]["bytes"], 13);
	assert_eq!(values[1]["offset"], 13);
	assert_eq!(values[1]["kind"], "CHAR");
	assert_eq!(values[2]["shape"], "1x2");

	let second = run_json(&["show", &path_arg, "--offset", "13", "--json"]);
	assert_eq!(second["value"], "two");
}

#[test]
fn corrupt_input_reports_error() {
	let path = scratch_path("corrupt.bin");
	std::fs::write(&path, [0x1B_u8, 0, 0]).expect("write corrupt");
	let path_arg = path.display().to_string();

	let output = run(&["info", &path_arg]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported kind tag"));
}
