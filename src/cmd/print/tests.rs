use mxcodec::codec::{Collection, NumericArray, Record, Value};

use crate::cmd::print::{PrintOptions, render_value};

fn render(value: &Value, options: PrintOptions) -> String {
	let mut out = String::new();
	render_value(value, 0, 0, options, &mut out);
	out
}

#[test]
fn scalars_and_text_render_inline() {
	assert_eq!(render(&Value::from(3.5), PrintOptions::default()), "DOUBLE 1x1 = 3.5\n");
	assert_eq!(render(&Value::from("hi"), PrintOptions::default()), "CHAR 1x2 = \"hi\"\n");
}

#[test]
fn long_arrays_are_truncated() {
	let options = PrintOptions {
		max_array_items: 2,
		..PrintOptions::default()
	};
	let value = Value::from(NumericArray::row(&[1_u8, 2, 3, 4]));
	assert_eq!(render(&value, options), "UINT8 1x4 = [1, 2, ... 2 more]\n");
}

#[test]
fn records_list_fields_in_order() {
	let record = Record::scalar(vec![("a", Value::from(true)), ("b", Collection::row(vec![Value::from("x")]).into())]).expect("record");
	let rendered = render(&record.into(), PrintOptions::default());
	let expected = "STRUCT 1x1 {\n  a =\n    LOGICAL 1x1 = true\n  b =\n    CELL 1x1 [\n      CHAR 1x1 = \"x\"\n    ]\n}\n";
	assert_eq!(rendered, expected);
}

#[test]
fn depth_limit_elides_children() {
	let options = PrintOptions {
		max_print_depth: 0,
		..PrintOptions::default()
	};
	let value = Value::from(Collection::row(vec![Value::empty(), Value::empty()]));
	assert_eq!(render(&value, options), "CELL 1x2 [... 2 items]\n");
}
