#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use tristate::Tristate;
use tristate_testkit::{from_json_str, to_json_string};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct TestStruct {
	#[serde(default, skip_serializing_if = "Tristate::is_absent")]
	age: Tristate<i64>,
}

#[test]
fn undefined_is_omitted() {
	assert_eq!(to_json_string(&TestStruct::default()), "{}");
}

#[test]
fn null_is_written() {
	let test = TestStruct { age: Tristate::null() };
	assert_eq!(to_json_string(&test), r#"{"age":null}"#);
}

#[test]
fn value_is_written() {
	let test = TestStruct { age: 21.into() };
	assert_eq!(to_json_string(&test), r#"{"age":21}"#);
}

#[test]
fn every_state_round_trips() {
	for age in [Tristate::Absent, Tristate::Null, Tristate::Present(21)] {
		let test = TestStruct { age };
		assert_eq!(from_json_str::<TestStruct>(&to_json_string(&test)), test);
	}
}
