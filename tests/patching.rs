#![allow(missing_docs)]

use serde::Deserialize;
use tristate::record::{Record, decode_field};
use tristate::{Tristate, assign_if_specified};
use tristate_testkit::{from_json_str, record};

#[derive(Debug, Clone, PartialEq)]
struct User {
	name: Option<String>,
	age: Option<i64>,
	email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserPatch {
	#[serde(default)]
	name: Tristate<String>,
	#[serde(default)]
	age: Tristate<i64>,
	#[serde(default)]
	email: Tristate<String>,
}

impl User {
	fn apply(&mut self, patch: UserPatch) {
		assign_if_specified(&mut self.name, patch.name);
		assign_if_specified(&mut self.age, patch.age);
		assign_if_specified(&mut self.email, patch.email);
	}

	fn apply_record(&mut self, patch: &Record) -> tristate::Result<()> {
		decode_field(patch, "name")?.assign_to(&mut self.name);
		decode_field(patch, "age")?.assign_to(&mut self.age);
		decode_field(patch, "email")?.assign_to(&mut self.email);
		Ok(())
	}
}

fn user() -> User {
	User {
		name: Some("Ada".to_owned()),
		age: Some(18),
		email: Some("ada@example.com".to_owned()),
	}
}

#[test]
fn patch_struct_keeps_clears_and_sets() {
	let mut target = user();
	target.apply(from_json_str(r#"{"age":21,"email":null}"#));

	assert_eq!(target.name.as_deref(), Some("Ada"));
	assert_eq!(target.age, Some(21));
	assert_eq!(target.email, None);
}

#[test]
fn empty_patch_changes_nothing() {
	let mut target = user();
	target.apply(from_json_str("{}"));
	assert_eq!(target, user());
}

#[test]
fn record_patch_matches_struct_patch() {
	let body = r#"{"name":"Grace","email":null}"#;

	let mut via_struct = user();
	via_struct.apply(from_json_str(body));

	let mut via_record = user();
	via_record.apply_record(&record(body)).expect("patch applies");

	assert_eq!(via_struct, via_record);
}

#[test]
fn record_patch_rejects_malformed_field() {
	let mut target = user();
	let err = target.apply_record(&record(r#"{"name":"Grace","age":"old"}"#)).expect_err("age is malformed");

	assert_eq!(err.key(), "age");
	assert_eq!(target.name.as_deref(), Some("Grace"));
	assert_eq!(target.age, Some(18));
}
