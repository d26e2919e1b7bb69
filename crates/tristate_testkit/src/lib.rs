//! Shared test helpers for workspace crates.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serialize a value to compact JSON text.
pub fn to_json_string<T: Serialize>(value: &T) -> String {
	serde_json::to_string(value).expect("value serializes to json")
}

/// Deserialize a value from JSON text, panicking on malformed fixtures.
pub fn from_json_str<T: DeserializeOwned>(json: &str) -> T {
	serde_json::from_str(json).unwrap_or_else(|err| panic!("fixture {json} should decode: {err}"))
}

/// Deserialize a value from JSON text, returning the rendered error on failure.
pub fn try_from_json_str<T: DeserializeOwned>(json: &str) -> Result<T, String> {
	serde_json::from_str(json).map_err(|err| err.to_string())
}

/// Parse a JSON object literal into a keyed record.
pub fn record(json: &str) -> serde_json::Map<String, serde_json::Value> {
	match serde_json::from_str(json).expect("record fixture is valid json") {
		serde_json::Value::Object(map) => map,
		other => panic!("record fixture must be an object, got {other}"),
	}
}

/// Hash a value with the standard library's default hasher.
pub fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
	let mut hasher = DefaultHasher::new();
	value.hash(&mut hasher);
	hasher.finish()
}
