//! Field-at-a-time access to JSON objects.
//!
//! These helpers make the container-level decisions explicit: the key is
//! looked up before any value is decoded, and `Absent` is filtered out
//! before anything is written.

use log::trace;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{RecordError, Result, Tristate};

/// Keyed record type the helpers operate on.
pub type Record = serde_json::Map<String, Value>;

/// Return `true` when `key` exists in `record`, whatever its value.
pub fn contains_field(record: &Record, key: &str) -> bool {
	record.contains_key(key)
}

/// Decode the tri-state field stored under `key`.
///
/// A missing key yields `Absent` and an explicit null yields `Null`. Any other
/// value must decode as `T`.
pub fn decode_field<T: DeserializeOwned>(record: &Record, key: &str) -> Result<Tristate<T>> {
	let Some(value) = record.get(key) else {
		trace!("field {key}: absent");
		return Ok(Tristate::Absent);
	};

	if value.is_null() {
		trace!("field {key}: null");
		return Ok(Tristate::Null);
	}

	let payload = T::deserialize(value).map_err(|source| RecordError::Payload { key: key.to_owned(), source })?;
	trace!("field {key}: present");
	Ok(Tristate::Present(payload))
}

/// Write `value` under `key` unless it is `Absent`.
///
/// `Absent` leaves `record` untouched. `Null` writes `null` and `Present(v)`
/// writes the payload's own encoding, replacing any previous entry.
pub fn encode_field<T: Serialize>(record: &mut Record, key: &str, value: &Tristate<T>) -> Result<()> {
	if !value.is_present_or_null() {
		trace!("field {key}: absent, not emitted");
		return Ok(());
	}

	let encoded = match value.unwrapped_optional() {
		Some(payload) => serde_json::to_value(payload).map_err(|source| RecordError::Encode { key: key.to_owned(), source })?,
		None => Value::Null,
	};
	trace!("field {key}: emitted");
	record.insert(key.to_owned(), encoded);
	Ok(())
}
