//! Serde integration.
//!
//! A value-level serializer cannot drop its own key, so emission of `Absent`
//! is decided by the containing struct through
//! `skip_serializing_if = "Tristate::is_absent"`. Likewise a value-level
//! deserializer only runs when the key exists, so `Absent` comes from
//! `#[serde(default)]`. Without `default`, serde treats a missing key like an
//! explicit null and the field decodes as `Null`.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::Tristate;

impl<T: Serialize> Serialize for Tristate<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			// Only reached when the container did not skip the field.
			Self::Absent | Self::Null => serializer.serialize_none(),
			Self::Present(value) => serializer.serialize_some(value),
		}
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Tristate<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_option(TristateVisitor(PhantomData))
	}
}

struct TristateVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for TristateVisitor<T> {
	type Value = Tristate<T>;

	fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
		formatter.write_str("null or a value")
	}

	fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
		Ok(Tristate::Null)
	}

	fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
		Ok(Tristate::Null)
	}

	fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
		T::deserialize(deserializer).map(Tristate::Present)
	}
}
