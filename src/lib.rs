//! Tri-state optional values for partial-update payloads.
//!
//! [`Tristate`] distinguishes a field that was never specified (`Absent`)
//! from one explicitly set to null (`Null`) and one carrying a value
//! (`Present`). With serde this maps onto key omission, `"key": null`, and
//! `"key": value` respectively:
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use tristate::Tristate;
//!
//! #[derive(Serialize, Deserialize)]
//! struct PersonPatch {
//! 	#[serde(default, skip_serializing_if = "Tristate::is_absent")]
//! 	age: Tristate<i64>,
//! }
//!
//! let patch: PersonPatch = serde_json::from_str(r#"{"age":null}"#).unwrap();
//! assert!(patch.age.is_null());
//!
//! let mut age = Some(18);
//! tristate::assign_if_specified(&mut age, patch.age);
//! assert_eq!(age, None);
//! ```

mod codec;
#[cfg(feature = "json")]
mod error;
/// Field-level helpers for JSON object records.
#[cfg(feature = "json")]
pub mod record;
mod tristate;

/// Error and result aliases.
#[cfg(feature = "json")]
pub use error::{RecordError, Result};
/// Tri-state value type and conditional assignment.
pub use tristate::{Tristate, assign_if_specified};
