use std::fmt;
use std::hash::{Hash, Hasher};

/// Optional value that keeps "never specified" and "explicitly null" apart.
///
/// Partial-update payloads use the three states as:
/// * `Absent`: leave the field unchanged (key omitted from the record),
/// * `Null`: clear the field (`"key": null`),
/// * `Present(v)`: set the field to `v`.
///
/// When used as a serde struct field, pair it with
/// `#[serde(default, skip_serializing_if = "Tristate::is_absent")]` so key
/// absence maps to `Absent` in both directions.
#[derive(Clone, Copy)]
pub enum Tristate<T> {
	/// Field was never specified.
	Absent,
	/// Field was specified as explicitly empty.
	Null,
	/// Field was specified with a concrete value.
	Present(T),
}

impl<T> Tristate<T> {
	/// Construct the `Absent` state.
	pub const fn absent() -> Self {
		Self::Absent
	}

	/// Construct the `Null` state.
	pub const fn null() -> Self {
		Self::Null
	}

	/// Construct the `Present` state holding `value`.
	pub const fn of_value(value: T) -> Self {
		Self::Present(value)
	}

	/// Lift a conventional optional, mapping `None` to `Null`.
	pub fn from_option(value: Option<T>) -> Self {
		match value {
			Some(value) => Self::Present(value),
			None => Self::Null,
		}
	}

	/// Build from the nested-option encoding (`None`, `Some(None)`, `Some(Some(v))`).
	pub fn from_nested(value: Option<Option<T>>) -> Self {
		match value {
			None => Self::Absent,
			Some(inner) => Self::from_option(inner),
		}
	}

	/// Convert into the nested-option encoding.
	pub fn into_nested(self) -> Option<Option<T>> {
		match self {
			Self::Absent => None,
			Self::Null => Some(None),
			Self::Present(value) => Some(Some(value)),
		}
	}

	/// `true` for `Null` or `Present`, `false` for `Absent`.
	pub const fn is_present_or_null(&self) -> bool {
		!self.is_absent()
	}

	/// Alias of [`Tristate::is_present_or_null`].
	pub const fn is_defined(&self) -> bool {
		self.is_present_or_null()
	}

	/// `true` only for `Absent`. Used as the `skip_serializing_if` predicate.
	pub const fn is_absent(&self) -> bool {
		matches!(self, Self::Absent)
	}

	/// `true` only for `Null`.
	pub const fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// `true` only for `Present`.
	pub const fn is_present(&self) -> bool {
		matches!(self, Self::Present(_))
	}

	/// Collapse to a borrowed optional: `Absent` and `Null` both yield `None`.
	pub const fn unwrapped_optional(&self) -> Option<&T> {
		match self {
			Self::Present(value) => Some(value),
			Self::Absent | Self::Null => None,
		}
	}

	/// Collapse to an owned optional.
	pub fn into_optional(self) -> Option<T> {
		match self {
			Self::Present(value) => Some(value),
			Self::Absent | Self::Null => None,
		}
	}

	/// Borrow the payload while keeping the state.
	pub const fn as_ref(&self) -> Tristate<&T> {
		match self {
			Self::Absent => Tristate::Absent,
			Self::Null => Tristate::Null,
			Self::Present(value) => Tristate::Present(value),
		}
	}

	/// Map the payload of `Present`, keeping `Absent` and `Null` as-is.
	pub fn map<U, F>(self, f: F) -> Tristate<U>
	where
		F: FnOnce(T) -> U,
	{
		match self {
			Self::Absent => Tristate::Absent,
			Self::Null => Tristate::Null,
			Self::Present(value) => Tristate::Present(f(value)),
		}
	}

	/// Run `operation` with the collapsed optional unless the state is `Absent`.
	pub fn for_each_if_specified<F>(&self, operation: F)
	where
		F: FnOnce(Option<&T>),
	{
		if self.is_present_or_null() {
			operation(self.unwrapped_optional());
		}
	}

	/// Fallible form of [`Tristate::for_each_if_specified`]; `Absent` is `Ok(())`.
	pub fn try_for_each_if_specified<E, F>(&self, operation: F) -> Result<(), E>
	where
		F: FnOnce(Option<&T>) -> Result<(), E>,
	{
		if self.is_absent() {
			return Ok(());
		}
		operation(self.unwrapped_optional())
	}

	/// Overwrite `target` with the collapsed optional unless the state is `Absent`.
	pub fn assign_to(self, target: &mut Option<T>) {
		if self.is_present_or_null() {
			*target = self.into_optional();
		}
	}

	/// Value form of [`Tristate::assign_to`]: apply this state onto `current`.
	pub fn patch(self, current: Option<T>) -> Option<T> {
		match self {
			Self::Absent => current,
			Self::Null => None,
			Self::Present(value) => Some(value),
		}
	}
}

/// Conditionally assign `source` onto `target`.
///
/// `Absent` leaves `target` untouched, `Null` clears it, `Present(v)` sets it to `Some(v)`.
pub fn assign_if_specified<T>(target: &mut Option<T>, source: Tristate<T>) {
	source.assign_to(target);
}

// No `T: Default` bound.
impl<T> Default for Tristate<T> {
	fn default() -> Self {
		Self::Absent
	}
}

impl<T> From<T> for Tristate<T> {
	fn from(value: T) -> Self {
		Self::Present(value)
	}
}

impl From<&str> for Tristate<String> {
	fn from(value: &str) -> Self {
		Self::Present(value.to_owned())
	}
}

impl<T> From<Tristate<T>> for Option<Option<T>> {
	fn from(value: Tristate<T>) -> Self {
		value.into_nested()
	}
}

impl<T: PartialEq> PartialEq for Tristate<T> {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Absent, Self::Absent) | (Self::Null, Self::Null) => true,
			(Self::Present(left), Self::Present(right)) => left == right,
			_ => false,
		}
	}
}

impl<T: Eq> Eq for Tristate<T> {}

impl<T: Hash> Hash for Tristate<T> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		match self {
			Self::Absent => 0_u8.hash(state),
			Self::Null | Self::Present(_) => {
				1_u8.hash(state);
				self.unwrapped_optional().hash(state);
			}
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for Tristate<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Absent => f.write_str("Absent"),
			Self::Null => f.write_str("Null"),
			Self::Present(value) => f.debug_tuple("Present").field(value).finish(),
		}
	}
}
