use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{InstanceRef, OptionSet, TypeName};

/// A single option value inside an [`OptionSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
	/// Explicitly unset (`add_item_view: null` suppresses an inherited view).
	Null,
	Bool(bool),
	Int(i64),
	String(String),
	/// Reference to a model by type name (`model`, `far_model`).
	Model(TypeName),
	/// Reference to a page object (`instance`, `parent_instance`).
	Instance(InstanceRef),
	/// Nested options, e.g. per-target content options or
	/// `content_controller_options`.
	Map(OptionSet),
}

impl OptionValue {
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			OptionValue::Bool(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_int(&self) -> Option<i64> {
		match self {
			OptionValue::Int(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			OptionValue::String(v) => Some(v),
			_ => None,
		}
	}

	pub fn as_model(&self) -> Option<&TypeName> {
		match self {
			OptionValue::Model(v) => Some(v),
			_ => None,
		}
	}

	pub fn as_instance(&self) -> Option<&InstanceRef> {
		match self {
			OptionValue::Instance(v) => Some(v),
			_ => None,
		}
	}

	pub fn as_map(&self) -> Option<&OptionSet> {
		match self {
			OptionValue::Map(v) => Some(v),
			_ => None,
		}
	}

	pub fn as_map_mut(&mut self) -> Option<&mut OptionSet> {
		match self {
			OptionValue::Map(v) => Some(v),
			_ => None,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, OptionValue::Null)
	}
}

/// Deserialized form of hand-authored config values.
///
/// Model and instance references have no textual form and are only
/// produced by the Rust API.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
	Null,
	Bool(bool),
	Int(i64),
	String(String),
	Map(IndexMap<String, RawValue>),
}

impl From<RawValue> for OptionValue {
	fn from(raw: RawValue) -> Self {
		match raw {
			RawValue::Null => OptionValue::Null,
			RawValue::Bool(v) => OptionValue::Bool(v),
			RawValue::Int(v) => OptionValue::Int(v),
			RawValue::String(v) => OptionValue::String(v),
			RawValue::Map(entries) => OptionValue::Map(
				entries
					.into_iter()
					.map(|(key, value)| (key, OptionValue::from(value)))
					.collect(),
			),
		}
	}
}

impl<'de> Deserialize<'de> for OptionValue {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		RawValue::deserialize(deserializer).map(OptionValue::from)
	}
}

impl From<bool> for OptionValue {
	fn from(v: bool) -> Self {
		OptionValue::Bool(v)
	}
}

impl From<i32> for OptionValue {
	fn from(v: i32) -> Self {
		OptionValue::Int(i64::from(v))
	}
}

impl From<i64> for OptionValue {
	fn from(v: i64) -> Self {
		OptionValue::Int(v)
	}
}

impl From<&str> for OptionValue {
	fn from(v: &str) -> Self {
		OptionValue::String(v.to_string())
	}
}

impl From<String> for OptionValue {
	fn from(v: String) -> Self {
		OptionValue::String(v)
	}
}

impl From<TypeName> for OptionValue {
	fn from(v: TypeName) -> Self {
		OptionValue::Model(v)
	}
}

impl From<InstanceRef> for OptionValue {
	fn from(v: InstanceRef) -> Self {
		OptionValue::Instance(v)
	}
}

impl From<OptionSet> for OptionValue {
	fn from(v: OptionSet) -> Self {
		OptionValue::Map(v)
	}
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
	fn from(v: Option<T>) -> Self {
		v.map_or(OptionValue::Null, Into::into)
	}
}
