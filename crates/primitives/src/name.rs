use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a business-object type (`Audit`, `Control`, ...).
///
/// Used as a mapping key throughout the registry and the resolver, so it
/// borrows as `str` for lookups.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(Box<str>);

impl TypeName {
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self(name.into())
	}

	#[inline]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for TypeName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Borrow<str> for TypeName {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for TypeName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<&str> for TypeName {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

impl From<String> for TypeName {
	fn from(name: String) -> Self {
		Self::new(name)
	}
}

impl PartialEq<str> for TypeName {
	fn eq(&self, other: &str) -> bool {
		&*self.0 == other
	}
}

impl PartialEq<&str> for TypeName {
	fn eq(&self, other: &&str) -> bool {
		&*self.0 == *other
	}
}
