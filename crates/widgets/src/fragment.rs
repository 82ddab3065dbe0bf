//! Pre-resolution configuration fragments.

use std::fmt;
use std::sync::Arc;

use canopy_primitives::{OptionSet, OptionValue};
use indexmap::IndexMap;

/// In-place edit of the definition accumulated so far.
pub type Transform = Arc<dyn Fn(&mut OptionSet) + Send + Sync>;

/// One entry of a fragment's mixin list.
#[derive(Clone)]
pub enum MixinRef {
	/// Another fragment of the same table, looked up by name.
	Named(String),
	/// Applied to the accumulator at its position in the list.
	Transform(Transform),
	/// Merged into the accumulator as-is.
	Literal(OptionSet),
}

impl MixinRef {
	pub fn named(name: impl Into<String>) -> Self {
		MixinRef::Named(name.into())
	}

	pub fn transform(f: impl Fn(&mut OptionSet) + Send + Sync + 'static) -> Self {
		MixinRef::Transform(Arc::new(f))
	}

	pub fn literal(options: OptionSet) -> Self {
		MixinRef::Literal(options)
	}
}

impl fmt::Debug for MixinRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			MixinRef::Named(name) => f.debug_tuple("Named").field(name).finish(),
			MixinRef::Transform(_) => f.write_str("Transform(..)"),
			MixinRef::Literal(options) => f.debug_tuple("Literal").field(options).finish(),
		}
	}
}

impl From<&str> for MixinRef {
	fn from(name: &str) -> Self {
		MixinRef::named(name)
	}
}

impl From<OptionSet> for MixinRef {
	fn from(options: OptionSet) -> Self {
		MixinRef::Literal(options)
	}
}

/// Unresolved configuration unit: an ordered mixin list plus own content.
///
/// The own content of a type entry maps target type names to option maps.
#[derive(Debug, Clone, Default)]
pub struct ConfigFragment {
	pub mixins: Vec<MixinRef>,
	pub literal: OptionSet,
}

impl ConfigFragment {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_literal(literal: OptionSet) -> Self {
		Self {
			mixins: Vec::new(),
			literal,
		}
	}

	pub fn mixin(mut self, mixin: impl Into<MixinRef>) -> Self {
		self.mixins.push(mixin.into());
		self
	}

	pub fn mixins<I>(mut self, mixins: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<MixinRef>,
	{
		self.mixins.extend(mixins.into_iter().map(Into::into));
		self
	}

	pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
		self.literal.insert(key, value);
		self
	}
}

/// Whether a fragment is surfaced as a resolved definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
	/// Resolved and returned, keyed by its type name.
	TypeEntry,
	/// Only reachable through mixin references.
	Helper,
}

#[derive(Debug, Clone)]
pub struct FragmentEntry {
	pub kind: FragmentKind,
	pub fragment: ConfigFragment,
}

/// Named fragments, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct FragmentTable {
	entries: IndexMap<String, FragmentEntry>,
}

impl FragmentTable {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn helper(mut self, name: impl Into<String>, fragment: ConfigFragment) -> Self {
		self.insert(name, FragmentKind::Helper, fragment);
		self
	}

	pub fn type_entry(mut self, name: impl Into<String>, fragment: ConfigFragment) -> Self {
		self.insert(name, FragmentKind::TypeEntry, fragment);
		self
	}

	/// Inserts or replaces a fragment. A replaced fragment keeps its position.
	pub fn insert(&mut self, name: impl Into<String>, kind: FragmentKind, fragment: ConfigFragment) {
		self.entries.insert(name.into(), FragmentEntry { kind, fragment });
	}

	pub fn get(&self, name: &str) -> Option<&FragmentEntry> {
		self.entries.get(name)
	}

	/// Looks up a fragment together with the table-owned copy of its name.
	pub fn get_key_value(&self, name: &str) -> Option<(&str, &FragmentEntry)> {
		self.entries.get_key_value(name).map(|(key, entry)| (key.as_str(), entry))
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &FragmentEntry)> {
		self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Adds every fragment of `other`, replacing same-named fragments.
	pub fn extend(&mut self, other: FragmentTable) {
		self.entries.extend(other.entries);
	}
}
