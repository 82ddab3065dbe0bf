use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

use crate::OptionValue;

/// Insertion-ordered mapping of option name to value.
///
/// Ordering follows first insertion; overwriting a key keeps its slot. This
/// keeps descriptor output and per-target iteration reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSet(IndexMap<String, OptionValue>);

impl OptionSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insert.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
		self.insert(key, value);
		self
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Option<OptionValue> {
		self.0.insert(key.into(), value.into())
	}

	pub fn get(&self, key: &str) -> Option<&OptionValue> {
		self.0.get(key)
	}

	pub fn get_mut(&mut self, key: &str) -> Option<&mut OptionValue> {
		self.0.get_mut(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	pub fn get_bool(&self, key: &str) -> Option<bool> {
		self.get(key).and_then(OptionValue::as_bool)
	}

	pub fn get_int(&self, key: &str) -> Option<i64> {
		self.get(key).and_then(OptionValue::as_int)
	}

	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(OptionValue::as_str)
	}

	pub fn get_map(&self, key: &str) -> Option<&OptionSet> {
		self.get(key).and_then(OptionValue::as_map)
	}

	pub fn get_map_mut(&mut self, key: &str) -> Option<&mut OptionSet> {
		self.get_mut(key).and_then(OptionValue::as_map_mut)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut OptionValue)> {
		self.0.iter_mut().map(|(k, v)| (k.as_str(), v))
	}

	/// Shallow last-write-wins merge: every key of `other` overwrites the
	/// key of the same name here. Nested maps are replaced, not merged.
	pub fn extend_from(&mut self, other: &OptionSet) {
		for (key, value) in &other.0 {
			self.0.insert(key.clone(), value.clone());
		}
	}

	/// Consuming form of [`extend_from`](Self::extend_from).
	pub fn merged(mut self, other: &OptionSet) -> Self {
		self.extend_from(other);
		self
	}

	/// Merges `other` one level deep under `key`.
	///
	/// Keys of `other` overwrite keys of the nested map stored at `key`;
	/// keys of the nested map that `other` does not mention survive. A
	/// missing or non-map value at `key` is replaced by a copy of `other`.
	pub fn merge_nested(&mut self, key: &str, other: &OptionSet) {
		match self.0.entry(key.to_string()) {
			Entry::Occupied(mut slot) => match slot.get_mut() {
				OptionValue::Map(nested) => nested.extend_from(other),
				value => *value = OptionValue::Map(other.clone()),
			},
			Entry::Vacant(slot) => {
				slot.insert(OptionValue::Map(other.clone()));
			}
		}
	}
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for OptionSet {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

impl IntoIterator for OptionSet {
	type Item = (String, OptionValue);
	type IntoIter = indexmap::map::IntoIter<String, OptionValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a OptionSet {
	type Item = (&'a String, &'a OptionValue);
	type IntoIter = indexmap::map::Iter<'a, String, OptionValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
