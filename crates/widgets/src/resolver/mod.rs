//! Mixin resolution.
//!
//! [`resolve`] expands every type entry of a [`FragmentTable`] into a
//! mixin-free definition. A fragment's mixins are applied left to right to
//! an empty accumulator; the fragment's own content is merged last, so it
//! wins over every mixin, and later mixins win over earlier ones. All
//! merges are shallow: a target type listed by both a mixin and the
//! fragment takes the fragment's option map wholesale.
//!
//! Resolution never fails. Undefined mixin names and reference cycles are
//! reported as [`ResolveWarning`]s and contribute nothing.

use std::fmt;

use canopy_primitives::{OptionSet, TypeName};
use indexmap::IndexMap;
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

use crate::fragment::{ConfigFragment, FragmentKind, FragmentTable, MixinRef};


/// Non-fatal problem found while resolving a fragment table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveWarning {
	/// A named mixin has no fragment in the table.
	UnresolvedMixin {
		/// Fragment whose mixin list holds the reference.
		fragment: String,
		/// The undefined name.
		mixin: String,
		/// Closest defined fragment name, if one is close enough.
		suggestion: Option<String>,
	},
	/// A named mixin refers back to a fragment still being resolved.
	MixinCycle {
		/// Fragment names from the outermost fragment to the repeated one.
		chain: Vec<String>,
	},
}

impl fmt::Display for ResolveWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ResolveWarning::UnresolvedMixin {
				fragment,
				mixin,
				suggestion,
			} => {
				write!(f, "undefined mixin '{mixin}' in '{fragment}'")?;
				if let Some(suggestion) = suggestion {
					write!(f, " (did you mean '{suggestion}'?)")?;
				}
				Ok(())
			}
			ResolveWarning::MixinCycle { chain } => write!(f, "mixin cycle: {}", chain.join(" -> ")),
		}
	}
}

/// Mixin-free definitions keyed by page type.
///
/// Each definition maps a target type name to that target's options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedDefinitions {
	by_type: IndexMap<TypeName, OptionSet>,
}

impl ResolvedDefinitions {
	pub fn get(&self, page_type: &str) -> Option<&OptionSet> {
		self.by_type.get(page_type)
	}

	/// Options of `target` within the definition of `page_type`.
	pub fn target_options(&self, page_type: &str, target: &str) -> Option<&OptionSet> {
		self.get(page_type)?.get_map(target)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&TypeName, &OptionSet)> {
		self.by_type.iter()
	}

	pub fn len(&self) -> usize {
		self.by_type.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_type.is_empty()
	}

	/// Applies `patch` to every target option map of `page_type`.
	pub fn patch_targets(&mut self, page_type: &str, mut patch: impl FnMut(&str, &mut OptionSet)) {
		let Some(definition) = self.by_type.get_mut(page_type) else {
			return;
		};
		for (target, value) in definition.iter_mut() {
			if let Some(options) = value.as_map_mut() {
				patch(target, options);
			}
		}
	}

	/// Converts back into a table of mixin-free type entries.
	///
	/// Resolving the returned table yields `self` again.
	pub fn into_fragment_table(self) -> FragmentTable {
		let mut table = FragmentTable::new();
		for (name, definition) in self.by_type {
			table.insert(name.as_str(), FragmentKind::TypeEntry, ConfigFragment::from_literal(definition));
		}
		table
	}
}

impl FromIterator<(TypeName, OptionSet)> for ResolvedDefinitions {
	fn from_iter<I: IntoIterator<Item = (TypeName, OptionSet)>>(iter: I) -> Self {
		Self {
			by_type: iter.into_iter().collect(),
		}
	}
}

/// Outcome of [`resolve`]: the definitions plus every warning raised.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
	pub definitions: ResolvedDefinitions,
	pub warnings: Vec<ResolveWarning>,
}

/// Resolves every type entry of `table`.
///
/// Helper fragments are expanded where referenced but not returned.
/// Memoization is scoped to this call.
pub fn resolve(table: &FragmentTable) -> Resolution {
	let mut resolver = Resolver {
		table,
		memo: HashMap::default(),
		partial: HashMap::default(),
		stack: Vec::new(),
		reported: HashSet::default(),
		warnings: Vec::new(),
	};

	let mut by_type = IndexMap::new();
	for (name, entry) in table.iter() {
		if entry.kind != FragmentKind::TypeEntry {
			continue;
		}
		let (definition, _) = resolver.reify(name, &entry.fragment);
		resolver.partial.clear();
		by_type.insert(TypeName::from(name), definition);
	}

	tracing::debug!(
		domain = "widgets",
		fragments = table.len(),
		definitions = by_type.len(),
		warnings = resolver.warnings.len(),
		"resolved fragment table",
	);

	Resolution {
		definitions: ResolvedDefinitions { by_type },
		warnings: resolver.warnings,
	}
}

struct Resolver<'t> {
	table: &'t FragmentTable,
	/// Fully resolved fragments.
	memo: HashMap<&'t str, OptionSet>,
	/// Results cut short by a cycle. They depend on where the cycle was
	/// entered, so they only live for one type entry.
	partial: HashMap<&'t str, OptionSet>,
	stack: Vec<&'t str>,
	/// (fragment, mixin) references already warned about.
	reported: HashSet<(&'t str, &'t str)>,
	warnings: Vec<ResolveWarning>,
}

impl<'t> Resolver<'t> {
	/// Returns the resolved fragment and whether it is free of cycle cuts.
	fn reify(&mut self, name: &'t str, fragment: &'t ConfigFragment) -> (OptionSet, bool) {
		if let Some(done) = self.memo.get(name) {
			return (done.clone(), true);
		}
		if let Some(cut) = self.partial.get(name) {
			return (cut.clone(), false);
		}

		self.stack.push(name);
		let mut acc = OptionSet::new();
		let mut complete = true;
		for mixin in &fragment.mixins {
			match mixin {
				MixinRef::Named(target) => complete &= self.expand_named(name, target, &mut acc),
				MixinRef::Transform(transform) => transform(&mut acc),
				MixinRef::Literal(options) => acc.extend_from(options),
			}
		}
		acc.extend_from(&fragment.literal);
		self.stack.pop();

		if complete {
			self.memo.insert(name, acc.clone());
		} else {
			self.partial.insert(name, acc.clone());
		}
		(acc, complete)
	}

	fn expand_named(&mut self, owner: &'t str, target: &'t str, acc: &mut OptionSet) -> bool {
		let table: &'t FragmentTable = self.table;
		let Some((target, entry)) = table.get_key_value(target) else {
			if !self.reported.insert((owner, target)) {
				return true;
			}
			let suggestion = self.suggest(target);
			tracing::warn!(
				domain = "widgets",
				fragment = owner,
				mixin = target,
				suggestion = suggestion.as_deref(),
				"undefined mixin; contributing nothing",
			);
			self.warnings.push(ResolveWarning::UnresolvedMixin {
				fragment: owner.to_string(),
				mixin: target.to_string(),
				suggestion,
			});
			return true;
		};

		if self.stack.contains(&target) {
			if !self.reported.insert((owner, target)) {
				return false;
			}
			let mut chain: Vec<String> = self.stack.iter().map(|name| name.to_string()).collect();
			chain.push(target.to_string());
			tracing::warn!(
				domain = "widgets",
				fragment = owner,
				mixin = target,
				chain = %chain.join(" -> "),
				"mixin cycle; skipping reference",
			);
			self.warnings.push(ResolveWarning::MixinCycle { chain });
			return false;
		}

		let (resolved, complete) = self.reify(target, &entry.fragment);
		acc.extend_from(&resolved);
		complete
	}

	fn suggest(&self, missing: &str) -> Option<String> {
		self.table
			.names()
			.min_by_key(|name| strsim::levenshtein(missing, name))
			.filter(|name| strsim::levenshtein(missing, name) <= 3)
			.map(str::to_string)
	}
}
