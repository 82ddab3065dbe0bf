//! Hierarchical tree-view child lists and the type picker.

use canopy_primitives::TypeName;
use canopy_registry::TypeRegistry;
use indexmap::IndexMap;
use serde::Serialize;

/// A model name paired with its human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelEntry {
	pub model_name: TypeName,
	pub display_name: String,
}

impl ModelEntry {
	fn for_type<R: TypeRegistry + ?Sized>(registry: &R, name: &TypeName) -> Self {
		let display_name = registry
			.model_for(name.as_str())
			.map_or_else(|| name.to_string(), |meta| meta.widget_name().to_string());
		Self {
			model_name: name.clone(),
			display_name,
		}
	}
}

/// Child types listed under one parent type in nested tree views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubTree {
	/// Adjacent types that are themselves known to the registry.
	pub model_list: Vec<ModelEntry>,
	/// Types to display as children: the model's explicit list, or the
	/// raw adjacency list.
	pub display_list: Vec<TypeName>,
}

/// Sub-tree of every registry type, keyed by type name in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubTreeMap(IndexMap<TypeName, SubTree>);

impl SubTreeMap {
	pub fn get(&self, parent: &str) -> Option<&SubTree> {
		self.0.get(parent)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&TypeName, &SubTree)> {
		self.0.iter()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

fn sorted_names<R: TypeRegistry + ?Sized>(registry: &R) -> Vec<&TypeName> {
	let mut names: Vec<_> = registry.type_names().iter().collect();
	names.sort();
	names
}

/// Computes the sub-tree of every type known to `registry`.
///
/// Adjacent types missing from the registry are left out of `model_list`
/// but stay in a raw `display_list`.
pub fn sub_tree_map<R: TypeRegistry + ?Sized>(registry: &R) -> SubTreeMap {
	let map = sorted_names(registry)
		.into_iter()
		.map(|name| {
			let related = registry.adjacency(name.as_str());
			let model_list = related
				.iter()
				.filter(|child| registry.contains(child.as_str()))
				.map(|child| ModelEntry::for_type(registry, child))
				.collect();
			let display_list = registry
				.model_for(name.as_str())
				.and_then(|meta| meta.child_tree_display_list.clone())
				.unwrap_or_else(|| related.to_vec());
			(name.clone(), SubTree { model_list, display_list })
		})
		.collect();
	SubTreeMap(map)
}

/// Alphabetically sorted entries for a type picker.
pub fn type_picker_entries<R: TypeRegistry + ?Sized>(registry: &R) -> Vec<ModelEntry> {
	sorted_names(registry)
		.into_iter()
		.map(|name| ModelEntry::for_type(registry, name))
		.collect()
}
