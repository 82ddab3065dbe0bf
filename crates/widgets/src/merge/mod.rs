//! Layered descriptor merging.
//!
//! A related-type widget descriptor is built from up to four layers, later
//! layers overwriting earlier ones key by key:
//!
//! 1. The base descriptor (`instance` and `far_model` for known models).
//! 2. Global overrides for the target type, shared by every page type.
//! 3. Page-type-specific descriptor overrides for the target type.
//! 4. Page-type-specific content options for the target type, merged one
//!    level deep under `content_controller_options`.

use canopy_primitives::{InstanceRef, OptionSet, TypeName, keys, options};
use canopy_registry::TypeRegistry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::descriptor::{WidgetDescriptor, WidgetKind};
use crate::resolver::ResolvedDefinitions;

#[cfg(test)]
mod tests;

/// Descriptor-level overrides: one global table plus one table per page type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorOverrides {
	/// Applied on every page type.
	#[serde(default)]
	pub all: IndexMap<TypeName, OptionSet>,
	/// Keyed by page type, then target type.
	#[serde(flatten)]
	pub by_page: IndexMap<TypeName, IndexMap<TypeName, OptionSet>>,
}

impl DescriptorOverrides {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_global(mut self, target: impl Into<TypeName>, options: OptionSet) -> Self {
		self.set_global(target, options);
		self
	}

	pub fn with_page(mut self, page_type: impl Into<TypeName>, target: impl Into<TypeName>, options: OptionSet) -> Self {
		self.by_page.entry(page_type.into()).or_default().insert(target.into(), options);
		self
	}

	/// Merges `options` into the global override of `target`.
	pub fn set_global(&mut self, target: impl Into<TypeName>, options: OptionSet) {
		self.all.entry(target.into()).or_default().extend_from(&options);
	}

	pub fn global(&self, target: &str) -> Option<&OptionSet> {
		self.all.get(target)
	}

	pub fn for_page(&self, page_type: &str, target: &str) -> Option<&OptionSet> {
		self.by_page.get(page_type)?.get(target)
	}

	/// Page types with their own override table.
	pub fn page_types(&self) -> impl Iterator<Item = &TypeName> {
		self.by_page.keys()
	}

	/// Sets the global `order` of every registry type with a default weight.
	pub fn apply_default_orders<R: TypeRegistry + ?Sized>(&mut self, registry: &R) {
		for name in registry.type_names() {
			if let Some(weight) = registry.default_order_weight(name.as_str()) {
				self.set_global(name.clone(), options! { keys::ORDER => weight });
			}
		}
	}

	/// Adds every override of `other`; same-target entries are replaced.
	pub fn extend(&mut self, other: DescriptorOverrides) {
		self.all.extend(other.all);
		for (page_type, targets) in other.by_page {
			self.by_page.entry(page_type).or_default().extend(targets);
		}
	}
}

/// Layer 1: what a related-type widget starts from before any override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDescriptor {
	pub widget_id: String,
	pub options: OptionSet,
}

impl BaseDescriptor {
	/// Relation fields for known models; a bare identifier otherwise.
	pub fn for_target<R: TypeRegistry + ?Sized>(target: &TypeName, page_instance: &InstanceRef, registry: &R) -> Self {
		match registry.model_for(target.as_str()) {
			Some(meta) => Self {
				widget_id: meta.widget_id().to_string(),
				options: options! {
					keys::INSTANCE => page_instance.clone(),
					keys::FAR_MODEL => meta.name.clone(),
				},
			},
			None => Self {
				widget_id: target.to_string(),
				options: OptionSet::new(),
			},
		}
	}
}

/// Combines the override layers for one (page type, target type) pair.
///
/// A `widget_id` set by any layer renames the widget. The result is always
/// a tree-view widget; its ordering weight is left to the caller.
pub fn merge_descriptor(
	target: &TypeName,
	page_type: &TypeName,
	base: BaseDescriptor,
	overrides: &DescriptorOverrides,
	content: &ResolvedDefinitions,
) -> WidgetDescriptor {
	let BaseDescriptor { widget_id, mut options } = base;

	if let Some(global) = overrides.global(target.as_str()) {
		options.extend_from(global);
	}
	if let Some(page) = overrides.for_page(page_type.as_str(), target.as_str()) {
		options.extend_from(page);
	}
	if let Some(content) = content.target_options(page_type.as_str(), target.as_str()) {
		options.merge_nested(keys::CONTENT_CONTROLLER_OPTIONS, content);
	}

	let widget_id = options.get_str(keys::WIDGET_ID).map_or(widget_id, str::to_string);
	options.insert(keys::WIDGET_ID, widget_id.as_str());

	tracing::trace!(
		domain = "widgets",
		page_type = %page_type,
		target = %target,
		widget_id = %widget_id,
		order = options.get_int(keys::ORDER),
		"merged descriptor",
	);

	WidgetDescriptor {
		widget_id,
		target: Some(target.clone()),
		kind: WidgetKind::TreeView,
		options,
	}
}
