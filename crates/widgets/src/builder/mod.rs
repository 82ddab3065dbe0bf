//! Per-page widget list assembly.

use std::borrow::Cow;

use canopy_primitives::{InstanceRef, TypeName, keys, options};
use canopy_registry::{PageContext, TypeRegistry};
use serde::Serialize;

use crate::config::WidgetConfig;
use crate::descriptor::{WidgetDescriptor, WidgetKind};
use crate::error::BuildError;
use crate::merge::{BaseDescriptor, DescriptorOverrides, merge_descriptor};
use crate::resolver::{Resolution, ResolveWarning, ResolvedDefinitions};
use crate::settings::BuildSettings;
use crate::subtree::{ModelEntry, SubTreeMap, sub_tree_map, type_picker_entries};


const SUMMARY_ORDER: i64 = 3;
const INFO_ORDER: i64 = 5;
const DASHBOARD_ORDER: i64 = 6;

/// Everything a page renders from: its widgets, the sub-tree map and the
/// type picker entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetList {
	page_type: TypeName,
	descriptors: Vec<WidgetDescriptor>,
	sub_tree: SubTreeMap,
	type_picker: Vec<ModelEntry>,
}

impl WidgetList {
	pub fn page_type(&self) -> &TypeName {
		&self.page_type
	}

	/// Descriptors in emission order: page-object widgets first, then one
	/// related-type widget per candidate in candidate order.
	pub fn descriptors(&self) -> &[WidgetDescriptor] {
		&self.descriptors
	}

	pub fn get(&self, widget_id: &str) -> Option<&WidgetDescriptor> {
		self.descriptors.iter().find(|descriptor| descriptor.widget_id == widget_id)
	}

	/// Descriptors in rendering order: ascending `order`, unweighted
	/// widgets last, ties kept in emission order.
	pub fn ordered(&self) -> Vec<&WidgetDescriptor> {
		let mut ordered: Vec<_> = self.descriptors.iter().collect();
		ordered.sort_by_key(|descriptor| (descriptor.order().is_none(), descriptor.order()));
		ordered
	}

	pub fn sub_tree_map(&self) -> &SubTreeMap {
		&self.sub_tree
	}

	pub fn type_picker_entries(&self) -> &[ModelEntry] {
		&self.type_picker
	}

	pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
		serde_json::to_value(self)
	}
}

/// Builds [`WidgetList`]s from a registry and pre-resolved configuration.
///
/// Holds no state between builds; every call reads its inputs afresh.
pub struct WidgetListBuilder<'a, R: TypeRegistry + ?Sized> {
	registry: &'a R,
	content: &'a ResolvedDefinitions,
	descriptors: &'a DescriptorOverrides,
	settings: &'a BuildSettings,
}

impl<'a, R: TypeRegistry + ?Sized> WidgetListBuilder<'a, R> {
	pub fn new(
		registry: &'a R,
		content: &'a ResolvedDefinitions,
		descriptors: &'a DescriptorOverrides,
		settings: &'a BuildSettings,
	) -> Self {
		Self {
			registry,
			content,
			descriptors,
			settings,
		}
	}

	/// Builds the widget list of the page described by `page`.
	///
	/// Fails only when the page object or its type is unknown. Candidate
	/// types without a model become pseudo-widgets.
	pub fn build(&self, page: &dyn PageContext) -> Result<WidgetList, BuildError> {
		let page_type = page
			.current_object_type()
			.ok_or(BuildError::MissingPageContext { what: "object type" })?;
		let instance = page
			.current_object_instance()
			.ok_or(BuildError::MissingPageContext { what: "object" })?;
		let route = page.current_route_path();

		let candidates = self.candidates(page_type, route);
		let sub_tree = sub_tree_map(self.registry);
		let type_picker = type_picker_entries(self.registry);
		let content = self.page_content(instance, route);

		let mut descriptors = self.page_object_widgets(page_type, instance);
		for target in candidates.iter() {
			let base = BaseDescriptor::for_target(target, instance, self.registry);
			let mut descriptor = merge_descriptor(target, page_type, base, self.descriptors, &content);
			bind_parent_instance(&mut descriptor, instance);
			descriptors.push(descriptor);
		}

		tracing::debug!(
			domain = "widgets",
			page_type = %page_type,
			route,
			candidates = candidates.len(),
			widgets = descriptors.len(),
			"built widget list",
		);

		Ok(WidgetList {
			page_type: page_type.clone(),
			descriptors,
			sub_tree,
			type_picker,
		})
	}

	/// Related types that get a widget on this page.
	pub fn candidates(&self, page_type: &TypeName, route: &str) -> Cow<'a, [TypeName]> {
		if self.settings.is_assessments_only(route) {
			tracing::debug!(domain = "widgets", route, "assessments-only route; single candidate");
			return Cow::Owned(vec![self.settings.assessments_only_type.clone()]);
		}
		Cow::Borrowed(self.registry.adjacency(page_type.as_str()))
	}

	/// Content options as seen by this page, after the person-profile patch.
	fn page_content(&self, instance: &InstanceRef, route: &str) -> Cow<'a, ResolvedDefinitions> {
		if instance.type_name != self.settings.person_type {
			return Cow::Borrowed(self.content);
		}
		Cow::Owned(patch_person_profile(self.content, self.settings, route))
	}

	/// Summary, dashboard and info widgets for the page object itself.
	fn page_object_widgets(&self, page_type: &TypeName, instance: &InstanceRef) -> Vec<WidgetDescriptor> {
		let table = self.registry.model_for(page_type.as_str()).map(|meta| meta.table_plural.as_str());
		let mut widgets = Vec::with_capacity(3);

		if let Some(view) = table.and_then(|table| self.settings.summary_view(table)) {
			widgets.push(page_object_widget(WidgetKind::Summary, instance, Some(view), SUMMARY_ORDER));
		}
		if self.settings.dashboard_enabled_for(page_type.as_str()) {
			let view = self.settings.view("base_objects/dashboard_widget.mustache");
			widgets.push(page_object_widget(WidgetKind::Dashboard, instance, Some(view), DASHBOARD_ORDER));
		}
		let info_view = table.and_then(|table| self.settings.info_view(table));
		widgets.push(page_object_widget(WidgetKind::Info, instance, info_view, INFO_ORDER));

		widgets
	}
}

fn page_object_widget(kind: WidgetKind, instance: &InstanceRef, view: Option<String>, order: i64) -> WidgetDescriptor {
	let widget_id = kind.as_str().to_string();
	let options = options! {
		keys::WIDGET_ID => widget_id.as_str(),
		keys::CONTENT_CONTROLLER => kind.as_str(),
		keys::INSTANCE => instance.clone(),
		keys::WIDGET_VIEW => view,
		keys::ORDER => order,
		keys::UNCOUNTABLE => true,
	};
	WidgetDescriptor {
		widget_id,
		target: None,
		kind,
		options,
	}
}

/// Content options naming a `model` list objects related to the page
/// object, which becomes their `parent_instance` unless one is set.
fn bind_parent_instance(descriptor: &mut WidgetDescriptor, instance: &InstanceRef) {
	if let Some(content) = descriptor.options.get_map_mut(keys::CONTENT_CONTROLLER_OPTIONS)
		&& content.contains_key(keys::MODEL)
		&& !content.contains_key(keys::PARENT_INSTANCE)
	{
		content.insert(keys::PARENT_INSTANCE, instance.clone());
	}
}

/// Content options for a person-profile page.
///
/// Every target of the person type's definition loses item creation and
/// gains mapping, except the excluded target on routes carrying the
/// exclusion marker. `content` itself is left untouched.
pub fn patch_person_profile(content: &ResolvedDefinitions, settings: &BuildSettings, route: &str) -> ResolvedDefinitions {
	let mut patched = content.clone();
	let person_only = options! {
		keys::ALLOW_CREATING => false,
		keys::ALLOW_MAPPING => true,
	};
	let mut count = 0usize;
	patched.patch_targets(settings.person_type.as_str(), |target, options| {
		if settings.person_patch_excludes(target, route) {
			return;
		}
		options.extend_from(&person_only);
		count += 1;
	});
	tracing::debug!(
		domain = "widgets",
		person_type = %settings.person_type,
		route,
		patched = count,
		"applied person profile content patch",
	);
	patched
}

/// A page's widget list with the warnings raised resolving its content.
#[derive(Debug, Clone)]
pub struct PageWidgets {
	pub list: WidgetList,
	pub warnings: Vec<ResolveWarning>,
}

/// Resolves `config`'s content fragments and builds the widget list of `page`.
pub fn build_widgets<R: TypeRegistry + ?Sized>(
	registry: &R,
	config: &WidgetConfig,
	page: &dyn PageContext,
) -> Result<PageWidgets, BuildError> {
	let Resolution { definitions, warnings } = config.resolve_content();
	let list = WidgetListBuilder::new(registry, &definitions, &config.descriptors, &config.settings).build(page)?;
	Ok(PageWidgets { list, warnings })
}
