use canopy_primitives::OptionValue;
use canopy_registry::{CatalogRegistry, ModelMeta};
use pretty_assertions::assert_eq;

use super::*;
use crate::fragment::{ConfigFragment, FragmentTable};
use crate::resolver::resolve;

fn registry() -> CatalogRegistry {
	CatalogRegistry::new()
		.with_type("Audit", ["Assessment", "Issue", "Evidence", "Program", "Dashboard"])
		.with_type("Program", ["Audit", "Person"])
		.with_type("Person", ["Program", "Audit"])
		.with_model(ModelMeta::new("Assessment", "assessment", "assessments", "Assessment", "Assessments"))
		.with_model(ModelMeta::new("Audit", "audit", "audits", "Audit", "Audits"))
		.with_model(ModelMeta::new("Person", "person", "people", "Person", "People"))
		.with_model(ModelMeta::new("Program", "program", "programs", "Program", "Programs"))
		.with_default_order("Audit", 70)
		.with_default_order("Person", 75)
}

fn content(table: FragmentTable) -> ResolvedDefinitions {
	resolve(&table).definitions
}

fn page() -> InstanceRef {
	InstanceRef::new("Audit", 42)
}

#[test]
fn all_three_override_layers_apply() {
	let registry = registry();
	let target = TypeName::from("Assessment");
	let page_type = TypeName::from("Audit");
	let overrides = DescriptorOverrides::new()
		.with_global("Assessment", options! { "order" => 9 })
		.with_page("Audit", "Assessment", options! { "widget_name" => "X" });
	let content = content(
		FragmentTable::new().type_entry("Audit", ConfigFragment::new().with("Assessment", options! { "allow_mapping" => true })),
	);

	let base = BaseDescriptor::for_target(&target, &page(), &registry);
	let descriptor = merge_descriptor(&target, &page_type, base, &overrides, &content);

	assert_eq!(descriptor.order(), Some(9));
	assert_eq!(descriptor.widget_name(), Some("X"));
	assert_eq!(descriptor.content_options().and_then(|o| o.get_bool("allow_mapping")), Some(true));
	assert_eq!(descriptor.kind, WidgetKind::TreeView);
	assert_eq!(descriptor.widget_id, "assessment");
	assert_eq!(descriptor.far_model(), Some(&target));
	assert_eq!(descriptor.instance(), Some(&page()));
}

#[test]
fn page_override_beats_global() {
	let registry = registry();
	let target = TypeName::from("Person");
	let overrides = DescriptorOverrides::new()
		.with_global("Person", options! { "widget_icon" => "person", "order" => 75 })
		.with_page("Program", "Person", options! { "widget_icon" => "people" });

	let base = BaseDescriptor::for_target(&target, &page(), &registry);
	let descriptor = merge_descriptor(&target, &"Program".into(), base, &overrides, &ResolvedDefinitions::default());

	assert_eq!(descriptor.options.get_str("widget_icon"), Some("people"));
	assert_eq!(descriptor.order(), Some(75));
}

#[test]
fn page_overrides_do_not_leak_to_other_pages() {
	let registry = registry();
	let target = TypeName::from("Person");
	let overrides = DescriptorOverrides::new().with_page("Program", "Person", options! { "widget_name" => "People" });

	let base = BaseDescriptor::for_target(&target, &page(), &registry);
	let descriptor = merge_descriptor(&target, &"Audit".into(), base, &overrides, &ResolvedDefinitions::default());

	assert_eq!(descriptor.widget_name(), None);
}

#[test]
fn content_merges_under_descriptor_level_controller_options() {
	let registry = registry();
	let target = TypeName::from("Person");
	let overrides = DescriptorOverrides::new().with_page(
		"Audit",
		"Person",
		options! {
			"widget_name" => "People",
			"content_controller_options" => options! { "allow_mapping" => false, "allow_creating" => false },
		},
	);
	let content = content(FragmentTable::new().type_entry(
		"Audit",
		ConfigFragment::new().with("Person", options! { "draw_children" => true, "allow_mapping" => true }),
	));

	let base = BaseDescriptor::for_target(&target, &page(), &registry);
	let descriptor = merge_descriptor(&target, &"Audit".into(), base, &overrides, &content);

	assert_eq!(descriptor.widget_name(), Some("People"));
	assert_eq!(
		descriptor.content_options(),
		Some(&options! { "allow_mapping" => true, "allow_creating" => false, "draw_children" => true })
	);
}

#[test]
fn widget_id_override_renames_widget() {
	let registry = registry();
	let target = TypeName::from("Person");
	let overrides = DescriptorOverrides::new().with_page("Program", "Person", options! { "widget_id" => "people_tab" });

	let base = BaseDescriptor::for_target(&target, &page(), &registry);
	let descriptor = merge_descriptor(&target, &"Program".into(), base, &overrides, &ResolvedDefinitions::default());

	assert_eq!(descriptor.widget_id, "people_tab");
	assert_eq!(descriptor.options.get_str("widget_id"), Some("people_tab"));
}

#[test]
fn unknown_model_becomes_pseudo_widget() {
	let registry = registry();
	let target = TypeName::from("Dashboard");
	let overrides = DescriptorOverrides::new().with_global("Dashboard", options! { "order" => 1 });

	let base = BaseDescriptor::for_target(&target, &page(), &registry);
	assert_eq!(base.widget_id, "Dashboard");
	assert!(base.options.is_empty());

	let descriptor = merge_descriptor(&target, &"Audit".into(), base, &overrides, &ResolvedDefinitions::default());
	assert!(descriptor.is_pseudo());
	assert_eq!(descriptor.instance(), None);
	assert_eq!(descriptor.order(), Some(1));
	assert_eq!(descriptor.kind, WidgetKind::TreeView);
}

#[test]
fn default_orders_come_from_registry() {
	let registry = registry();
	let mut overrides = DescriptorOverrides::new().with_global("Person", options! { "widget_icon" => "person" });
	overrides.apply_default_orders(&registry);

	assert_eq!(overrides.global("Person"), Some(&options! { "widget_icon" => "person", "order" => 75 }));
	assert_eq!(overrides.global("Audit").and_then(|o| o.get_int("order")), Some(70));
	assert_eq!(overrides.global("Assessment"), None);
}

#[test]
fn extend_replaces_same_target_entries() {
	let mut overrides = DescriptorOverrides::new()
		.with_global("Evidence", options! { "treeViewDepth" => 0 })
		.with_page("Audit", "Issue", options! { "order" => 8 })
		.with_page("Audit", "Evidence", options! { "order" => 9 });
	overrides.extend(
		DescriptorOverrides::new()
			.with_global("Evidence", options! { "order" => 3 })
			.with_page("Audit", "Issue", options! { "order" => 1 }),
	);

	assert_eq!(overrides.global("Evidence"), Some(&options! { "order" => 3 }));
	assert_eq!(overrides.for_page("Audit", "Issue").and_then(|o| o.get_int("order")), Some(1));
	assert_eq!(overrides.for_page("Audit", "Evidence").and_then(|o| o.get_int("order")), Some(9));
}

#[test]
fn serialized_descriptor_carries_widget_type() {
	let registry = registry();
	let target = TypeName::from("Audit");
	let base = BaseDescriptor::for_target(&target, &InstanceRef::new("Program", 3), &registry);
	let descriptor = merge_descriptor(&target, &"Program".into(), base, &DescriptorOverrides::new(), &ResolvedDefinitions::default());

	let json = serde_json::to_value(&descriptor).unwrap();
	assert_eq!(
		json,
		serde_json::json!({
			"widgetType": "treeview",
			"instance": { "type": "Program", "id": 3 },
			"far_model": "Audit",
			"widget_id": "audit"
		})
	);
	assert_eq!(descriptor.options.get("far_model"), Some(&OptionValue::Model("Audit".into())));
}
