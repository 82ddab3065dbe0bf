use canopy_primitives::{InstanceRef, OptionValue, TypeName};
use canopy_registry::builtin::governance_catalog;
use canopy_registry::{StaticPage, TypeRegistry};
use canopy_widgets::{WidgetConfig, WidgetDescriptor, WidgetKind, build_widgets};
use pretty_assertions::assert_eq;

fn content_flag(descriptor: &WidgetDescriptor, key: &str) -> Option<bool> {
	descriptor.content_options().and_then(|options| options.get_bool(key))
}

#[test]
fn audit_page_uses_audit_priorities() {
	let registry = governance_catalog();
	let config = WidgetConfig::builtin(&registry);
	let page = StaticPage::new(InstanceRef::new("Audit", 12), "/audits/12");

	let built = build_widgets(&registry, &config, &page).unwrap();
	assert!(built.warnings.is_empty());
	let list = built.list;

	let fixed: Vec<_> = list.descriptors().iter().take(2).map(|d| d.widget_id.as_str()).collect();
	assert_eq!(fixed, vec!["summary", "info"]);
	assert_eq!(list.descriptors().len(), 2 + registry.adjacency("Audit").len());

	let ordered: Vec<_> = list.ordered().iter().take(6).map(|d| d.widget_id.as_str()).collect();
	assert_eq!(ordered, vec!["summary", "info", "assessment", "issue", "evidence", "standard"]);

	let assessment = list.get("assessment").unwrap();
	assert_eq!(assessment.far_model().map(TypeName::as_str), Some("Assessment"));
	assert_eq!(
		assessment
			.content_options()
			.and_then(|options| options.get("parent_instance"))
			.and_then(OptionValue::as_instance),
		Some(&InstanceRef::new("Audit", 12))
	);

	let program = list.get("program").unwrap();
	assert_eq!(program.widget_name(), Some("Program"));
	assert_eq!(content_flag(program, "allow_creating"), Some(false));

	let people = list.get("person").unwrap();
	assert_eq!(people.widget_name(), Some("People"));
	assert_eq!(people.order(), Some(75));
	assert_eq!(content_flag(people, "allow_mapping"), Some(false));
	assert_eq!(content_flag(people, "draw_children"), Some(true));

	let template = list.get("assessment_template").unwrap();
	assert_eq!(template.options.get_int("treeViewDepth"), Some(0));
	assert_eq!(content_flag(template, "draw_children"), Some(false));
}

#[test]
fn assessments_view_lists_only_assessments() {
	let registry = governance_catalog();
	let config = WidgetConfig::builtin(&registry);
	let page = StaticPage::new(InstanceRef::new("Audit", 12), "/assessments_view");

	let list = build_widgets(&registry, &config, &page).unwrap().list;
	let ids: Vec<_> = list.descriptors().iter().map(|d| d.widget_id.as_str()).collect();
	assert_eq!(ids, vec!["summary", "info", "assessment"]);
}

#[test]
fn person_profile_is_read_mostly_except_dashboard_audits() {
	let registry = governance_catalog();
	let config = WidgetConfig::builtin(&registry);

	let profile = StaticPage::new(InstanceRef::new("Person", 3), "/people/3");
	let list = build_widgets(&registry, &config, &profile).unwrap().list;
	for descriptor in list.descriptors().iter().filter(|d| d.kind == WidgetKind::TreeView) {
		assert_eq!(content_flag(descriptor, "allow_creating"), Some(false), "{}", descriptor.widget_id);
		assert_eq!(content_flag(descriptor, "allow_mapping"), Some(true), "{}", descriptor.widget_id);
	}

	let dashboard = StaticPage::new(InstanceRef::new("Person", 3), "/dashboard");
	let list = build_widgets(&registry, &config, &dashboard).unwrap().list;
	let audit = list.get("audit").unwrap();
	assert_eq!(content_flag(audit, "allow_creating"), None);
	assert_eq!(content_flag(audit, "draw_children"), Some(true));
	assert_eq!(content_flag(list.get("program").unwrap(), "allow_creating"), Some(false));
}

#[test]
fn program_page_names_people_widget() {
	let registry = governance_catalog();
	let config = WidgetConfig::builtin(&registry);
	let page = StaticPage::new(InstanceRef::new("Program", 1), "/programs/1");

	let list = build_widgets(&registry, &config, &page).unwrap().list;
	let people = list.get("person").unwrap();
	assert_eq!(people.widget_name(), Some("People"));
	assert_eq!(people.options.get_str("widget_icon"), Some("person"));
	assert_eq!(content_flag(people, "allow_creating"), Some(true));
	assert_eq!(
		people
			.content_options()
			.and_then(|options| options.get("parent_instance"))
			.and_then(OptionValue::as_instance),
		Some(&InstanceRef::new("Program", 1))
	);
	assert!(list.get("summary").is_none());
	assert_eq!(list.sub_tree_map().len(), registry.type_names().len());
}
