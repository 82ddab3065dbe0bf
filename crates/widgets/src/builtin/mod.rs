//! Builtin content-option fragments and descriptor overrides.
//!
//! Template keys are resolved against [`BuildSettings::view`], so the
//! tables follow whatever view root the settings carry.

use canopy_primitives::{OptionSet, OptionValue, TypeName, keys, options};
use canopy_registry::TypeRegistry;

use crate::fragment::{ConfigFragment, FragmentTable};
use crate::merge::DescriptorOverrides;
use crate::settings::BuildSettings;


/// Mixins shared by every scope-object and control-family type entry.
const SCOPE_MIXINS: [&str; 3] = ["governance_objects", "business_objects", "issues"];

/// Types whose entry is nothing but [`SCOPE_MIXINS`].
const SCOPE_ONLY: &[&str] = &[
	"AccessGroup",
	"DataAsset",
	"Facility",
	"Market",
	"Metric",
	"OrgGroup",
	"Vendor",
	"Process",
	"Product",
	"ProductGroup",
	"Project",
	"System",
	"TechnologyEnvironment",
];

/// Types listed with nothing but `draw_children` on a person profile.
const PERSON_DRAWN: &[&str] = &[
	"Program",
	"Regulation",
	"Contract",
	"Standard",
	"Policy",
	"Audit",
	"Issue",
	"AccessGroup",
	"DataAsset",
	"Facility",
	"Market",
	"Metric",
	"OrgGroup",
	"Vendor",
	"Process",
	"Product",
	"ProductGroup",
	"Project",
	"System",
	"Risk",
	"TechnologyEnvironment",
	"Threat",
];

fn drawn() -> OptionSet {
	options! { keys::DRAW_CHILDREN => true }
}

fn drawn_with_item_view(view: String) -> OptionSet {
	options! {
		keys::DRAW_CHILDREN => true,
		keys::ADD_ITEM_VIEW => view,
	}
}

fn drawn_types<'a>(types: impl IntoIterator<Item = &'a str>) -> ConfigFragment {
	types
		.into_iter()
		.fold(ConfigFragment::new(), |fragment, name| fragment.with(name, drawn()))
}

/// Content-option fragments for every catalog type.
///
/// Options naming a `model` get the page object bound as `parent_instance`
/// when a widget list is built.
pub fn content_fragments(settings: &BuildSettings) -> FragmentTable {
	let snapshot_item = settings.view("snapshots/tree_add_item.mustache");
	let base_item = settings.view("base_objects/tree_add_item.mustache");
	let audit_item = settings.view("audits/tree_add_item.mustache");

	let mut table = FragmentTable::new()
		.helper(
			"objectives",
			ConfigFragment::new().with("Objective", drawn_with_item_view(snapshot_item.clone())),
		)
		.helper(
			"controls",
			ConfigFragment::new().with("Control", drawn_with_item_view(snapshot_item.clone())),
		)
		.helper(
			"business_objects",
			drawn_types([
				"AccessGroup",
				"DataAsset",
				"Facility",
				"Market",
				"Metric",
				"OrgGroup",
				"Vendor",
				"Process",
				"Product",
				"ProductGroup",
				"Project",
				"System",
				"Assessment",
				"Person",
				"Program",
				"Risk",
				"TechnologyEnvironment",
				"Threat",
			])
			.with(
				"Audit",
				options! {
					keys::DRAW_CHILDREN => true,
					keys::ALLOW_MAPPING => true,
					keys::ADD_ITEM_VIEW => audit_item.as_str(),
				},
			),
		)
		.helper("issues", drawn_types(["Issue"]))
		.helper(
			"governance_objects",
			drawn_types(["Contract", "Control", "Objective", "Requirement"])
				.with("Regulation", drawn_with_item_view(snapshot_item.clone()))
				.with("Policy", drawn_with_item_view(snapshot_item.clone()))
				.with("Standard", drawn_with_item_view(snapshot_item.clone())),
		)
		.helper(
			"directive",
			ConfigFragment::new()
				.mixins(["objectives", "controls", "business_objects"])
				.with("Requirement", drawn())
				.with("Audit", drawn()),
		)
		.type_entry(
			"Program",
			ConfigFragment::new()
				.mixins(["governance_objects", "objectives", "controls", "business_objects", "issues"])
				.with(
					"Audit",
					options! {
						keys::ALLOW_MAPPING => true,
						keys::DRAW_CHILDREN => true,
						keys::ADD_ITEM_VIEW => audit_item.as_str(),
					},
				)
				.with(
					"Person",
					options! {
						keys::ALLOW_READING => true,
						keys::ALLOW_MAPPING => true,
						keys::ALLOW_CREATING => true,
						keys::MODEL => TypeName::from("Person"),
						keys::DRAW_CHILDREN => true,
					},
				),
		)
		.type_entry(
			"Audit",
			ConfigFragment::new()
				.mixins(["issues", "governance_objects", "business_objects"])
				.with(
					"Program",
					options! {
						keys::DRAW_CHILDREN => true,
						keys::MODEL => TypeName::from("Program"),
						keys::ALLOW_MAPPING => false,
						keys::ALLOW_CREATING => false,
					},
				)
				.with("Requirement", drawn())
				.with("Threat", drawn())
				.with("Risk", drawn())
				.with(
					"Assessment",
					options! {
						keys::ALLOW_MAPPING => true,
						keys::DRAW_CHILDREN => true,
						keys::MODEL => TypeName::from("Assessment"),
						keys::ADD_ITEM_VIEW => settings.view("assessments/tree_add_item.mustache"),
					},
				)
				.with(
					"AssessmentTemplate",
					options! {
						keys::DRAW_CHILDREN => false,
						keys::ALLOW_MAPPING => false,
						keys::ADD_ITEM_VIEW => settings.view("assessment_templates/tree_add_item.mustache"),
					},
				)
				.with(
					"Person",
					options! {
						keys::WIDGET_ID => "person",
						keys::WIDGET_NAME => "People",
						keys::WIDGET_ICON => "person",
						keys::DRAW_CHILDREN => true,
						keys::CONTENT_CONTROLLER_OPTIONS => read_only(),
					},
				),
		);

	for name in ["Regulation", "Standard", "Policy", "Contract"] {
		table = table.type_entry(name, ConfigFragment::new().mixins(["directive", "issues"]));
	}
	for name in ["Requirement", "Objective", "Control"] {
		table = table.type_entry(name, ConfigFragment::new().mixins(SCOPE_MIXINS).with("Audit", drawn()));
	}

	table = table
		.type_entry(
			"Assessment",
			ConfigFragment::new()
				.mixins(SCOPE_MIXINS)
				.with(
					"Audit",
					options! {
						keys::DRAW_CHILDREN => true,
						keys::ALLOW_CREATING => false,
						keys::ALLOW_MAPPING => true,
						keys::ADD_ITEM_VIEW => audit_item.as_str(),
					},
				)
				.with("Requirement", drawn()),
		)
		.type_entry(
			"AssessmentTemplate",
			ConfigFragment::new().with(
				"Audit",
				options! {
					keys::DRAW_CHILDREN => true,
					keys::ALLOW_CREATING => false,
					keys::ALLOW_MAPPING => true,
				},
			),
		)
		.type_entry("Risk", ConfigFragment::new().mixins(SCOPE_MIXINS).with("Threat", drawn()))
		.type_entry("Threat", ConfigFragment::new().mixins(SCOPE_MIXINS).with("Risk", drawn()))
		.type_entry(
			"Issue",
			ConfigFragment::new()
				.mixins(["governance_objects", "business_objects"])
				.with("Control", drawn_with_item_view(base_item.clone()))
				.with("Audit", drawn_with_item_view(base_item.clone())),
		);

	for &name in SCOPE_ONLY {
		table = table.type_entry(name, ConfigFragment::new().mixins(SCOPE_MIXINS));
	}

	let person = drawn_types(PERSON_DRAWN.iter().copied())
		.mixin("issues")
		.with("Requirement", drawn_with_item_view(base_item.clone()))
		.with("Objective", drawn_with_item_view(base_item.clone()))
		.with("Control", drawn_with_item_view(base_item))
		.with(
			"Assessment",
			options! {
				keys::DRAW_CHILDREN => true,
				keys::ADD_ITEM_VIEW => OptionValue::Null,
			},
		);
	table.type_entry("Person", person)
}

fn read_only() -> OptionSet {
	options! {
		keys::ALLOW_MAPPING => false,
		keys::ALLOW_CREATING => false,
	}
}

fn people_widget() -> OptionSet {
	options! {
		keys::WIDGET_ID => "person",
		keys::WIDGET_NAME => "People",
		keys::WIDGET_ICON => "person",
	}
}

/// Builtin descriptor overrides, with the registry's default order weights
/// folded into the global table.
pub fn descriptor_overrides<R: TypeRegistry + ?Sized>(registry: &R) -> DescriptorOverrides {
	let mut overrides = DescriptorOverrides::new()
		.with_global("Evidence", options! { keys::TREE_VIEW_DEPTH => 0 })
		.with_global("AssessmentTemplate", options! { keys::TREE_VIEW_DEPTH => 0 })
		.with_global("Person", options! { keys::WIDGET_ICON => "person" })
		.with_page("Program", "Person", people_widget())
		.with_page("Audit", "Assessment", options! { keys::ORDER => 7 })
		.with_page("Audit", "Issue", options! { keys::ORDER => 8 })
		.with_page("Audit", "Evidence", options! { keys::ORDER => 9 })
		.with_page(
			"Audit",
			"Program",
			options! {
				keys::WIDGET_ID => "program",
				keys::WIDGET_NAME => "Program",
				keys::WIDGET_ICON => "program",
			},
		)
		.with_page(
			"Audit",
			"Person",
			people_widget().merged(&options! { keys::CONTENT_CONTROLLER_OPTIONS => read_only() }),
		);
	overrides.apply_default_orders(registry);
	overrides
}
