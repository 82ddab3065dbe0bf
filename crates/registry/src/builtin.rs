//! Builtin governance, risk and compliance catalog.

use canopy_primitives::TypeName;

use crate::{CatalogRegistry, ModelMeta};

/// Directive and control-family types.
pub const GOVERNANCE_TYPES: &[&str] = &[
	"Contract",
	"Control",
	"Objective",
	"Policy",
	"Regulation",
	"Requirement",
	"Risk",
	"Standard",
	"Threat",
];

/// Scope objects.
pub const BUSINESS_TYPES: &[&str] = &[
	"AccessGroup",
	"DataAsset",
	"Facility",
	"Market",
	"Metric",
	"OrgGroup",
	"Process",
	"Product",
	"ProductGroup",
	"Project",
	"System",
	"TechnologyEnvironment",
	"Vendor",
];

/// (name, table singular, table plural, title singular, title plural)
const MODELS: &[(&str, &str, &str, &str, &str)] = &[
	("AccessGroup", "access_group", "access_groups", "Access Group", "Access Groups"),
	("Assessment", "assessment", "assessments", "Assessment", "Assessments"),
	("AssessmentTemplate", "assessment_template", "assessment_templates", "Assessment Template", "Assessment Templates"),
	("Audit", "audit", "audits", "Audit", "Audits"),
	("Contract", "contract", "contracts", "Contract", "Contracts"),
	("Control", "control", "controls", "Control", "Controls"),
	("DataAsset", "data_asset", "data_assets", "Data Asset", "Data Assets"),
	("Document", "document", "documents", "Document", "Documents"),
	("Evidence", "evidence", "evidence", "Evidence", "Evidence"),
	("Facility", "facility", "facilities", "Facility", "Facilities"),
	("Issue", "issue", "issues", "Issue", "Issues"),
	("Market", "market", "markets", "Market", "Markets"),
	("Metric", "metric", "metrics", "Metric", "Metrics"),
	("Objective", "objective", "objectives", "Objective", "Objectives"),
	("OrgGroup", "org_group", "org_groups", "Org Group", "Org Groups"),
	("Person", "person", "people", "Person", "People"),
	("Policy", "policy", "policies", "Policy", "Policies"),
	("Process", "process", "processes", "Process", "Processes"),
	("Product", "product", "products", "Product", "Products"),
	("ProductGroup", "product_group", "product_groups", "Product Group", "Product Groups"),
	("Program", "program", "programs", "Program", "Programs"),
	("Project", "project", "projects", "Project", "Projects"),
	("Regulation", "regulation", "regulations", "Regulation", "Regulations"),
	("Requirement", "requirement", "requirements", "Requirement", "Requirements"),
	("Risk", "risk", "risks", "Risk", "Risks"),
	("Standard", "standard", "standards", "Standard", "Standards"),
	("System", "system", "systems", "System", "Systems"),
	("TechnologyEnvironment", "technology_environment", "technology_environments", "Technology Environment", "Technology Environments"),
	("Threat", "threat", "threats", "Threat", "Threats"),
	("Vendor", "vendor", "vendors", "Vendor", "Vendors"),
];

/// Default widget ordering weights. Types not listed here sort after these.
const DEFAULT_ORDER: &[(&str, i64)] = &[
	("Standard", 25),
	("Regulation", 30),
	("Requirement", 35),
	("Objective", 40),
	("Control", 45),
	("Product", 50),
	("ProductGroup", 55),
	("System", 60),
	("Process", 65),
	("Audit", 70),
	("Person", 75),
];

fn names(groups: &[&[&str]], exclude: &str) -> Vec<TypeName> {
	groups
		.iter()
		.flat_map(|group| group.iter())
		.filter(|&&name| name != exclude)
		.map(|&name| TypeName::from(name))
		.collect()
}

/// Builds the builtin catalog: every governance and scope type, plus the
/// program, audit, assessment, issue, evidence, document and person types.
pub fn governance_catalog() -> CatalogRegistry {
	let mut registry = CatalogRegistry::new();

	registry.insert_type(
		"Program".into(),
		names(&[&["Audit"], GOVERNANCE_TYPES, BUSINESS_TYPES, &["Issue", "Document", "Person"]], "Program"),
	);
	registry.insert_type(
		"Audit".into(),
		names(
			&[&["Assessment", "AssessmentTemplate", "Issue", "Evidence", "Program", "Person"], GOVERNANCE_TYPES, BUSINESS_TYPES],
			"Audit",
		),
	);
	registry.insert_type(
		"Assessment".into(),
		names(&[&["Audit", "Issue", "Evidence", "Document"], GOVERNANCE_TYPES, BUSINESS_TYPES], "Assessment"),
	);
	registry.insert_type("AssessmentTemplate".into(), names(&[&["Audit"]], ""));
	registry.insert_type(
		"Issue".into(),
		names(&[&["Audit", "Program", "Document", "Person"], GOVERNANCE_TYPES, BUSINESS_TYPES], "Issue"),
	);
	registry.insert_type("Evidence".into(), names(&[&["Audit", "Assessment"]], ""));
	registry.insert_type(
		"Document".into(),
		names(&[&["Program", "Issue"], GOVERNANCE_TYPES, BUSINESS_TYPES], "Document"),
	);
	registry.insert_type(
		"Person".into(),
		names(&[&["Program", "Audit", "Issue", "Assessment"], GOVERNANCE_TYPES, BUSINESS_TYPES], "Person"),
	);
	for &name in GOVERNANCE_TYPES.iter().chain(BUSINESS_TYPES) {
		registry.insert_type(
			name.into(),
			names(
				&[&["Program", "Audit", "Issue", "Assessment", "Document", "Person"], GOVERNANCE_TYPES, BUSINESS_TYPES],
				name,
			),
		);
	}

	for &(name, singular, plural, title, title_plural) in MODELS {
		let mut meta = ModelMeta::new(name, singular, plural, title, title_plural);
		if name == "Audit" {
			meta = meta.with_child_tree_display_list(["Assessment", "Issue", "Evidence"]);
		}
		registry.insert_model(meta);
	}

	for &(name, weight) in DEFAULT_ORDER {
		registry = registry.with_default_order(name, weight);
	}

	registry
}
