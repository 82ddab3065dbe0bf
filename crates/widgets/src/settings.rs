//! Build-time settings for widget lists.

use canopy_primitives::TypeName;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Gate for the per-page dashboard widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardSettings {
	pub enabled: bool,
	/// Page types offering a dashboard. Empty means every type.
	pub types: Vec<TypeName>,
}

impl Default for DashboardSettings {
	fn default() -> Self {
		Self {
			enabled: false,
			types: ["Program", "Audit", "Control", "Objective", "Risk"].into_iter().map(TypeName::from).collect(),
		}
	}
}

/// Settings consulted while building a page's widget list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildSettings {
	/// Prefix of every template key.
	pub view_root: String,
	/// Route prefix whose pages list only [`assessments_only_type`](Self::assessments_only_type).
	pub assessments_only_route: String,
	pub assessments_only_type: TypeName,
	/// Page type whose content options are made read-mostly.
	pub person_type: TypeName,
	/// Target left untouched on person pages when the route contains
	/// [`person_excluded_route_marker`](Self::person_excluded_route_marker).
	pub person_excluded_target: TypeName,
	pub person_excluded_route_marker: String,
	pub dashboard: DashboardSettings,
	/// Summary templates, keyed by page model table name.
	pub summary_views: IndexMap<String, String>,
	/// Info templates, keyed by page model table name.
	pub info_views: IndexMap<String, String>,
}

impl Default for BuildSettings {
	fn default() -> Self {
		let info_views = [
			"programs",
			"audits",
			"people",
			"policies",
			"controls",
			"systems",
			"processes",
			"products",
			"assessments",
			"assessment_templates",
			"issues",
			"evidence",
			"documents",
			"risks",
		]
		.into_iter()
		.map(|table| (table.to_string(), format!("{table}/info.mustache")))
		.collect();

		Self {
			view_root: "/static/mustache".to_string(),
			assessments_only_route: "/assessments_view".to_string(),
			assessments_only_type: TypeName::from("Assessment"),
			person_type: TypeName::from("Person"),
			person_excluded_target: TypeName::from("Audit"),
			person_excluded_route_marker: "dashboard".to_string(),
			dashboard: DashboardSettings::default(),
			summary_views: IndexMap::from([("audits".to_string(), "audits/summary.mustache".to_string())]),
			info_views,
		}
	}
}

impl BuildSettings {
	/// Full template key for a path relative to [`view_root`](Self::view_root).
	pub fn view(&self, relative: &str) -> String {
		format!("{}/{}", self.view_root.trim_end_matches('/'), relative.trim_start_matches('/'))
	}

	pub fn is_assessments_only(&self, route: &str) -> bool {
		!self.assessments_only_route.is_empty() && route.starts_with(&self.assessments_only_route)
	}

	pub fn dashboard_enabled_for(&self, page_type: &str) -> bool {
		self.dashboard.enabled
			&& (self.dashboard.types.is_empty() || self.dashboard.types.iter().any(|ty| ty == page_type))
	}

	/// True if the person-profile patch leaves `target` alone on `route`.
	pub fn person_patch_excludes(&self, target: &str, route: &str) -> bool {
		self.person_excluded_target == target && route.contains(&self.person_excluded_route_marker)
	}

	pub fn summary_view(&self, table: &str) -> Option<String> {
		self.summary_views.get(table).map(|relative| self.view(relative))
	}

	pub fn info_view(&self, table: &str) -> Option<String> {
		self.info_views.get(table).map(|relative| self.view(relative))
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("/assessments_view", true)]
	#[case("/assessments_view/12", true)]
	#[case("/audits/3", false)]
	#[case("/programs/1/assessments_view", false)]
	fn assessments_only_route_is_a_prefix(#[case] route: &str, #[case] expected: bool) {
		assert_eq!(BuildSettings::default().is_assessments_only(route), expected);
	}

	#[rstest]
	#[case("Audit", "/dashboard", true)]
	#[case("Audit", "/people/4", false)]
	#[case("Program", "/dashboard", false)]
	fn person_patch_exclusion(#[case] target: &str, #[case] route: &str, #[case] expected: bool) {
		assert_eq!(BuildSettings::default().person_patch_excludes(target, route), expected);
	}

	#[rstest]
	#[case(false, vec![], "Audit", false)]
	#[case(true, vec![], "Vendor", true)]
	#[case(true, vec!["Audit"], "Audit", true)]
	#[case(true, vec!["Audit"], "Program", false)]
	fn dashboard_gate(#[case] enabled: bool, #[case] types: Vec<&str>, #[case] page_type: &str, #[case] expected: bool) {
		let settings = BuildSettings {
			dashboard: DashboardSettings {
				enabled,
				types: types.into_iter().map(TypeName::from).collect(),
			},
			..BuildSettings::default()
		};
		assert_eq!(settings.dashboard_enabled_for(page_type), expected);
	}

	#[test]
	fn views_join_root_and_relative_path() {
		let settings = BuildSettings {
			view_root: "/static/mustache/".to_string(),
			..BuildSettings::default()
		};
		assert_eq!(settings.view("/audits/info.mustache"), "/static/mustache/audits/info.mustache");
		assert_eq!(settings.info_view("audits").as_deref(), Some("/static/mustache/audits/info.mustache"));
		assert_eq!(settings.summary_view("audits").as_deref(), Some("/static/mustache/audits/summary.mustache"));
		assert_eq!(settings.summary_view("programs"), None);
		assert_eq!(settings.info_view("vendors"), None);
	}
}
