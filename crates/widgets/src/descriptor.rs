//! Finalized widget descriptors.

use canopy_primitives::{InstanceRef, OptionSet, TypeName, keys};
use serde::{Deserialize, Serialize};

/// Rendering family of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
	/// Related objects of one target type, shown as a tree view.
	#[serde(rename = "treeview")]
	TreeView,
	/// Attributes of the page object itself.
	Info,
	/// Aggregated summary of the page object.
	Summary,
	/// Embedded dashboard for the page object.
	Dashboard,
}

impl WidgetKind {
	pub fn as_str(self) -> &'static str {
		match self {
			WidgetKind::TreeView => "treeview",
			WidgetKind::Info => "info",
			WidgetKind::Summary => "summary",
			WidgetKind::Dashboard => "dashboard",
		}
	}
}

/// Render-ready configuration of one widget.
///
/// `options` always carries the final `widget_id`; the serialized form is
/// the option map plus `widgetType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetDescriptor {
	#[serde(skip)]
	pub widget_id: String,
	/// Related type listed by the widget; `None` for page-object widgets.
	#[serde(skip)]
	pub target: Option<TypeName>,
	#[serde(rename = "widgetType")]
	pub kind: WidgetKind,
	#[serde(flatten)]
	pub options: OptionSet,
}

impl WidgetDescriptor {
	pub fn order(&self) -> Option<i64> {
		self.options.get_int(keys::ORDER)
	}

	pub fn widget_name(&self) -> Option<&str> {
		self.options.get_str(keys::WIDGET_NAME)
	}

	pub fn far_model(&self) -> Option<&TypeName> {
		self.options.get(keys::FAR_MODEL).and_then(|value| value.as_model())
	}

	pub fn instance(&self) -> Option<&InstanceRef> {
		self.options.get(keys::INSTANCE).and_then(|value| value.as_instance())
	}

	pub fn content_options(&self) -> Option<&OptionSet> {
		self.options.get_map(keys::CONTENT_CONTROLLER_OPTIONS)
	}

	/// True for related-type widgets whose target is not a known model.
	pub fn is_pseudo(&self) -> bool {
		self.kind == WidgetKind::TreeView && self.far_model().is_none()
	}
}
