use canopy_primitives::TypeName;
use serde::{Deserialize, Serialize};

/// Display and storage metadata for one model type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMeta {
	pub name: TypeName,
	pub table_singular: String,
	pub table_plural: String,
	pub title_singular: String,
	pub title_plural: String,
	/// Explicit child list for hierarchical tree views. When absent the
	/// type's adjacency list is displayed instead.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub child_tree_display_list: Option<Vec<TypeName>>,
}

impl ModelMeta {
	pub fn new(
		name: impl Into<TypeName>,
		table_singular: impl Into<String>,
		table_plural: impl Into<String>,
		title_singular: impl Into<String>,
		title_plural: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			table_singular: table_singular.into(),
			table_plural: table_plural.into(),
			title_singular: title_singular.into(),
			title_plural: title_plural.into(),
			child_tree_display_list: None,
		}
	}

	pub fn with_child_tree_display_list<I, T>(mut self, children: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<TypeName>,
	{
		self.child_tree_display_list = Some(children.into_iter().map(Into::into).collect());
		self
	}

	/// Widget identifier of this model's related-object widget.
	#[inline]
	pub fn widget_id(&self) -> &str {
		&self.table_singular
	}

	/// Human-readable label of this model's related-object widget.
	#[inline]
	pub fn widget_name(&self) -> &str {
		&self.title_plural
	}
}
