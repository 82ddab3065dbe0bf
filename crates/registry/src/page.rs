use canopy_primitives::{InstanceRef, TypeName};

use crate::PageContext;

/// Fixed page context: one page object (or none) and a route path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPage {
	object: Option<InstanceRef>,
	route: String,
}

impl StaticPage {
	pub fn new(object: InstanceRef, route: impl Into<String>) -> Self {
		Self {
			object: Some(object),
			route: route.into(),
		}
	}

	/// A page without an identifiable object; building widgets for it fails.
	pub fn without_object(route: impl Into<String>) -> Self {
		Self {
			object: None,
			route: route.into(),
		}
	}
}

impl PageContext for StaticPage {
	fn current_object_type(&self) -> Option<&TypeName> {
		self.object.as_ref().map(|object| &object.type_name)
	}

	fn current_object_instance(&self) -> Option<&InstanceRef> {
		self.object.as_ref()
	}

	fn current_route_path(&self) -> &str {
		&self.route
	}
}
