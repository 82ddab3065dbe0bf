use canopy_primitives::{InstanceRef, TypeName};

use crate::ModelMeta;

/// Read-only view of the known business-object types.
pub trait TypeRegistry {
	/// All known types, in registration order.
	fn type_names(&self) -> &[TypeName];

	/// Related types listed for `ty`, in their configured order.
	///
	/// Unknown types have no related types.
	fn adjacency(&self, ty: &str) -> &[TypeName];

	/// Model metadata for `ty`, or `None` when `ty` is not a model.
	fn model_for(&self, ty: &str) -> Option<&ModelMeta>;

	/// Default widget ordering weight for `ty`.
	fn default_order_weight(&self, ty: &str) -> Option<i64>;

	/// Returns true if `ty` is one of [`type_names`](Self::type_names).
	fn contains(&self, ty: &str) -> bool {
		self.type_names().iter().any(|name| name == ty)
	}
}

/// Access to the page currently being configured.
pub trait PageContext {
	/// Type of the page object, if one could be determined.
	fn current_object_type(&self) -> Option<&TypeName>;

	/// The page object itself.
	fn current_object_instance(&self) -> Option<&InstanceRef>;

	/// Path of the current route, used only for route-specific widget sets.
	fn current_route_path(&self) -> &str;
}
