//! In-memory [`TypeRegistry`] implementation.

use canopy_primitives::TypeName;
use rustc_hash::FxHashMap as HashMap;

use crate::{ModelMeta, TypeRegistry};


/// Registry assembled from explicit type, model and ordering entries.
///
/// Types are listed in the order they were first added. Models may be
/// registered for names that are not listed types (and the other way
/// round); the widget engine treats the two independently.
#[derive(Debug, Clone, Default)]
pub struct CatalogRegistry {
	names: Vec<TypeName>,
	adjacency: HashMap<TypeName, Vec<TypeName>>,
	models: HashMap<TypeName, ModelMeta>,
	order_weights: HashMap<TypeName, i64>,
}

impl CatalogRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds (or replaces the adjacency of) a listed type.
	pub fn with_type<I, T>(mut self, name: impl Into<TypeName>, related: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<TypeName>,
	{
		self.insert_type(name.into(), related.into_iter().map(Into::into).collect());
		self
	}

	pub fn with_model(mut self, meta: ModelMeta) -> Self {
		self.insert_model(meta);
		self
	}

	pub fn with_default_order(mut self, name: impl Into<TypeName>, weight: i64) -> Self {
		self.order_weights.insert(name.into(), weight);
		self
	}

	pub fn insert_type(&mut self, name: TypeName, related: Vec<TypeName>) {
		if !self.adjacency.contains_key(&name) {
			self.names.push(name.clone());
		}
		self.adjacency.insert(name, related);
	}

	pub fn insert_model(&mut self, meta: ModelMeta) {
		self.models.insert(meta.name.clone(), meta);
	}
}

impl TypeRegistry for CatalogRegistry {
	fn type_names(&self) -> &[TypeName] {
		&self.names
	}

	fn adjacency(&self, ty: &str) -> &[TypeName] {
		self.adjacency.get(ty).map(Vec::as_slice).unwrap_or(&[])
	}

	fn model_for(&self, ty: &str) -> Option<&ModelMeta> {
		self.models.get(ty)
	}

	fn default_order_weight(&self, ty: &str) -> Option<i64> {
		self.order_weights.get(ty).copied()
	}

	fn contains(&self, ty: &str) -> bool {
		self.adjacency.contains_key(ty)
	}
}
