use serde::{Deserialize, Serialize};

use crate::TypeName;

/// Reference to a concrete page object.
///
/// Descriptors carry this instead of the object itself; the network layer
/// resolves it when related objects are fetched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceRef {
	#[serde(rename = "type")]
	pub type_name: TypeName,
	pub id: u64,
}

impl InstanceRef {
	pub fn new(type_name: impl Into<TypeName>, id: u64) -> Self {
		Self {
			type_name: type_name.into(),
			id,
		}
	}
}
