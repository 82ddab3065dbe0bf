//! Type registry and page context collaborators.
//!
//! The widget engine never reads ambient state: the set of known types,
//! their adjacency and display metadata come from a [`TypeRegistry`], and
//! the current page object from a [`PageContext`]. Both are passed in
//! explicitly for each build.
//!
//! [`CatalogRegistry`] is the in-memory registry implementation;
//! [`builtin::governance_catalog`] populates one with the governance,
//! risk and compliance object types.

pub mod builtin;
pub mod catalog;
pub mod model;
pub mod page;
mod traits;

pub use catalog::CatalogRegistry;
pub use model::ModelMeta;
pub use page::StaticPage;
pub use traits::{PageContext, TypeRegistry};
