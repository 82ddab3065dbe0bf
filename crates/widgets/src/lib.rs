//! Widget configuration composition for object pages.
//!
//! Three stages turn hand-authored configuration into render-ready widget
//! descriptors:
//!
//! - [`resolver`] flattens a [`FragmentTable`] of mixin-composed fragments
//!   into [`ResolvedDefinitions`], reporting undefined mixins and cycles as
//!   [`ResolveWarning`]s.
//! - [`merge`] layers a base descriptor, [`DescriptorOverrides`] and the
//!   resolved content options into one [`WidgetDescriptor`].
//! - [`builder`] assembles the per-page [`WidgetList`] from a
//!   [`TypeRegistry`](canopy_registry::TypeRegistry) and a
//!   [`PageContext`](canopy_registry::PageContext).
//!
//! [`WidgetConfig`] bundles settings, fragments and overrides, starting
//! from the [`builtin`] tables and layered with TOML files.

pub mod builder;
pub mod builtin;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod fragment;
pub mod merge;
pub mod resolver;
pub mod settings;
pub mod subtree;

pub use builder::{PageWidgets, WidgetList, WidgetListBuilder, build_widgets, patch_person_profile};
pub use config::{ConfigLayer, WidgetConfig};
pub use descriptor::{WidgetDescriptor, WidgetKind};
pub use error::{BuildError, ConfigError};
pub use fragment::{ConfigFragment, FragmentKind, FragmentTable, MixinRef};
pub use merge::{DescriptorOverrides, merge_descriptor};
pub use resolver::{Resolution, ResolveWarning, ResolvedDefinitions, resolve};
pub use settings::{BuildSettings, DashboardSettings};
