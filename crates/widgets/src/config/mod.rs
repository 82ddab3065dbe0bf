//! Widget configuration files.
//!
//! A config file is TOML with up to four top-level tables:
//!
//! ```toml
//! [settings]
//! view_root = "/templates"
//!
//! [helpers.issues]
//! Issue = { draw_children = true }
//!
//! [types.Program]
//! mixins = ["issues", { Audit = { allow_mapping = true } }]
//! Person = { draw_children = true }
//!
//! [descriptors.all.Evidence]
//! treeViewDepth = 0
//!
//! [descriptors.Audit.Assessment]
//! order = 7
//! ```
//!
//! Mixin strings reference other fragments by name; inline tables are
//! literal fragments. Transforms are only available through the Rust API.

use std::path::Path;

use canopy_primitives::OptionSet;
use canopy_registry::TypeRegistry;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::builtin;
use crate::error::{ConfigError, Result};
use crate::fragment::{ConfigFragment, FragmentKind, FragmentTable, MixinRef};
use crate::merge::DescriptorOverrides;
use crate::resolver::{Resolution, resolve};
use crate::settings::BuildSettings;


#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
	settings: Option<BuildSettings>,
	helpers: IndexMap<String, RawFragment>,
	types: IndexMap<String, RawFragment>,
	descriptors: Option<DescriptorOverrides>,
}

#[derive(Debug, Deserialize)]
struct RawFragment {
	#[serde(default)]
	mixins: Vec<RawMixin>,
	#[serde(flatten)]
	literal: OptionSet,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawMixin {
	Named(String),
	Literal(OptionSet),
}

impl RawFragment {
	fn into_fragment(self, name: &str) -> Result<ConfigFragment> {
		let mixins = self
			.mixins
			.into_iter()
			.map(|mixin| match mixin {
				RawMixin::Named(mixin) if mixin.trim().is_empty() => Err(ConfigError::EmptyMixinName {
					fragment: name.to_string(),
				}),
				RawMixin::Named(mixin) => Ok(MixinRef::Named(mixin)),
				RawMixin::Literal(options) => Ok(MixinRef::Literal(options)),
			})
			.collect::<Result<Vec<_>>>()?;
		Ok(ConfigFragment {
			mixins,
			literal: self.literal,
		})
	}
}

/// One parsed configuration file, ready to be applied over a [`WidgetConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConfigLayer {
	/// Replaces the current settings wholesale when present.
	pub settings: Option<BuildSettings>,
	pub fragments: FragmentTable,
	pub descriptors: DescriptorOverrides,
}

impl ConfigLayer {
	/// Parses a layer from TOML text.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let raw: RawConfig = toml::from_str(input)?;

		let mut fragments = FragmentTable::new();
		for (name, fragment) in raw.helpers {
			let fragment = fragment.into_fragment(&name)?;
			fragments.insert(name, FragmentKind::Helper, fragment);
		}
		for (name, fragment) in raw.types {
			let fragment = fragment.into_fragment(&name)?;
			fragments.insert(name, FragmentKind::TypeEntry, fragment);
		}

		Ok(Self {
			settings: raw.settings,
			fragments,
			descriptors: raw.descriptors.unwrap_or_default(),
		})
	}

	/// Reads and parses a layer from `path`.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let layer = Self::from_toml_str(&content)?;
		tracing::debug!(
			domain = "config",
			path = %path.display(),
			fragments = layer.fragments.len(),
			settings = layer.settings.is_some(),
			"loaded widget config layer",
		);
		Ok(layer)
	}
}

/// Settings, content fragments and descriptor overrides for building
/// widget lists.
#[derive(Debug, Clone, Default)]
pub struct WidgetConfig {
	pub settings: BuildSettings,
	pub fragments: FragmentTable,
	pub descriptors: DescriptorOverrides,
}

impl WidgetConfig {
	/// Builtin tables under default settings.
	pub fn builtin<R: TypeRegistry + ?Sized>(registry: &R) -> Self {
		Self::builtin_with(BuildSettings::default(), registry)
	}

	/// Builtin tables whose template keys follow `settings`.
	pub fn builtin_with<R: TypeRegistry + ?Sized>(settings: BuildSettings, registry: &R) -> Self {
		Self {
			fragments: builtin::content_fragments(&settings),
			descriptors: builtin::descriptor_overrides(registry),
			settings,
		}
	}

	/// Applies `layer` on top: fragments and override targets replace
	/// same-named entries, settings replace wholesale.
	pub fn apply(&mut self, layer: ConfigLayer) {
		if let Some(settings) = layer.settings {
			self.settings = settings;
		}
		self.fragments.extend(layer.fragments);
		self.descriptors.extend(layer.descriptors);
	}

	/// Builtin tables with the file at `path` applied over them.
	///
	/// Builtin template keys follow the file's settings when it has any.
	pub fn load_over_builtin<R: TypeRegistry + ?Sized>(path: &Path, registry: &R) -> Result<Self> {
		let layer = ConfigLayer::load(path)?;
		let settings = layer.settings.clone().unwrap_or_default();
		let mut config = Self::builtin_with(settings, registry);
		config.apply(layer);
		config.validate(registry)?;
		Ok(config)
	}

	/// Checks every descriptor override page type against `registry`.
	pub fn validate<R: TypeRegistry + ?Sized>(&self, registry: &R) -> Result<()> {
		match self.descriptors.page_types().find(|page| !registry.contains(page.as_str())) {
			Some(page) => Err(ConfigError::UnknownPageType { page: page.to_string() }),
			None => Ok(()),
		}
	}

	/// Resolves the content fragments, logging and collecting warnings.
	pub fn resolve_content(&self) -> Resolution {
		resolve(&self.fragments)
	}
}
