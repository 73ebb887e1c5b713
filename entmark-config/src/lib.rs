//! Shared configuration loader for entmark renderers.
//!
//! `defaults/entmark.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files, environment
//! variables and overrides on top of those defaults via [`Loader`] before deserializing
//! into [`EntmarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use entmark::{OffsetUnit, RenderOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/entmark.default.toml");

/// Prefix of environment variables read by [`Loader::with_environment`].
pub const ENV_PREFIX: &str = "ENTMARK";

/// Top-level configuration consumed by entmark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct EntmarkConfig {
    pub render: RenderConfig,
}

/// Mirrors the knobs exposed by [`RenderOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub offset_unit: OffsetUnit,
    pub strict: bool,
    pub mention_base_url: String,
    /// First character is used; empty disables the marker
    pub ambiguity_marker: String,
}

impl From<RenderConfig> for RenderOptions {
    fn from(config: RenderConfig) -> Self {
        RenderOptions {
            offset_unit: config.offset_unit,
            strict: config.strict,
            ambiguity_marker: config.ambiguity_marker.chars().next(),
            mention_base_url: config.mention_base_url,
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        RenderOptions {
            offset_unit: config.offset_unit,
            strict: config.strict,
            ambiguity_marker: config.ambiguity_marker.chars().next(),
            mention_base_url: config.mention_base_url.clone(),
        }
    }
}

/// Layers sources for [`RenderOptions`] over the embedded defaults; later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start from the embedded `[render]` defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file with a `[render]` table. A missing file fails [`Loader::build`].
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a TOML file that may not exist, such as a per-user `entmark.toml`.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `ENTMARK_<SECTION>__<KEY>` environment variables, e.g. `ENTMARK_RENDER__STRICT=true`.
    pub fn with_environment(mut self) -> Self {
        let source = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `render.offset_unit`, above every other layer.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers into an [`EntmarkConfig`].
    pub fn build(self) -> Result<EntmarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    /// Finalize the builder straight into render options.
    pub fn build_render_options(self) -> Result<RenderOptions, ConfigError> {
        Ok(self.build()?.render.into())
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone, equal to [`RenderOptions::default`] once converted.
pub fn load_defaults() -> Result<EntmarkConfig, ConfigError> {
    Loader::new().build()
}
