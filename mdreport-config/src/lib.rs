//! Shared configuration loader for the mdreport toolchain.
//!
//! `defaults/mdreport.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`MdreportConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdreport_render::page::{PageKind, PageOptions};
use mdreport_render::RenderError;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdreport.default.toml");

/// Top-level configuration consumed by mdreport applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdreportConfig {
    pub convert: ConvertConfig,
    pub page: PageConfig,
    pub date: DateConfig,
}

/// Conversion defaults applied when the CLI flags are absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub renderer: String,
    pub page_kind: String,
}

/// Page assembly knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub site_name: String,
    pub toc: bool,
}

/// Date and timestamp handling.
#[derive(Debug, Clone, Deserialize)]
pub struct DateConfig {
    pub timezone: String,
}

impl MdreportConfig {
    /// Bridge the configured page settings into renderer [`PageOptions`].
    ///
    /// Fails when `convert.page_kind` names an unknown kind.
    pub fn page_options(&self) -> Result<PageOptions, RenderError> {
        Ok(PageOptions {
            kind: self.convert.page_kind.parse::<PageKind>()?,
            site_name: self.page.site_name.clone(),
            toc: self.page.toc,
            generated_at: None,
        })
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdreportConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdreportConfig, ConfigError> {
    Loader::new().build()
}
