//! Configuration loader for the turtle toolchain.
//!
//! `defaults/turtle.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Callers layer user-specific files and CLI
//! overrides on top of those defaults via [`Loader`] before deserializing into
//! [`TurtleConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/turtle.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TurtleConfig {
    pub output: OutputConfig,
}

/// Controls how processed scripts are written out
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    pub format: String,
    pub label_width: usize,
    pub indent: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "ast-treeviz".to_string(),
            label_width: 30,
            indent: "  ".to_string(),
        }
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TurtleConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TurtleConfig, ConfigError> {
    Loader::new().build()
}
