//! Shared configuration loader for the REXX tools.
//!
//! `defaults/rexx.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`RexxConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use rexx_parser::IndentOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/rexx.default.toml");

/// Top-level configuration consumed by REXX applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RexxConfig {
    pub indentation: IndentationConfig,
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndentationConfig {
    pub offset: usize,
}

/// Which files the tools treat as REXX sources.
#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    pub extensions: Vec<String>,
}

impl RexxConfig {
    pub fn indent_options(&self) -> IndentOptions {
        IndentOptions::new(self.indentation.offset)
    }

    /// True if `path` has one of the configured extensions
    pub fn is_rexx_file(&self, path: &Path) -> bool {
        rexx_parser::rexx::host::is_rexx_file(path, &self.files.extensions)
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

    /// Finalize the builder, deserialize and validate the resulting configuration.
    pub fn build(self) -> Result<RexxConfig, ConfigError> {
        let config: RexxConfig = self.builder.build()?.try_deserialize()?;
        if config.indentation.offset == 0 {
            return Err(ConfigError::Message(
                "indentation.offset must be a positive integer".to_string(),
            ));
        }
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RexxConfig, ConfigError> {
    Loader::new().build()
}
