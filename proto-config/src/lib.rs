//! Shared configuration loader for the proto toolchain.
//!
//! `defaults/proto.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`ProtoConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use proto_parser::CompileOptions;
use proto_render::{RenderOptions, Theme};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/proto.default.toml");

/// Top-level configuration consumed by proto applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ProtoConfig {
    pub lexer: LexerConfig,
    pub builder: BuilderConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LexerConfig {
    pub tab_width: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuilderConfig {
    pub strict_modifiers: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub theme: Theme,
    pub wrap_document: bool,
    pub max_component_depth: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl ProtoConfig {
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            tab_width: self.lexer.tab_width,
            strict_modifiers: self.builder.strict_modifiers,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            theme: self.render.theme,
            wrap_document: self.render.wrap_document,
            max_component_depth: self.render.max_component_depth,
            ..RenderOptions::default()
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
    pub fn build(self) -> Result<ProtoConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ProtoConfig, ConfigError> {
    Loader::new().build()
}
