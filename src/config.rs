//! Configuration loader for marklet.
//!
//! The shipped defaults live in `defaults/marklet.default.toml` and are compiled
//! in. Every key has a default, so a user file only needs the keys it changes.

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use ::config::ConfigError as LoadError;

const DEFAULT_TOML: &str = include_str!("../defaults/marklet.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MarkletConfig {
    pub render: RenderConfig,
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Processing format string, e.g. `html-fragment` or `ast-treeviz`
    pub format: String,
}

/// Which intermediate stages are written to stderr
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TraceConfig {
    pub tokens: bool,
    pub tree: bool,
    pub html: bool,
}

impl TraceConfig {
    pub fn any(&self) -> bool {
        self.tokens || self.tree || self.html
    }
}

/// Builds a [`MarkletConfig`] from the embedded defaults plus whatever the
/// command line layers on top. Later sources win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder()
                .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// A `--config` file. It must exist and be TOML.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        let file = File::from(path.as_ref()).format(FileFormat::Toml);
        Self {
            builder: self.builder.add_source(file),
        }
    }

    /// Set one dotted key, e.g. `render.format`
    pub fn set_override<I>(self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        Ok(Self {
            builder: self.builder.set_override(key, value)?,
        })
    }

    pub fn build(self) -> Result<MarkletConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}
