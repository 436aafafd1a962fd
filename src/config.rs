//! The declarative build configuration as it appears on disk.
//!
//! The on-disk record is TOML with the same shape as the classic bundler
//! config it replaces: a top-level `mode` and `entry`, plus `[output]`,
//! `[dev-server]` and `[resolve]` tables. Every field is optional; defaults
//! follow the conventions of the external tools.
//!
//! Fields whose values need validation beyond shape (`mode`, `port`) are
//! kept loosely typed here so that a bad value is reported as a
//! [`ResolveError::Validation`](crate::error::ResolveError) naming the field,
//! not as a deserializer message.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default name of the config file looked up next to the project root.
pub const DEFAULT_CONFIG_NAME: &str = "bundle.toml";

/// Parsed but not yet resolved configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct RawConfig {
    /// Bundler mode, `"development"` or `"production"`
    pub mode: Option<String>,
    /// Project-relative path of the entry module
    pub entry: Option<PathBuf>,
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub dev_server: DevServerSection,
    #[serde(default)]
    pub resolve: ResolveSection,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct OutputSection {
    /// Directory the bundle is written to, relative to the project root
    pub dir: Option<PathBuf>,
    /// Name of the emitted bundle artifact
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct DevServerSection {
    /// Directory the dev server serves static assets from
    pub root: Option<PathBuf>,
    /// URL prefix under which served assets are addressable
    pub public_path: Option<String>,
    /// TCP port the dev server binds
    pub port: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ResolveSection {
    /// Directories searched when resolving module imports, first match wins
    pub modules: Option<Vec<PathBuf>>,
}

impl RawConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse build config")
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
