//! Turns a [`RawConfig`] into a fully-resolved [`BuildConfig`].
//!
//! Resolution is the only nontrivial job of this crate: anchor every
//! project-relative path at an absolute project root, fill in defaults, and
//! reject malformed fields before the record reaches the external bundler or
//! dev server. The transformation is pure apart from a single existence
//! check on the root, so the same `(config, root)` pair always produces the
//! same record regardless of the working directory at invocation time.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::RawConfig;
use crate::error::ResolveError;
use crate::mode::Mode;

pub mod paths;

/// Default entry module, relative to the project root.
pub const DEFAULT_ENTRY: &str = "./src/index.js";
/// Default bundle output directory, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "./dist";
/// Default name of the emitted bundle artifact.
pub const DEFAULT_OUTPUT_FILENAME: &str = "main.js";
/// Default URL prefix for assets served by the dev server.
pub const DEFAULT_PUBLIC_PATH: &str = "/";
/// Default dev server port.
pub const DEFAULT_PORT: u16 = 8080;
/// Default module resolution directory, relative to the project root.
pub const DEFAULT_MODULE_DIR: &str = "node_modules";

/// The normalized configuration handed to the external bundler and dev
/// server. All path fields are absolute; the record is inert data and never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub mode: Mode,
    /// Absolute path of the entry module
    pub entry_path: PathBuf,
    /// Absolute directory bundled artifacts are written to
    pub output_dir: PathBuf,
    pub output_filename: String,
    /// Absolute directory the dev server serves static assets from
    pub server_root: PathBuf,
    pub server_public_path: String,
    pub server_port: u16,
    /// Absolute directories searched for module imports, first match wins
    pub resolve_module_paths: Vec<PathBuf>,
}

impl BuildConfig {
    /// Every path field of the record, for callers that want to display or
    /// verify them uniformly.
    pub fn path_fields(&self) -> impl Iterator<Item = (&'static str, &Path)> {
        [
            ("entryPath", self.entry_path.as_path()),
            ("outputDir", self.output_dir.as_path()),
            ("serverRoot", self.server_root.as_path()),
        ]
        .into_iter()
        .chain(
            self.resolve_module_paths
                .iter()
                .map(|p| ("resolveModulePaths", p.as_path())),
        )
    }
}

/// Resolve `config` against `project_root`.
///
/// `project_root` must be an absolute path to an existing directory;
/// anything else fails with [`ResolveError::InvalidRoot`]. Malformed field
/// values fail with [`ResolveError::Validation`] naming the field. No
/// partially-resolved record is ever returned.
pub fn resolve(config: &RawConfig, project_root: &Path) -> Result<BuildConfig, ResolveError> {
    if !project_root.is_absolute() {
        return Err(ResolveError::invalid_root(
            project_root,
            "not an absolute path",
        ));
    }
    // The one I/O operation in the whole pipeline
    if !project_root.is_dir() {
        return Err(ResolveError::invalid_root(
            project_root,
            "not an existing directory",
        ));
    }

    let mode = match &config.mode {
        Some(raw) => raw.parse::<Mode>()?,
        None => Mode::default(),
    };

    let entry = config
        .entry
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENTRY));
    if entry.as_os_str().is_empty() {
        return Err(ResolveError::validation("entry", "must not be empty"));
    }

    let output_dir = config
        .output
        .dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let output_filename = config
        .output
        .filename
        .clone()
        .unwrap_or_else(|| DEFAULT_OUTPUT_FILENAME.to_string());
    if output_filename.is_empty() {
        return Err(ResolveError::validation(
            "output.filename",
            "must not be empty",
        ));
    }

    // The dev server serves the bundle output unless told otherwise
    let server_root = config.dev_server.root.clone().unwrap_or_else(|| output_dir.clone());

    let server_public_path = config
        .dev_server
        .public_path
        .clone()
        .unwrap_or_else(|| DEFAULT_PUBLIC_PATH.to_string());
    if !server_public_path.starts_with('/') {
        return Err(ResolveError::validation(
            "dev-server.public-path",
            format!("{:?} must start with \"/\"", server_public_path),
        ));
    }

    let server_port = match config.dev_server.port {
        Some(raw) => u16::try_from(raw)
            .ok()
            .filter(|p| *p != 0)
            .ok_or_else(|| {
                ResolveError::validation(
                    "dev-server.port",
                    format!("{} is not a valid TCP port (expected 1-65535)", raw),
                )
            })?,
        None => DEFAULT_PORT,
    };

    let module_dirs = config
        .resolve
        .modules
        .clone()
        .unwrap_or_else(|| vec![PathBuf::from(DEFAULT_MODULE_DIR)]);

    Ok(BuildConfig {
        mode,
        entry_path: paths::anchor(project_root, &entry),
        output_dir: paths::anchor(project_root, &output_dir),
        output_filename,
        server_root: paths::anchor(project_root, &server_root),
        server_public_path,
        server_port,
        resolve_module_paths: paths::anchor_all(project_root, &module_dirs),
    })
}
