//! Errors produced while resolving a configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between a parsed config and a resolved one.
///
/// Resolution either succeeds completely or fails with the first problem it
/// finds; no partially-resolved record is ever handed out.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The project root was not an absolute path to an existing directory.
    #[error("invalid project root {root:?}: {reason}")]
    InvalidRoot { root: PathBuf, reason: String },

    /// A config field failed validation. `field` names the offending field
    /// using its spelling in the config file (e.g. `dev-server.port`).
    #[error("invalid config field `{field}`: {reason}")]
    Validation { field: &'static str, reason: String },
}

impl ResolveError {
    pub(crate) fn invalid_root(root: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidRoot {
            root: root.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}
