//! The build mode selected by the configuration.
//!
//! The mode is passed through to the external bundler verbatim; it decides
//! between debug-friendly and optimized output but has no effect on path
//! resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ResolveError;

/// Optimization/debug behavior requested from the external bundler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Unoptimized output with debug affordances (source maps, fast rebuilds)
    Development,
    /// Optimized output for deployment
    Production,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// All modes the external bundler accepts
    pub fn all() -> &'static [Mode] {
        &[Self::Development, Self::Production]
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::Production
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(ResolveError::validation(
                "mode",
                format!("unknown mode {:?}, expected \"development\" or \"production\"", other),
            )),
        }
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!("development".parse::<Mode>().unwrap(), Mode::Development);
        assert_eq!("production".parse::<Mode>().unwrap(), Mode::Production);
    }

    #[test]
    fn rejects_unknown_mode_naming_the_field() {
        let err = "staging".parse::<Mode>().unwrap_err();
        match err {
            ResolveError::Validation { field, .. } => assert_eq!(field, "mode"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn round_trips_through_display() {
        for mode in Mode::all() {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), *mode);
        }
    }
}
