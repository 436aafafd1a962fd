//! Resolves a declarative front-end build configuration into an immutable,
//! absolute-path record consumed by an external bundler and dev server.
//!
//! The crate does exactly one interesting thing: [`resolve::resolve`] takes
//! a parsed [`config::RawConfig`] and an absolute project root and produces
//! a [`resolve::BuildConfig`] whose path fields are all anchored at that
//! root. It performs no I/O beyond an existence check on the root and never
//! invokes the downstream tools itself.

pub mod config;
pub mod error;
pub mod mode;
pub mod resolve;

pub use config::RawConfig;
pub use error::ResolveError;
pub use mode::Mode;
pub use resolve::BuildConfig;
