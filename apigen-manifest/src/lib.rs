//! TOML configuration for apigen.
//!
//! The configuration lives in `apigen.toml` next to the host project and
//! controls where services are discovered, where artifacts are written and
//! the options forwarded to the public runtime config.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod layout;
mod manifest;
mod parse;
mod runtime;
mod validate;

pub use error::{Error, Result};
pub use file::ApigenToml;
pub use layout::ProjectLayout;
pub use manifest::{
    DEFAULT_BASE_URL, DEFAULT_BUILD_DIR, DEFAULT_PATTERN, Manifest, ModuleOptions, ProjectConfig,
};
pub use runtime::{ApiRuntimeConfig, RuntimeConfig};
