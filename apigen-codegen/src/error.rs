use std::path::PathBuf;

use thiserror::Error;

/// Typed failures of the discovery and publishing pipeline.
///
/// Pipeline functions return [`eyre::Result`]; these errors are wrapped into
/// the report and can be recovered with `downcast_ref::<Error>()`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read services directory '{}'", dir.display())]
    Scan {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid service file pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("service file '{}' cannot be used as a provider entry", path.display())]
    InvalidName {
        path: PathBuf,
        #[source]
        source: apigen_core::InvalidName,
    },

    #[error("no services registered, refusing to render '{0}'")]
    EmptyRegistry(String),

    #[error("template '{0}' is not registered")]
    UnknownTemplate(String),
}
