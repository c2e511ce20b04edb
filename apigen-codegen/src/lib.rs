//! Service discovery and artifact publishing for apigen.
//!
//! This crate holds the language-agnostic half of the generator: it finds
//! service files, keeps the registry of discovered names and republishes
//! artifacts when the services directory changes. Concrete artifacts are
//! provided by `apigen-codegen-typescript` through the [`Template`] trait.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`registry`] - Ordered set of discovered service names
//! - [`scanner`] - Service file discovery
//! - [`template`] - Artifact templates
//! - [`publisher`] - Writing artifacts to the build directory
//! - [`watch`] - Reconciliation on file changes
//! - [`session`] - Ownership of all of the above for one run
//! - [`testing`] - Test doubles (feature-gated)

pub mod builder;
pub mod diagnostic;
mod error;
pub mod publisher;
pub mod registry;
pub mod scanner;
pub mod session;
pub mod template;
pub mod watch;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use diagnostic::{Diagnostic, Severity};
pub use error::Error;
pub use publisher::{FsPublisher, PreviewPublisher, Published, TemplatePublisher};
pub use registry::NameRegistry;
pub use scanner::{FileScanner, FsScanner, base_name_of, discover};
pub use session::{Session, SetupOutcome};
pub use template::{Artifact, ArtifactKind, Template};
pub use watch::{ChangeEvent, ChangeKind, ReconcileOutcome, WatchCoordinator, WatchState};
