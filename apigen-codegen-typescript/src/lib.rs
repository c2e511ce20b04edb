//! TypeScript artifacts for apigen.
//!
//! Two templates are provided, both pure projections of the
//! [`NameRegistry`](apigen_codegen::NameRegistry):
//!
//! - `types/apiProvider.d.ts` ([`ApiProviderDts`]) - ambient typing of the
//!   injected `$api` provider
//! - `provider.ts` ([`ProviderTs`]) - the provider object itself, one
//!   service instance per discovered class
//!
//! ```
//! use apigen_codegen::{NameRegistry, Template};
//! use apigen_codegen_typescript::ProviderTs;
//! use apigen_core::ServiceName;
//!
//! let mut registry = NameRegistry::new();
//! registry.add_if_absent(ServiceName::new("BlogService")?);
//!
//! let code = ProviderTs.render(&registry)?;
//! assert!(code.contains("BlogService: new BlogService(useHttpClient),"));
//! # Ok::<(), eyre::Report>(())
//! ```

mod code_file;

pub mod ast;
pub mod files;

pub use code_file::CodeFile;
pub use files::{ApiProviderDts, GENERATED_HEADER, ProviderTs, templates};
