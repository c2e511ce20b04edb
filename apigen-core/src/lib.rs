//! Core utilities and types for apigen.
//!
//! This crate provides the fundamental types shared by the discovery
//! pipeline and the TypeScript generator.

mod file;
mod ident;

// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
// Service identifiers
pub use ident::{InvalidName, RESERVED_WORDS, ServiceName, is_reserved};
