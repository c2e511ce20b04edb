//! Core operations.
//!
//! This module contains the business logic for apigen commands,
//! separated from CLI argument parsing and output rendering.

pub mod clean;
pub mod generate;
pub mod info;
pub mod list;

pub use clean::clean;
pub use generate::generate;
pub use info::info;
pub use list::list;
