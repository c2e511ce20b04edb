//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod clean;
mod generate;
mod info;
mod list;
mod output;

pub use clean::CleanReport;
pub use generate::{GenerateReport, GenerationResult, PreviewFile, WrittenArtifact};
pub use info::{ArtifactInfo, InfoReport};
pub use list::ListReport;
pub use output::{Report, TerminalOutput};
