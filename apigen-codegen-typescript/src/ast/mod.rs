//! TypeScript AST builders for imports, declarations, objects and exports.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which is lowered to fragments and rendered via CodeBuilder.

mod declare;
mod exports;
mod imports;
mod interface;
mod new_expr;
mod objects;

pub use declare::Declare;
pub use exports::Export;
pub use imports::Import;
pub use interface::Interface;
pub use new_expr::NewExpr;
pub use objects::JsObject;
