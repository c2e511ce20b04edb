//! TypeScript export builder.

use apigen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::JsObject;

#[derive(Debug, Clone)]
enum ExportKind {
    Empty,
    DefaultObject(JsObject),
}

/// Builder for TypeScript export statements.
#[derive(Debug, Clone)]
pub struct Export {
    kind: ExportKind,
}

impl Export {
    /// `export {};`, marking a declaration file as a module.
    pub fn empty() -> Self {
        Self {
            kind: ExportKind::Empty,
        }
    }

    /// `export default { ... };`
    pub fn default_object(object: JsObject) -> Self {
        Self {
            kind: ExportKind::DefaultObject(object),
        }
    }

    /// Build the export as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let fragment = match &self.kind {
            ExportKind::Empty => CodeFragment::line("export {};"),
            ExportKind::DefaultObject(object) if object.is_empty() => {
                CodeFragment::line("export default {};")
            }
            ExportKind::DefaultObject(object) => object.to_block("export default {", "};"),
        };
        vec![fragment]
    }
}
