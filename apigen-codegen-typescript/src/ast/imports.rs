//! TypeScript import builder.

use apigen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            type_only: false,
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Make this a type-only import (`import type ...`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    fn statement(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };

        match &self.default {
            Some(def) => format!("import {}{} from \"{}\";", type_kw, def, self.from),
            None => format!("import \"{}\";", self.from),
        }
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_import() {
        let i = Import::new("@/services/BlogService")
            .default("BlogService")
            .build();
        assert_eq!(i, "import BlogService from \"@/services/BlogService\";\n");
    }

    #[test]
    fn test_type_only_default_import() {
        let i = Import::new("@/services/BlogService")
            .default("BlogService")
            .type_only()
            .build();
        assert_eq!(
            i,
            "import type BlogService from \"@/services/BlogService\";\n"
        );
    }

    #[test]
    fn test_side_effect_import() {
        let i = Import::new("./polyfill").build();
        assert_eq!(i, "import \"./polyfill\";\n");
    }
}
