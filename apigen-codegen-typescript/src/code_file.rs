//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Provides a high-level API for generating TypeScript files with a header
//! comment followed by organized imports, body and exports sections.

use apigen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::{Export, Import};

/// A structured representation of a TypeScript file.
///
/// Sections are rendered in order (header, imports, body, exports) with a
/// blank line between non-empty sections and between body elements.
///
/// # Example
///
/// ```
/// use apigen_codegen_typescript::{CodeFile, ast::{Export, Import}};
///
/// let code = CodeFile::new()
///     .header("Generated file")
///     .import(Import::new("@/services/BlogService").default("BlogService"))
///     .export(Export::empty())
///     .render();
///
/// assert_eq!(
///     code,
///     "// Generated file\n\nimport BlogService from \"@/services/BlogService\";\n\nexport {};\n"
/// );
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Vec<CodeFragment>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header comment; multi-line text becomes one comment per line.
    pub fn header(mut self, text: &str) -> Self {
        self.header
            .extend(text.lines().map(CodeFragment::comment));
        self
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add an export statement.
    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        let mut wrote_section = false;

        let mut separate = |builder: &mut CodeBuilder| {
            if wrote_section {
                builder.push_blank();
            }
            wrote_section = true;
        };

        if !self.header.is_empty() {
            separate(&mut builder);
            for fragment in &self.header {
                builder.apply_fragment(fragment.clone());
            }
        }

        if !self.imports.is_empty() {
            separate(&mut builder);
            for import in &self.imports {
                builder.emit(import);
            }
        }

        for fragments in &self.body {
            separate(&mut builder);
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        if !self.exports.is_empty() {
            separate(&mut builder);
            for export in &self.exports {
                builder.emit(export);
            }
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
            && self.imports.is_empty()
            && self.body.is_empty()
            && self.exports.is_empty()
    }
}
