//! Ambient `declare` blocks.

use apigen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// An ambient declaration block such as `declare global { ... }`.
#[derive(Debug, Clone)]
pub struct Declare {
    header: String,
    items: Vec<CodeFragment>,
}

impl Declare {
    /// `declare module "<name>" { ... }`, augmenting an existing module.
    pub fn module(name: impl AsRef<str>) -> Self {
        Self {
            header: format!("declare module \"{}\" {{", name.as_ref()),
            items: Vec::new(),
        }
    }

    /// `declare global { ... }`
    pub fn global() -> Self {
        Self {
            header: "declare global {".to_string(),
            items: Vec::new(),
        }
    }

    /// Add a declaration to the block body.
    pub fn item(mut self, node: impl Renderable) -> Self {
        self.items.extend(node.to_fragments());
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Declare {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            self.header.clone(),
            self.items.clone(),
            "}",
        )]
    }
}
