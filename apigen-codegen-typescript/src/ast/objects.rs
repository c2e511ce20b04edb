//! TypeScript/JavaScript object literal builder.

use apigen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A property in a JavaScript object literal, with its value emitted as a raw expression.
#[derive(Debug, Clone)]
struct Property {
    key: String,
    value: String,
}

/// Builder for JavaScript/TypeScript object literals.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: value.to_string(),
        });
        self
    }

    /// Check if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Lower the properties into a block opened by `header` and closed by `close`.
    ///
    /// Used where the literal is part of a larger statement, such as
    /// `export default { ... };`.
    pub fn to_block(&self, header: impl Into<String>, close: impl Into<String>) -> CodeFragment {
        CodeFragment::block(
            header,
            self.properties
                .iter()
                .map(|p| CodeFragment::Line(format!("{}: {},", p.key, p.value)))
                .collect(),
            close,
        )
    }

    /// Build the object as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            return vec![CodeFragment::line("{}")];
        }
        vec![self.to_block("{", "}")]
    }
}
