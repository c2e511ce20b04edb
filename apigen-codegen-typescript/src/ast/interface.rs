//! TypeScript interface builder.

use apigen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<(String, String)>,
    exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            exported: true,
        }
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push((name.into(), ty.into()));
        self
    }

    /// Add one required field per `(name, type)` pair.
    pub fn fields<N, T>(mut self, fields: impl IntoIterator<Item = (N, T)>) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        self.fields
            .extend(fields.into_iter().map(|(n, t)| (n.into(), t.into())));
        self
    }

    /// Make this interface private (not exported).
    ///
    /// Ambient augmentations inside `declare` blocks are always private.
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };

        if self.fields.is_empty() {
            return vec![CodeFragment::Line(format!(
                "{}interface {} {{}}",
                export, self.name
            ))];
        }

        vec![CodeFragment::block(
            format!("{}interface {} {{", export, self.name),
            self.fields
                .iter()
                .map(|(name, ty)| CodeFragment::Line(format!("{}: {};", name, ty)))
                .collect(),
            "}",
        )]
    }
}
