//! Constructor call expression.

use std::fmt;

/// `new Callee(arg, ...)`
#[derive(Debug, Clone)]
pub struct NewExpr {
    callee: String,
    args: Vec<String>,
}

impl NewExpr {
    pub fn new(callee: impl Into<String>) -> Self {
        Self {
            callee: callee.into(),
            args: Vec::new(),
        }
    }

    /// Append a raw argument expression.
    pub fn arg(mut self, expr: impl Into<String>) -> Self {
        self.args.push(expr.into());
        self
    }
}

impl fmt::Display for NewExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "new {}({})", self.callee, self.args.join(", "))
    }
}
