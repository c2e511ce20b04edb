//! Service identifiers derived from file names.

use std::{borrow::Borrow, fmt};

use serde::Serialize;
use thiserror::Error;

/// JavaScript and TypeScript words that cannot name a class binding.
pub const RESERVED_WORDS: &[&str] = &[
    // JavaScript reserved words
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "let",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
    // TypeScript reserved words
    "any",
    "as",
    "async",
    "await",
    "boolean",
    "constructor",
    "declare",
    "implements",
    "interface",
    "module",
    "namespace",
    "never",
    "number",
    "object",
    "package",
    "private",
    "protected",
    "public",
    "readonly",
    "static",
    "string",
    "symbol",
    "type",
    "undefined",
    "unknown",
];

/// Check if a name is a reserved word.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// A service file's base name that failed identifier validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{name}' is not a valid service name: {reason}")]
pub struct InvalidName {
    pub name: String,
    pub reason: &'static str,
}

/// Identifier of a discovered service.
///
/// The same string is used as the import binding, the provider property key
/// and the declared type name, so it must be a valid TypeScript identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    /// Validate `name` and wrap it.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidName> {
        let name = name.into();
        match validate(&name) {
            Some(reason) => Err(InvalidName { name, reason }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return Some("name is empty"),
    };

    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return Some("must start with a letter, '_' or '$'");
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return Some("may only contain letters, digits, '_' and '$'");
    }

    if is_reserved(name) {
        return Some("reserved word");
    }

    None
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ServiceName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ServiceName {
    type Error = InvalidName;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["BlogService", "TestService", "_internal", "$api", "Service2"] {
            assert_eq!(ServiceName::new(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_invalid_names() {
        let err = ServiceName::new("blog.service").unwrap_err();
        assert_eq!(err.name, "blog.service");
        assert!(err.to_string().contains("blog.service"));

        assert!(ServiceName::new("").is_err());
        assert!(ServiceName::new("2fa").is_err());
        assert!(ServiceName::new("user-service").is_err());
    }

    #[test]
    fn test_reserved_words_rejected() {
        let err = ServiceName::new("class").unwrap_err();
        assert_eq!(err.reason, "reserved word");
        assert!(is_reserved("interface"));
        assert!(!is_reserved("BlogService"));
    }
}
