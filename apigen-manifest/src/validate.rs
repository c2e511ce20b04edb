//! Semantic validation of a parsed manifest.

use std::path::Path;

use globset::Glob;
use miette::SourceSpan;

use crate::{Manifest, Result, error::SourceContext};

pub(crate) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext<'_>) -> Result<()> {
    let project = &manifest.project;

    if !matches!(project.compatibility_version, 3 | 4) {
        return Err(ctx.validation_error(
            format!(
                "unsupported compatibility_version {}",
                project.compatibility_version
            ),
            "use 3, or 4 for projects with sources under app/",
            find_key_span(ctx.src(), "compatibility_version"),
        ));
    }

    check_relative(ctx, "build_dir", &project.build_dir)?;
    if let Some(dir) = &project.services_dir {
        check_relative(ctx, "services_dir", dir)?;
    }

    if let Err(e) = Glob::new(&project.pattern) {
        return Err(ctx.pattern_error(
            &project.pattern,
            e.to_string(),
            find_key_span(ctx.src(), "pattern"),
        ));
    }

    if let Some(base_url) = &manifest.api.base_url {
        if base_url.trim().is_empty() {
            return Err(ctx.validation_error(
                "baseUrl must not be empty",
                "remove the key to use '/' or set a URL",
                find_key_span(ctx.src(), "baseUrl"),
            ));
        }
    }

    Ok(())
}

fn check_relative(ctx: &SourceContext<'_>, key: &str, path: &Path) -> Result<()> {
    if path.is_absolute() {
        return Err(ctx.validation_error(
            format!("{} must be relative to the project root", key),
            format!("'{}' is absolute", path.display()),
            find_key_span(ctx.src(), key),
        ));
    }
    Ok(())
}

/// Find the span of a `key = value` assignment in the source.
///
/// Only matches the key at the start of a line so that values mentioning the
/// key are not picked up.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                let value = line.trim_end();
                return Some(SourceSpan::from((
                    offset + indent,
                    value.len().saturating_sub(indent),
                )));
            }
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::Error;

    #[test]
    fn test_find_key_span() {
        let src = "[project]\npattern = \"*.ts\"\n";
        let span = find_key_span(src, "pattern").unwrap();
        assert_eq!(span.offset(), 10);
        assert_eq!(span.len(), "pattern = \"*.ts\"".len());
        assert!(find_key_span(src, "root").is_none());
    }

    #[test]
    fn test_rejects_unsupported_compatibility_version() {
        let err = Manifest::from_str("[project]\ncompatibility_version = 5\n").unwrap_err();
        match *err {
            Error::Validation { message, span, .. } => {
                assert!(message.contains("compatibility_version 5"));
                assert!(span.is_some());
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_absolute_build_dir() {
        let err = Manifest::from_str("[project]\nbuild_dir = \"/tmp/out\"\n").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_rejects_invalid_pattern() {
        let err = Manifest::from_str("[project]\npattern = \"*.{js,ts\"\n").unwrap_err();
        assert!(matches!(*err, Error::InvalidPattern { .. }));
    }

    #[test]
    fn test_rejects_empty_base_url() {
        let err = Manifest::from_str("[api]\nbaseUrl = \"\"\n").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }
}
