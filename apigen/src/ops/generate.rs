//! Generate operation - scan services and publish artifacts.

use apigen_codegen::{
    FsPublisher, FsScanner, PreviewPublisher, Session, SetupOutcome, TemplatePublisher,
};
use apigen_codegen_typescript::templates;
use apigen_manifest::ApigenToml;
use eyre::{Context, Result};

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenArtifact};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(config: &ApigenToml, opts: GenerateOptions) -> Result<GenerateReport> {
    if opts.dry_run {
        let publisher = PreviewPublisher::new(config.layout().build_dir);
        let (session, outcome) = setup(config, publisher)?;
        let files = session
            .publisher()
            .artifacts()
            .iter()
            .map(|a| PreviewFile {
                path: a.filename.clone(),
                content: a.content.clone(),
            })
            .collect();
        let result = match outcome {
            SetupOutcome::Published(_) => GenerationResult::Preview(files),
            SetupOutcome::NoServices => GenerationResult::NoServices,
        };
        Ok(report(&session, result))
    } else {
        let (_, report) = start(config)?;
        Ok(report)
    }
}

/// Set up a session that writes to the build directory.
///
/// The returned session keeps its registry so that a watcher can feed it
/// change events.
pub fn start(config: &ApigenToml) -> Result<(Session<FsScanner, FsPublisher>, GenerateReport)> {
    let publisher = FsPublisher::new(config.layout().build_dir);
    let (session, outcome) = setup(config, publisher)?;
    let result = match outcome {
        SetupOutcome::Published(published) => GenerationResult::Written(
            published
                .into_iter()
                .map(|p| WrittenArtifact {
                    filename: p.filename,
                    path: p.path,
                    written: p.result.is_written(),
                })
                .collect(),
        ),
        SetupOutcome::NoServices => GenerationResult::NoServices,
    };
    let report = report(&session, result);
    Ok((session, report))
}

fn setup<P: TemplatePublisher>(
    config: &ApigenToml,
    publisher: P,
) -> Result<(Session<FsScanner, P>, SetupOutcome)> {
    let manifest = config.manifest();
    let scanner = FsScanner::new(&manifest.project.pattern)?;
    let mut session = Session::new(manifest, config.layout(), scanner, publisher);
    let outcome = session
        .setup(templates())
        .wrap_err("Failed to generate artifacts")?;
    Ok((session, outcome))
}

fn report<P: TemplatePublisher>(
    session: &Session<FsScanner, P>,
    result: GenerationResult,
) -> GenerateReport {
    GenerateReport {
        services_dir: session.layout().services_dir.clone(),
        services: session
            .registry()
            .names_in_order()
            .map(|n| n.to_string())
            .collect(),
        warnings: session
            .diagnostics()
            .iter()
            .filter(|d| d.is_warning())
            .map(|d| d.message.clone())
            .collect(),
        result,
    }
}
