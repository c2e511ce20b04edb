//! One build or dev-server run.

use apigen_manifest::{Manifest, ProjectLayout, RuntimeConfig};
use eyre::Result;
use tracing::{info, warn};

use crate::{
    NameRegistry,
    diagnostic::Diagnostic,
    publisher::{Published, TemplatePublisher},
    scanner::{FileScanner, discover},
    template::Template,
    watch::{ChangeEvent, ReconcileOutcome, WatchCoordinator},
};

/// Result of [`Session::setup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Templates were registered and their artifacts published.
    Published(Vec<Published>),
    /// The initial scan found nothing; no template was registered.
    NoServices,
}

/// Owns the registry and its collaborators for the lifetime of a run.
pub struct Session<S, P> {
    layout: ProjectLayout,
    runtime: RuntimeConfig,
    regenerate_types: bool,
    registry: NameRegistry,
    scanner: S,
    publisher: P,
    coordinator: Option<WatchCoordinator>,
    diagnostics: Vec<Diagnostic>,
}

impl<S: FileScanner, P: TemplatePublisher> Session<S, P> {
    pub fn new(manifest: &Manifest, layout: ProjectLayout, scanner: S, publisher: P) -> Self {
        let mut diagnostics = Vec::new();
        let runtime = RuntimeConfig::resolve(&manifest.api);
        if manifest.api.base_url.is_none() {
            warn!(
                base_url = %runtime.api.base_url,
                "baseUrl is not set, using the default"
            );
            diagnostics.push(Diagnostic::warning(
                "config",
                format!(
                    "`[api] baseUrl` is not set, defaulting to \"{}\"",
                    runtime.api.base_url
                ),
            ));
        }

        Self {
            layout,
            runtime,
            regenerate_types: manifest.project.regenerate_types_on_watch,
            registry: NameRegistry::new(),
            scanner,
            publisher,
            coordinator: None,
            diagnostics,
        }
    }

    /// Run the initial scan and register `templates`.
    ///
    /// A scan or generation failure aborts setup with nothing registered.
    /// When no service is found, a warning is recorded and neither templates
    /// nor the watch coordinator are installed.
    pub fn setup(&mut self, templates: Vec<Box<dyn Template>>) -> Result<SetupOutcome> {
        let names = discover(&self.scanner, &self.layout.services_dir)?;

        if names.is_empty() {
            let dir = self.layout.services_dir.display();
            warn!(dir = %dir, "no service files found");
            self.diagnostics.push(Diagnostic::warning(
                "discovery",
                format!("no service files found in {}", dir),
            ));
            return Ok(SetupOutcome::NoServices);
        }

        self.registry.extend(names);
        info!(services = self.registry.len(), "discovered services");
        self.diagnostics.push(Diagnostic::info(
            "discovery",
            format!(
                "registered {} services from {}",
                self.registry.len(),
                self.layout.services_dir.display()
            ),
        ));

        let mut published = Vec::with_capacity(templates.len());
        for template in templates {
            published.push(self.publisher.register(template, &self.registry)?);
        }

        self.coordinator = Some(WatchCoordinator::new(
            &self.layout.services_dir,
            &self.layout.services_rel,
            self.regenerate_types,
        ));

        Ok(SetupOutcome::Published(published))
    }

    /// Feed one change event to the watch coordinator.
    ///
    /// Events are ignored until a successful [`Session::setup`].
    pub fn handle(&mut self, event: &ChangeEvent) -> Result<ReconcileOutcome> {
        match self.coordinator.as_mut() {
            Some(coordinator) => coordinator.handle(
                event,
                &mut self.registry,
                &self.scanner,
                &mut self.publisher,
            ),
            None => Ok(ReconcileOutcome::Ignored),
        }
    }

    /// Whether change events will be reconciled.
    pub fn is_watching(&self) -> bool {
        self.coordinator.is_some()
    }

    pub fn registry(&self) -> &NameRegistry {
        &self.registry
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    pub fn runtime_config(&self) -> &RuntimeConfig {
        &self.runtime
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use std::{path::Path, str::FromStr};

    use apigen_manifest::ModuleOptions;

    use super::*;
    use crate::{
        Error,
        testing::{MemoryPublisher, NamesTemplate, StaticScanner},
        watch::ChangeKind,
    };

    fn manifest(base_url: Option<&str>) -> Manifest {
        Manifest {
            api: ModuleOptions {
                base_url: base_url.map(str::to_string),
            },
            ..Manifest::default()
        }
    }

    fn session(
        manifest: &Manifest,
        files: &[&str],
    ) -> Session<StaticScanner, MemoryPublisher> {
        let layout = ProjectLayout::resolve(Path::new("/project"), &manifest.project);
        Session::new(
            manifest,
            layout,
            StaticScanner::new(files.iter().copied()),
            MemoryPublisher::new(),
        )
    }

    fn templates() -> Vec<Box<dyn Template>> {
        vec![
            Box::new(NamesTemplate::types("types/apiProvider.d.ts")),
            Box::new(NamesTemplate::module("provider.ts")),
        ]
    }

    #[test]
    fn test_setup_registers_templates() {
        let manifest = manifest(Some("https://api.example.com"));
        let mut session = session(
            &manifest,
            &["services/BlogService.ts", "services/TestService.ts"],
        );

        let outcome = session.setup(templates()).unwrap();

        let SetupOutcome::Published(published) = outcome else {
            panic!("expected published artifacts");
        };
        assert_eq!(published.len(), 2);
        assert_eq!(session.registry().len(), 2);
        assert_eq!(
            session.publisher().latest("provider.ts"),
            Some("BlogService\nTestService\n")
        );
        assert!(session.is_watching());
        assert!(!session.diagnostics().iter().any(Diagnostic::is_warning));
    }

    #[test]
    fn test_empty_scan_registers_nothing() {
        let manifest = manifest(Some("/"));
        let mut session = session(&manifest, &[]);

        let outcome = session.setup(templates()).unwrap();

        assert_eq!(outcome, SetupOutcome::NoServices);
        assert_eq!(session.publisher().template_count(), 0);
        assert!(session.publisher().published().is_empty());
        assert!(!session.is_watching());
        assert_eq!(session.diagnostics().len(), 1);
        assert_eq!(session.diagnostics()[0].stage, "discovery");
        assert!(session.diagnostics()[0].is_warning());
    }

    #[test]
    fn test_missing_base_url_warns() {
        let session = session(&manifest(None), &["services/BlogService.ts"]);

        assert_eq!(session.runtime_config().api.base_url, "/");
        assert_eq!(session.runtime_config().fetch_base_url(), "/api");
        assert_eq!(session.diagnostics().len(), 1);
        assert_eq!(session.diagnostics()[0].stage, "config");
    }

    #[test]
    fn test_scan_failure_aborts_setup() {
        let manifest = manifest(Some("/"));
        let mut session = session(&manifest, &["services/BlogService.ts"]);
        session.scanner().set_failing(true);

        let err = session.setup(templates()).unwrap_err();

        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Scan { .. })));
        assert!(session.registry().is_empty());
        assert_eq!(session.publisher().template_count(), 0);
    }

    #[test]
    fn test_invalid_name_aborts_setup() {
        let manifest = manifest(Some("/"));
        let mut session = session(
            &manifest,
            &["services/BlogService.ts", "services/blog.service.ts"],
        );

        let err = session.setup(templates()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidName { .. })
        ));
        assert!(session.registry().is_empty());
    }

    #[test]
    fn test_events_before_setup_are_ignored() {
        let manifest = manifest(Some("/"));
        let mut session = session(&manifest, &["services/BlogService.ts"]);

        let outcome = session
            .handle(&ChangeEvent::change("services/BlogService.ts"))
            .unwrap();

        assert_eq!(outcome, ReconcileOutcome::Ignored);
        assert!(session.registry().is_empty());
    }

    #[test]
    fn test_dotted_services_dir_override_still_reconciles() {
        let manifest = Manifest::from_str(
            "[project]\nservices_dir = \"./services\"\n\n[api]\nbaseUrl = \"/\"\n",
        )
        .unwrap();
        let mut session = session(&manifest, &["services/BlogService.ts"]);
        session.setup(templates()).unwrap();
        assert_eq!(session.layout().services_rel, Path::new("services"));

        session
            .scanner()
            .set_files(["services/BlogService.ts", "services/FooService.ts"]);
        let outcome = session
            .handle(&ChangeEvent::change("services/FooService.ts"))
            .unwrap();

        assert!(matches!(outcome, ReconcileOutcome::Reconciled { .. }));
        assert!(session.registry().contains("FooService"));
        assert_eq!(session.publisher().publish_count("provider.ts"), 2);
    }

    #[test]
    fn test_watch_cycle_grows_registry() {
        let manifest = manifest(Some("/"));
        let mut session = session(&manifest, &["services/BlogService.ts"]);
        session.setup(templates()).unwrap();

        session
            .scanner()
            .set_files(["services/BlogService.ts", "services/FooService.ts"]);
        let outcome = session
            .handle(&ChangeEvent::change("services/FooService.ts"))
            .unwrap();

        assert!(matches!(outcome, ReconcileOutcome::Reconciled { .. }));
        assert_eq!(session.registry().len(), 2);
        assert_eq!(session.publisher().publish_count("provider.ts"), 2);
        assert_eq!(
            session.publisher().publish_count("types/apiProvider.d.ts"),
            1
        );

        let ignored = session
            .handle(&ChangeEvent::new(ChangeKind::Delete, "services/FooService.ts"))
            .unwrap();
        assert_eq!(ignored, ReconcileOutcome::Ignored);
    }
}
