//! Reconciliation of the registry with the services directory on change.

use std::path::{Path, PathBuf};

use apigen_core::ServiceName;
use eyre::Result;
use tracing::{debug, error, info};

use crate::{
    NameRegistry,
    publisher::{Published, TemplatePublisher},
    scanner::{FileScanner, service_names},
    template::ArtifactKind,
};

/// Kind of a file-change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Content of an existing file was modified.
    Change,
    Create,
    Delete,
}

/// A file-change notification, with `path` relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub path: PathBuf,
}

impl ChangeEvent {
    pub fn new(kind: ChangeKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    pub fn change(path: impl Into<PathBuf>) -> Self {
        Self::new(ChangeKind::Change, path)
    }
}

/// Coordinator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// Waiting for the next event.
    Idle,
    /// A rescan-and-regenerate cycle is executing.
    Reconciling,
}

/// Result of handling one change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The event was not a content change inside the services directory.
    Ignored,
    /// The directory listing failed; the registry was left untouched.
    ScanFailed,
    /// The registry was merged and the artifacts were republished.
    Reconciled {
        added: Vec<ServiceName>,
        published: Vec<Published>,
    },
}

/// Keeps the registry and published artifacts in step with the services
/// directory while a watch session runs.
#[derive(Debug, Clone)]
pub struct WatchCoordinator {
    services_dir: PathBuf,
    services_rel: PathBuf,
    invalidate: Vec<ArtifactKind>,
    state: WatchState,
}

impl WatchCoordinator {
    /// Create a coordinator for `services_dir`, known to change events as
    /// `services_rel`.
    ///
    /// Every cycle republishes the module artifacts, and the type
    /// declarations too when `regenerate_types` is set.
    pub fn new(
        services_dir: impl Into<PathBuf>,
        services_rel: impl Into<PathBuf>,
        regenerate_types: bool,
    ) -> Self {
        let mut invalidate = vec![ArtifactKind::Module];
        if regenerate_types {
            invalidate.push(ArtifactKind::TypeDeclaration);
        }
        Self {
            services_dir: services_dir.into(),
            services_rel: services_rel.into(),
            invalidate,
            state: WatchState::Idle,
        }
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    /// Artifact kinds republished on each reconciliation.
    pub fn invalidated(&self) -> &[ArtifactKind] {
        &self.invalidate
    }

    /// Whether `event` should trigger a reconciliation cycle.
    pub fn is_relevant(&self, event: &ChangeEvent) -> bool {
        event.kind == ChangeKind::Change && self.in_services_dir(&event.path)
    }

    fn in_services_dir(&self, path: &Path) -> bool {
        path.starts_with(&self.services_rel)
    }

    /// Handle one event to completion.
    ///
    /// Scan failures are logged and reported as [`ReconcileOutcome::ScanFailed`].
    /// An invalid service name is returned as an error before anything is
    /// merged. A publishing failure is returned as an error after the new
    /// names were merged; the next cycle republishes them.
    pub fn handle(
        &mut self,
        event: &ChangeEvent,
        registry: &mut NameRegistry,
        scanner: &impl FileScanner,
        publisher: &mut impl TemplatePublisher,
    ) -> Result<ReconcileOutcome> {
        if !self.is_relevant(event) {
            debug!(kind = ?event.kind, path = %event.path.display(), "ignoring change event");
            return Ok(ReconcileOutcome::Ignored);
        }

        self.state = WatchState::Reconciling;
        let outcome = self.reconcile(registry, scanner, publisher);
        self.state = WatchState::Idle;
        outcome
    }

    fn reconcile(
        &self,
        registry: &mut NameRegistry,
        scanner: &impl FileScanner,
        publisher: &mut impl TemplatePublisher,
    ) -> Result<ReconcileOutcome> {
        let files = match scanner.list_service_files(&self.services_dir) {
            Ok(files) => files,
            Err(e) => {
                error!(error = %e, dir = %self.services_dir.display(), "rescan failed");
                return Ok(ReconcileOutcome::ScanFailed);
            }
        };

        let added = registry.extend(service_names(&files)?);
        for name in &added {
            info!(service = %name, "registered new service");
        }

        let filenames: Vec<String> = self
            .invalidate
            .iter()
            .flat_map(|kind| publisher.filenames(*kind))
            .collect();
        let published = filenames
            .iter()
            .map(|filename| publisher.invalidate(filename, registry))
            .collect::<Result<Vec<_>>>()?;

        Ok(ReconcileOutcome::Reconciled { added, published })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Error,
        template::Template,
        testing::{MemoryPublisher, NamesTemplate, StaticScanner},
    };

    /// Module template that fails to render once `poison` is registered.
    struct FailingTemplate {
        poison: &'static str,
    }

    impl Template for FailingTemplate {
        fn filename(&self) -> &str {
            "broken.ts"
        }

        fn kind(&self) -> ArtifactKind {
            ArtifactKind::Module
        }

        fn render(&self, registry: &NameRegistry) -> Result<String> {
            if registry.contains(self.poison) {
                eyre::bail!("cannot render {}", self.poison);
            }
            Ok(String::new())
        }
    }

    struct Fixture {
        coordinator: WatchCoordinator,
        registry: NameRegistry,
        scanner: StaticScanner,
        publisher: MemoryPublisher,
    }

    impl Fixture {
        fn new(files: &[&str]) -> Self {
            Self::with_types(files, false)
        }

        fn with_types(files: &[&str], regenerate_types: bool) -> Self {
            let scanner = StaticScanner::new(files.iter().copied());
            let mut registry = NameRegistry::new();
            registry.extend(
                service_names(&scanner.list_service_files(Path::new("services")).unwrap())
                    .unwrap(),
            );

            let mut publisher = MemoryPublisher::new();
            publisher
                .register(Box::new(NamesTemplate::types("types.d.ts")), &registry)
                .unwrap();
            publisher
                .register(Box::new(NamesTemplate::module("provider.ts")), &registry)
                .unwrap();

            Self {
                coordinator: WatchCoordinator::new(
                    "/project/services",
                    "services",
                    regenerate_types,
                ),
                registry,
                scanner,
                publisher,
            }
        }

        fn handle(&mut self, event: ChangeEvent) -> Result<ReconcileOutcome> {
            self.coordinator.handle(
                &event,
                &mut self.registry,
                &self.scanner,
                &mut self.publisher,
            )
        }
    }

    #[test]
    fn test_event_outside_services_dir_is_ignored() {
        let mut fx = Fixture::new(&["services/BlogService.ts"]);
        fx.scanner
            .set_files(["services/BlogService.ts", "services/FooService.ts"]);

        let before = fx.registry.len();
        let outcome = fx.handle(ChangeEvent::change("pages/index.vue")).unwrap();

        assert_eq!(outcome, ReconcileOutcome::Ignored);
        assert_eq!(fx.registry.len(), before);
        assert_eq!(fx.coordinator.state(), WatchState::Idle);
        assert_eq!(fx.publisher.publish_count("provider.ts"), 1);
    }

    #[test]
    fn test_sibling_prefix_is_not_services_dir() {
        let fx = Fixture::new(&["services/BlogService.ts"]);
        assert!(!fx.coordinator.is_relevant(&ChangeEvent::change("services-old/A.ts")));
        assert!(fx.coordinator.is_relevant(&ChangeEvent::change("services/A.ts")));
    }

    #[test]
    fn test_create_and_delete_events_are_ignored() {
        let mut fx = Fixture::new(&["services/BlogService.ts"]);
        fx.scanner
            .set_files(["services/BlogService.ts", "services/FooService.ts"]);

        for kind in [ChangeKind::Create, ChangeKind::Delete] {
            let outcome = fx
                .handle(ChangeEvent::new(kind, "services/FooService.ts"))
                .unwrap();
            assert_eq!(outcome, ReconcileOutcome::Ignored);
        }
        assert!(!fx.registry.contains("FooService"));
    }

    #[test]
    fn test_change_with_new_file_grows_registry_and_invalidates() {
        let mut fx = Fixture::new(&["services/BlogService.ts", "services/TestService.ts"]);
        fx.scanner.set_files([
            "services/BlogService.ts",
            "services/FooService.ts",
            "services/TestService.ts",
        ]);

        let outcome = fx
            .handle(ChangeEvent::change("services/FooService.ts"))
            .unwrap();

        match outcome {
            ReconcileOutcome::Reconciled { added, published } => {
                assert_eq!(added, [ServiceName::new("FooService").unwrap()]);
                assert_eq!(published.len(), 1);
                assert_eq!(published[0].filename, "provider.ts");
            }
            other => panic!("expected reconciliation, got {:?}", other),
        }
        assert_eq!(fx.registry.len(), 3);
        assert_eq!(
            fx.publisher.latest("provider.ts"),
            Some("BlogService\nTestService\nFooService\n")
        );
        // The type declaration is only written at registration.
        assert_eq!(fx.publisher.publish_count("types.d.ts"), 1);
    }

    #[test]
    fn test_repeat_event_invalidates_without_growth() {
        let mut fx = Fixture::new(&["services/BlogService.ts"]);

        for _ in 0..2 {
            let outcome = fx
                .handle(ChangeEvent::change("services/BlogService.ts"))
                .unwrap();
            assert!(matches!(
                outcome,
                ReconcileOutcome::Reconciled { ref added, .. } if added.is_empty()
            ));
        }

        assert_eq!(fx.registry.len(), 1);
        assert_eq!(fx.publisher.publish_count("provider.ts"), 3);
    }

    #[test]
    fn test_deleted_file_stays_registered() {
        let mut fx = Fixture::new(&["services/BlogService.ts", "services/TestService.ts"]);
        fx.scanner.set_files(["services/BlogService.ts"]);

        fx.handle(ChangeEvent::change("services/BlogService.ts"))
            .unwrap();

        assert!(fx.registry.contains("TestService"));
        assert_eq!(fx.registry.len(), 2);
    }

    #[test]
    fn test_scan_failure_leaves_state_intact() {
        let mut fx = Fixture::new(&["services/BlogService.ts"]);
        fx.scanner.set_failing(true);

        let outcome = fx
            .handle(ChangeEvent::change("services/BlogService.ts"))
            .unwrap();

        assert_eq!(outcome, ReconcileOutcome::ScanFailed);
        assert_eq!(fx.registry.len(), 1);
        assert_eq!(fx.coordinator.state(), WatchState::Idle);
        assert_eq!(fx.publisher.publish_count("provider.ts"), 1);
    }

    #[test]
    fn test_invalid_name_is_error_without_partial_merge() {
        let mut fx = Fixture::new(&["services/BlogService.ts"]);
        fx.scanner.set_files([
            "services/AService.ts",
            "services/BlogService.ts",
            "services/bad-name.ts",
        ]);

        let err = fx
            .handle(ChangeEvent::change("services/bad-name.ts"))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidName { .. })
        ));
        assert!(!fx.registry.contains("AService"));
        assert_eq!(fx.coordinator.state(), WatchState::Idle);
    }

    #[test]
    fn test_regenerate_types_republishes_declarations() {
        let mut fx = Fixture::with_types(&["services/BlogService.ts"], true);
        fx.scanner
            .set_files(["services/BlogService.ts", "services/FooService.ts"]);

        fx.handle(ChangeEvent::change("services/FooService.ts"))
            .unwrap();

        assert_eq!(fx.publisher.publish_count("types.d.ts"), 2);
        assert_eq!(
            fx.publisher.latest("types.d.ts"),
            Some("BlogService\nFooService\n")
        );
    }

    #[test]
    fn test_publish_failure_keeps_merged_names() {
        let mut fx = Fixture::new(&["services/BlogService.ts"]);
        fx.publisher
            .register(
                Box::new(FailingTemplate {
                    poison: "FooService",
                }),
                &fx.registry,
            )
            .unwrap();
        fx.scanner
            .set_files(["services/BlogService.ts", "services/FooService.ts"]);

        let result = fx.handle(ChangeEvent::change("services/FooService.ts"));

        assert!(result.is_err());
        assert!(fx.registry.contains("FooService"));
        assert_eq!(fx.coordinator.state(), WatchState::Idle);
    }
}
