//! Filesystem notifications for the services directory.

use std::sync::mpsc;

use apigen_codegen::{ChangeEvent, ChangeKind};
use apigen_manifest::ProjectLayout;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{trace, warn};

/// Watches the services directory and yields change events relative to
/// the project root.
pub struct ServiceWatcher {
    _watcher: RecommendedWatcher,
    receiver: mpsc::Receiver<ChangeEvent>,
}

impl ServiceWatcher {
    pub fn new(layout: &ProjectLayout) -> eyre::Result<Self> {
        // Notification paths are absolute, so compare against the
        // canonical root.
        let mut layout = layout.clone();
        layout.root = std::fs::canonicalize(&layout.root)?;
        let services_dir = std::fs::canonicalize(&layout.services_dir)?;

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            match res {
                Ok(event) => {
                    for change in classify_event(&event, &layout) {
                        // The receiver only goes away on shutdown.
                        let _ = tx.send(change);
                    }
                }
                Err(e) => warn!(error = %e, "file watcher error"),
            }
        })?;

        watcher.watch(&services_dir, RecursiveMode::NonRecursive)?;

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
        })
    }

    /// Block for events until the watcher shuts down.
    pub fn events(&self) -> impl Iterator<Item = ChangeEvent> + '_ {
        self.receiver.iter()
    }
}

/// Map a notification onto change events, one per affected path.
///
/// Access and other kinds are dropped, as are paths outside the root.
fn classify_event(event: &Event, layout: &ProjectLayout) -> Vec<ChangeEvent> {
    let kind = match event.kind {
        EventKind::Modify(_) => ChangeKind::Change,
        EventKind::Create(_) => ChangeKind::Create,
        EventKind::Remove(_) => ChangeKind::Delete,
        _ => return Vec::new(),
    };

    event
        .paths
        .iter()
        .filter_map(|path| layout.relative_to_root(path))
        .map(|path| {
            trace!(?kind, path = %path.display(), "file event");
            ChangeEvent::new(kind, path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use apigen_manifest::ProjectConfig;
    use notify::event::{AccessKind, CreateKind, DataChange, ModifyKind, RemoveKind};

    use super::*;

    fn layout() -> ProjectLayout {
        ProjectLayout::resolve(Path::new("/site"), &ProjectConfig::default())
    }

    #[test]
    fn test_modify_is_change() {
        let event = Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Content)))
            .add_path(PathBuf::from("/site/services/BlogService.ts"));

        assert_eq!(
            classify_event(&event, &layout()),
            [ChangeEvent::change("services/BlogService.ts")]
        );
    }

    #[test]
    fn test_create_and_remove_kinds() {
        let created = Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("/site/services/FooService.ts"));
        let removed = Event::new(EventKind::Remove(RemoveKind::File))
            .add_path(PathBuf::from("/site/services/FooService.ts"));

        assert_eq!(
            classify_event(&created, &layout())[0].kind,
            ChangeKind::Create
        );
        assert_eq!(
            classify_event(&removed, &layout())[0].kind,
            ChangeKind::Delete
        );
    }

    #[test]
    fn test_access_and_foreign_paths_are_dropped() {
        let access = Event::new(EventKind::Access(AccessKind::Any))
            .add_path(PathBuf::from("/site/services/BlogService.ts"));
        assert!(classify_event(&access, &layout()).is_empty());

        let outside = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/elsewhere/services/BlogService.ts"))
            .add_path(PathBuf::from("/site/services/TestService.ts"));
        assert_eq!(
            classify_event(&outside, &layout()),
            [ChangeEvent::change("services/TestService.ts")]
        );
    }
}
