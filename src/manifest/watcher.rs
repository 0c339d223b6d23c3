//! Manifest file watcher for live re-scans.
//!
//! # Design Decisions
//! - Watches the manifest's directory, not the file itself: editors that save by
//!   renaming a temporary file over the manifest replace its inode
//! - Only events naming the manifest are forwarded

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

/// Monitors a route manifest and signals every change.
pub struct ManifestWatcher {
    path: PathBuf,
    change_tx: mpsc::Sender<()>,
}

impl ManifestWatcher {
    /// Create a new ManifestWatcher.
    ///
    /// Returns the watcher and a receiver that yields one signal per change.
    pub fn new(path: &Path) -> (Self, mpsc::Receiver<()>) {
        let (change_tx, change_rx) = mpsc::channel();

        (
            Self {
                path: path.to_path_buf(),
                change_tx,
            },
            change_rx,
        )
    }

    /// Start watching. Changes stop being reported once the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.change_tx;
        let file_name = self.path.file_name().map(OsString::from);
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if touches_manifest(&event, file_name.as_deref()) {
                        tracing::info!("Route manifest change detected, rescanning...");
                        let _ = tx.send(());
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, dir = ?dir, "Manifest watcher started");
        Ok(watcher)
    }
}

/// Modify (including renames) or create events that name the manifest.
fn touches_manifest(event: &Event, file_name: Option<&OsStr>) -> bool {
    if !(event.kind.is_modify() || event.kind.is_create()) {
        return false;
    }

    event
        .paths
        .iter()
        .any(|p| p.file_name().is_some() && p.file_name() == file_name)
}
