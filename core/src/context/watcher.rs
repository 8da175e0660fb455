//! Watches the progress file for writes made by other processes.
//!
//! This is the native counterpart of the browser `storage` event: it only
//! says "the record changed"; the store re-reads the file itself.

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc::{self, Receiver};

use super::WatcherError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// The progress file was created or rewritten
    Changed,
    /// The progress file was deleted
    Removed,
    Error(String),
}

pub struct ProgressWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    file_name: OsString,
}

impl ProgressWatcher {
    /// Watch `progress_file`. Its directory is watched (and created if
    /// needed) because atomic saves replace the file rather than modify it.
    pub fn new(progress_file: &Path) -> Result<Self, WatcherError> {
        let (dir, file_name) = match (progress_file.parent(), progress_file.file_name()) {
            (Some(dir), Some(name)) => (
                if dir.as_os_str().is_empty() {
                    PathBuf::from(".")
                } else {
                    dir.to_path_buf()
                },
                name.to_os_string(),
            ),
            _ => {
                return Err(WatcherError::NoParent {
                    path: progress_file.to_path_buf(),
                });
            }
        };

        std::fs::create_dir_all(&dir).map_err(|source| WatcherError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let (tx, rx) = mpsc::channel(100);
        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.blocking_send(res);
            },
            Config::default(),
        )
        .map_err(WatcherError::InitWatcher)?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|source| WatcherError::WatchPath {
                path: dir.clone(),
                source,
            })?;

        tracing::debug!(path = %progress_file.display(), "Watching trail progress");
        Ok(Self {
            _watcher: watcher,
            rx,
            file_name,
        })
    }

    pub async fn next_event(&mut self) -> Option<ProgressEvent> {
        while let Some(event_result) = self.rx.recv().await {
            match event_result {
                Ok(event) => {
                    if let Some(progress_event) = self.process_event(event) {
                        return Some(progress_event);
                    }
                }
                Err(e) => {
                    return Some(ProgressEvent::Error(format!(
                        "Progress watcher error: {}",
                        e
                    )));
                }
            }
        }
        None
    }

    fn process_event(&self, event: Event) -> Option<ProgressEvent> {
        if !event.paths.iter().any(|path| self.is_progress_file(path)) {
            return None;
        }
        match event.kind {
            EventKind::Create(_) | EventKind::Modify(_) => Some(ProgressEvent::Changed),
            EventKind::Remove(_) => Some(ProgressEvent::Removed),
            _ => None,
        }
    }

    fn is_progress_file(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name == self.file_name.as_os_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, ProgressStorage};
    use std::time::Duration;
    use tokio::time::timeout;

    async fn wait_for(watcher: &mut ProgressWatcher, wanted: ProgressEvent) -> bool {
        let deadline = Duration::from_secs(5);
        timeout(deadline, async {
            while let Some(event) = watcher.next_event().await {
                if event == wanted {
                    return true;
                }
            }
            false
        })
        .await
        .unwrap_or(false)
    }

    #[tokio::test]
    async fn reports_atomic_save_as_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        let mut watcher = ProgressWatcher::new(&path).unwrap();

        FileStorage::new(&path).save(r#"{"visited":[]}"#).unwrap();

        assert!(wait_for(&mut watcher, ProgressEvent::Changed).await);
    }

    #[tokio::test]
    async fn reports_deletion() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(&path, "{}").unwrap();
        let mut watcher = ProgressWatcher::new(&path).unwrap();

        std::fs::remove_file(&path).unwrap();

        assert!(wait_for(&mut watcher, ProgressEvent::Removed).await);
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("progress.json");
        let _watcher = ProgressWatcher::new(&path).unwrap();
        assert!(dir.path().join("nested").is_dir());
    }
}
