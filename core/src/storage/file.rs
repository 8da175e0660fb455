//! File-backed progress for native builds.
//!
//! The record lives in a single JSON file. Writes go to `{path}.tmp`, are
//! synced, then renamed over the real file, so a reader never sees a
//! half-written record.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{ProgressStorage, StorageError};

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.local/share/trailhead/progress.json` (or platform equivalent).
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trailhead")
            .join("progress.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    fn write_atomic(&self, data: &[u8]) -> std::io::Result<()> {
        let tmp_path = self.tmp_path();
        let mut file = File::create(&tmp_path)?;
        file.write_all(data)?;
        file.sync_all()?;
        fs::rename(&tmp_path, &self.path)
    }
}

impl ProgressStorage for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&self, raw: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        self.write_atomic(raw.as_bytes())
            .map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(path = %self.path.display(), "Saved trail progress");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("progress.json"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn save_creates_parent_dirs_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("progress.json");
        let storage = FileStorage::new(&path);

        storage.save(r#"{"visited":[]}"#).unwrap();

        assert_eq!(storage.load().unwrap().as_deref(), Some(r#"{"visited":[]}"#));
        assert!(!dir.path().join("nested").join("progress.json.tmp").exists());
    }

    #[test]
    fn save_replaces_whole_record() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("progress.json"));

        storage.save("first record, much longer than the second").unwrap();
        storage.save("second").unwrap();

        assert_eq!(storage.load().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn directory_in_place_of_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(matches!(storage.load(), Err(StorageError::Read { .. })));
    }
}
