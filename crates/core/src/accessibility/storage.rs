//! Persistence backends for accessibility settings.
//!
//! A backend holds one serialised document under one key, the same model as browser local
//! storage.

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::{SettingsError, SettingsResult};

/// Read/write access to the serialised settings document.
pub trait SettingsStorage {
    /// The stored document, or `None` if nothing has been saved yet.
    fn read(&self) -> SettingsResult<Option<String>>;

    /// Replace the stored document.
    fn write(&self, document: &str) -> SettingsResult<()>;
}

/// Stores the settings document as a single JSON file.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStorage for FileStorage {
    fn read(&self) -> SettingsResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SettingsError::StorageRead(e)),
        }
    }

    fn write(&self, document: &str) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(SettingsError::StorageWrite)?;
        }

        // Write to a sibling file first so a crash never leaves a truncated document.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, document).map_err(SettingsError::StorageWrite)?;
        fs::rename(&tmp, &self.path).map_err(SettingsError::StorageWrite)
    }
}

/// In-memory slot, shared between clones.
///
/// Useful when persistence is unavailable and in tests, where a clone kept by the test
/// observes what the store wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with a document.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(document.into()))),
        }
    }

    pub fn document(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SettingsStorage for MemoryStorage {
    fn read(&self) -> SettingsResult<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&self, document: &str) -> SettingsResult<()> {
        *self.slot.borrow_mut() = Some(document.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = TempDir::new().expect("temp dir");
        let storage = FileStorage::new(dir.path().join("absent.json"));
        assert_eq!(storage.read().expect("read"), None);
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("settings.json");
        let storage = FileStorage::new(&path);

        storage.write(r#"{"fontSize":1.5}"#).expect("write");
        assert_eq!(
            storage.read().expect("read").as_deref(),
            Some(r#"{"fontSize":1.5}"#)
        );
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn unreadable_path_is_a_read_error() {
        let dir = TempDir::new().expect("temp dir");
        // A directory cannot be read as a file.
        let storage = FileStorage::new(dir.path());
        assert!(matches!(storage.read(), Err(SettingsError::StorageRead(_))));
    }

    #[test]
    fn memory_clones_share_the_slot() {
        let storage = MemoryStorage::new();
        let observer = storage.clone();
        storage.write("{}").expect("write");
        assert_eq!(observer.document().as_deref(), Some("{}"));
    }
}
