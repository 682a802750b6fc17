//! Byte-slot storage backing the tone registry.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A durable key-value slot holding the serialized tone list.
pub trait ToneStore: Send + Sync {
    /// Read the stored bytes, `None` when nothing has been written yet.
    fn read(&self) -> io::Result<Option<Vec<u8>>>;

    /// Replace the slot with `bytes`.
    fn write(&self, bytes: &[u8]) -> io::Result<()>;

    /// Clear the slot. Clearing an empty slot is not an error.
    fn delete(&self) -> io::Result<()>;
}

/// File-backed store holding the tone list as a single JSON document.
pub struct FileToneStore {
    path: PathBuf,
}

impl FileToneStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform data directory
    /// (`<data_dir>/rephrase/tones.json`).
    pub fn in_data_dir() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("rephrase").join("tones.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ToneStore for FileToneStore {
    fn read(&self) -> io::Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, bytes)
    }

    fn delete(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

/// In-memory store for tests and embedders that persist elsewhere.
#[derive(Default)]
pub struct MemoryToneStore {
    slot: Mutex<Option<Vec<u8>>>,
}

impl MemoryToneStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<Vec<u8>>> {
        self.slot.lock().unwrap_or_else(|err| err.into_inner())
    }
}

impl ToneStore for MemoryToneStore {
    fn read(&self) -> io::Result<Option<Vec<u8>>> {
        Ok(self.slot().clone())
    }

    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        *self.slot() = Some(bytes.to_vec());
        Ok(())
    }

    fn delete(&self) -> io::Result<()> {
        *self.slot() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_bytes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileToneStore::new(dir.path().join("nested").join("tones.json"));

        assert_eq!(store.read().unwrap(), None);
        store.write(b"[1,2,3]").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some(&b"[1,2,3]"[..]));
        store.delete().unwrap();
        assert_eq!(store.read().unwrap(), None);
        // Deleting again stays quiet.
        store.delete().unwrap();
    }

    #[test]
    fn memory_store_round_trips_bytes() {
        let store = MemoryToneStore::new();
        assert_eq!(store.read().unwrap(), None);
        store.write(b"data").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some(&b"data"[..]));
        store.delete().unwrap();
        assert_eq!(store.read().unwrap(), None);
    }
}
