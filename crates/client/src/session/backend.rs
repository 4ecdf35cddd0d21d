//! Storage backends for the session slot.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

/// Storage for the single serialized session slot.
///
/// Implementations only move raw strings; serialization and the
/// fail-soft policy live in [`super::Session`].
pub trait SessionBackend: Send + Sync {
    /// Read the slot. `Ok(None)` when the slot is absent.
    fn read(&self) -> io::Result<Option<String>>;

    /// Overwrite the slot.
    fn write(&self, raw: &str) -> io::Result<()>;

    /// Delete the slot. Deleting an absent slot is not an error.
    fn clear(&self) -> io::Result<()>;
}

/// File-backed session slot.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default slot location: `~/.aula/session.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".aula").join("session.json"))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SessionBackend for FileBackend {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, raw: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, raw)
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory session slot for tests and embedders without durable storage.
#[derive(Default)]
pub struct MemoryBackend {
    slot: RwLock<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBackend for MemoryBackend {
    fn read(&self) -> io::Result<Option<String>> {
        let guard = self.slot.read().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn write(&self, raw: &str) -> io::Result<()> {
        let mut guard = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(raw.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        let mut guard = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_roundtrip() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.read().unwrap(), None);
        backend.write("{\"k\":1}").unwrap();
        assert_eq!(backend.read().unwrap().as_deref(), Some("{\"k\":1}"));
        backend.clear().unwrap();
        assert_eq!(backend.read().unwrap(), None);
    }

    #[test]
    fn test_file_backend_missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("session.json"));
        assert_eq!(backend.read().unwrap(), None);
        // Clearing an absent slot is fine too
        backend.clear().unwrap();
    }

    #[test]
    fn test_file_backend_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("nested").join("session.json"));
        backend.write("{}").unwrap();
        assert_eq!(backend.read().unwrap().as_deref(), Some("{}"));
    }
}
