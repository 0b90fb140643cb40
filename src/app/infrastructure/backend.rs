//! Persistence backends for the preference file.
//!
//! Reads are synchronous and only happen at startup. Writes are fire-and-forget:
//! the caller hands over the serialized content and never waits for the disk.

use std::cell::RefCell;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;
use tracing::{debug, warn};

use super::error::{AppError, Result};

/// Settings file location relative to the vault root
pub const SETTINGS_PATH: &str = ".obsidian/rtl.json";

pub trait PersistenceBackend {
    /// Read the stored preferences. Absence is reported as an error.
    fn read(&self) -> Result<String>;

    /// Queue `content` to replace the stored preferences. Failures are logged, not returned.
    fn write(&self, content: String);
}

/// Stores preferences in a single file, written by a background thread.
///
/// Writes are applied in the order they were queued, each one replacing the file
/// atomically (temp file + rename). Dropping the backend flushes pending writes.
pub struct FsBackend {
    path: PathBuf,
    sender: Option<Sender<String>>,
    writer: Option<JoinHandle<()>>,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (sender, receiver) = mpsc::channel::<String>();

        let target = path.clone();
        let writer = std::thread::spawn(move || {
            for content in receiver {
                match write_atomic(&target, &content) {
                    Ok(()) => debug!(path = %target.display(), bytes = content.len(), "Saved direction settings"),
                    Err(e) => warn!(path = %target.display(), error = %e, "Failed to save direction settings"),
                }
            }
        });

        Self {
            path,
            sender: Some(sender),
            writer: Some(writer),
        }
    }

    /// Backend for the settings file inside `vault`
    pub fn for_vault(vault: &Path) -> Self {
        Self::new(vault.join(SETTINGS_PATH))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceBackend for FsBackend {
    fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }

    fn write(&self, content: String) {
        let sent = self
            .sender
            .as_ref()
            .ok_or(AppError::WriterClosed)
            .and_then(|sender| sender.send(content).map_err(|_| AppError::WriterClosed));
        if let Err(e) = sent {
            warn!(path = %self.path.display(), error = %e, "Dropping settings write");
        }
    }
}

impl Drop for FsBackend {
    fn drop(&mut self) {
        // Closing the channel ends the writer loop once the queue is drained
        self.sender.take();
        if let Some(writer) = self.writer.take() {
            if writer.join().is_err() {
                warn!(path = %self.path.display(), "Settings writer thread panicked");
            }
        }
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = temp_path(path);
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[derive(Debug, Default)]
struct MemoryState {
    content: Option<String>,
    writes: usize,
}

/// In-process backend. Clones share the same storage, so a host (or a test)
/// can keep a handle and inspect what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        let backend = Self::new();
        backend.state.borrow_mut().content = Some(content.into());
        backend
    }

    pub fn content(&self) -> Option<String> {
        self.state.borrow().content.clone()
    }

    /// Number of writes received so far
    pub fn write_count(&self) -> usize {
        self.state.borrow().writes
    }
}

impl PersistenceBackend for MemoryBackend {
    fn read(&self) -> Result<String> {
        self.state.borrow().content.clone().ok_or_else(|| {
            AppError::Io(io::Error::new(io::ErrorKind::NotFound, "no stored settings"))
        })
    }

    fn write(&self, content: String) {
        let mut state = self.state.borrow_mut();
        state.content = Some(content);
        state.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::for_vault(dir.path());
        assert!(matches!(backend.read(), Err(AppError::Io(_))));
    }

    #[test]
    fn test_fs_write_flushes_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_PATH);
        {
            let backend = FsBackend::for_vault(dir.path());
            assert_eq!(backend.path(), path.as_path());
            backend.write("{\"a\":1}".to_string());
            backend.write("{\"a\":2}".to_string());
        }
        // Last write wins, parent directory created, no temp file left behind
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":2}");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_fs_read_after_write() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("prefs.json");
        {
            let backend = FsBackend::new(&file);
            backend.write("hello".to_string());
        }
        let backend = FsBackend::new(&file);
        assert_eq!(backend.read().unwrap(), "hello");
    }

    #[test]
    fn test_temp_path_appends_suffix() {
        assert_eq!(
            temp_path(Path::new("/vault/.obsidian/rtl.json")),
            PathBuf::from("/vault/.obsidian/rtl.json.tmp")
        );
    }

    #[test]
    fn test_memory_backend_shares_state() {
        let backend = MemoryBackend::new();
        assert!(backend.read().is_err());

        let handle = backend.clone();
        backend.write("x".to_string());
        assert_eq!(handle.content().as_deref(), Some("x"));
        assert_eq!(handle.write_count(), 1);
        assert_eq!(handle.read().unwrap(), "x");
    }
}
