use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Document, Mission};

/// Whole-document persistence used by the mission store.
pub trait Storage: Send + Sync {
    /// Reads the full document. `Ok(None)` means nothing has been written yet.
    fn load(&self) -> Result<Option<Document>>;

    /// Replaces the full document with `missions`.
    fn save(&self, missions: &[Mission]) -> Result<()>;
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    missions: &'a [Mission],
}

/// A pretty-printed JSON file, rewritten in place on every save.
///
/// The file is overwritten directly, so a crash during a save can leave it
/// truncated.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Option<Document>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::Io(e)),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, missions: &[Mission]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&DocumentRef { missions })?;
        fs::write(&self.path, content)?;

        debug!(path = %self.path.display(), count = missions.len(), "Wrote mission file");
        Ok(())
    }
}

/// Keeps the document in memory. Useful for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    document: Mutex<Option<Document>>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_missions(missions: Vec<Mission>) -> Self {
        Self {
            document: Mutex::new(Some(Document::with_missions(missions))),
            ..Self::default()
        }
    }

    /// Makes every following `save` fail with an I/O error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// The last saved document.
    #[must_use]
    pub fn snapshot(&self) -> Option<Document> {
        self.document.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<Document>> {
        Ok(self.snapshot())
    }

    fn save(&self, missions: &[Mission]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::Io(std::io::Error::other("storage is read-only")));
        }
        *self.document.lock().unwrap_or_else(|e| e.into_inner()) =
            Some(Document::with_missions(missions.to_vec()));
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for std::sync::Arc<S> {
    fn load(&self) -> Result<Option<Document>> {
        (**self).load()
    }

    fn save(&self, missions: &[Mission]) -> Result<()> {
        (**self).save(missions)
    }
}
