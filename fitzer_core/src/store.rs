//! Key-value persistence port.
//!
//! State is stored as one JSON document per [`StateKey`]. The engine never
//! touches storage directly; callers hand a [`StateStore`] to
//! [`crate::state::AppState`].

use crate::{Error, Result};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// The documents the application persists
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateKey {
    Profile,
    Account,
    BudgetDiet,
}

impl StateKey {
    pub fn file_name(&self) -> &'static str {
        match self {
            StateKey::Profile => "profile.json",
            StateKey::Account => "account.json",
            StateKey::BudgetDiet => "budget_diet.json",
        }
    }
}

/// Storage backend for application state
pub trait StateStore {
    /// Raw contents stored under `key`, if any
    fn read(&self, key: StateKey) -> Result<Option<String>>;

    /// Replace the contents stored under `key`
    fn write(&mut self, key: StateKey, contents: &str) -> Result<()>;

    /// Delete whatever is stored under `key`
    fn remove(&mut self, key: StateKey) -> Result<()>;

    /// Load and deserialize a document
    ///
    /// Content that fails to parse is logged and treated as absent.
    fn load<T: DeserializeOwned>(&self, key: StateKey) -> Result<Option<T>>
    where
        Self: Sized,
    {
        let Some(contents) = self.read(key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&contents) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("Ignoring unreadable {:?} state: {}", key, e);
                Ok(None)
            }
        }
    }

    /// Serialize and store a document
    fn save<T: Serialize>(&mut self, key: StateKey, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        let contents = serde_json::to_string(value)?;
        self.write(key, &contents)
    }
}

const LOCK_FILE: &str = ".lock";

/// Exclusive hold on a [`FileStore`] directory, released on drop
#[derive(Debug)]
pub struct StoreLock {
    file: File,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(e) = self.file.unlock() {
            tracing::warn!("Failed to release state lock: {}", e);
        }
    }
}

/// JSON files in a directory, guarded by file locks
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: StateKey) -> PathBuf {
        self.dir.join(key.file_name())
    }

    /// Block until this process holds the directory lock
    ///
    /// Hold the returned guard across a load-modify-save cycle so that
    /// concurrent processes apply their changes one after another.
    pub fn lock(&self) -> Result<StoreLock> {
        std::fs::create_dir_all(&self.dir)?;
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.dir.join(LOCK_FILE))?;
        file.lock_exclusive()?;
        Ok(StoreLock { file })
    }

    fn read_locked(path: &Path) -> Result<String> {
        let file = File::open(path)?;
        // Acquire shared lock for reading
        file.lock_shared()?;

        let mut contents = String::new();
        let result = std::io::BufReader::new(&file).read_to_string(&mut contents);
        file.unlock()?;
        result?;

        Ok(contents)
    }
}

impl StateStore for FileStore {
    fn read(&self, key: StateKey) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            tracing::debug!("No {:?} state at {:?}", key, path);
            return Ok(None);
        }

        match Self::read_locked(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) => {
                tracing::warn!("Unable to read state file {:?}: {}. Using defaults.", path, e);
                Ok(None)
            }
        }
    }

    /// Atomically writes state by:
    /// 1. Writing to a temp file in the same directory
    /// 2. Syncing to disk
    /// 3. Renaming over the target file
    fn write(&mut self, key: StateKey, contents: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);

        let temp = NamedTempFile::new_in(&self.dir)?;

        // Readers never see the temp file; the lock only guards the write itself
        temp.as_file().lock_exclusive()?;
        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(&path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved {:?} state to {:?}", key, path);
        Ok(())
    }

    fn remove(&mut self, key: StateKey) -> Result<()> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store, for tests and embedding
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<StateKey, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: StateKey) -> Result<Option<String>> {
        Ok(self.entries.get(&key).cloned())
    }

    fn write(&mut self, key: StateKey, contents: &str) -> Result<()> {
        self.entries.insert(key, contents.to_string());
        Ok(())
    }

    fn remove(&mut self, key: StateKey) -> Result<()> {
        self.entries.remove(&key);
        Ok(())
    }
}
