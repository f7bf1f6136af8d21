use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use enum_dispatch::enum_dispatch;

use super::{RemoteStore, UserRecord};

/// File holding the resident patient record inside the data directory.
pub const USER_FILE: &str = "oasis_user.json";
/// File holding the persisted language code inside the data directory.
pub const LANGUAGE_FILE: &str = "language";

/// Where the resident record and the chosen language live.
///
/// Absence is not an error: `load` returns `Ok(None)` for a fresh store.
#[enum_dispatch]
pub trait UserStore {
    fn load(&self) -> Result<Option<UserRecord>>;
    fn save(&mut self, record: &UserRecord) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
    fn load_language(&self) -> Result<Option<String>>;
    fn save_language(&mut self, code: &str) -> Result<()>;
}

#[enum_dispatch(UserStore)]
#[derive(Debug)]
pub enum Store {
    File(FileStore),
    Memory(MemoryStore),
    Remote(RemoteStore),
}

/// Record and language as files under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }

    pub fn language_path(&self) -> PathBuf {
        self.dir.join(LANGUAGE_FILE)
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create directory: {}", self.dir.display()))?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read file: {}", path.display())),
    }
}

fn remove_optional(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != ErrorKind::NotFound => {
            Err(e).with_context(|| format!("Failed to remove file: {}", path.display()))
        }
        _ => Ok(()),
    }
}

impl UserStore for FileStore {
    fn load(&self) -> Result<Option<UserRecord>> {
        let path = self.user_path();
        let Some(content) = read_optional(&path)? else {
            return Ok(None);
        };
        match serde_json::from_str(&content) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "ignoring unreadable patient record"
                );
                Ok(None)
            }
        }
    }

    fn save(&mut self, record: &UserRecord) -> Result<()> {
        let content =
            serde_json::to_string_pretty(record).context("Failed to serialize patient record")?;
        let path = self.user_path();
        self.write(&path, &format!("{}\n", content))?;
        tracing::debug!(path = %path.display(), entries = record.history.len(), "saved patient record");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        remove_optional(&self.user_path())
    }

    fn load_language(&self) -> Result<Option<String>> {
        Ok(read_optional(&self.language_path())?
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty()))
    }

    fn save_language(&mut self, code: &str) -> Result<()> {
        self.write(&self.language_path(), &format!("{}\n", code))
    }
}

/// In-process store for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<UserRecord>,
    language: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: UserRecord) -> Self {
        Self {
            record: Some(record),
            language: None,
        }
    }
}

impl UserStore for MemoryStore {
    fn load(&self) -> Result<Option<UserRecord>> {
        Ok(self.record.clone())
    }

    fn save(&mut self, record: &UserRecord) -> Result<()> {
        self.record = Some(record.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.record = None;
        Ok(())
    }

    fn load_language(&self) -> Result<Option<String>> {
        Ok(self.language.clone())
    }

    fn save_language(&mut self, code: &str) -> Result<()> {
        self.language = Some(code.to_string());
        Ok(())
    }
}
