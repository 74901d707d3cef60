use std::path::{Path, PathBuf};

use aurora_common::StorageError;
use tracing::info;

use super::Storage;

/// File-backed store: one JSON file per key inside a data directory.
///
/// On Linux the default directory is `~/.local/share/aurora`, on macOS
/// `~/Library/Application Support/aurora`.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        info!("storage directory: {}", dir.display());
        Ok(Self { dir })
    }

    /// Open a store at the platform default data directory.
    pub fn open_default() -> Result<Self, StorageError> {
        let base = dirs::data_dir().ok_or_else(|| {
            StorageError::DirUnavailable(PathBuf::from("<platform data dir>"))
        })?;
        Self::open(base.join("aurora"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        let _ = std::fs::remove_file(self.path_for(key));
    }
}
