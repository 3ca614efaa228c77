//! File-backed storage: one `<key>.json` file per key

use std::path::PathBuf;

use super::file_io::{read_optional, remove_if_exists, write_atomic};
use super::StateStorage;
use crate::config::paths::TrackerPaths;
use crate::error::BudgetError;

/// Stores each key as a file in a directory, written atomically
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Storage in the data directory, creating it if needed
    pub fn open(paths: &TrackerPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;
        Ok(Self::new(paths.data_dir()))
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StateStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, BudgetError> {
        read_optional(self.path_for(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), BudgetError> {
        write_atomic(self.path_for(key), value)
    }

    fn remove(&mut self, key: &str) -> Result<(), BudgetError> {
        remove_if_exists(self.path_for(key))
    }
}
