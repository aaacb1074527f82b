//! Key-value option storage for change detection
//!
//! The router persists exactly one value, the route-table fingerprint, so
//! the store interface is a plain string key-value map.

use crate::{RouterError, RouterResult};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persistent option storage provided by the host
pub trait OptionStore {
    /// Read an option
    fn get_option(&self, key: &str) -> RouterResult<Option<String>>;

    /// Write an option
    fn set_option(&mut self, key: &str, value: &str) -> RouterResult<()>;
}

/// In-memory option store
#[derive(Debug, Clone, Default)]
pub struct MemoryOptionStore {
    options: BTreeMap<String, String>,
}

impl MemoryOptionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl OptionStore for MemoryOptionStore {
    fn get_option(&self, key: &str) -> RouterResult<Option<String>> {
        Ok(self.options.get(key).cloned())
    }

    fn set_option(&mut self, key: &str, value: &str) -> RouterResult<()> {
        self.options.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Option store backed by a single JSON object file.
///
/// A missing file reads as an empty store; every write rewrites the file.
#[derive(Debug, Clone)]
pub struct JsonFileOptionStore {
    path: PathBuf,
}

impl JsonFileOptionStore {
    /// Use the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> RouterResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                RouterError::persistence(format!(
                    "Option file '{}' is not a JSON object of strings",
                    self.path.display()
                ))
                .with_cause(e.to_string())
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl OptionStore for JsonFileOptionStore {
    fn get_option(&self, key: &str) -> RouterResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set_option(&mut self, key: &str, value: &str) -> RouterResult<()> {
        let mut options = self.load()?;
        options.insert(key.to_string(), value.to_string());
        fs::write(&self.path, serde_json::to_string_pretty(&options)?)?;
        Ok(())
    }
}
