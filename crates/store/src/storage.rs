//! The injected storage capability
//!
//! The engine never reads or writes storage; a save controller calls the
//! codec and pushes the JSON through a [`SaveStorage`] implementation. A
//! missing or corrupt backing store loads as an empty collection - decode
//! failure never crashes a session.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::codec::SaveList;

/// Backing store for serialized saves, injected by the host
pub trait SaveStorage {
    fn read(&self) -> Result<String>;
    fn write(&self, contents: &str) -> Result<()>;
}

/// Plain-file storage under a host-chosen path
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SaveStorage for FileStorage {
    fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }

    fn write(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// Load the save collection; missing or malformed data yields an empty list
pub fn load_saves(storage: &dyn SaveStorage) -> SaveList {
    match storage.read() {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
        Err(_) => SaveList::default(),
    }
}

/// Persist the full save collection as JSON
pub fn store_saves(storage: &dyn SaveStorage, saves: &SaveList) -> Result<()> {
    let json = serde_json::to_string(saves)?;
    storage.write(&json)
}
