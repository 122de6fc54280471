use super::DataStore;
use crate::error::{NumzError, Result};
use crate::model::Entry;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(NumzError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Entry>> {
        if !self.path.exists() {
            log::debug!("{} does not exist yet", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(NumzError::Io)?;
        let entries: Vec<Entry> =
            serde_json::from_str(&content).map_err(|source| NumzError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        log::debug!("loaded {} entries from {}", entries.len(), self.path.display());
        Ok(entries)
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        self.ensure_parent()?;

        let content = serde_json::to_string_pretty(entries).map_err(NumzError::Serialization)?;
        fs::write(&self.path, content).map_err(NumzError::Io)?;
        log::debug!("wrote {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}
