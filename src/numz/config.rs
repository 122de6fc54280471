use crate::error::{NumzError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_STORAGE_FILE: &str = "generated_numbers.json";
const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Numbers considered too easy to guess. Never persisted.
pub const INTERNAL_BLACKLIST: [u32; 10] = [
    1234, 4321, 2345, 3456, 4567, 5678, 6789, 7890, 8901, 9012,
];

/// Runtime configuration, optionally read from a JSON file.
///
/// The blacklist is not part of the file format: it always starts from
/// [`INTERNAL_BLACKLIST`] and can only be replaced in code (tests).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NumzConfig {
    /// Path of the JSON array holding every recorded entry
    #[serde(default = "default_storage_file")]
    pub storage_file: PathBuf,

    /// Upper bound on draws before generation gives up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(skip, default = "default_blacklist")]
    pub blacklist: BTreeSet<u32>,
}

fn default_storage_file() -> PathBuf {
    PathBuf::from(DEFAULT_STORAGE_FILE)
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_blacklist() -> BTreeSet<u32> {
    INTERNAL_BLACKLIST.iter().copied().collect()
}

impl Default for NumzConfig {
    fn default() -> Self {
        Self {
            storage_file: default_storage_file(),
            max_attempts: default_max_attempts(),
            blacklist: default_blacklist(),
        }
    }
}

impl NumzConfig {
    /// Load config from the given file, or return defaults if not found
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(NumzError::Io)?;
        let config: NumzConfig =
            serde_json::from_str(&content).map_err(NumzError::Serialization)?;
        Ok(config)
    }

    /// Load config from a path the user named explicitly; the file must exist.
    pub fn load_required<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(NumzError::ConfigNotFound(path.to_path_buf()));
        }
        Self::load(path)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(NumzError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(self).map_err(NumzError::Serialization)?;
        fs::write(path, content).map_err(NumzError::Io)?;
        Ok(())
    }

    pub fn with_storage_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.storage_file = path.into();
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_blacklist<I: IntoIterator<Item = u32>>(mut self, numbers: I) -> Self {
        self.blacklist = numbers.into_iter().collect();
        self
    }

    pub fn is_blacklisted(&self, number: u32) -> bool {
        self.blacklist.contains(&number)
    }
}
