//! # Storage Layer
//!
//! The whole state of numz is one ordered list of [`Entry`] values. The
//! [`DataStore`] trait hides where that list lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - A single JSON array, `generated_numbers.json` by default
//!   - Every write replaces the whole file
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!
//! ## Read-modify-write
//!
//! Commands call `load`, append one entry and call `save` with the full
//! list. There is no locking: two processes writing the same file at the
//! same time can lose an update (the last writer wins).

use crate::error::Result;
use crate::model::Entry;
use std::collections::BTreeSet;

pub mod fs;
pub mod memory;

/// Abstract interface for the entry list.
pub trait DataStore {
    /// Load every entry in insertion order. A store that was never written
    /// to yields an empty list.
    fn load(&self) -> Result<Vec<Entry>>;

    /// Replace the stored list with `entries`.
    fn save(&mut self, entries: &[Entry]) -> Result<()>;

    /// Every number already recorded.
    fn used_numbers(&self) -> Result<BTreeSet<u32>> {
        Ok(self.load()?.iter().map(|e| e.number).collect())
    }

    /// The most recently recorded number.
    fn last_number(&self) -> Result<Option<u32>> {
        Ok(self.load()?.last().map(|e| e.number))
    }
}
