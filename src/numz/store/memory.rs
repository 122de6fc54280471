use super::DataStore;
use crate::error::Result;
use crate::model::Entry;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Vec<Entry>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Entry>> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        self.entries = entries.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::NaiveDate;

    pub fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_numbers(mut self, numbers: &[u32]) -> Self {
            let mut entries = self.store.load().unwrap();
            entries.extend(numbers.iter().map(|n| Entry::new(*n, fixed_date())));
            self.store.entries = entries;
            self
        }

        /// Fill the store with the first `count` valid numbers that are not
        /// in `skip`.
        pub fn with_valid_numbers(self, count: usize, skip: &[u32]) -> Self {
            let numbers: Vec<u32> = crate::validate::all_valid_numbers()
                .filter(|n| !skip.contains(n))
                .take(count)
                .collect();
            self.with_numbers(&numbers)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn starts_empty() {
        let store = InMemoryStore::new();
        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.last_number().unwrap(), None);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn fixture_seeds_entries_in_order() {
        let fixture = StoreFixture::new().with_numbers(&[5031, 2046]);
        assert_eq!(fixture.store.last_number().unwrap(), Some(2046));
        assert_eq!(fixture.store.used_numbers().unwrap().len(), 2);
        assert_eq!(fixture.store.save_count(), 0);
    }

    #[test]
    fn save_replaces_contents() {
        let mut store = StoreFixture::new().with_numbers(&[5031]).store;
        store.save(&[Entry::new(2046, fixed_date())]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, vec![Entry::new(2046, fixed_date())]);
        assert_eq!(store.save_count(), 1);
    }
}
