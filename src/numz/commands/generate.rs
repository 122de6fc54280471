use crate::commands::{CmdMessage, CmdResult};
use crate::config::NumzConfig;
use crate::error::Result;
use crate::generator::{available_count, Generator};
use crate::store::DataStore;
use chrono::NaiveDate;
use rand::Rng;
use std::collections::BTreeSet;

use super::helpers::append_entry;

/// Below this many remaining candidates a warning is attached.
const LOW_SPACE_WARNING: usize = 100;

pub fn run<S: DataStore, R: Rng>(
    store: &mut S,
    config: &NumzConfig,
    generator: &mut Generator<R>,
    today: NaiveDate,
) -> Result<CmdResult> {
    let entries = store.load()?;
    let mut used: BTreeSet<u32> = entries.iter().map(|e| e.number).collect();
    let number = generator.generate_unique_number(config, &used)?;
    let entry = append_entry(store, entries, number, today)?;

    let mut result = CmdResult::default().with_affected_entries(vec![entry]);
    result.add_message(CmdMessage::success(format!("Generated number: {}", number)));

    used.insert(number);
    let remaining = available_count(config, &used);
    if remaining < LOW_SPACE_WARNING {
        result.add_message(CmdMessage::warning(format!(
            "Only {} unused numbers left",
            remaining
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::INTERNAL_BLACKLIST;
    use crate::error::NumzError;
    use crate::store::memory::fixtures::{fixed_date, StoreFixture};
    use crate::store::memory::InMemoryStore;
    use crate::validate::is_valid_number;

    #[test]
    fn records_one_new_number() {
        let mut store = StoreFixture::new().with_numbers(&[5031, 2046]).store;
        let before = store.used_numbers().unwrap();
        let mut generator = Generator::seeded(11);

        let result = run(&mut store, &NumzConfig::default(), &mut generator, fixed_date()).unwrap();

        let number = result.affected_entries[0].number;
        let after = store.used_numbers().unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert!(!before.contains(&number));
        assert!(after.contains(&number));
        assert!(is_valid_number(i64::from(number)));
        assert!(!INTERNAL_BLACKLIST.contains(&number));
        assert_eq!(store.last_number().unwrap(), Some(number));
        assert_eq!(store.load().unwrap().last().unwrap().date_created, fixed_date());
        assert_eq!(
            result.messages[0].content,
            format!("Generated number: {}", number)
        );
    }

    #[test]
    fn repeated_runs_never_collide() {
        let mut store = InMemoryStore::new();
        let config = NumzConfig::default();
        let mut generator = Generator::seeded(12);

        for _ in 0..100 {
            run(&mut store, &config, &mut generator, fixed_date()).unwrap();
        }
        assert_eq!(store.load().unwrap().len(), 100);
        assert_eq!(store.used_numbers().unwrap().len(), 100);
    }

    #[test]
    fn warns_when_space_runs_low() {
        let mut store = StoreFixture::new()
            .with_valid_numbers(4536 - 10 - 50, &INTERNAL_BLACKLIST)
            .store;
        let mut generator = Generator::seeded(13);
        let config = NumzConfig::default();

        let result = run(&mut store, &config, &mut generator, fixed_date()).unwrap();
        let warning = result
            .messages
            .iter()
            .find(|m| m.level == MessageLevel::Warning)
            .unwrap();
        assert_eq!(warning.content, "Only 49 unused numbers left");
    }

    #[test]
    fn exhausted_space_leaves_store_untouched() {
        let mut store = StoreFixture::new()
            .with_valid_numbers(4536, &INTERNAL_BLACKLIST)
            .store;
        let before = store.load().unwrap();
        let mut generator = Generator::seeded(14);
        let config = NumzConfig::default();

        let err = run(&mut store, &config, &mut generator, fixed_date()).unwrap_err();
        assert!(matches!(err, NumzError::Exhausted));
        assert_eq!(err.to_string(), "No unused numbers left");
        assert_eq!(store.load().unwrap(), before);
        assert_eq!(store.save_count(), 0);
    }
}
