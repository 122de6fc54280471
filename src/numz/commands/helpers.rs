use crate::config::NumzConfig;
use crate::error::Result;
use crate::model::Entry;
use crate::store::DataStore;
use crate::validate::is_valid_number;
use chrono::NaiveDate;

/// Appends `number` dated `today` to the already loaded `entries` and writes
/// the full list back.
pub fn append_entry<S: DataStore>(
    store: &mut S,
    mut entries: Vec<Entry>,
    number: u32,
    today: NaiveDate,
) -> Result<Entry> {
    let entry = Entry::new(number, today);
    entries.push(entry);
    store.save(&entries)?;
    log::info!("recorded {} ({} entries)", number, entries.len());
    Ok(entry)
}

/// Returns the number when it is valid, not blacklisted and not in `entries`.
pub fn available_number(entries: &[Entry], config: &NumzConfig, number: i64) -> Option<u32> {
    if !is_valid_number(number) {
        return None;
    }
    let number = u32::try_from(number).ok()?;
    if config.is_blacklisted(number) || entries.iter().any(|e| e.number == number) {
        return None;
    }
    Some(number)
}
