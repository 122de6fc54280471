use crate::commands::{CmdMessage, CmdResult};
use crate::config::NumzConfig;
use crate::error::{NumzError, Result};
use crate::store::DataStore;
use crate::validate::parse_number;
use chrono::NaiveDate;

use super::helpers::append_entry;

const INVALID_BLACKLIST_MESSAGE: &str =
    "Blacklist number must be 4 digits with no repeating digits";

/// Excludes a number from future generation by recording it. Blacklisted
/// numbers live in the same list as generated ones.
pub fn run<S: DataStore>(
    store: &mut S,
    config: &NumzConfig,
    input: &str,
    today: NaiveDate,
) -> Result<CmdResult> {
    let number = parse_number(input)
        .ok_or_else(|| NumzError::InvalidNumber(INVALID_BLACKLIST_MESSAGE.to_string()))?;

    let entries = store.load()?;
    if config.is_blacklisted(number) || entries.iter().any(|e| e.number == number) {
        return Err(NumzError::AlreadyExcluded(number));
    }

    let entry = append_entry(store, entries, number, today)?;
    let mut result = CmdResult::default().with_affected_entries(vec![entry]);
    result.add_message(CmdMessage::success(format!("Added {} to blacklist", number)));
    Ok(result)
}
