use crate::commands::{CmdMessage, CmdResult};
use crate::config::NumzConfig;
use crate::error::{NumzError, Result};
use crate::model::Entry;
use crate::store::DataStore;
use chrono::NaiveDate;

use super::helpers::{append_entry, available_number};

/// Records a user-supplied number. Returns `false`, without touching the
/// store, when the number is malformed, blacklisted or already recorded.
pub fn add_number<S: DataStore>(
    store: &mut S,
    config: &NumzConfig,
    number: i64,
    today: NaiveDate,
) -> Result<bool> {
    Ok(try_add(store, config, number, today)?.is_some())
}

fn try_add<S: DataStore>(
    store: &mut S,
    config: &NumzConfig,
    number: i64,
    today: NaiveDate,
) -> Result<Option<Entry>> {
    let entries = store.load()?;
    let Some(number) = available_number(&entries, config, number) else {
        log::debug!("rejected {}", number);
        return Ok(None);
    };
    append_entry(store, entries, number, today).map(Some)
}

/// Command form of [`add_number`] taking the text typed by the user.
pub fn run<S: DataStore>(
    store: &mut S,
    config: &NumzConfig,
    input: &str,
    today: NaiveDate,
) -> Result<CmdResult> {
    let unavailable = || NumzError::Unavailable(input.to_string());
    let number: i64 = input.trim().parse().map_err(|_| unavailable())?;
    let entry = try_add(store, config, number, today)?.ok_or_else(unavailable)?;

    let mut result = CmdResult::default().with_affected_entries(vec![entry]);
    result.add_message(CmdMessage::success(format!("Added number: {}", entry.number)));
    Ok(result)
}
