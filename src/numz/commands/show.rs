use crate::commands::{CmdMessage, CmdResult, EMPTY_STORE_MESSAGE};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let entries = store.load()?;
    let mut result = CmdResult::default();
    if entries.is_empty() {
        result.add_message(CmdMessage::info(EMPTY_STORE_MESSAGE));
    }
    Ok(result.with_listed_entries(entries))
}
