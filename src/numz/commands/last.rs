use crate::commands::{CmdMessage, CmdResult, EMPTY_STORE_MESSAGE};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let last = store.last_number()?;
    let mut result = CmdResult::default().with_last_number(last);
    match last {
        Some(number) => {
            result.add_message(CmdMessage::info(format!("Last generated number: {}", number)))
        }
        None => result.add_message(CmdMessage::info(EMPTY_STORE_MESSAGE)),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn reports_last_entry() {
        let store = StoreFixture::new().with_numbers(&[9870, 1023]).store;
        let result = run(&store).unwrap();

        assert_eq!(result.last_number, Some(1023));
        assert_eq!(result.messages[0].content, "Last generated number: 1023");
    }

    #[test]
    fn empty_store() {
        let result = run(&InMemoryStore::new()).unwrap();
        assert_eq!(result.last_number, None);
        assert_eq!(result.messages[0].content, "No numbers generated yet");
    }
}
