use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One persisted record. Entries are never updated once written.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub number: u32,
    #[serde(rename = "dateCreated")]
    pub date_created: NaiveDate,
}

impl Entry {
    pub fn new(number: u32, date_created: NaiveDate) -> Self {
        Self {
            number,
            date_created,
        }
    }
}
