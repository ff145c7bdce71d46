//! Show the stored preference record

use crate::error::Result;
use crate::store::PreferenceStore;

use chrono::DateTime;

/// Print the most recent stored search, if any
pub fn show_last() -> Result<()> {
    let store = PreferenceStore::new()?;
    let record = store.load()?;

    match record.last_search {
        Some(last) => {
            println!("Last search: {}", last);
            if let Some(when) = record.timestamp.and_then(DateTime::from_timestamp_millis) {
                println!("Searched at: {}", when.format("%Y-%m-%d %H:%M:%S UTC"));
            }
        }
        None => println!("No searches stored yet."),
    }

    Ok(())
}
