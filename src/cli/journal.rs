use std::path::PathBuf;

use crate::config;
use crate::error::Result;
use crate::journal::{FileStore, JournalDocument};

/// Initialize the journal document with an empty log container
pub fn init(config_path: Option<PathBuf>, name: Option<String>) -> Result<()> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from("advlog.toml"));

    // Load config to get the journal file path
    let config = config::load(&config_path)?;
    let store = FileStore::new(&config.journal_file);

    if store.exists() {
        eprintln!("Journal already exists at: {}", store.path().display());
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    let name = name.unwrap_or_else(|| "Adventure Log".to_string());
    let doc = JournalDocument::new(name)?;
    store.save(&doc)?;

    println!("Journal created: {}", store.path().display());
    println!("Run 'advlog log e Your first event' to log an entry.");

    Ok(())
}
