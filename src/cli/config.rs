use crate::config::{self, Config};
use crate::error::Result;
use std::path::PathBuf;

/// Initialize advlog.toml configuration file
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(|| PathBuf::from("advlog.toml"));

    // Check if file already exists
    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    // Save default configuration
    let config = Config::default();
    config::save(&config, &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!("\nNext steps:");
    println!(
        "1. Edit {} to set your journal file, actor name, and preferences",
        config_path.display()
    );
    println!("2. Run 'advlog journal init' to create the journal");
    println!("3. Run 'advlog log e Your first event' to log an entry");

    Ok(())
}
