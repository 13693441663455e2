use chrono::{Local, Utc};
use std::path::{Path, PathBuf};

use crate::config::{self, Config};
use crate::display;
use crate::error::{AdvlogError, Result};
use crate::journal::{self, FileStore};
use crate::models::ParseError;
use crate::parser;

const HELP: &str = "\
# Adventure Log

Record timestamped entries into the adventure journal.

- `log q|quote <source> <text>` — record a quote attributed to *source*.
  Multi-word sources go in double quotes: `log q \"Old Tome\" We found it!`
- `log e|event <text>` — record an event. Lines starting with any other
  word are logged as events too.
- `log config` — show the logging settings (GM only).

Entries are appended to the journal's log section with a timestamp;
nothing already logged is ever modified.
";

/// Process a log command line: parse, merge into the journal, persist,
/// and optionally echo a chat line.
pub fn run(config_path: Option<PathBuf>, actor: Option<String>, text: Vec<String>) -> Result<()> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from("advlog.toml"));

    // Load configuration (the preference store)
    let config = config::load(&config_path)?;

    if !config.logging.enabled {
        eprintln!(
            "Warning: adventure logging is disabled in {}",
            config_path.display()
        );
        return Ok(());
    }

    if config.logging.gm_only && !config.actor.gm {
        eprintln!("Warning: adventure logging is restricted to the GM");
        return Ok(());
    }

    let actor_name = actor.unwrap_or_else(|| config.actor.name.clone());
    let raw_line = text.join(" ");

    let entry = match parser::parse(&raw_line, &actor_name, Local::now()) {
        Ok(entry) => entry,
        Err(ParseError::NeedsHelp) => {
            display::print_markdown(HELP);
            return Ok(());
        }
        Err(ParseError::DelegateToConfig) => {
            return show_settings(&config, &config_path);
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            if let Some(recovery) = err.recovery_text() {
                // Re-seed text the user can edit and resubmit
                println!("{}", recovery);
            }
            return Ok(());
        }
    };

    let store = FileStore::new(&config.journal_file);
    let mut doc = match store.load() {
        Ok(doc) => doc,
        Err(AdvlogError::JournalMissing(path)) => {
            if config.actor.gm {
                // Actionable for the GM; informational for everyone else
                return Err(AdvlogError::JournalMissing(format!(
                    "{}. Run 'advlog journal init' to create it.",
                    path
                )));
            }
            eprintln!("Warning: no adventure log journal has been set up yet");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    doc.content = journal::merge(&doc.content, &entry)?;
    doc.updated_at = Utc::now();
    store.save(&doc)?;

    println!("{}", entry.flavor);
    if config.logging.echo_messages {
        let whisper =
            config.actor.gm && config.logging.gm_only && config.logging.gm_only_whisper;
        if whisper {
            println!("(whisper) {}", entry.chat_line);
        } else {
            println!("{}", entry.chat_line);
        }
    }

    Ok(())
}

/// Print the current logging settings. Changing them is an edit of the
/// config file; only the GM gets this far.
fn show_settings(config: &Config, config_path: &Path) -> Result<()> {
    if !config.actor.gm {
        eprintln!("Warning: only the GM may view adventure log settings");
        return Ok(());
    }

    println!("Adventure log settings ({}):", config_path.display());
    println!("  journal_file     = {}", config.journal_file.display());
    println!("  enabled          = {}", config.logging.enabled);
    println!("  gm_only          = {}", config.logging.gm_only);
    println!("  gm_only_whisper  = {}", config.logging.gm_only_whisper);
    println!("  echo_messages    = {}", config.logging.echo_messages);
    println!("\nEdit the file to change them.");

    Ok(())
}
