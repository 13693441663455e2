use std::path::PathBuf;

use crate::config;
use crate::display;
use crate::error::Result;
use crate::journal::{self, FileStore};

/// Display the accumulated adventure log
pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from("advlog.toml"));

    let config = config::load(&config_path)?;
    let doc = FileStore::new(&config.journal_file).load()?;

    let entries = journal::entries(&doc.content)?;

    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", doc.name));

    if entries.is_empty() {
        output.push_str("*No entries logged yet.*\n");
    } else {
        for entry in &entries {
            output.push_str(&format!("- **{}** {}\n", label(&entry.marker), entry.text));
        }
    }

    display::print_markdown(&output);

    Ok(())
}

fn label(marker: &str) -> &str {
    match marker {
        "log-quote" => "Quote",
        "log-event" => "Event",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_known_markers() {
        assert_eq!(label("log-quote"), "Quote");
        assert_eq!(label("log-event"), "Event");
    }

    #[test]
    fn test_label_unknown_marker_passes_through() {
        assert_eq!(label("log-custom"), "log-custom");
    }
}
