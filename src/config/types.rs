use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Advlog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the journal document file
    pub journal_file: PathBuf,

    /// Acting user identity
    pub actor: Actor,

    /// Logging preferences
    pub logging: Logging,
}

/// Who is writing entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Name entries are attributed to
    pub name: String,

    /// Whether this actor is the GM
    pub gm: bool,
}

/// Preferences gating the log command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logging {
    /// Master switch for the log command
    pub enabled: bool,

    /// Restrict logging to the GM
    pub gm_only: bool,

    /// When GM-only, echo entries as whispers to the GM
    pub gm_only_whisper: bool,

    /// Echo the composed chat line after a successful append
    pub echo_messages: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            journal_file: PathBuf::from("./adventure-log.json"),
            actor: Actor::default(),
            logging: Logging::default(),
        }
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            name: "Gamemaster".to_string(),
            gm: true,
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enabled: true,
            gm_only: false,
            gm_only_whisper: false,
            echo_messages: true,
        }
    }
}
