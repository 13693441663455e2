use thiserror::Error;

/// Advlog error types
#[derive(Error, Debug)]
pub enum AdvlogError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Journal not found: {0}")]
    JournalMissing(String),

    #[error("Journal markup error: {0}")]
    MalformedJournal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Advlog operations
pub type Result<T> = std::result::Result<T, AdvlogError>;
