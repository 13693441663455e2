use thiserror::Error;

/// Kind of adventure-log entry, determined by the first command token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// An attributed quote: `q` / `quote`
    Quote,
    /// A plain logged event: `e` / `event` (also the fallback for
    /// unrecognized tokens, which log the whole line)
    Event,
    /// Empty input, routes to the help page
    Help,
    /// Settings command, handled by the caller
    Config,
}

impl EntryKind {
    /// Classify the first command token (case-insensitive).
    ///
    /// `None` means the input had no tokens at all.
    pub fn classify(first_token: Option<&str>) -> Self {
        let token = match first_token {
            Some(t) if !t.is_empty() => t,
            _ => return EntryKind::Help,
        };

        match token.to_lowercase().as_str() {
            "q" | "quote" => EntryKind::Quote,
            "e" | "event" => EntryKind::Event,
            "config" => EntryKind::Config,
            // Unrecognized tokens fall through to Event, consuming the
            // whole line as the message.
            _ => EntryKind::Event,
        }
    }
}

/// A validated, formatted log entry ready to be merged into the journal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    /// Entry kind (only Quote and Event reach this point)
    pub kind: EntryKind,
    /// Formatted timestamp (seconds precision, fused AM/PM marker)
    pub timestamp: String,
    /// Name of the acting user
    pub actor: String,
    /// Short attribution line ("{actor} quoted {source}" / "Event Logged")
    pub flavor: String,
    /// Message text wrapped in the kind-specific marker span; this is
    /// what gets appended into the journal article
    pub body_html: String,
    /// Full composed line (timestamp, actor, source, message) used for
    /// the optional chat echo
    pub chat_line: String,
}

/// Parser outcomes that do not produce an entry.
///
/// These are returned, never panicked, and carry exact recovery text
/// where the user can correct and resubmit without retyping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Empty input; not a failure, routes to help content
    #[error("no command text entered")]
    NeedsHelp,

    /// Recognized `config` token; handled by the caller
    #[error("config command is handled separately")]
    DelegateToConfig,

    /// Quote command without a source token
    #[error("quote command is missing a source")]
    MissingQuoteSource,

    /// Opening `"` with no closing `"` before end of input
    #[error("quote source is missing its closing quote")]
    UnterminatedQuote { recovery: String },

    /// Quote with a source but no message text
    #[error("quote has no message text")]
    EmptyQuoteBody { recovery: String },

    /// Event command with no message text
    #[error("event has no message text")]
    EmptyEventBody { recovery: String },
}

impl ParseError {
    /// Text to re-seed the input field with, if this outcome carries any
    pub fn recovery_text(&self) -> Option<&str> {
        match self {
            ParseError::UnterminatedQuote { recovery }
            | ParseError::EmptyQuoteBody { recovery }
            | ParseError::EmptyEventBody { recovery } => Some(recovery),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_quote() {
        assert_eq!(EntryKind::classify(Some("q")), EntryKind::Quote);
        assert_eq!(EntryKind::classify(Some("quote")), EntryKind::Quote);
        assert_eq!(EntryKind::classify(Some("QUOTE")), EntryKind::Quote);
    }

    #[test]
    fn test_classify_event() {
        assert_eq!(EntryKind::classify(Some("e")), EntryKind::Event);
        assert_eq!(EntryKind::classify(Some("Event")), EntryKind::Event);
    }

    #[test]
    fn test_classify_config() {
        assert_eq!(EntryKind::classify(Some("config")), EntryKind::Config);
        assert_eq!(EntryKind::classify(Some("Config")), EntryKind::Config);
    }

    #[test]
    fn test_classify_empty_is_help() {
        assert_eq!(EntryKind::classify(None), EntryKind::Help);
        assert_eq!(EntryKind::classify(Some("")), EntryKind::Help);
    }

    #[test]
    fn test_classify_unrecognized_falls_through_to_event() {
        assert_eq!(EntryKind::classify(Some("note")), EntryKind::Event);
        assert_eq!(EntryKind::classify(Some("x")), EntryKind::Event);
    }

    #[test]
    fn test_recovery_text() {
        let err = ParseError::UnterminatedQuote {
            recovery: "/log q \"Old Tome".to_string(),
        };
        assert_eq!(err.recovery_text(), Some("/log q \"Old Tome"));

        assert_eq!(ParseError::NeedsHelp.recovery_text(), None);
        assert_eq!(ParseError::MissingQuoteSource.recovery_text(), None);
    }
}
