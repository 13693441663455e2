//! Command parser module
//!
//! Turns a raw `/log` command line into a validated, formatted log entry.
//! Handles token classification, quote-boundary detection with
//! mismatched-quote recovery, and timestamp formatting.

use chrono::{DateTime, Local};
use quick_xml::escape::partial_escape;

use crate::models::{EntryKind, ParseError, ParsedEntry};

/// Parse a raw command line (everything after the command name) into a
/// log entry.
///
/// All outcomes are returned as data; this never panics on user input.
/// `now` is injected by the caller so formatting stays deterministic.
pub fn parse(
    raw_line: &str,
    actor: &str,
    now: DateTime<Local>,
) -> Result<ParsedEntry, ParseError> {
    let trimmed = raw_line.trim();
    let tokens: Vec<&str> = trimmed.split(' ').collect();

    if trimmed.is_empty() || tokens.iter().all(|t| t.is_empty()) {
        return Err(ParseError::NeedsHelp);
    }

    match EntryKind::classify(tokens.first().copied()) {
        EntryKind::Help => Err(ParseError::NeedsHelp),
        EntryKind::Config => Err(ParseError::DelegateToConfig),
        EntryKind::Quote => parse_quote(trimmed, &tokens, actor, now),
        EntryKind::Event => parse_event(trimmed, &tokens, actor, now),
    }
}

/// Parse a quote command: `q "Old Tome" We found it!`
fn parse_quote(
    trimmed: &str,
    tokens: &[&str],
    actor: &str,
    now: DateTime<Local>,
) -> Result<ParsedEntry, ParseError> {
    let remainder = trimmed.replacen(tokens[0], "", 1);
    let remainder = remainder.trim_start();

    let second = match tokens.get(1) {
        Some(t) if !t.is_empty() => *t,
        _ => return Err(ParseError::MissingQuoteSource),
    };

    // A source token that opens a quote without closing it spans
    // multiple tokens; scan the remainder for the closing quote.
    let source = if second.starts_with('"') && !second.ends_with('"') {
        match find_closing_quote(remainder) {
            Some(end) => &remainder[..=end],
            None => {
                return Err(ParseError::UnterminatedQuote {
                    recovery: format!("/log q {remainder}"),
                })
            }
        }
    } else {
        second
    };

    let message = remainder.replacen(source, "", 1);
    let message = message.trim();
    let display_source = source.replace('"', "");

    if message.is_empty() {
        return Err(ParseError::EmptyQuoteBody {
            recovery: format!("/log q \"{display_source}\" "),
        });
    }

    let timestamp = format_timestamp(&now);
    Ok(ParsedEntry {
        kind: EntryKind::Quote,
        timestamp: timestamp.clone(),
        actor: actor.to_string(),
        flavor: format!("{actor} quoted {display_source}"),
        body_html: format!(
            "<span class=\"log-quote\">{}</span>",
            partial_escape(message)
        ),
        chat_line: format!("({timestamp}) {actor} quoted {display_source}: \"{message}\""),
    })
}

/// Parse an event command: `e The bridge collapsed`.
///
/// Unrecognized first tokens also land here and log the whole line.
fn parse_event(
    trimmed: &str,
    tokens: &[&str],
    actor: &str,
    now: DateTime<Local>,
) -> Result<ParsedEntry, ParseError> {
    let first = tokens[0].to_lowercase();
    let message = if first == "e" || first == "event" {
        trimmed.replacen(tokens[0], "", 1)
    } else {
        trimmed.to_string()
    };
    let message = message.trim();

    if message.is_empty() {
        return Err(ParseError::EmptyEventBody {
            recovery: "/log e ".to_string(),
        });
    }

    let timestamp = format_timestamp(&now);
    Ok(ParsedEntry {
        kind: EntryKind::Event,
        timestamp: timestamp.clone(),
        actor: actor.to_string(),
        flavor: "Event Logged".to_string(),
        body_html: format!(
            "<span class=\"log-event\">{}</span>",
            partial_escape(message)
        ),
        chat_line: format!("({timestamp}) {actor}: {message}"),
    })
}

/// Find the closing `"` of a quoted source that opens at byte 0 of
/// `remainder`. Returns the byte index of the closing quote.
///
/// Running off the end of the input while inside the quote is the
/// unterminated-quote condition, surfaced as `None` so the caller can
/// branch on it directly.
fn find_closing_quote(remainder: &str) -> Option<usize> {
    let mut chars = remainder.char_indices();
    // Byte 0 is the opening quote; the scan starts inside it.
    chars.next()?;
    for (idx, ch) in chars {
        if ch == '"' {
            return Some(idx);
        }
    }
    None
}

/// Format `now` in the journal's timestamp shape: seconds precision with
/// the AM/PM marker fused onto the time.
pub fn format_timestamp(now: &DateTime<Local>) -> String {
    normalize_timestamp(&now.format("%Y-%m-%d %H:%M:%S %p").to_string())
}

/// Locale post-processing applied to a formatted timestamp: drop the
/// first comma, then remove the space in front of the AM/PM marker.
///
/// This is a string-level contract, matched byte-for-byte regardless of
/// what the underlying formatter emits.
pub fn normalize_timestamp(stamp: &str) -> String {
    let stamp = stamp.replacen(',', "", 1);

    let marker = match (stamp.find(" A"), stamp.find(" P")) {
        (Some(a), Some(p)) => Some(a.min(p)),
        (Some(a), None) => Some(a),
        (None, Some(p)) => Some(p),
        (None, None) => None,
    };

    match marker {
        Some(i) => format!("{}{}", &stamp[..i], &stamp[i + 1..]),
        None => stamp,
    }
}
