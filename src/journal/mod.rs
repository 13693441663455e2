//! Journal module
//!
//! Owns the adventure-log markup: locating the log container inside the
//! journal document's content, appending formatted entries to it, and
//! reading accumulated entries back out. Merging is append-only; all
//! bytes outside the insertion point are preserved exactly.

pub mod store;

pub use store::{FileStore, JournalDocument};

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{AdvlogError, Result};
use crate::models::ParsedEntry;

/// Marker class identifying the log container article
pub const LOG_CONTAINER_CLASS: &str = "adventure-log";

const EMPTY_CONTAINER: &str = "<article class=\"adventure-log\"></article>";

/// Where the log container sits inside the markup
enum ContainerLoc {
    /// Byte offset of the container's `</article>` end tag
    EndTag(usize),
    /// Self-closed container tag occupying this byte range
    SelfClosed { start: usize, end: usize },
}

/// One entry read back out of the journal markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEntry {
    /// The span's marker class (`log-quote` / `log-event`)
    pub marker: String,
    /// The span's text content, unescaped
    pub text: String,
}

/// Append a parsed entry into the journal markup as the last child of
/// the log container, creating the container if it does not exist yet.
pub fn merge(markup: &str, entry: &ParsedEntry) -> Result<String> {
    match find_container(markup)? {
        Some(loc) => Ok(append_into(markup, loc, &entry.body_html)),
        None => {
            let grown = ensure_container(markup)?;
            let loc = find_container(&grown)?.ok_or_else(|| {
                AdvlogError::MalformedJournal("log container could not be created".to_string())
            })?;
            Ok(append_into(&grown, loc, &entry.body_html))
        }
    }
}

/// Make sure the markup contains the log container article.
///
/// Idempotent: if the marked article already exists the input is
/// returned unchanged; otherwise an empty container is appended and all
/// other content is preserved byte-for-byte.
pub fn ensure_container(markup: &str) -> Result<String> {
    if find_container(markup)?.is_some() {
        return Ok(markup.to_string());
    }
    Ok(format!("{markup}{EMPTY_CONTAINER}"))
}

/// Read the accumulated entries back out of the journal markup.
pub fn entries(markup: &str) -> Result<Vec<RecordedEntry>> {
    let mut reader = Reader::from_str(markup);
    reader.config_mut().check_end_names = true;

    let mut out = Vec::new();
    let mut container_depth: Option<usize> = None;
    let mut span: Option<RecordedEntry> = None;
    let mut depth: usize = 0;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                if container_depth.is_none() && is_container(&e)? {
                    container_depth = Some(depth);
                } else if container_depth.is_some()
                    && span.is_none()
                    && e.name().as_ref() == b"span"
                {
                    span = Some(RecordedEntry {
                        marker: class_attr(&e)?.unwrap_or_default(),
                        text: String::new(),
                    });
                }
            }
            Ok(Event::Text(t)) => {
                if let Some(entry) = span.as_mut() {
                    let raw = std::str::from_utf8(&t)
                        .map_err(|e| AdvlogError::MalformedJournal(e.to_string()))?;
                    let text = unescape(raw)
                        .map_err(|e| AdvlogError::MalformedJournal(e.to_string()))?;
                    entry.text.push_str(&text);
                }
            }
            Ok(Event::End(e)) => {
                if span.is_some() && e.name().as_ref() == b"span" {
                    if let Some(entry) = span.take() {
                        out.push(entry);
                    }
                } else if container_depth == Some(depth) {
                    container_depth = None;
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(AdvlogError::MalformedJournal(e.to_string())),
        }
    }

    Ok(out)
}

/// Scan the whole fragment, validating it, and locate the log container.
///
/// Unparsable markup is a fatal condition; there is no partial repair.
fn find_container(markup: &str) -> Result<Option<ContainerLoc>> {
    let mut reader = Reader::from_str(markup);
    reader.config_mut().check_end_names = true;

    let mut found: Option<ContainerLoc> = None;
    let mut container_depth: Option<usize> = None;
    let mut depth: usize = 0;

    loop {
        let pos_before = reader.buffer_position() as usize;
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                if found.is_none() && container_depth.is_none() && is_container(&e)? {
                    container_depth = Some(depth);
                }
            }
            Ok(Event::Empty(e)) => {
                if found.is_none() && container_depth.is_none() && is_container(&e)? {
                    found = Some(ContainerLoc::SelfClosed {
                        start: pos_before,
                        end: reader.buffer_position() as usize,
                    });
                }
            }
            Ok(Event::End(_)) => {
                if container_depth == Some(depth) {
                    found = Some(ContainerLoc::EndTag(pos_before));
                    container_depth = None;
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(AdvlogError::MalformedJournal(e.to_string())),
        }
    }

    Ok(found)
}

/// Splice a fragment in as the container's last child.
fn append_into(markup: &str, loc: ContainerLoc, fragment: &str) -> String {
    match loc {
        ContainerLoc::EndTag(at) => {
            format!("{}{}{}", &markup[..at], fragment, &markup[at..])
        }
        ContainerLoc::SelfClosed { start, end } => {
            // Expand `<article .../>` so the fragment has somewhere to go
            let open = markup[start..end].trim_end_matches("/>").trim_end();
            format!(
                "{}{}>{}</article>{}",
                &markup[..start],
                open,
                fragment,
                &markup[end..]
            )
        }
    }
}

fn is_container(e: &BytesStart) -> Result<bool> {
    if e.name().as_ref() != b"article" {
        return Ok(false);
    }
    Ok(class_attr(e)?
        .map(|v| v.split_whitespace().any(|c| c == LOG_CONTAINER_CLASS))
        .unwrap_or(false))
}

fn class_attr(e: &BytesStart) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| AdvlogError::MalformedJournal(e.to_string()))?;
        if attr.key.as_ref() == b"class" {
            let value = attr
                .unescape_value()
                .map_err(|e| AdvlogError::MalformedJournal(e.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
