//! Data models module
//!
//! Defines the log-entry domain models: EntryKind, ParsedEntry, ParseError.

pub mod entry;

pub use entry::{EntryKind, ParseError, ParsedEntry};
