//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - config init: Initialize configuration file
//! - journal init: Initialize the journal document
//! - log: Parse a command line and append an entry to the journal
//! - show: Display the accumulated adventure log

pub mod config;
pub mod journal;
pub mod log;
pub mod show;
