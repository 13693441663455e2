use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AdvlogError, Result};

/// A journal document: a named container for the accumulated log markup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalDocument {
    /// Display name of the journal
    pub name: String,
    /// The journal's markup (the LogDocument)
    pub content: String,
    /// Last time the content was replaced
    pub updated_at: DateTime<Utc>,
}

impl JournalDocument {
    /// Create a named journal with an empty log container
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            content: super::ensure_container("")?,
            updated_at: Utc::now(),
        })
    }
}

/// File-backed journal store.
///
/// Reads return the whole document; writes replace the whole content.
/// There is no partial patch, matching the document-store contract.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the journal document. A missing file means the configured
    /// journal does not resolve.
    pub fn load(&self) -> Result<JournalDocument> {
        if !self.path.exists() {
            return Err(AdvlogError::JournalMissing(
                self.path.display().to_string(),
            ));
        }

        let content = fs::read_to_string(&self.path)?;
        let doc: JournalDocument = serde_json::from_str(&content)?;
        Ok(doc)
    }

    /// Save the journal document, replacing whatever was there
    pub fn save(&self, doc: &JournalDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, serde_json::to_string_pretty(doc)?)?;
        Ok(())
    }
}
