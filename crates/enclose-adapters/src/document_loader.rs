//! Filesystem-based document loader.
//!
//! Reads declarative documents from TOML or JSON files and turns them into
//! domain [`Document`]s ready for replay by `DocumentService`.
//!
//! # Directory layout expected by [`DocumentLoader::discover`]
//!
//! ```text
//! headers/
//! ├── config.toml      → config.h
//! ├── protocol.json    → protocol.h
//! └── nested/
//!     └── ids.toml     → nested/ids.h
//! ```
//!
//! # Document format
//!
//! ```toml
//! [[nodes]]
//! type    = "directive"
//! content = "include"
//! value   = "<cstdint>"
//!
//! [[nodes]]
//! type = "scope"
//! kind = "struct"          # struct | namespace | control-block
//! name = "hello"           # required for struct and namespace
//!
//!   [[nodes.body]]
//!   type    = "constant"
//!   content = "cool_value"
//!   value   = "0x152345125"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use enclose_core::{
    application::ApplicationError,
    domain::{DomainError, Document},
    error::EncloseResult,
};

/// On-disk encodings a document may use, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
enum LoadError {
    #[error("unsupported extension (expected .toml or .json)")]
    UnsupportedFormat,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Loads documents from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentLoader;

impl DocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load one document; the extension selects the format.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> EncloseResult<Document> {
        let document = read(path).map_err(|e| ApplicationError::DocumentLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(nodes = document.nodes.len(), "document loaded");
        Ok(document)
    }

    /// Every document file under `root`, sorted by path.
    ///
    /// Entries that cannot be read are skipped with a warning.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn discover(&self, root: &Path) -> Vec<PathBuf> {
        let mut found: Vec<PathBuf> = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| DocumentFormat::from_path(path).is_some())
            .collect();
        found.sort();
        debug!(count = found.len(), "documents discovered");
        found
    }

    pub fn from_toml_str(&self, text: &str) -> Result<Document, DomainError> {
        toml::from_str(text).map_err(|e| DomainError::InvalidDocument(e.to_string()))
    }

    pub fn from_json_str(&self, text: &str) -> Result<Document, DomainError> {
        serde_json::from_str(text).map_err(|e| DomainError::InvalidDocument(e.to_string()))
    }
}

fn read(path: &Path) -> Result<Document, LoadError> {
    let format = DocumentFormat::from_path(path).ok_or(LoadError::UnsupportedFormat)?;
    let text = fs::read_to_string(path)?;
    let document = match format {
        DocumentFormat::Toml => toml::from_str(&text)?,
        DocumentFormat::Json => serde_json::from_str(&text)?,
    };
    Ok(document)
}
