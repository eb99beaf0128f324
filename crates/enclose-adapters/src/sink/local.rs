//! Local filesystem sinks using std::fs.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;

use tracing::debug;

use enclose_core::{
    application::{ApplicationError, BoxedSink, SinkProvider},
    error::{EncloseError, EncloseResult},
};

/// Production sink provider: one buffered file per destination.
///
/// Opening creates the file or truncates an existing one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSinkProvider {
    create_parents: bool,
}

impl LocalSinkProvider {
    /// Create a provider that expects parent directories to exist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create missing parent directories when opening.
    pub fn with_create_parents(mut self, create_parents: bool) -> Self {
        self.create_parents = create_parents;
        self
    }
}

impl SinkProvider for LocalSinkProvider {
    fn open(&self, destination: &Path) -> EncloseResult<BoxedSink> {
        if self.create_parents {
            if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .map_err(|e| map_io_error(destination, e, "create parent directory"))?;
            }
        }

        let file = File::create(destination)
            .map_err(|e| map_io_error(destination, e, "create file"))?;
        debug!(destination = %destination.display(), "sink opened");
        Ok(Box::new(BufWriter::new(file)))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> EncloseError {
    ApplicationError::SinkUnavailable {
        destination: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
