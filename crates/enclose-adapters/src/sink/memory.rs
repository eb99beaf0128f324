//! In-memory sinks for testing.

use std::{
    collections::{HashMap, HashSet},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex, RwLock},
};

use enclose_core::{
    application::{ApplicationError, BoxedSink, SinkProvider},
    error::EncloseResult,
};

type Buffer = Arc<Mutex<Vec<u8>>>;

/// In-memory sink provider for testing.
///
/// Every destination maps to a shared buffer that stays readable after the
/// session writing it has been disposed.
#[derive(Debug, Clone, Default)]
pub struct MemorySinkProvider {
    inner: Arc<RwLock<MemorySinkInner>>,
}

#[derive(Debug, Default)]
struct MemorySinkInner {
    buffers: HashMap<PathBuf, Buffer>,
    denied: HashSet<PathBuf>,
}

impl MemorySinkProvider {
    /// Create a provider with no destinations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `open` fail for `destination` (testing helper).
    pub fn deny(&self, destination: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.denied.insert(destination.into());
        }
    }

    /// Bytes written to `destination`, decoded lossily.
    pub fn contents(&self, destination: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        let buffer = inner.buffers.get(destination)?.lock().ok()?;
        Some(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// All destinations opened so far.
    pub fn destinations(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.buffers.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl SinkProvider for MemorySinkProvider {
    fn open(&self, destination: &Path) -> EncloseResult<BoxedSink> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if inner.denied.contains(destination) {
            return Err(ApplicationError::SinkUnavailable {
                destination: destination.to_path_buf(),
                reason: "destination denied".into(),
            }
            .into());
        }

        // Reopening truncates, like a file would.
        let buffer = Buffer::default();
        inner
            .buffers
            .insert(destination.to_path_buf(), Arc::clone(&buffer));
        Ok(Box::new(MemorySink { buffer }))
    }
}

/// Writer half of a [`MemorySinkProvider`] destination.
#[derive(Debug, Clone)]
pub struct MemorySink {
    buffer: Buffer,
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut buffer = self
            .buffer
            .lock()
            .map_err(|_| io::Error::other("memory sink lock poisoned"))?;
        buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use enclose_core::error::EncloseError;

    use super::*;

    #[test]
    fn contents_survive_the_sink() {
        let provider = MemorySinkProvider::new();
        let path = Path::new("out/c.h");
        {
            let mut sink = provider.open(path).unwrap();
            sink.write_all(b"{\n}\n").unwrap();
        }
        assert_eq!(provider.contents(path).as_deref(), Some("{\n}\n"));
        assert_eq!(provider.destinations(), vec![path.to_path_buf()]);
    }

    #[test]
    fn reopening_truncates() {
        let provider = MemorySinkProvider::new();
        let path = Path::new("c.h");
        provider.open(path).unwrap().write_all(b"old").unwrap();
        provider.open(path).unwrap().write_all(b"new").unwrap();
        assert_eq!(provider.contents(path).as_deref(), Some("new"));
    }

    #[test]
    fn denied_destination_is_unavailable() {
        let provider = MemorySinkProvider::new();
        provider.deny("locked.h");

        let result = provider.open(Path::new("locked.h"));
        assert!(matches!(
            result,
            Err(EncloseError::Application(ApplicationError::SinkUnavailable { .. }))
        ));
        assert!(provider.contents(Path::new("locked.h")).is_none());
    }
}
