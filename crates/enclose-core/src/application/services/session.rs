//! Emission Session - the public writing API.
//!
//! A session owns its sink and an [`Emitter`]. Every call renders first and
//! writes second, so a call that fails validation appends nothing.
//!
//! Lifecycle:
//! 1. construction writes the guard preamble
//! 2. leaves, blank lines and scopes are written in call order
//! 3. disposal (`finish`, or `Drop` on any other path) appends the closing
//!    guard, flushes, and releases the sink

use std::io::Write;
use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{BoxedSink, SinkProvider},
    },
    domain::{Dialect, Emitter, LayoutOptions, LeafToken, Scope, ScopeKind},
    error::{EncloseError, EncloseResult},
};

/// Counters describing what a session has written so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmissionStats {
    pub leaves: usize,
    pub scopes: usize,
    pub blank_lines: usize,
    pub max_depth: usize,
    pub bytes: usize,
}

/// Exclusive writer for one output document.
pub struct EmissionSession<W: Write> {
    /// `None` only once the session has been disposed.
    sink: Option<W>,
    emitter: Emitter,
    stats: EmissionStats,
}

impl<W: Write> EmissionSession<W> {
    /// Start a session on `sink` and write the guard preamble.
    #[instrument(skip_all, fields(dialect = dialect.name(), guard = %dialect.guard()))]
    pub fn new(sink: W, dialect: Dialect, layout: LayoutOptions) -> EncloseResult<Self> {
        let emitter = Emitter::new(dialect, layout)?;
        let mut session = Self {
            sink: Some(sink),
            emitter,
            stats: EmissionStats::default(),
        };

        let preamble = session.emitter.preamble();
        session.write_str(&preamble)?;
        debug!("session opened");
        Ok(session)
    }

    pub fn depth(&self) -> usize {
        self.emitter.depth()
    }

    pub fn dialect(&self) -> &Dialect {
        self.emitter.dialect()
    }

    pub fn layout(&self) -> &LayoutOptions {
        self.emitter.layout()
    }

    pub fn stats(&self) -> EmissionStats {
        self.stats
    }

    /// Scope kinds currently open, outermost first.
    pub fn open_scopes(&self) -> &[ScopeKind] {
        self.emitter.tracker().open_scopes()
    }

    /// Append one leaf line at the current depth.
    pub fn write_leaf(&mut self, token: &LeafToken) -> EncloseResult<()> {
        let text = self.emitter.leaf(token)?;
        self.write_str(&text)?;
        self.stats.leaves += 1;
        Ok(())
    }

    /// Append a blank line; depth does not apply.
    pub fn newline(&mut self) -> EncloseResult<()> {
        self.write_str("\n")?;
        self.stats.blank_lines += 1;
        Ok(())
    }

    /// Open `scope`, run `body` inside it, then close it.
    ///
    /// The close runs even when `body` fails; the body's error is returned
    /// in that case. A body that closes the scope itself makes the final
    /// close fail with `UnbalancedScope`.
    pub fn with_scope<F>(&mut self, scope: Scope, body: F) -> EncloseResult<()>
    where
        F: FnOnce(&mut Self) -> EncloseResult<()>,
    {
        let kind = scope.kind();
        self.enter_scope(&scope)?;

        let outcome = body(self);
        let closed = self.exit_scope(kind);

        match (outcome, closed) {
            (Ok(()), closed) => closed,
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(close_err)) => {
                warn!(%scope, error = %close_err, "scope left open after its body failed");
                Err(err)
            }
        }
    }

    /// Close the innermost scope, which must be a `kind`.
    ///
    /// Fails with `UnbalancedScope` (writing nothing) if no scope is open or
    /// the innermost one is of another kind.
    pub fn exit_scope(&mut self, kind: ScopeKind) -> EncloseResult<()> {
        let text = self.emitter.exit(kind)?;
        self.write_str(&text)
    }

    /// Dispose explicitly and get the sink back.
    ///
    /// Unlike `Drop`, disposal errors are returned instead of logged.
    pub fn finish(mut self) -> EncloseResult<W> {
        let mut sink = self.sink.take().ok_or_else(disposed)?;
        dispose(&mut sink, &self.emitter)?;
        Ok(sink)
    }

    /// Open `scope` without a body; pair with [`exit_scope`](Self::exit_scope).
    ///
    /// Prefer [`with_scope`](Self::with_scope), which cannot leave it open.
    pub fn enter_scope(&mut self, scope: &Scope) -> EncloseResult<()> {
        let text = self.emitter.enter(scope)?;
        self.write_str(&text)?;
        self.stats.scopes += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.depth());
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> EncloseResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        let sink = self.sink.as_mut().ok_or_else(disposed)?;
        sink.write_all(text.as_bytes())
            .map_err(ApplicationError::write)?;
        self.stats.bytes += text.len();
        Ok(())
    }
}

impl EmissionSession<BoxedSink> {
    /// Acquire `destination` through `provider` and start a session on it.
    #[instrument(skip_all, fields(destination = %destination.as_ref().display()))]
    pub fn open(
        provider: &dyn SinkProvider,
        destination: impl AsRef<Path>,
        dialect: Dialect,
        layout: LayoutOptions,
    ) -> EncloseResult<Self> {
        let sink = provider.open(destination.as_ref())?;
        Self::new(sink, dialect, layout)
    }
}

impl<W: Write> Drop for EmissionSession<W> {
    fn drop(&mut self) {
        if let Some(mut sink) = self.sink.take() {
            if let Err(err) = dispose(&mut sink, &self.emitter) {
                warn!(error = %err, "failed to finalise output on drop");
            }
        }
    }
}

fn dispose<W: Write>(sink: &mut W, emitter: &Emitter) -> EncloseResult<()> {
    let open = emitter.tracker().open_scopes();
    if !open.is_empty() {
        warn!(?open, "session closed with scopes still open");
    }

    let postamble = emitter.postamble();
    sink.write_all(postamble.as_bytes())
        .and_then(|()| sink.flush())
        .map_err(ApplicationError::write)?;
    debug!("session closed");
    Ok(())
}

fn disposed() -> EncloseError {
    EncloseError::Internal {
        message: "session used after disposal".into(),
    }
}
