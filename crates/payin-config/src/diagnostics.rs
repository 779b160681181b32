use std::cell::RefCell;

use thiserror::Error;

/// Non-fatal conditions surfaced while deriving configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("no collection address configured for chain {chain}")]
    MissingCollectionAddress { chain: String },
}

/// Trait for diagnostic observers.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Default sink: forwards diagnostics to `tracing` at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::MissingCollectionAddress { chain } => {
                tracing::warn!(chain = %chain, "{diagnostic}");
            }
        }
    }
}

/// A sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// In-memory sink for tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    reported: RefCell<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics reported so far, oldest first.
    pub fn reported(&self) -> Vec<Diagnostic> {
        self.reported.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.reported.borrow().is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.reported.borrow_mut().push(diagnostic);
    }
}
