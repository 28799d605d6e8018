//! Outcome reporting for purge runs.
//!
//! The engine reports through an injected [`LogSink`] rather than a global
//! logging facade, which keeps the core free of process-wide state and lets
//! tests observe exactly what was emitted. [`TracingLogSink`] is the
//! production implementation.

use std::sync::{Mutex, PoisonError};

/// Sink for informational messages about purge outcomes.
///
/// Invoked at most once per model per run, and only when records were
/// actually removed with logging enabled.
pub trait LogSink: Send + Sync {
    /// Record an informational message.
    fn info(&self, message: &str);
}

/// [`LogSink`] that forwards to [`tracing`] at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }
}

/// [`LogSink`] that captures messages in memory, for assertions in tests.
#[derive(Debug, Default)]
pub struct MemoryLogSink {
    messages: Mutex<Vec<String>>,
}

impl MemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LogSink for MemoryLogSink {
    fn info(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
