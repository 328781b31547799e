//! Pluggable logging sink used by the dispatcher.

use std::fmt::Debug;

/// Four-severity log sink. Implementations must not affect control flow.
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str, detail: &dyn Debug);
    fn info(&self, message: &str, detail: &dyn Debug);
    fn warn(&self, message: &str, detail: &dyn Debug);
    fn error(&self, message: &str, detail: &dyn Debug);
}

/// Forwards every entry to `tracing` at the matching level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str, detail: &dyn Debug) {
        tracing::debug!(detail = ?detail, "{message}");
    }

    fn info(&self, message: &str, detail: &dyn Debug) {
        tracing::info!(detail = ?detail, "{message}");
    }

    fn warn(&self, message: &str, detail: &dyn Debug) {
        tracing::warn!(detail = ?detail, "{message}");
    }

    fn error(&self, message: &str, detail: &dyn Debug) {
        tracing::error!(detail = ?detail, "{message}");
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn debug(&self, _message: &str, _detail: &dyn Debug) {}
    fn info(&self, _message: &str, _detail: &dyn Debug) {}
    fn warn(&self, _message: &str, _detail: &dyn Debug) {}
    fn error(&self, _message: &str, _detail: &dyn Debug) {}
}
