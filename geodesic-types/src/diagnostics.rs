//! Sink for non-fatal diagnostic notices.
//!
//! Flattening a GeoJSON document can run into nodes that cannot be turned
//! into paths. Those nodes are skipped, and a human-readable notice is
//! emitted through a [`DiagnosticSink`] so that callers can observe what was
//! dropped without the library writing to any global output stream.

/// Receiver of diagnostic notices.
pub trait DiagnosticSink {
    /// Reports a single notice.
    fn notice(&mut self, message: &str);
}

/// Sink that forwards notices to the [`log`] crate at `warn` level.
///
/// This is the default sink used when no explicit one is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn notice(&mut self, message: &str) {
        log::warn!("{message}");
    }
}

/// Collecting notices into a `Vec<String>` is handy in tests and for callers
/// that want to present the notices themselves.
impl DiagnosticSink for Vec<String> {
    fn notice(&mut self, message: &str) {
        self.push(message.to_string());
    }
}
