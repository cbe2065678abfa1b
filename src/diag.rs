//! Diagnostic output for pipeline stages.

/// Where pipeline stages send progress diagnostics.
///
/// Diagnostics are observability only; nothing in the report depends on
/// them. Stages take the sink explicitly so the caller decides where the
/// output goes: the CLI forwards it to `tracing`, tests capture it.
pub trait DiagnosticSink {
    fn note(&self, message: &str);
}

/// Forwards diagnostics to the active `tracing` subscriber at INFO level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn note(&self, message: &str) {
        tracing::info!("{message}");
    }
}
