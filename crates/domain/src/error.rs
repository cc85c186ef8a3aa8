//! Common error type shared across the workspace.

/// Top-level error for the clima system.
///
/// The query surface is read-only and every malformed input degrades to an
/// empty result set by design, so the only fault that can surface is a
/// storage failure. Each adapter defines its own typed error and converts
/// into this via `From`.
#[derive(Debug, thiserror::Error)]
pub enum ClimaError {
    /// A connection, query, or row-decoding failure in the storage layer.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
