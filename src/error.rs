use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of a conversion run. Each variant carries enough context
/// (path, key name) for the operator to diagnose without re-running.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input bundle not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to deserialize bundle {path}: {detail}")]
    Deserialization { path: PathBuf, detail: String },

    #[error("bundle has no key '{key}' (available: {available:?})")]
    MissingKey { key: String, available: Vec<String> },

    #[error("motion array is not JSON-encodable: {detail}")]
    Encoding { detail: String },
}
