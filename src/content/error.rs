use std::time::Duration;
use thiserror::Error;

/// Failure reported by a document store while answering a candidate query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Content store unavailable: {0}")]
    Unavailable(String),

    #[error("Content store query timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("Content store query failed: {0}")]
    Query(String),
}

/// Errors raised while loading a site snapshot from disk.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}
