use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the extraction pipeline.
///
/// `Input` and `Parse` abort the whole run: the pipeline produces either a
/// complete table or nothing, never a partial dataset.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("input error: {0}")]
    Input(String),

    #[error("failed to parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("domain error: {0}")]
    Domain(String),

    #[error("no atoms matched the {0} selection")]
    EmptySelection(&'static str),

    #[error("table error: {0}")]
    Table(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("pickle serialization failed: {0}")]
    Pickle(#[from] serde_pickle::Error),

    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
