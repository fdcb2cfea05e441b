use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PubdateError {
    #[error("parse failed: {0}")]
    Parse(#[from] pubdate_parse::ParseError),

    #[error("file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("target already exists: {}", .0.display())]
    TargetExists(PathBuf),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("failed to rename {} -> {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
