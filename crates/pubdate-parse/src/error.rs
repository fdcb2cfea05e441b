use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The normalizer only works on bare file names; a separator means the
    /// caller forgot to split off the directory.
    #[error("expected a bare file name but got a path: {0}")]
    PathGiven(String),
}
