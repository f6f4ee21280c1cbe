use std::path::PathBuf;

use thiserror::Error;

/// Failure to retrieve or decode the catalog document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid catalog url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("catalog request to {url} failed: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },
    #[error("failed to read catalog file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("catalog document is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("no filter control carries key '{0}'")]
    UnknownControl(String),
}
