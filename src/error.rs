// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    /// Search page had no result row for the title.
    #[error("No search result found for {0}")]
    NotFound(String),

    /// Search result row was present but carried no app id.
    #[error("App ID not found for {0}")]
    MissingAppId(String),

    #[error("The input file '{}' was not found", .0.display())]
    MissingInputFile(PathBuf),

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("WebDriver error ({kind}): {message}")]
    WebDriver { kind: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScrapeError::Write { path: path.into(), source }
    }
}

impl From<ureq::Error> for ScrapeError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, resp) => ScrapeError::Api {
                status,
                message: resp.into_string().unwrap_or_default(),
            },
            ureq::Error::Transport(t) => ScrapeError::Network(t.to_string()),
        }
    }
}

impl From<serde_json::Error> for ScrapeError {
    fn from(err: serde_json::Error) -> Self {
        ScrapeError::Parse(err.to_string())
    }
}
