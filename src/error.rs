use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("No Actor or Actress section found on the profile page")]
    NoFilmographySection,

    #[error("File already exists: {}", .0.display())]
    FileAlreadyExists(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Input closed before a selection was made")]
    PromptClosed,

    #[error("Saving was requested but no storage is configured")]
    StorageUnavailable,
}

impl Error {
    /// Fetch failures: transport, non-success status, or an unbuildable URL.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Error::Network(_) | Error::HttpStatus { .. } | Error::InvalidUrl(_)
        )
    }
}

/// Rejected interactive selections. These are reported and re-prompted,
/// never returned from a run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Ensure your selection is a number")]
    NotANumber(String),

    #[error("Ensure your selection is between 1 and {max}")]
    OutOfRange { selection: i64, max: usize },
}
