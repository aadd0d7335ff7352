use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while turning a page into readable output
#[derive(Error, Debug)]
pub enum ReadError {
    /// Failed to fetch the page from a URL
    #[error("failed to fetch page from URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Failed to open or read a local file
    #[error("failed to open file {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read from standard input
    #[error("failed to read from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    /// The pre-check decided the page does not look like an article
    #[error("failed to parse page: page is not readable")]
    Unreadable,

    /// The readability engine could not extract an article
    #[error("failed to parse page: {0}")]
    Extraction(String),

    /// Failed to minify the article HTML
    #[error("failed to minify HTML: {0}")]
    Minify(String),

    /// Failed to encode page metadata as JSON
    #[error("failed to serialize metadata: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reader configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Configuration file or environment error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The HTTP server could not bind or stopped serving
    #[error("HTTP server error: {0}")]
    Server(#[source] std::io::Error),
}
