//! Extract the readable article from a web page.
//!
//! A [`Reader`] fetches or loads a page, checks that it looks like an article,
//! hands it to an [`Extractor`] and renders the result as minified HTML, plain
//! text or metadata JSON. The same reader backs the command line tool and the
//! HTTP server in [`server`].
//!
//! ```no_run
//! use readability_cli::{OutputMode, Reader, Source};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), readability_cli::ReadError> {
//! let reader = Reader::builder().build()?;
//! let html = "<html><body><article><p>...</p></article></body></html>";
//! let metadata = reader
//!     .read(&Source::Html(html.to_string()), OutputMode::Metadata)
//!     .await?;
//! println!("{}", metadata);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod output;
pub mod reader;
pub mod server;
pub mod source;

pub use builder::ReaderBuilder;
pub use config::ReaderConfig;
pub use error::ReadError;
pub use extractors::{ExtractError, Extractor, ReadabilityExtractor};
pub use model::{Article, Metadata, OutputMode};
pub use output::{HtmlMinifier, MinifyError, Minifier};
pub use reader::Reader;
pub use source::{Document, Source};

/// Read `source` with a default reader
pub async fn read(source: &Source, mode: OutputMode) -> Result<String, ReadError> {
    Reader::builder().build()?.read(source, mode).await
}
