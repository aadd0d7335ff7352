use log::{debug, info};
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use url::Url;

use crate::builder::ReaderBuilder;
use crate::error::ReadError;
use crate::extractors::Extractor;
use crate::fetchers::RequestFetcher;
use crate::model::{Article, OutputMode};
use crate::output::{self, Minifier};
use crate::source::{Document, Source};

/// Runs the acquire → pre-check → extract → format pipeline.
///
/// Cloning is cheap; clones share the HTTP client, extractor and minifier.
#[derive(Clone)]
pub struct Reader {
    pub(crate) fetcher: RequestFetcher,
    pub(crate) extractor: Arc<dyn Extractor>,
    pub(crate) minifier: Arc<dyn Minifier>,
    pub(crate) fallback_base_url: Url,
}

impl Reader {
    /// Creates a new builder for a reader
    ///
    /// # Example
    /// ```
    /// use readability_cli::Reader;
    ///
    /// let reader = Reader::builder().build().unwrap();
    /// ```
    pub fn builder() -> ReaderBuilder {
        ReaderBuilder::default()
    }

    /// Read `source` and render it for `mode`
    ///
    /// # Example
    /// ```no_run
    /// # use readability_cli::{OutputMode, Reader, Source};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let reader = Reader::builder().build()?;
    /// let text = reader
    ///     .read(&Source::from_arg("https://example.com/article"), OutputMode::Text)
    ///     .await?;
    /// println!("{}", text);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn read(&self, source: &Source, mode: OutputMode) -> Result<String, ReadError> {
        let document = self.acquire(source).await?;
        self.process(&document, mode)
    }

    /// Buffer the page behind `source` and work out its base URL
    pub async fn acquire(&self, source: &Source) -> Result<Document, ReadError> {
        match source {
            Source::Url(url) => {
                info!("processing URL {}", url);
                let page = self.fetcher.fetch(url).await?;
                Ok(Document {
                    html: page.html,
                    base_url: page.url,
                })
            }
            Source::Path(path) => {
                debug!("reading file {}", path.display());
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|source| ReadError::FileOpen {
                        path: path.clone(),
                        source,
                    })?;
                Ok(self.local_document(bytes))
            }
            Source::Html(html) => Ok(Document {
                html: html.clone(),
                base_url: self.fallback_base_url.clone(),
            }),
            Source::Stdin => {
                let mut bytes = Vec::new();
                tokio::io::stdin()
                    .read_to_end(&mut bytes)
                    .await
                    .map_err(ReadError::Stdin)?;
                debug!("read {} bytes from stdin", bytes.len());
                Ok(self.local_document(bytes))
            }
        }
    }

    /// Pre-check, extract and format an already buffered page
    pub fn process(&self, document: &Document, mode: OutputMode) -> Result<String, ReadError> {
        let article = self.extract(document)?;
        self.format(&article, mode)
    }

    /// Pre-check and extract. The extractor is not invoked for unreadable pages.
    pub fn extract(&self, document: &Document) -> Result<Article, ReadError> {
        if !self.extractor.is_readable(&document.html) {
            return Err(ReadError::Unreadable);
        }

        self.extractor
            .extract(&document.html, &document.base_url)
            .map_err(|e| ReadError::Extraction(e.to_string()))
    }

    pub fn format(&self, article: &Article, mode: OutputMode) -> Result<String, ReadError> {
        output::format(article, mode, self.minifier.as_ref())
    }

    fn local_document(&self, bytes: Vec<u8>) -> Document {
        let html = match String::from_utf8(bytes) {
            Ok(html) => html,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };
        Document {
            html,
            base_url: self.fallback_base_url.clone(),
        }
    }
}
