use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::config::ReaderConfig;
use crate::error::ReadError;
use crate::extractors::{Extractor, ReadabilityExtractor};
use crate::fetchers::RequestFetcher;
use crate::output::{HtmlMinifier, Minifier};
use crate::reader::Reader;

/// Builder for configuring a [`Reader`]
///
/// Explicit setters override whatever the loaded [`ReaderConfig`] says.
#[derive(Default)]
pub struct ReaderBuilder {
    config: ReaderConfig,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    fallback_base_url: Option<String>,
    extractor: Option<Arc<dyn Extractor>>,
    minifier: Option<Arc<dyn Minifier>>,
}

impl ReaderBuilder {
    /// Start from a loaded configuration
    ///
    /// # Example
    /// ```no_run
    /// use readability_cli::{Reader, ReaderConfig};
    ///
    /// let config = ReaderConfig::load().unwrap();
    /// let builder = Reader::builder().config(config);
    /// ```
    pub fn config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set a timeout for outbound HTTP requests. Without one, requests never time out.
    ///
    /// # Example
    /// ```
    /// use readability_cli::Reader;
    /// use std::time::Duration;
    ///
    /// let builder = Reader::builder().timeout(Duration::from_secs(30));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the User-Agent sent when fetching URLs
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the base URL used for files, literal HTML and stdin
    ///
    /// # Example
    /// ```
    /// use readability_cli::Reader;
    ///
    /// let reader = Reader::builder()
    ///     .fallback_base_url("https://intranet.example.com/")
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn fallback_base_url(mut self, url: impl Into<String>) -> Self {
        self.fallback_base_url = Some(url.into());
        self
    }

    /// Swap the readability engine
    pub fn extractor(mut self, extractor: impl Extractor + 'static) -> Self {
        self.extractor = Some(Arc::new(extractor));
        self
    }

    /// Swap the HTML minifier
    pub fn minifier(mut self, minifier: impl Minifier + 'static) -> Self {
        self.minifier = Some(Arc::new(minifier));
        self
    }

    /// Build the reader
    ///
    /// # Errors
    /// Returns `ReadError::Builder` if the fallback base URL is not an absolute
    /// URL or the HTTP client cannot be created.
    pub fn build(self) -> Result<Reader, ReadError> {
        let fallback = self
            .fallback_base_url
            .unwrap_or(self.config.fallback_base_url);
        let fallback_base_url = Url::parse(&fallback).map_err(|e| {
            ReadError::Builder(format!("invalid fallback base URL {:?}: {}", fallback, e))
        })?;

        let timeout = self.timeout.or_else(|| self.config.fetch.timeout());
        let user_agent = self.user_agent.unwrap_or(self.config.fetch.user_agent);
        let fetcher = RequestFetcher::new(timeout, &user_agent)?;

        let extractor = self
            .extractor
            .unwrap_or_else(|| Arc::new(ReadabilityExtractor::new()));
        let minifier = self
            .minifier
            .unwrap_or_else(|| Arc::new(HtmlMinifier::new(&self.config.minify)));

        Ok(Reader {
            fetcher,
            extractor,
            minifier,
            fallback_base_url,
        })
    }
}
