use crate::model::Article;
use thiserror::Error;
use url::Url;

mod head;
mod readability;

pub use self::readability::ReadabilityExtractor;

/// Failure reported by an extraction engine
#[derive(Error, Debug)]
#[error("{0}")]
pub struct ExtractError(pub String);

/// A readability engine.
///
/// `is_readable` is a cheap pre-check; `extract` is only called on pages that pass it.
pub trait Extractor: Send + Sync {
    fn is_readable(&self, html: &str) -> bool;
    fn extract(&self, html: &str, base_url: &Url) -> Result<Article, ExtractError>;
}
