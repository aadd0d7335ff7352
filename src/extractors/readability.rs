use super::{head, ExtractError, Extractor};
use crate::model::Article;
use log::debug;
use readabilityrs::{is_probably_readerable, Readability, ReadabilityOptions};
use scraper::Html;
use url::Url;

/// Extractor backed by the `readabilityrs` port of Mozilla Readability
#[derive(Debug, Clone, Default)]
pub struct ReadabilityExtractor;

impl ReadabilityExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for ReadabilityExtractor {
    fn is_readable(&self, html: &str) -> bool {
        is_probably_readerable(html, None)
    }

    fn extract(&self, html: &str, base_url: &Url) -> Result<Article, ExtractError> {
        debug!("Extracting article with readability, base URL {}", base_url);

        let readability = Readability::new(
            html,
            Some(base_url.as_str()),
            Some(ReadabilityOptions::default()),
        )
        .map_err(|e| ExtractError(e.to_string()))?;

        let parsed = readability
            .parse()
            .ok_or_else(|| ExtractError("no article content found".to_string()))?;

        let content = parsed.content.unwrap_or_default();
        let text_content = parsed.text_content.unwrap_or_default();
        if content.trim().is_empty() || text_content.trim().is_empty() {
            return Err(ExtractError("article content is empty".to_string()));
        }

        // readabilityrs does not report the lead image or favicon, read them from the raw page
        let document = Html::parse_document(html);

        Ok(Article {
            title: parsed.title.unwrap_or_default(),
            byline: parsed.byline.unwrap_or_default(),
            excerpt: parsed.excerpt.unwrap_or_default(),
            image: head::lead_image(&document, base_url).unwrap_or_default(),
            favicon: head::favicon(&document, base_url).unwrap_or_default(),
            content,
            text_content,
        })
    }
}
