use serde::Serialize;

/// A readable article extracted from a page.
/// Every field is an empty string when the page does not provide it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub byline: String,
    pub excerpt: String,
    /// Lead image URL, absolute
    pub image: String,
    /// Favicon URL, absolute
    pub favicon: String,
    /// Cleaned article HTML
    pub content: String,
    /// Article text with all markup removed
    pub text_content: String,
}

impl Article {
    pub fn metadata(&self) -> Metadata<'_> {
        Metadata {
            title: &self.title,
            byline: &self.byline,
            excerpt: &self.excerpt,
            image: &self.image,
            favicon: &self.favicon,
        }
    }
}

/// The metadata-only view of an article.
/// Field order here is the key order of the JSON output.
#[derive(Debug, Serialize)]
pub struct Metadata<'a> {
    pub title: &'a str,
    pub byline: &'a str,
    pub excerpt: &'a str,
    pub image: &'a str,
    pub favicon: &'a str,
}

/// What to print for an extracted article
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Title, byline, excerpt, image and favicon as JSON
    Metadata,
    /// Plain text content
    Text,
    /// Minified article HTML (default)
    #[default]
    Html,
}

impl OutputMode {
    /// Metadata wins when both flags are set.
    pub fn from_flags(metadata: bool, text: bool) -> Self {
        if metadata {
            OutputMode::Metadata
        } else if text {
            OutputMode::Text
        } else {
            OutputMode::Html
        }
    }
}
