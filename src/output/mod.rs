//! Rendering an [`Article`] in one of the three output modes.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::ReadError;
use crate::model::{Article, OutputMode};

mod minify;

pub use minify::{HtmlMinifier, MinifyError, Minifier};

/// A text run between the end of one tag and the start of the next
static TEXT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)>[^<]+<").unwrap());

/// Render `article` for `mode`. Pure: the same input always gives the same output.
pub fn format(
    article: &Article,
    mode: OutputMode,
    minifier: &dyn Minifier,
) -> Result<String, ReadError> {
    match mode {
        OutputMode::Metadata => metadata_json(article),
        OutputMode::Text => Ok(article.text_content.clone()),
        OutputMode::Html => {
            let normalized = normalize_whitespace(&article.content);
            minifier
                .minify(&normalized)
                .map_err(|e| ReadError::Minify(e.to_string()))
        }
    }
}

/// Pretty-printed metadata with four-space indentation
pub fn metadata_json(article: &Article) -> Result<String, ReadError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    article.metadata().serialize(&mut serializer)?;

    // serde_json only ever writes UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Replace line breaks inside text nodes with spaces.
///
/// Only characters strictly between a `>` and the following `<` are touched,
/// so line breaks inside tags and attribute values survive.
pub fn normalize_whitespace(html: &str) -> String {
    TEXT_RUN
        .replace_all(html, |caps: &Captures| caps[0].replace(['\n', '\r'], " "))
        .into_owned()
}
