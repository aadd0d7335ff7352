use crate::config::MinifyConfig;
use minify_html::Cfg;
use thiserror::Error;

/// Failure reported by a minifier
#[derive(Error, Debug)]
#[error("{0}")]
pub struct MinifyError(pub String);

/// Shrinks an HTML fragment without changing how it renders
pub trait Minifier: Send + Sync {
    fn minify(&self, html: &str) -> Result<String, MinifyError>;
}

/// Minifier backed by `minify-html`
#[derive(Debug, Clone)]
pub struct HtmlMinifier {
    config: MinifyConfig,
}

impl HtmlMinifier {
    pub fn new(config: &MinifyConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn cfg(&self) -> Cfg {
        let mut cfg = Cfg::new();
        // Article fragments are embedded in other pages, so keep them well-formed
        cfg.keep_closing_tags = true;
        cfg.keep_html_and_head_opening_tags = true;
        cfg.do_not_minify_doctype = true;
        cfg.ensure_spec_compliant_unquoted_attribute_values = true;
        cfg.keep_comments = self.config.keep_comments;
        cfg.minify_css = self.config.minify_css;
        cfg.minify_js = self.config.minify_js;
        cfg
    }
}

impl Default for HtmlMinifier {
    fn default() -> Self {
        Self::new(&MinifyConfig::default())
    }
}

impl Minifier for HtmlMinifier {
    fn minify(&self, html: &str) -> Result<String, MinifyError> {
        let minified = minify_html::minify(html.as_bytes(), &self.cfg());
        String::from_utf8(minified)
            .map_err(|e| MinifyError(format!("minifier produced invalid UTF-8: {}", e)))
    }
}
