use std::path::PathBuf;
use url::Url;

/// Where the page HTML comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Fetch over HTTP(S)
    Url(String),
    /// Read a local file
    Path(PathBuf),
    /// Use a literal HTML string
    Html(String),
    /// Read standard input to the end
    Stdin,
}

impl Source {
    /// Classify a user-supplied location: absolute http(s) URLs are fetched,
    /// everything else is treated as a file path.
    pub fn from_arg(arg: &str) -> Self {
        if is_http_url(arg) {
            Source::Url(arg.to_string())
        } else {
            Source::Path(PathBuf::from(arg))
        }
    }
}

/// A fully buffered page, ready to be checked and extracted
#[derive(Debug, Clone)]
pub struct Document {
    pub html: String,
    /// Origin used to resolve relative links and images
    pub base_url: Url,
}

pub fn is_http_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arg_detects_urls() {
        assert_eq!(
            Source::from_arg("https://example.com/article"),
            Source::Url("https://example.com/article".to_string())
        );
        assert_eq!(
            Source::from_arg("http://127.0.0.1:8080/"),
            Source::Url("http://127.0.0.1:8080/".to_string())
        );
    }

    #[test]
    fn test_from_arg_falls_back_to_path() {
        assert_eq!(
            Source::from_arg("./page.html"),
            Source::Path(PathBuf::from("./page.html"))
        );
        assert_eq!(
            Source::from_arg("ftp://example.com/page.html"),
            Source::Path(PathBuf::from("ftp://example.com/page.html"))
        );
        assert_eq!(
            Source::from_arg("example.com/article"),
            Source::Path(PathBuf::from("example.com/article"))
        );
    }
}
