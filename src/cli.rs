use clap::Parser;
use log::warn;

use crate::model::OutputMode;
use crate::source::Source;

#[derive(Parser, Debug)]
#[command(
    name = "readability",
    version,
    about = "Extract the readable content of a web page",
    long_about = "readability extracts the readable content of a web page.\n\
                  The source can be stdin, a URL, an HTML string or an existing file on disk."
)]
pub struct Cli {
    /// URL or path of the page to read
    pub source: Option<String>,

    /// Start an HTTP server on the given address, e.g. -l 127.0.0.1:8888
    #[arg(short = 'l', long = "http", value_name = "ADDR")]
    pub http: Option<String>,

    /// Output page metadata only
    #[arg(short, long)]
    pub metadata: bool,

    /// Output unformatted text only
    #[arg(short, long)]
    pub text: bool,

    /// HTML content as a string
    #[arg(short = 'c', long = "html", value_name = "HTML")]
    pub html: Option<String>,

    /// Read HTML content from stdin
    #[arg(short = 'i', long)]
    pub stdin: bool,
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Serve(String),
    Read(Source, OutputMode),
    Help,
}

impl Cli {
    pub fn mode(&self) -> OutputMode {
        OutputMode::from_flags(self.metadata, self.text)
    }

    /// Resolve the flags in precedence order: http, stdin, html, positional source.
    pub fn action(&self) -> Action {
        if let Some(addr) = self.http.as_deref().filter(|a| !a.is_empty()) {
            return Action::Serve(addr.to_string());
        }

        let html = self.html.as_deref().filter(|h| !h.is_empty());
        let source = if self.stdin {
            Some(Source::Stdin)
        } else {
            html.map(|h| Source::Html(h.to_string()))
        };

        match (source, self.source.as_deref()) {
            (Some(source), positional) => {
                if let Some(ignored) = positional {
                    warn!(
                        "ignoring source argument {:?}: reading from {}",
                        ignored,
                        if self.stdin { "stdin" } else { "--html" }
                    );
                }
                Action::Read(source, self.mode())
            }
            (None, Some(arg)) => Action::Read(Source::from_arg(arg), self.mode()),
            (None, None) => Action::Help,
        }
    }
}
