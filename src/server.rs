//! Single-endpoint HTTP front end.
//!
//! `GET /` without `url` serves a small form; with `url` it runs the reader
//! and answers with the rendered article, or 400 and the error message.

use axum::extract::{RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use log::{error, info};
use tokio::net::TcpListener;

use crate::error::ReadError;
use crate::model::OutputMode;
use crate::reader::Reader;
use crate::source::Source;

/// The form page served when no URL is given
pub const INDEX_PAGE: &str = include_str!("index.html");

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReadQuery {
    pub url: Option<String>,
    pub metadata: Option<String>,
    pub text: Option<String>,
}

impl ReadQuery {
    /// Parse a raw query string. Repeated keys keep their first value and
    /// nothing here ever fails.
    pub fn parse(raw: &str) -> Self {
        let mut query = ReadQuery::default();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            let slot = match key.as_ref() {
                "url" => &mut query.url,
                "metadata" => &mut query.metadata,
                "text" => &mut query.text,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        query
    }

    pub fn mode(&self) -> OutputMode {
        OutputMode::from_flags(
            parse_bool_lenient(self.metadata.as_deref()),
            parse_bool_lenient(self.text.as_deref()),
        )
    }
}

/// Build the application router around `reader`
pub fn router(reader: Reader) -> Router {
    Router::new().route("/", get(read_handler)).with_state(reader)
}

/// Bind `addr` and serve until the process exits
pub async fn serve(addr: &str, reader: Reader) -> Result<(), ReadError> {
    let listener = TcpListener::bind(addr).await.map_err(ReadError::Server)?;
    serve_listener(listener, reader).await
}

/// Serve on an already bound listener
pub async fn serve_listener(listener: TcpListener, reader: Reader) -> Result<(), ReadError> {
    match listener.local_addr() {
        Ok(addr) => info!("HTTP server listening on {}", addr),
        Err(_) => info!("HTTP server listening"),
    }
    axum::serve(listener, router(reader))
        .await
        .map_err(ReadError::Server)
}

async fn read_handler(State(reader): State<Reader>, RawQuery(raw): RawQuery) -> Response {
    let query = ReadQuery::parse(raw.as_deref().unwrap_or_default());
    let url = match query.url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => return Html(INDEX_PAGE).into_response(),
    };

    let mode = query.mode();
    match read_off_runtime(reader, &Source::from_arg(url), mode).await {
        Ok(body) => match mode {
            OutputMode::Metadata => {
                ([(header::CONTENT_TYPE, "application/json")], body).into_response()
            }
            OutputMode::Text => ([(header::CONTENT_TYPE, "text/plain")], body).into_response(),
            OutputMode::Html => Html(body).into_response(),
        },
        Err(e) => {
            error!("{}: {}", url, e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Fetch on the runtime, then extract and format on the blocking pool so a
/// large page does not stall other requests.
async fn read_off_runtime(
    reader: Reader,
    source: &Source,
    mode: OutputMode,
) -> Result<String, ReadError> {
    let document = reader.acquire(source).await?;
    tokio::task::spawn_blocking(move || reader.process(&document, mode))
        .await
        .map_err(|e| ReadError::Extraction(format!("extraction task failed: {}", e)))?
}

/// Parse a query flag the forgiving way: anything unrecognised is `false`.
pub fn parse_bool_lenient(value: Option<&str>) -> bool {
    matches!(value, Some("1" | "t" | "T" | "true" | "TRUE" | "True"))
}
