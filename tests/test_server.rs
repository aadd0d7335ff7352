use readability_cli::server::{self, INDEX_PAGE};
use readability_cli::Reader;
use reqwest::StatusCode;
use tokio::net::TcpListener;

const ARTICLE_HTML: &str = include_str!("fixtures/article.html");

/// Start the server on an ephemeral port and return its base URL
async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let reader = Reader::builder().build().unwrap();
    tokio::spawn(async move {
        server::serve_listener(listener, reader).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn mock_article(server: &mut mockito::ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/article")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(ARTICLE_HTML)
        .create_async()
        .await
}

fn content_type(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn test_index_page_without_url() {
    let base = spawn_server().await;

    let response = reqwest::get(format!("{}/", base)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/html"));
    assert_eq!(response.text().await.unwrap(), INDEX_PAGE);
}

#[tokio::test]
async fn test_empty_url_serves_index() {
    let base = spawn_server().await;

    let response = reqwest::get(format!("{}/?url=&text=true", base)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), INDEX_PAGE);
}

#[tokio::test]
async fn test_metadata_mode_returns_json() {
    let mut upstream = mockito::Server::new_async().await;
    let _m = mock_article(&mut upstream).await;
    let base = spawn_server().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/", base))
        .query(&[
            ("url", format!("{}/article", upstream.url())),
            ("metadata", "true".to_string()),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/json");

    let value: serde_json::Value = serde_json::from_str(&response.text().await.unwrap()).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 5);
    for key in ["title", "byline", "excerpt", "image", "favicon"] {
        assert!(object.contains_key(key), "missing key {}", key);
    }
}

#[tokio::test]
async fn test_text_mode_returns_plain_text() {
    let mut upstream = mockito::Server::new_async().await;
    let _m = mock_article(&mut upstream).await;
    let base = spawn_server().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/", base))
        .query(&[
            ("url", format!("{}/article", upstream.url())),
            ("text", "1".to_string()),
            ("metadata", "nope".to_string()),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "text/plain");
    let body = response.text().await.unwrap();
    assert!(body.contains("overnight sleeper"));
    assert!(!body.contains("<p>"));
}

#[tokio::test]
async fn test_default_mode_returns_minified_html() {
    let mut upstream = mockito::Server::new_async().await;
    let _m = mock_article(&mut upstream).await;
    let base = spawn_server().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/", base))
        .query(&[("url", format!("{}/article", upstream.url()))])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/html"));
    let body = response.text().await.unwrap();
    assert!(body.contains("overnight sleeper"));
    assert!(!body.contains('\n'));
}

#[tokio::test]
async fn test_unreachable_url_is_bad_request() {
    let base = spawn_server().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/", base))
        .query(&[("url", "http://127.0.0.1:1/article")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("failed to fetch page"));
}

#[tokio::test]
async fn test_unreadable_page_is_bad_request() {
    let mut upstream = mockito::Server::new_async().await;
    let _m = upstream
        .mock("GET", "/image.png")
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body(vec![0x89, b'P', b'N', b'G'])
        .create_async()
        .await;
    let base = spawn_server().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/", base))
        .query(&[("url", format!("{}/image.png", upstream.url()))])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response
        .text()
        .await
        .unwrap()
        .contains("page is not readable"));

    // The server keeps serving after a failed request
    let response = reqwest::get(format!("{}/", base)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_repeated_query_keys_keep_first_value() {
    let base = spawn_server().await;

    // First `url` is empty, so the form page is served
    let response = reqwest::get(format!("{}/?url=&url=", base)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), INDEX_PAGE);

    // The pipeline runs and reports its own error, not a query rejection
    let response = reqwest::get(format!(
        "{}/?url=http://127.0.0.1:1/&text=true&text=false",
        base
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("failed to fetch page"));
    assert!(!body.contains("duplicate field"));
}

#[tokio::test]
async fn test_non_http_url_is_read_as_file() {
    let path = std::env::temp_dir().join(format!(
        "readability-cli-{}-server-file.html",
        std::process::id()
    ));
    std::fs::write(&path, ARTICLE_HTML).unwrap();
    let base = spawn_server().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/", base))
        .query(&[
            ("url", path.to_string_lossy().into_owned()),
            ("text", "true".to_string()),
        ])
        .send()
        .await
        .unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "text/plain");
    assert!(response
        .text()
        .await
        .unwrap()
        .contains("overnight sleeper"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_requests_are_served() {
    let mut upstream = mockito::Server::new_async().await;
    let _m = upstream
        .mock("GET", "/article")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(ARTICLE_HTML)
        .expect_at_least(4)
        .create_async()
        .await;
    let base = spawn_server().await;
    let url = format!("{}/?url={}/article&text=1", base, upstream.url());

    let requests: Vec<_> = (0..4)
        .map(|_| {
            let url = url.clone();
            tokio::spawn(async move { reqwest::get(url).await.unwrap() })
        })
        .collect();

    for request in requests {
        let response = request.await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .text()
            .await
            .unwrap()
            .contains("overnight sleeper"));
    }
}
