//! Test utilities and helper functions for the linkmatch test suite

use anyhow::Result;
use mockito::{Mock, Server};
use std::path::PathBuf;
use tempfile::TempDir;

use linkmatch::MatchConfig;

/// Creates a temporary directory for test storage
#[allow(dead_code)]
pub fn create_test_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test HTML document with specified title and body
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{}</title>
</head>
<body>
    {}
</body>
</html>"#,
        html_escape::encode_text(title),
        body
    )
}

/// Sets up a mock HTTP server
#[allow(dead_code)]
pub async fn setup_mock_server() -> mockito::ServerGuard {
    Server::new_async().await
}

/// Creates a mock endpoint that returns HTML content
#[allow(dead_code)]
pub async fn create_html_mock(server: &mut Server, path: &str, html: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns the given status with no body
#[allow(dead_code)]
pub async fn create_status_mock(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .create_async()
        .await
}

/// Creates a mock endpoint that redirects to another path
#[allow(dead_code)]
pub async fn create_redirect_mock(server: &mut Server, from: &str, to: &str) -> Mock {
    server
        .mock("GET", from)
        .with_status(301)
        .with_header("location", to)
        .create_async()
        .await
}

/// Writes a stopword file into `dir` and returns its path
#[allow(dead_code)]
pub fn write_stopwords(dir: &TempDir, words: &[&str]) -> Result<PathBuf> {
    let path = dir.path().join("stopwords.txt");
    std::fs::write(&path, words.join("\n"))?;
    Ok(path)
}

/// Builds a config rooted in `dir` with short network bounds for tests
#[allow(dead_code)]
pub fn test_config(dir: &TempDir, stopwords: PathBuf) -> MatchConfig {
    MatchConfig::builder()
        .storage_dir(dir.path().join("marketers"))
        .stopwords_path(stopwords)
        .request_timeout_secs(5)
        .build()
        .expect("test config should build")
}
