//! Integration tests for the link extractor against a mock HTTP server

use linkmatch::{LinkExtractor, MatchConfig, NO_TITLE};

mod common;

fn extractor(dir: &tempfile::TempDir) -> LinkExtractor {
    let config = MatchConfig::builder()
        .storage_dir(dir.path())
        .request_timeout_secs(5)
        .build()
        .unwrap();
    LinkExtractor::new(&config).unwrap()
}

#[tokio::test]
async fn extracts_anchor_records_with_page_domain() {
    let mut server = common::setup_mock_server().await;
    let html = common::create_test_html(
        "Links",
        r#"<a href="https://example.com/guide">SEO Guide</a>
           <a href="/local">Local Page</a>
           <a href="mailto:hi@example.com">Contact</a>"#,
    );
    let _mock = common::create_html_mock(&mut server, "/page", &html).await;

    let dir = common::create_test_dir().unwrap();
    let records = extractor(&dir)
        .extract_links(&format!("{}/page", server.url()))
        .await;

    assert_eq!(records.len(), 3);
    // Domain comes from the fetched URL, identical on every record
    for record in &records {
        assert_eq!(record.website, "127.0.0.1");
    }
    assert_eq!(records[0].title, "SEO Guide");
    assert_eq!(records[0].link, "https://example.com/guide");
    // Hrefs verbatim, relative and mailto included
    assert_eq!(records[1].link, "/local");
    assert_eq!(records[2].link, "mailto:hi@example.com");
}

#[tokio::test]
async fn empty_anchor_text_defaults_to_no_title() {
    let mut server = common::setup_mock_server().await;
    let html = common::create_test_html("Untitled", r#"<a href="/x">   </a>"#);
    let _mock = common::create_html_mock(&mut server, "/page", &html).await;

    let dir = common::create_test_dir().unwrap();
    let records = extractor(&dir)
        .extract_links(&format!("{}/page", server.url()))
        .await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, NO_TITLE);
}

#[tokio::test]
async fn non_success_status_yields_empty_set() {
    let mut server = common::setup_mock_server().await;
    let _mock = common::create_status_mock(&mut server, "/gone", 500).await;

    let dir = common::create_test_dir().unwrap();
    let records = extractor(&dir)
        .extract_links(&format!("{}/gone", server.url()))
        .await;

    assert!(records.is_empty());
}

#[tokio::test]
async fn transport_failure_yields_empty_set() {
    let dir = common::create_test_dir().unwrap();
    // Nothing listens on port 1
    let records = extractor(&dir)
        .extract_links("http://127.0.0.1:1/unreachable")
        .await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn redirects_are_followed_to_the_target_page() {
    let mut server = common::setup_mock_server().await;
    let _redirect = common::create_redirect_mock(&mut server, "/old", "/new").await;
    let html = common::create_test_html("Moved", r#"<a href="/dest">Destination</a>"#);
    let _mock = common::create_html_mock(&mut server, "/new", &html).await;

    let dir = common::create_test_dir().unwrap();
    let records = extractor(&dir)
        .extract_links(&format!("{}/old", server.url()))
        .await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Destination");
}
