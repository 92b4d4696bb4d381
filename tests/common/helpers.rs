use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Url;
use tempfile::TempDir;
use trawl::progress::{progress_callback, ProgressBarOpts, ProgressCallback, ProgressEvent, StyleOptions};
use trawl::{DownloaderBuilder, FileRecord, HttpClientConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Common test constants
pub const LISTING_PATH: &str = "/files/Console/";
pub const TEST_USER_AGENT: &str = "trawl-test-agent";

/// Installs a test subscriber honoring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a temporary file with the given content
pub fn create_temp_file(dir: &Path, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).expect("Failed to write temporary file");
    file_path
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that a file has the expected size
pub fn assert_file_size(path: &Path, expected_size: u64) {
    let metadata = fs::metadata(path).expect("Failed to get file metadata");
    assert_eq!(
        metadata.len(),
        expected_size,
        "File size mismatch at path: {:?}",
        path
    );
}

// === Listing Helpers ===

/// One listing row: link target, link text and size cell.
pub fn listing_row(href: &str, name: &str, size: &str) -> String {
    format!(
        r#"<tr><td class="link"><a href="{href}" title="{name}">{name}</a></td><td class="size">{size}</td><td class="date">01-Jan-2024 00:00</td></tr>"#
    )
}

/// A complete listing page with header and parent-directory rows.
pub fn listing_html(rows: &[(&str, &str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(href, name, size)| listing_row(href, name, size))
        .collect();
    format!(
        r#"<!DOCTYPE html><html><body><table id="list"><thead><tr><th><a href="?C=N&amp;O=A">File Name</a></th><th><a href="?C=S&amp;O=A">File Size</a></th><th>Date</th></tr></thead><tbody><tr><td class="link"><a href="../" title="../">Parent directory/</a></td><td class="size">-</td><td class="date">-</td></tr>{body}</tbody></table></body></html>"#
    )
}

/// Base URL of the listing served by `server`.
pub fn listing_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}{}", server.uri(), LISTING_PATH)).expect("valid listing url")
}

/// Serves `html` at [`LISTING_PATH`].
pub async fn mount_listing(server: &MockServer, html: String) {
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

/// Serves `body` for a file of the listing, expecting exactly one request.
pub async fn mount_file(server: &MockServer, name: &str, body: Vec<u8>) {
    mount_file_with_delay(server, name, body, Duration::ZERO).await;
}

/// Like [`mount_file`], answering only after `delay`.
pub async fn mount_file_with_delay(server: &MockServer, name: &str, body: Vec<u8>, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(format!("{LISTING_PATH}{name}")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body).set_delay(delay))
        .expect(1)
        .mount(server)
        .await;
}

/// Fails the test when the file is requested.
pub async fn mount_unrequested_file(server: &MockServer, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("{LISTING_PATH}{name}")))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

/// Answers requests for the file with `status`.
pub async fn mount_failing_file(server: &MockServer, name: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("{LISTING_PATH}{name}")))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Records for files served by `server` under [`LISTING_PATH`].
pub fn create_test_records(server: &MockServer, files: &[(&str, u64)]) -> Vec<FileRecord> {
    let base = listing_url(server);
    files
        .iter()
        .map(|(name, size)| FileRecord::new(name, base.join(name).expect("valid file url"), *size))
        .collect()
}

// === Progress Helpers ===

/// A progress callback collecting the rendered events.
pub fn record_events() -> (ProgressCallback, Arc<Mutex<Vec<String>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let callback = progress_callback(move |event: &ProgressEvent| {
        sink.lock().unwrap().push(event.to_string());
    });
    (callback, events)
}

/// Creates hidden progress bar options for testing
pub fn create_hidden_progress_opts() -> ProgressBarOpts {
    ProgressBarOpts::hidden()
}

/// Creates custom progress bar options with template and chars
pub fn create_custom_progress_opts(template: &str, chars: &str) -> ProgressBarOpts {
    ProgressBarOpts::new(Some(template.to_string()), Some(chars.to_string()), true, false)
}

/// Creates disabled style options for testing
pub fn create_disabled_style_options() -> StyleOptions {
    StyleOptions::new(create_hidden_progress_opts(), create_hidden_progress_opts())
}

// === HTTP Configuration Helpers ===

/// Creates test headers with common user agent
pub fn create_test_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(TEST_USER_AGENT));
    headers
}

/// Creates a test HTTP client configuration
pub fn create_test_http_config() -> HttpClientConfig {
    HttpClientConfig {
        proxy: None,
        headers: Some(create_test_headers()),
    }
}

// === Downloader Builder Helpers ===

/// A downloader builder without visible progress bars writing to `dir`.
pub fn create_test_downloader_builder(dir: &Path) -> DownloaderBuilder {
    DownloaderBuilder::hidden().directory(dir.to_path_buf())
}
