//! Tests for the downloader module functionality.
//!
//! This file contains tests for:
//! - The DownloaderBuilder pattern
//! - Sequential runs, start index and progress events
//! - Cancellation between files
//! - Failure policies

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use reqwest::header::{HeaderValue, USER_AGENT};
use tokio_util::sync::CancellationToken;
use trawl::downloader::{DownloaderBuilder, FailurePolicy, StartIndex};
use trawl::progress::{progress_callback, silent, ProgressEvent};
use trawl::{Error, RunStatus, Status};
use wiremock::MockServer;

mod common;
use common::helpers::*;

#[test]
fn test_builder_defaults() {
    let downloader = DownloaderBuilder::new().build();

    assert_eq!(downloader.failure_policy(), FailurePolicy::Abort);
    assert!(downloader.headers().is_none());
}

#[test]
fn test_builder_configuration() {
    let temp_dir = create_temp_dir();
    let downloader = DownloaderBuilder::new()
        .directory(temp_dir.path().to_path_buf())
        .failure_policy(FailurePolicy::SkipAndContinue)
        .build();

    assert_eq!(downloader.directory(), temp_dir.path());
    assert_eq!(downloader.failure_policy(), FailurePolicy::SkipAndContinue);
}

#[test]
fn test_builder_headers_merge() {
    let downloader = DownloaderBuilder::new()
        .headers(create_test_headers())
        .header("x-extra", HeaderValue::from_static("1"))
        .build();

    let headers = downloader.headers().unwrap();
    assert_eq!(
        headers.get(USER_AGENT),
        Some(&HeaderValue::from_static(TEST_USER_AGENT))
    );
    assert_eq!(headers.get("x-extra"), Some(&HeaderValue::from_static("1")));
}

#[test]
fn test_downloader_debug() {
    let downloader = DownloaderBuilder::new().on_complete(|_| {}).build();
    let debug_str = format!("{:?}", downloader);

    assert!(debug_str.contains("Downloader"));
    assert!(debug_str.contains("on_complete: true"));
}

#[tokio::test]
async fn test_run_from_start_index() {
    init_tracing();
    let server = MockServer::start().await;
    mount_unrequested_file(&server, "a.zip").await;
    mount_file(&server, "b.zip", create_test_content(200)).await;
    mount_file(&server, "c.zip", create_test_content(300)).await;

    let records = create_test_records(&server, &[("a.zip", 100), ("b.zip", 200), ("c.zip", 300)]);
    let temp_dir = create_temp_dir();
    let downloader = create_test_downloader_builder(temp_dir.path()).build();
    let (on_progress, events) = record_events();

    let report = downloader
        .run(
            &records,
            StartIndex::parse("2", records.len()),
            &CancellationToken::new(),
            &on_progress,
        )
        .await
        .unwrap();

    assert_eq!(report.status(), RunStatus::Completed);
    assert_eq!(report.downloaded_count(), 2);
    assert_eq!(report.downloaded_bytes(), 500);
    assert_eq!(
        *events.lock().unwrap(),
        [
            "Downloading: b.zip (2/3)",
            "Downloading: c.zip (3/3)",
            "Download Complete"
        ]
    );
    assert!(!temp_dir.path().join("a.zip").exists());
    assert_file_size(&temp_dir.path().join("b.zip"), 200);
    assert_file_size(&temp_dir.path().join("c.zip"), 300);
}

#[tokio::test]
async fn test_run_creates_directory_and_sanitizes_names() {
    let server = MockServer::start().await;
    mount_file(&server, "a.zip", create_test_content(64)).await;

    let mut records = create_test_records(&server, &[("a.zip", 64)]);
    records[0].name = "Game: Part 1? (USA). ".into();

    let temp_dir = create_temp_dir();
    let target = temp_dir.path().join("nested").join("deeper");
    let downloader = create_test_downloader_builder(&target).build();

    let report = downloader
        .run(&records, StartIndex::FIRST, &CancellationToken::new(), &silent())
        .await
        .unwrap();

    let expected = target.join("Game_ Part 1_ (USA)");
    assert_file_size(&expected, 64);
    assert_eq!(report.summaries()[0].path(), expected.as_path());
}

#[tokio::test]
async fn test_run_overwrites_existing_file() {
    let server = MockServer::start().await;
    let content = create_test_content(32);
    mount_file(&server, "a.zip", content.clone()).await;

    let temp_dir = create_temp_dir();
    let existing = create_temp_file(temp_dir.path(), "a.zip", &create_test_content(4096));
    let records = create_test_records(&server, &[("a.zip", 32)]);

    create_test_downloader_builder(temp_dir.path())
        .build()
        .run(&records, StartIndex::FIRST, &CancellationToken::new(), &silent())
        .await
        .unwrap();

    assert_eq!(std::fs::read(existing).unwrap(), content);
}

#[tokio::test]
async fn test_cancel_after_first_file_begins() {
    let server = MockServer::start().await;
    mount_file(&server, "a.zip", create_test_content(100)).await;
    mount_unrequested_file(&server, "b.zip").await;
    mount_unrequested_file(&server, "c.zip").await;

    let records = create_test_records(&server, &[("a.zip", 100), ("b.zip", 200), ("c.zip", 300)]);
    let temp_dir = create_temp_dir();
    let downloader = create_test_downloader_builder(temp_dir.path()).build();

    let cancel = CancellationToken::new();
    let (recorder, events) = record_events();
    let token = cancel.clone();
    let on_progress = progress_callback(move |event: &ProgressEvent| {
        recorder(event);
        if matches!(event, ProgressEvent::Downloading { position: 1, .. }) {
            token.cancel();
        }
    });

    let report = downloader
        .run(&records, StartIndex::FIRST, &cancel, &on_progress)
        .await
        .unwrap();

    assert!(report.is_canceled());
    assert_eq!(report.downloaded_count(), 1);
    assert_eq!(
        *events.lock().unwrap(),
        ["Downloading: a.zip (1/3)", "Download canceled"]
    );
    assert_file_size(&temp_dir.path().join("a.zip"), 100);
    assert!(!temp_dir.path().join("b.zip").exists());
}

#[tokio::test]
async fn test_cancel_during_last_file_is_not_complete() {
    let server = MockServer::start().await;
    mount_file(&server, "a.zip", create_test_content(100)).await;

    let records = create_test_records(&server, &[("a.zip", 100)]);
    let temp_dir = create_temp_dir();
    let downloader = create_test_downloader_builder(temp_dir.path()).build();

    let cancel = CancellationToken::new();
    let (recorder, events) = record_events();
    let token = cancel.clone();
    let on_progress = progress_callback(move |event: &ProgressEvent| {
        recorder(event);
        if matches!(event, ProgressEvent::Downloading { .. }) {
            token.cancel();
        }
    });

    let report = downloader
        .run(&records, StartIndex::FIRST, &cancel, &on_progress)
        .await
        .unwrap();

    assert_eq!(report.status(), RunStatus::Canceled);
    assert_eq!(report.downloaded_count(), 1);
    assert_eq!(
        *events.lock().unwrap(),
        ["Downloading: a.zip (1/1)", "Download canceled"]
    );
    assert_file_size(&temp_dir.path().join("a.zip"), 100);
}

#[tokio::test]
async fn test_cancel_before_run_downloads_nothing() {
    let server = MockServer::start().await;
    mount_unrequested_file(&server, "a.zip").await;

    let records = create_test_records(&server, &[("a.zip", 100)]);
    let temp_dir = create_temp_dir();
    let cancel = CancellationToken::new();
    cancel.cancel();
    let (on_progress, events) = record_events();

    let report = create_test_downloader_builder(temp_dir.path())
        .build()
        .run(&records, StartIndex::FIRST, &cancel, &on_progress)
        .await
        .unwrap();

    assert!(report.is_canceled());
    assert!(report.summaries().is_empty());
    assert_eq!(*events.lock().unwrap(), ["Download canceled"]);
}

#[tokio::test]
async fn test_transfer_failure_aborts_run() {
    let server = MockServer::start().await;
    mount_file(&server, "a.zip", create_test_content(10)).await;
    mount_failing_file(&server, "b.zip", 404).await;
    mount_unrequested_file(&server, "c.zip").await;

    let records = create_test_records(&server, &[("a.zip", 10), ("b.zip", 10), ("c.zip", 10)]);
    let temp_dir = create_temp_dir();
    let (on_progress, events) = record_events();

    let result = create_test_downloader_builder(temp_dir.path())
        .build()
        .run(&records, StartIndex::FIRST, &CancellationToken::new(), &on_progress)
        .await;

    match result {
        Err(Error::TransferFailure { name, .. }) => assert_eq!(name, "b.zip"),
        other => panic!("Expected TransferFailure, got {:?}", other),
    }
    assert_eq!(
        events.lock().unwrap().last().map(String::as_str),
        Some("Downloading: b.zip (2/3)")
    );
    assert_file_exists(&temp_dir.path().join("a.zip"));
}

#[tokio::test]
async fn test_skip_and_continue_policy() {
    let server = MockServer::start().await;
    mount_file(&server, "a.zip", create_test_content(10)).await;
    mount_failing_file(&server, "b.zip", 500).await;
    mount_file(&server, "c.zip", create_test_content(30)).await;

    let records = create_test_records(&server, &[("a.zip", 10), ("b.zip", 20), ("c.zip", 30)]);
    let temp_dir = create_temp_dir();
    let completed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&completed);

    let report = create_test_downloader_builder(temp_dir.path())
        .failure_policy(FailurePolicy::SkipAndContinue)
        .on_complete(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .run(&records, StartIndex::FIRST, &CancellationToken::new(), &silent())
        .await
        .unwrap();

    assert_eq!(report.status(), RunStatus::Completed);
    assert_eq!(report.downloaded_count(), 2);
    assert_eq!(report.downloaded_bytes(), 40);
    assert_eq!(completed.load(Ordering::SeqCst), 3);

    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].record().name, "b.zip");
    assert_eq!(failures[0].statuscode(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert!(matches!(failures[0].status(), Status::Fail(_)));
}

#[tokio::test]
async fn test_empty_records_complete_immediately() {
    let temp_dir = create_temp_dir();
    let (on_progress, events) = record_events();

    let report = create_test_downloader_builder(temp_dir.path())
        .build()
        .run(&[], StartIndex::FIRST, &CancellationToken::new(), &on_progress)
        .await
        .unwrap();

    assert_eq!(report.status(), RunStatus::Completed);
    assert_eq!(*events.lock().unwrap(), ["Download Complete"]);
}
