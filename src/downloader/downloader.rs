//! Core downloader implementation with fetch logic.
//!
//! A run walks the records one at a time from its start index. Cancellation is
//! checked before each file; a transfer that already started always runs to
//! its end.
//!
//! # Examples
//!
//! ```rust,no_run
//! use trawl::downloader::{DownloaderBuilder, StartIndex};
//! use trawl::listing::{Crawler, FilterConfig};
//! use trawl::progress::progress_callback;
//! use trawl::HttpClientConfig;
//! use reqwest::Url;
//! use std::path::PathBuf;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> trawl::Result<()> {
//! let page = Url::parse("https://example.com/files/").unwrap();
//! let listing = Crawler::new(HttpClientConfig::default())?
//!     .crawl(&page, &FilterConfig::new())
//!     .await?;
//!
//! let downloader = DownloaderBuilder::new()
//!     .directory(PathBuf::from("./downloads"))
//!     .build();
//! let report = downloader
//!     .run(
//!         listing.records(),
//!         StartIndex::parse("1", listing.len()),
//!         &CancellationToken::new(),
//!         &progress_callback(|event| println!("{event}")),
//!     )
//!     .await?;
//! println!("{} files downloaded", report.downloaded_count());
//! # Ok(())
//! # }
//! ```

use super::config::{DownloaderConfig, FailurePolicy};
use super::start_index::StartIndex;
use crate::download::{RunReport, RunStatus, Status, Summary};
use crate::error::{Error, Result};
use crate::http::{create_http_client, HttpClientConfig};
use crate::listing::FileRecord;
use crate::progress::{ProgressCallback, ProgressDisplay, ProgressEvent};
use crate::utils::{fallback_file_name, sanitize};

use futures::StreamExt;
use reqwest::{header::HeaderMap, StatusCode};
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::{fs, io::AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Represents the download controller.
///
/// A downloader can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use trawl::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().build();
/// # }
/// ```
#[derive(Clone)]
pub struct Downloader {
    config: DownloaderConfig,
}

impl fmt::Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Downloader {
    /// Creates a new Downloader with the given configuration.
    pub(crate) fn new(config: DownloaderConfig) -> Self {
        Self { config }
    }

    /// Gets the directory where files will be downloaded.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Gets the reaction to failed transfers.
    pub fn failure_policy(&self) -> FailurePolicy {
        self.config.failure_policy
    }

    /// Path a record is written to: its sanitized name inside the directory.
    ///
    /// Names that sanitize to nothing fall back to the last URL segment.
    /// Returns `None` if neither yields a usable name.
    pub fn destination(&self, record: &FileRecord) -> Option<PathBuf> {
        let name = sanitize(&record.name);
        let name = if name.is_empty() {
            fallback_file_name(&record.url)?
        } else {
            name
        };
        Some(self.config.directory.join(name))
    }

    /// Download `records` sequentially, starting at `start`.
    ///
    /// Emits a [`ProgressEvent::Downloading`] before each file, then either
    /// [`ProgressEvent::Complete`] or, once `cancel` is observed before a file
    /// or after the last one, [`ProgressEvent::Canceled`]. Files already
    /// written are kept.
    ///
    /// # Errors
    ///
    /// Fails if the download directory cannot be created, and, with
    /// [`FailurePolicy::Abort`], with [`Error::TransferFailure`] on the first
    /// file that cannot be retrieved.
    pub async fn run(
        &self,
        records: &[FileRecord],
        start: StartIndex,
        cancel: &CancellationToken,
        on_progress: &ProgressCallback,
    ) -> Result<RunReport> {
        let client = create_http_client(HttpClientConfig {
            proxy: self.config.proxy.clone(),
            headers: self.config.headers.clone(),
        })?;

        debug!("Creating destination directory {:?}", self.config.directory);
        fs::create_dir_all(&self.config.directory).await?;

        let total = records.len();
        let offset = start.offset().min(total);
        let display = ProgressDisplay::new(self.config.style_options.clone(), total, offset);
        let mut summaries = Vec::with_capacity(total - offset);

        for (index, record) in records.iter().enumerate().skip(offset) {
            if cancel.is_cancelled() {
                info!("Download canceled before {}", record.name);
                display.abandon();
                on_progress(&ProgressEvent::Canceled);
                return Ok(RunReport::new(RunStatus::Canceled, summaries));
            }

            on_progress(&ProgressEvent::Downloading {
                name: record.name.clone(),
                position: index + 1,
                total,
            });
            display.start_file(&record.name);

            let output = self.destination(record);
            let outcome = match &output {
                Some(path) => self.fetch(&client, record, path, &display).await,
                None => Err(Error::InvalidUrl(format!(
                    "no usable file name for \"{}\"",
                    record.url
                ))),
            };

            let summary = match outcome {
                Ok(summary) => summary,
                Err(e) => match self.config.failure_policy {
                    FailurePolicy::Abort => {
                        display.abandon();
                        return Err(Error::TransferFailure {
                            name: record.name.clone(),
                            source: Box::new(e),
                        });
                    }
                    FailurePolicy::SkipAndContinue => {
                        warn!("Failed to download {}: {e}", record.name);
                        Summary::new(
                            record.clone(),
                            output.unwrap_or_default(),
                            failure_status(&e),
                            0,
                        )
                        .fail(&e)
                    }
                },
            };

            if let Some(ref callback) = self.config.on_complete {
                callback(&summary);
            }
            display.increment_main();
            summaries.push(summary);
        }

        // Canceled while the last file was in flight.
        if cancel.is_cancelled() {
            info!("Download canceled after the last file");
            display.abandon();
            on_progress(&ProgressEvent::Canceled);
            return Ok(RunReport::new(RunStatus::Canceled, summaries));
        }

        display.finish();
        on_progress(&ProgressEvent::Complete);
        Ok(RunReport::new(RunStatus::Completed, summaries))
    }

    /// Retrieves one file with a single GET and writes it to `output`.
    ///
    /// An existing file at `output` is overwritten.
    async fn fetch(
        &self,
        client: &ClientWithMiddleware,
        record: &FileRecord,
        output: &Path,
        display: &ProgressDisplay,
    ) -> Result<Summary> {
        debug!("Fetching {}", &record.url);
        let res = client
            .get(record.url.clone())
            .send()
            .await?
            .error_for_status()?;
        let status = res.status();

        // Trust the server over the listing when it announces a length.
        let size = res.content_length().unwrap_or(record.size);
        let pb = display.create_child_progress(size);

        debug!("Creating destination file {:?}", output);
        let mut file = fs::File::create(output).await?;

        let mut written: u64 = 0;
        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            let mut chunk = item?;
            let chunk_size = chunk.len() as u64;
            file.write_all_buf(&mut chunk).await?;
            written += chunk_size;
            pb.inc(chunk_size);
        }
        file.flush().await?;

        display.finish_child(pb);
        info!("Downloaded {} ({} bytes)", record.name, written);

        Ok(Summary::new(record.clone(), output.to_path_buf(), status, written)
            .with_status(Status::Success))
    }
}

/// HTTP status to report for a failed transfer.
fn failure_status(error: &Error) -> StatusCode {
    match error {
        Error::Reqwest { source } => source.status(),
        Error::Middleware { source } => source.status(),
        _ => None,
    }
    .unwrap_or(StatusCode::BAD_REQUEST)
}
