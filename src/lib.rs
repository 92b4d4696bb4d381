//! Trawl crawls directory-style listing pages and downloads the files they
//! list, one after the other.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trawl::{
//!     progress_callback, Crawler, DownloaderBuilder, Error, HttpClientConfig, RunInputs,
//!     SessionController, StartIndex,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let inputs = RunInputs::new("https://example.com/files/Console/", "roms", true)?;
//! let listing = Crawler::new(HttpClientConfig::default())?
//!     .crawl(inputs.page_url(), &inputs.filter())
//!     .await?
//!     .ensure_not_empty()?;
//! println!("{}", listing.confirmation_prompt());
//!
//! let session = SessionController::new();
//! let start = StartIndex::parse("1", listing.len());
//! session.start(
//!     DownloaderBuilder::new()
//!         .directory(inputs.directory().to_path_buf())
//!         .build(),
//!     listing.into_records(),
//!     start,
//!     progress_callback(|event| println!("{event}")),
//! )?;
//! session.wait().await;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`size`] - Parsing and formatting of human-readable sizes
//! - [`listing`] - Listing page retrieval, parsing and filtering
//! - [`utils`] - File name sanitizing
//! - [`download`] - Per-file summaries and run reports
//! - [`downloader`] - The sequential, cancellable [`Downloader`]
//! - [`session`] - Input validation and the background [`SessionController`]
//! - [`progress`] - Progress events and progress bars
//! - [`http`] - HTTP client setup
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod download;
pub mod downloader;
pub mod error;
pub mod http;
pub mod listing;
pub mod progress;
pub mod session;
pub mod size;
pub mod utils;

pub use download::{RunReport, RunStatus, Status, Summary};
pub use downloader::{Downloader, DownloaderBuilder, FailurePolicy, StartIndex};
pub use error::{Error, Result};
pub use http::{create_http_client, HttpClientConfig};
pub use listing::{Crawler, FileRecord, FilterConfig, ListingResult, RegionFilter};
pub use progress::{
    progress_callback, ProgressBarOpts, ProgressCallback, ProgressEvent, StyleOptions,
};
pub use session::{RunInputs, SessionController, SessionState};
pub use size::{format_size, parse_size};
pub use utils::sanitize;
