//! Configuration structures and defaults for the downloader.
//!
//! # Examples
//!
//! ## Using Callbacks
//!
//! ```rust
//! use trawl::downloader::SummaryCallback;
//! use trawl::download::{Status, Summary};
//!
//! let callback: SummaryCallback = Box::new(|summary: &Summary| {
//!     match summary.status() {
//!         Status::Success => println!("✓ Downloaded: {}", summary.record().name),
//!         Status::Fail(msg) => println!("✗ Failed: {} - {}", summary.record().name, msg),
//!         Status::NotStarted => {}
//!     }
//! });
//! ```

use crate::download::Summary;
use crate::StyleOptions;

use reqwest::header::HeaderMap;
use std::env::current_dir;
use std::path::PathBuf;
use std::sync::Arc;

/// Callback type for per-file completion events.
pub type SummaryCallback = Box<dyn Fn(&Summary) + Send + Sync>;

/// What a run does when a single transfer fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// End the run with [`crate::Error::TransferFailure`].
    #[default]
    Abort,
    /// Record the failure in the run report and continue with the next file.
    SkipAndContinue,
}

/// Configuration structure for the downloader
#[derive(Clone)]
pub struct DownloaderConfig {
    /// Directory where to store the downloaded files.
    pub directory: PathBuf,
    /// Downloader style options.
    pub style_options: StyleOptions,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Optional proxy for the file requests.
    pub proxy: Option<reqwest::Proxy>,
    /// Reaction to a failed transfer.
    pub failure_policy: FailurePolicy,
    /// Callback for when each download completes.
    pub on_complete: Option<Arc<SummaryCallback>>,
}

impl std::fmt::Debug for DownloaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloaderConfig")
            .field("directory", &self.directory)
            .field("style_options", &self.style_options)
            .field("headers", &self.headers)
            .field("proxy", &self.proxy)
            .field("failure_policy", &self.failure_policy)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            style_options: StyleOptions::default(),
            headers: None,
            proxy: None,
            failure_policy: FailurePolicy::default(),
            on_complete: None,
        }
    }
}
