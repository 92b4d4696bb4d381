//! Progress events reported to the caller during a run.
//!
//! Each event renders to the exact text a front end shows in its status line.

use std::fmt;
use std::sync::Arc;

/// Callback receiving progress events.
///
/// Called from the background task running the download, so it must be
/// `Send + Sync` and return quickly.
pub type ProgressCallback = Arc<dyn Fn(&ProgressEvent) + Send + Sync>;

/// A step of a download run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A run was launched.
    Starting,
    /// A file transfer begins. `position` is 1-based over all records.
    Downloading {
        name: String,
        position: usize,
        total: usize,
    },
    /// Cancellation was requested; the file in flight still finishes.
    Canceling,
    /// The run stopped before the next file.
    Canceled,
    /// Every file was processed.
    Complete,
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::Starting => f.write_str("Starting download..."),
            ProgressEvent::Downloading {
                name,
                position,
                total,
            } => write!(f, "Downloading: {name} ({position}/{total})"),
            ProgressEvent::Canceling => f.write_str("Canceling download..."),
            ProgressEvent::Canceled => f.write_str("Download canceled"),
            ProgressEvent::Complete => f.write_str("Download Complete"),
        }
    }
}

/// Wrap a closure into a [`ProgressCallback`].
pub fn progress_callback<F>(f: F) -> ProgressCallback
where
    F: Fn(&ProgressEvent) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A callback that ignores every event.
pub fn silent() -> ProgressCallback {
    Arc::new(|_: &ProgressEvent| {})
}
