//! Outcome of a whole download run.

use super::summary::Summary;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every record from the start index on was processed.
    Completed,
    /// Cancellation was requested before the run ended.
    Canceled,
}

/// Per-file summaries of a finished run, in download order.
#[derive(Debug, Clone)]
pub struct RunReport {
    status: RunStatus,
    summaries: Vec<Summary>,
}

impl RunReport {
    pub fn new(status: RunStatus, summaries: Vec<Summary>) -> Self {
        Self { status, summaries }
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn is_canceled(&self) -> bool {
        self.status == RunStatus::Canceled
    }

    /// Summaries of every record that was attempted.
    pub fn summaries(&self) -> &[Summary] {
        &self.summaries
    }

    /// Number of files written successfully.
    pub fn downloaded_count(&self) -> usize {
        self.summaries.iter().filter(|s| s.is_success()).count()
    }

    /// Bytes written by successful transfers.
    pub fn downloaded_bytes(&self) -> u64 {
        self.summaries
            .iter()
            .filter(|s| s.is_success())
            .map(Summary::size)
            .sum()
    }

    /// Summaries of failed transfers, only present with a skipping policy.
    pub fn failures(&self) -> impl Iterator<Item = &Summary> {
        self.summaries.iter().filter(|s| !s.is_success())
    }
}
