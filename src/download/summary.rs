//! Download summary functionality.
//!
//! This module contains the [`Summary`] struct and [`Status`] enum describing
//! what happened to a single [`FileRecord`] during a run.
//!
//! # Examples
//!
//! ```rust
//! use trawl::download::{Status, Summary};
//! use trawl::listing::FileRecord;
//! use reqwest::{StatusCode, Url};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let url = Url::parse("https://example.com/file.zip")?;
//! let record = FileRecord::new("file.zip", url, 2048);
//!
//! let summary = Summary::new(record, "downloads/file.zip".into(), StatusCode::OK, 2048)
//!     .with_status(Status::Success);
//!
//! println!("Downloaded {} bytes", summary.size());
//! println!("HTTP status: {}", summary.statuscode());
//! # Ok(())
//! # }
//! ```

use crate::listing::FileRecord;

use reqwest::StatusCode;
use std::path::{Path, PathBuf};

/// Download status enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Download failed with error message
    Fail(String),
    /// Download not yet started
    NotStarted,
    /// Download completed successfully
    Success,
}

/// Represents a [`FileRecord`] download summary.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Downloaded record.
    record: FileRecord,
    /// Destination on disk.
    path: PathBuf,
    /// HTTP status code.
    statuscode: StatusCode,
    /// Bytes written to disk.
    size: u64,
    /// Status.
    status: Status,
}

impl Summary {
    /// Create a new [`Summary`].
    pub fn new(record: FileRecord, path: PathBuf, statuscode: StatusCode, size: u64) -> Self {
        Self {
            record,
            path,
            statuscode,
            size,
            status: Status::NotStarted,
        }
    }

    /// Attach a status to a [`Summary`].
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Get the summary's HTTP status.
    pub fn statuscode(&self) -> StatusCode {
        self.statuscode
    }

    /// Get the number of bytes written.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get a reference to the summary's record.
    pub fn record(&self) -> &FileRecord {
        &self.record
    }

    /// Get the destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a reference to the summary's status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Whether the file was written completely.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Mark the summary as failed with a message.
    pub fn fail(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Fail(format!("{}", msg)),
            ..self
        }
    }
}
