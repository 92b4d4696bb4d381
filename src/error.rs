//! Error handling for the Trawl library.
//!
//! This module provides a single error enum covering everything that can go
//! wrong between reading the user's inputs and the last byte written to disk.
//! Row-level listing anomalies are not errors: they are logged and the row is
//! skipped or given a zero size (see [`crate::listing::RowSkip`]).

use reqwest::StatusCode;
use std::io;
use thiserror::Error;

/// Errors that can happen when using Trawl.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// Captures failures that don't fit into other categories, such as a
    /// background task that panicked.
    #[error("Internal error: {0}")]
    Internal(String),

    /// A required input was missing.
    ///
    /// The message is meant to be shown to the user as is.
    #[error("{0}")]
    InputValidation(String),

    /// Error from the underlying URL parser or the expected URL format.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The listing page answered with a non-success status.
    #[error("Failed to retrieve page {url}: {status}")]
    ListingFetchFailed { url: String, status: StatusCode },

    /// The listing page contained no file matching the filters.
    #[error("No matching files found on the page.")]
    NoMatchingFiles,

    /// A size string did not match `<number><optional space><unit>`.
    #[error("Unknown size format: {0:?}")]
    UnrecognizedSizeFormat(String),

    /// A single file could not be retrieved or written.
    #[error("Failed to download {name}")]
    TransferFailure {
        name: String,
        #[source]
        source: Box<Error>,
    },

    /// A download run is already active on this session.
    #[error("A download is already running")]
    SessionActive,

    /// I/O Error.
    ///
    /// Wraps errors from creating the download directory or writing files.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error from the middleware stack wrapping the HTTP client.
    #[error("HTTP middleware error")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },
}

/// Result type alias for operations that can fail with a Trawl error.
pub type Result<T> = std::result::Result<T, Error>;
