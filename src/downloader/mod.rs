//! Downloader module containing the download orchestrator, its builder and
//! configuration.
//!
//! # Overview
//!
//! - `downloader` - Core [`Downloader`] running records sequentially
//! - `builder` - [`DownloaderBuilder`] for configuration
//! - `config` - Configuration structures, failure policy and callback types
//! - `start_index` - [`StartIndex`], the validated 1-based starting file
//!
//! # Examples
//!
//! ## Hidden Progress Bars
//!
//! ```rust
//! use trawl::downloader::DownloaderBuilder;
//!
//! // Create a downloader with hidden progress bars
//! let downloader = DownloaderBuilder::hidden().build();
//! ```

pub mod builder;
pub mod config;
pub mod downloader;
pub mod start_index;

pub use builder::DownloaderBuilder;
pub use config::{DownloaderConfig, FailurePolicy, SummaryCallback};
pub use downloader::Downloader;
pub use start_index::StartIndex;
