//! Download module describing the results of transfers.
//!
//! # Overview
//!
//! - [`summary`] - Result of a single file transfer
//! - [`report`] - Result of a whole run
//!
//! # Examples
//!
//! ```rust
//! use trawl::download::{RunReport, RunStatus};
//!
//! let report = RunReport::new(RunStatus::Completed, Vec::new());
//! assert_eq!(report.downloaded_count(), 0);
//! assert!(!report.is_canceled());
//! ```

pub mod report;
pub mod summary;

pub use report::{RunReport, RunStatus};
pub use summary::{Status, Summary};
