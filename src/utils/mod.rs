//! Shared utility functions.
//!
//! # Overview
//!
//! - [`sanitize`] - Filesystem-safe file names
//!
//! # Examples
//!
//! ```rust
//! use trawl::utils::sanitize;
//!
//! assert_eq!(sanitize("Disc 1: The Game?. "), "Disc 1_ The Game_");
//! ```

pub mod sanitize;

pub use sanitize::{fallback_file_name, sanitize};
