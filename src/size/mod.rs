//! Human-readable size strings.
//!
//! Listing pages print file sizes such as `1.5 GiB`, `700 MB` or `12Ki`. This
//! module turns them into exact byte counts and renders byte counts back for
//! display.
//!
//! # Examples
//!
//! ```rust
//! use trawl::size::{format_size, parse_size};
//!
//! assert_eq!(parse_size("1.5 GiB"), 1_610_612_736);
//! assert_eq!(parse_size("n/a"), 0);
//! assert_eq!(format_size(1024 * 1024 * 1024), "1.00 GiB");
//! ```

pub mod codec;

pub use codec::{format_size, parse_size, try_parse_size, SizeUnit};
