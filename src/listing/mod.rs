//! Listing module turning a directory-style HTML page into file records.
//!
//! # Overview
//!
//! - [`record`] - The [`FileRecord`] and [`ListingResult`] values
//! - [`filter`] - Exclusion keywords and the optional region filter
//! - [`parser`] - Pure extraction of records from markup
//! - [`crawler`] - HTTP retrieval of a listing page
//!
//! # Examples
//!
//! ```rust
//! use trawl::listing::{parse_listing, FilterConfig};
//! use reqwest::Url;
//!
//! let html = r#"<table>
//!   <tr><td><a href="../">Parent directory/</a></td><td>-</td></tr>
//!   <tr><td><a href="a.zip">a.zip</a></td><td>1 KiB</td></tr>
//!   <tr><td><a href="b.zip">b.zip</a></td><td>2 KiB</td></tr>
//! </table>"#;
//! let base = Url::parse("https://example.com/files/").unwrap();
//!
//! let listing = parse_listing(html, &base, &FilterConfig::new());
//! assert_eq!(listing.len(), 2);
//! assert_eq!(listing.total_size(), 3 * 1024);
//! ```

pub mod crawler;
pub mod filter;
pub mod parser;
pub mod record;

pub use crawler::Crawler;
pub use filter::{FilterConfig, RegionFilter, EXCLUDED_KEYWORDS};
pub use parser::{parse_listing, record_from_row, RowSkip};
pub use record::{FileRecord, ListingResult};
