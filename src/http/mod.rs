//! HTTP module containing HTTP client functionality.
//!
//! Both the listing crawler and the downloader go through the same client
//! setup: a reqwest client with optional proxy and default headers, wrapped
//! with tracing middleware.
//!
//! # Examples
//!
//! ```rust
//! use trawl::http::{create_http_client, HttpClientConfig};
//! use reqwest::header::{HeaderMap, USER_AGENT};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut headers = HeaderMap::new();
//! headers.insert(USER_AGENT, "MyApp/1.0".parse()?);
//!
//! let config = HttpClientConfig {
//!     proxy: None,
//!     headers: Some(headers),
//! };
//!
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{create_http_client, HttpClientConfig};
