//! Retrieval of listing pages.

use super::filter::FilterConfig;
use super::parser::parse_listing;
use super::record::ListingResult;
use crate::error::{Error, Result};
use crate::http::{create_http_client, HttpClientConfig};

use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use tracing::{error, info};

/// Fetches listing pages and extracts their records.
///
/// ```rust,no_run
/// use trawl::listing::{Crawler, FilterConfig, RegionFilter};
/// use trawl::HttpClientConfig;
/// use reqwest::Url;
///
/// # async fn example() -> trawl::Result<()> {
/// let crawler = Crawler::new(HttpClientConfig::default())?;
/// let page = Url::parse("https://example.com/files/").unwrap();
/// let listing = crawler
///     .crawl(&page, &FilterConfig::new().only_region(RegionFilter::usa()))
///     .await?;
/// println!("{}", listing.confirmation_prompt());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Crawler {
    client: ClientWithMiddleware,
}

impl Crawler {
    /// Creates a crawler with its own HTTP client.
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        Ok(Self {
            client: create_http_client(config)?,
        })
    }

    /// Creates a crawler sharing an existing client.
    pub fn with_client(client: ClientWithMiddleware) -> Self {
        Self { client }
    }

    /// Fetch `page_url` once and parse it with `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListingFetchFailed`] when the page answers with a
    /// non-success status, or the transport error when it cannot be reached.
    pub async fn crawl(&self, page_url: &Url, filter: &FilterConfig) -> Result<ListingResult> {
        info!("Crawling the page for files...");
        let response = self.client.get(page_url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("Failed to retrieve page: {page_url}");
            return Err(Error::ListingFetchFailed {
                url: page_url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        Ok(parse_listing(&body, page_url, filter))
    }
}
