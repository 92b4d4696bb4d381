//! Validation of the values a user enters before a scan.

use crate::error::{Error, Result};
use crate::listing::{FilterConfig, RegionFilter};

use reqwest::Url;
use std::path::{Path, PathBuf};

/// The user's inputs, checked and parsed.
///
/// ```rust
/// use trawl::session::RunInputs;
///
/// let inputs = RunInputs::new(" https://example.com/files/ ", "roms", true).unwrap();
/// assert_eq!(inputs.page_url().as_str(), "https://example.com/files/");
/// assert!(inputs.filter().region().is_some());
///
/// assert!(RunInputs::new("", "roms", false).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RunInputs {
    page_url: Url,
    directory: PathBuf,
    only_region: bool,
}

impl RunInputs {
    /// Trim and validate the page URL and download directory.
    ///
    /// # Errors
    ///
    /// [`Error::InputValidation`] for an empty URL or directory, with the
    /// message to show the user; [`Error::InvalidUrl`] for a URL that does
    /// not parse.
    pub fn new(page_url: &str, directory: &str, only_region: bool) -> Result<Self> {
        let page_url = page_url.trim();
        if page_url.is_empty() {
            return Err(Error::InputValidation("Please enter the page URL.".into()));
        }

        let directory = directory.trim();
        if directory.is_empty() {
            return Err(Error::InputValidation(
                "Please select a download directory.".into(),
            ));
        }

        let page_url = Url::parse(page_url).map_err(|e| {
            Error::InvalidUrl(format!("the url \"{}\" cannot be parsed: {}", page_url, e))
        })?;

        Ok(Self {
            page_url,
            directory: PathBuf::from(directory),
            only_region,
        })
    }

    pub fn page_url(&self) -> &Url {
        &self.page_url
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Listing filters for these inputs; the region flag selects USA releases.
    pub fn filter(&self) -> FilterConfig {
        let filter = FilterConfig::new();
        if self.only_region {
            filter.only_region(RegionFilter::usa())
        } else {
            filter
        }
    }
}
