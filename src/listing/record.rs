//! File records extracted from a listing page.

use crate::error::{Error, Result};
use crate::size::format_size;

use reqwest::Url;

/// One downloadable file found on a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Display name, taken from the link text.
    pub name: String,
    /// Absolute URL of the file.
    pub url: Url,
    /// Size in bytes as announced by the listing, 0 if it could not be read.
    pub size: u64,
}

impl FileRecord {
    /// Creates a new [`FileRecord`].
    pub fn new(name: &str, url: Url, size: u64) -> Self {
        Self {
            name: String::from(name),
            url,
            size,
        }
    }
}

/// The files of a listing page, in page order, with their total size.
///
/// The total is computed from the records when the result is built, so it
/// always equals the sum of the record sizes. It saturates at `u64::MAX`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingResult {
    records: Vec<FileRecord>,
    total_size: u64,
}

impl ListingResult {
    /// Build a result from records in download order.
    pub fn new(records: Vec<FileRecord>) -> Self {
        let total_size = records
            .iter()
            .fold(0u64, |total, r| total.saturating_add(r.size));
        Self {
            records,
            total_size,
        }
    }

    /// The records, in page order.
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Sum of all record sizes in bytes.
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileRecord> {
        self.records.iter()
    }

    /// Consume the result, keeping only the records.
    pub fn into_records(self) -> Vec<FileRecord> {
        self.records
    }

    /// Reject an empty listing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatchingFiles`] when no record survived the filters.
    pub fn ensure_not_empty(self) -> Result<Self> {
        if self.is_empty() {
            return Err(Error::NoMatchingFiles);
        }
        Ok(self)
    }

    /// The question asked before a download run starts.
    pub fn confirmation_prompt(&self) -> String {
        format!(
            "Number of files: {}\nTotal size of files: {}\n\nDo you want to start the download?",
            self.len(),
            format_size(self.total_size)
        )
    }
}

impl<'a> IntoIterator for &'a ListingResult {
    type Item = &'a FileRecord;
    type IntoIter = std::slice::Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
