//! The file a run starts from.

/// 1-based position of the first record to download.
///
/// Always within `1..=len` for the listing it was built for; anything else
/// falls back to the first record.
///
/// ```rust
/// use trawl::downloader::StartIndex;
///
/// assert_eq!(StartIndex::parse("2", 3).get(), 2);
/// assert_eq!(StartIndex::parse("99", 3).get(), 1);
/// assert_eq!(StartIndex::parse("abc", 3).offset(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartIndex(usize);

impl StartIndex {
    /// Start with the first record.
    pub const FIRST: StartIndex = StartIndex(1);

    /// Use `index` if it designates one of `len` records.
    pub fn new(index: usize, len: usize) -> Self {
        if (1..=len).contains(&index) {
            Self(index)
        } else {
            Self::FIRST
        }
    }

    /// Read a start index typed by the user.
    ///
    /// Surrounding whitespace is ignored; non-numeric text falls back to the
    /// first record.
    pub fn parse(raw: &str, len: usize) -> Self {
        raw.trim()
            .parse::<usize>()
            .map_or(Self::FIRST, |index| Self::new(index, len))
    }

    /// The 1-based position.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of records skipped, i.e. the 0-based position.
    pub fn offset(self) -> usize {
        self.0 - 1
    }
}

impl Default for StartIndex {
    fn default() -> Self {
        Self::FIRST
    }
}
