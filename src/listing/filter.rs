//! Inclusion and exclusion rules applied while a listing is parsed.
//!
//! # Examples
//!
//! ```rust
//! use trawl::listing::{FilterConfig, RegionFilter};
//!
//! let filter = FilterConfig::new().only_region(RegionFilter::usa());
//! assert!(filter.accepts("Game (USA)"));
//! assert!(!filter.accepts("Game (Japan)"));
//! assert!(!filter.accepts("Game (USA) (Demo)"));
//! ```

use crate::error::{Error, Result};

use regex::Regex;

/// Name fragments that always exclude a file, matched case-insensitively.
pub const EXCLUDED_KEYWORDS: [&str; 3] = ["BETA", "BIOS", "DEMO"];

/// Restricts records to names carrying one of a set of region tokens.
///
/// Tokens only match as whole words: `US` matches `Game (US)` but not
/// `Game (USAGE)`.
#[derive(Debug, Clone)]
pub struct RegionFilter {
    tokens: Vec<String>,
    pattern: Regex,
}

impl RegionFilter {
    /// Build a filter from region tokens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Internal`] if no token is given.
    pub fn new<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(Error::Internal(
                "a region filter needs at least one token".into(),
            ));
        }

        let alternatives = tokens
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i)\b(?:{alternatives})\b"))
            .map_err(|e| Error::Internal(format!("invalid region pattern: {e}")))?;

        Ok(Self { tokens, pattern })
    }

    /// Matches `USA` or `US`.
    pub fn usa() -> Self {
        let pattern = Regex::new(r"(?i)\b(?:USA|US)\b").expect("region pattern is valid");
        Self {
            tokens: vec!["USA".into(), "US".into()],
            pattern,
        }
    }

    /// The tokens this filter accepts.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whether `name` contains one of the tokens as a whole word.
    pub fn matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}

/// Filters applied to each listing row.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    only_region: Option<RegionFilter>,
}

impl FilterConfig {
    /// No region restriction; only the fixed exclusion keywords apply.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only names matching `region`.
    pub fn only_region(mut self, region: RegionFilter) -> Self {
        self.only_region = Some(region);
        self
    }

    /// The active region filter, if any.
    pub fn region(&self) -> Option<&RegionFilter> {
        self.only_region.as_ref()
    }

    /// The first exclusion keyword found in `name`, if any.
    pub fn excluded_keyword(&self, name: &str) -> Option<&'static str> {
        let upper = name.to_uppercase();
        EXCLUDED_KEYWORDS
            .into_iter()
            .find(|keyword| upper.contains(keyword))
    }

    /// Whether `name` passes the region filter. Always true without one.
    pub fn in_region(&self, name: &str) -> bool {
        self.only_region
            .as_ref()
            .map_or(true, |region| region.matches(name))
    }

    /// Whether a file called `name` is kept.
    pub fn accepts(&self, name: &str) -> bool {
        self.excluded_keyword(name).is_none() && self.in_region(name)
    }
}
