//! Size string parsing and formatting.
//!
//! Decimal-labelled units (`KB`, `MB`, `GB`, `TB`) are read as powers of 1024,
//! exactly like their binary counterparts. Listing totals computed this way
//! match the ones the sites themselves display, so the inaccuracy is kept.
//!
//! The grammar goes beyond the usual `<number> <unit>` cell: a bare number or
//! a `B` suffix is a byte count, and the whole cell must match, so trailing
//! text such as `10 MB*` is rejected and read as 0.

use crate::error::{Error, Result};

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d+(?:\.\d+)?)\s*(kib|mib|gib|tib|ki|mi|gi|ti|kb|mb|gb|tb|b)?$")
        .expect("size pattern is valid")
});

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;
const TIB: u64 = GIB * 1024;

/// Unit suffix recognized in a size string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    Byte,
    Kibi,
    Mebi,
    Gibi,
    Tebi,
}

impl SizeUnit {
    /// Look up a unit token, ignoring case.
    ///
    /// `KiB`, `Ki` and `KB` all map to [`SizeUnit::Kibi`], and so on for the
    /// larger units.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "B" => Some(Self::Byte),
            "KIB" | "KI" | "KB" => Some(Self::Kibi),
            "MIB" | "MI" | "MB" => Some(Self::Mebi),
            "GIB" | "GI" | "GB" => Some(Self::Gibi),
            "TIB" | "TI" | "TB" => Some(Self::Tebi),
            _ => None,
        }
    }

    /// Number of bytes in one unit.
    pub fn multiplier(self) -> u64 {
        match self {
            Self::Byte => 1,
            Self::Kibi => KIB,
            Self::Mebi => MIB,
            Self::Gibi => GIB,
            Self::Tebi => TIB,
        }
    }

    /// Display suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Byte => "B",
            Self::Kibi => "KiB",
            Self::Mebi => "MiB",
            Self::Gibi => "GiB",
            Self::Tebi => "TiB",
        }
    }
}

/// Parse a size string into a byte count.
///
/// A bare number is a byte count. Fractional results are truncated toward
/// zero.
///
/// # Errors
///
/// Returns [`Error::UnrecognizedSizeFormat`] when `text` is not a number
/// optionally followed by a known unit.
pub fn try_parse_size(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    let captures = SIZE_PATTERN
        .captures(trimmed)
        .ok_or_else(|| Error::UnrecognizedSizeFormat(trimmed.to_string()))?;

    let value: f64 = captures[1]
        .parse()
        .map_err(|_| Error::UnrecognizedSizeFormat(trimmed.to_string()))?;
    let unit = match captures.get(2) {
        Some(token) => SizeUnit::from_token(token.as_str())
            .ok_or_else(|| Error::UnrecognizedSizeFormat(trimmed.to_string()))?,
        None => SizeUnit::Byte,
    };

    // `as` saturates at u64::MAX for absurd cells.
    Ok((value * unit.multiplier() as f64) as u64)
}

/// Parse a size string, falling back to 0 for anything unrecognized.
///
/// The fallback is logged at warn level; callers keep the row it came from.
pub fn parse_size(text: &str) -> u64 {
    match try_parse_size(text) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("{e}");
            0
        }
    }
}

/// Format a byte count for display.
///
/// Picks the largest of TiB, GiB and MiB in which the value is at least 1,
/// and KiB otherwise, so small files read as fractions of a KiB.
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    let unit = if bytes >= TIB {
        SizeUnit::Tebi
    } else if bytes >= GIB {
        SizeUnit::Gibi
    } else if bytes >= MIB {
        SizeUnit::Mebi
    } else {
        SizeUnit::Kibi
    };

    format!(
        "{:.2} {}",
        bytes as f64 / unit.multiplier() as f64,
        unit.suffix()
    )
}
