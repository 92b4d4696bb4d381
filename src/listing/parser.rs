//! Extraction of file records from listing markup.
//!
//! A listing is an HTML table where each file row holds a link to the file
//! followed by a cell with its size:
//!
//! ```html
//! <tr><td><a href="Game%20(USA).zip">Game (USA).zip</a></td><td>1.2 GiB</td></tr>
//! ```
//!
//! Header and parent-directory rows also carry links and are recognized by
//! their text.

use super::filter::FilterConfig;
use super::record::{FileRecord, ListingResult};
use crate::size::{format_size, parse_size};

use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use std::fmt;
use std::sync::LazyLock;
use tracing::{info, warn};

static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("row selector is valid"));
static LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("link selector is valid"));
static CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("cell selector is valid"));

/// Link texts marking rows that are part of the table layout, not files.
const STRUCTURAL_LINKS: [&str; 2] = ["parent directory", "file name"];

/// Why a listing row did not produce a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSkip {
    /// The row holds no link.
    NoLink,
    /// Header or parent-directory row.
    Structural(String),
    /// The name contains an excluded keyword.
    Excluded { name: String, keyword: &'static str },
    /// The region filter is active and the name does not match it.
    OutsideRegion(String),
    /// The link target cannot be resolved against the page URL.
    InvalidHref { name: String, href: String },
    /// No table cell follows the link.
    MissingSizeCell(String),
}

impl fmt::Display for RowSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowSkip::NoLink => write!(f, "Skipping non-file entry: No link"),
            RowSkip::Structural(text) => write!(f, "Skipping non-file entry: {text}"),
            RowSkip::Excluded { name, keyword } => {
                write!(f, "Skipping unwanted file ({keyword}): {name}")
            }
            RowSkip::OutsideRegion(name) => write!(f, "Skipping file outside region: {name}"),
            RowSkip::InvalidHref { name, href } => {
                write!(f, "Skipping {name}: cannot resolve link {href:?}")
            }
            RowSkip::MissingSizeCell(name) => write!(f, "Could not find size for {name}"),
        }
    }
}

/// Parse a listing page into filtered records.
///
/// Rows are visited in document order and the records keep that order. Rows
/// that fail a filter or lack a size cell are logged and skipped; an empty
/// result is a valid outcome.
pub fn parse_listing(html: &str, base_url: &Url, filter: &FilterConfig) -> ListingResult {
    let document = Html::parse_document(html);
    let mut records = Vec::new();

    for row in document.select(&ROW) {
        match record_from_row(row, base_url, filter) {
            Ok(record) => {
                info!(
                    "Found file: {} - Size: {}",
                    record.name,
                    format_size(record.size)
                );
                records.push(record);
            }
            Err(skip @ (RowSkip::MissingSizeCell(_) | RowSkip::InvalidHref { .. })) => {
                warn!("{skip}")
            }
            Err(skip) => info!("{skip}"),
        }
    }

    info!("Total files found: {}", records.len());
    ListingResult::new(records)
}

/// Turn one table row into a record, or explain why it has none.
pub fn record_from_row(
    row: ElementRef<'_>,
    base_url: &Url,
    filter: &FilterConfig,
) -> Result<FileRecord, RowSkip> {
    let link = row.select(&LINK).next().ok_or(RowSkip::NoLink)?;
    let text: String = link.text().collect();

    let lowered = text.to_lowercase();
    if STRUCTURAL_LINKS.iter().any(|s| lowered.contains(s)) {
        return Err(RowSkip::Structural(text.trim().to_string()));
    }

    let name = text.trim().to_string();
    if let Some(keyword) = filter.excluded_keyword(&name) {
        return Err(RowSkip::Excluded { name, keyword });
    }
    if !filter.in_region(&name) {
        return Err(RowSkip::OutsideRegion(name));
    }

    // The selector guarantees the attribute is present.
    let href = link.value().attr("href").unwrap_or_default();
    let url = match base_url.join(href) {
        Ok(url) => url,
        Err(_) => {
            return Err(RowSkip::InvalidHref {
                name,
                href: href.to_string(),
            })
        }
    };

    let size_text = match size_cell_text(row, link) {
        Some(text) => text,
        None => return Err(RowSkip::MissingSizeCell(name)),
    };

    Ok(FileRecord::new(&name, url, parse_size(&size_text)))
}

/// Text of the first cell after the one holding `link`.
fn size_cell_text(row: ElementRef<'_>, link: ElementRef<'_>) -> Option<String> {
    let mut cells = row.select(&CELL);
    cells.find(|cell| link.ancestors().any(|node| node.id() == cell.id()))?;
    cells
        .next()
        .map(|cell| cell.text().collect::<String>().trim().to_string())
}
