//! File name sanitizing.

use reqwest::Url;

/// Characters that are not allowed in file names on at least one platform.
pub const RESERVED_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Map a display name to a name that is safe to create on disk.
///
/// Every reserved character becomes an underscore, then trailing periods and
/// spaces are removed.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if RESERVED_CHARS.contains(&c) { '_' } else { c })
        .collect::<String>()
        .trim_end_matches(['.', ' '])
        .to_string()
}

/// Derive a file name from the last segment of `url`.
///
/// The segment is percent-decoded and sanitized; `+`, `&` and `=` are kept
/// as they are. Returns `None` when the URL has no usable last segment or it
/// does not decode to UTF-8.
pub fn fallback_file_name(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.next_back()?;
    let decoded = urlencoding::decode(segment).ok()?;
    let name = sanitize(&decoded);
    (!name.is_empty()).then_some(name)
}
