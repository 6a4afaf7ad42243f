//! Destination naming for bulk downloads and saved result files.
//!
//! Deterministic given the same inputs except for the timestamp. The
//! sanitizer is best-effort path hygiene, not a security boundary: it
//! transforms, it never rejects.

use chrono::NaiveDateTime;
use percent_encoding::percent_decode_str;

/// Hard cap on a generated filename, including the ordinal prefix.
const FILE_NAME_MAX_CHARS: usize = 200;

/// Strips search-operator markers and punctuation that would make the
/// keywords unsafe or ambiguous as a path component: the filter-keyword
/// and site-restriction markers and colons are removed, double quotes
/// become single quotes, path separators and spaces become underscores.
pub fn sanitize_keywords(keywords: &str) -> String {
    keywords
        .replace("filetype", "")
        .replace(':', "")
        .replace('"', "'")
        .replace("site", "")
        .replace(' ', "_")
        .replace('/', "_")
        .replace('\\', "_")
}

/// Stem for saved output files: `{prefix}_{sanitized keywords}_{timestamp}`.
pub fn file_stem(prefix: &str, keywords: &str, now: NaiveDateTime) -> String {
    format!(
        "{}_{}_{}",
        prefix,
        sanitize_keywords(keywords),
        now.format("%Y%m%d_%H%M%S")
    )
}

/// Name of the per-batch destination directory.
pub fn directory_name(keywords: &str, images: bool, now: NaiveDateTime) -> String {
    file_stem(if images { "images" } else { "text" }, keywords, now)
}

/// Per-item filename: the URL's terminal path segment with any query string
/// stripped, percent-decoded, prefixed with the record's 1-based ordinal,
/// truncated to 200 characters. Distinct URLs can collapse to the same name
/// after truncation; that collision is accepted (later writes win).
pub fn file_name(ordinal: usize, url: &str) -> String {
    let tail = url.rsplit('/').next().unwrap_or(url);
    let tail = tail.split('?').next().unwrap_or(tail);
    let decoded = percent_decode_str(tail).decode_utf8_lossy();
    let name = format!("{}_{}", ordinal, decoded);
    name.chars().take(FILE_NAME_MAX_CHARS).collect()
}
