//! Search-parameter normalisation.
//!
//! Query strings arrive as raw text. An empty text parameter and an empty,
//! zero, or non-numeric id parameter all mean "match any row"; they are
//! normalised to `None` here so the persistence layer only has to handle
//! present-or-absent. Consequence: id `0` can never be searched for.

use crate::types::DbId;

/// Normalise a text filter: blank means wildcard.
pub fn text_filter(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.is_empty())
}

/// Normalise an id filter: missing, blank, unparseable, or `0` means wildcard.
pub fn id_filter(raw: Option<&str>) -> Option<DbId> {
    raw.and_then(|s| s.trim().parse::<DbId>().ok())
        .filter(|&id| id != 0)
}

/// Case-insensitive substring match; a `None` needle matches everything.
///
/// Mirrors `STRPOS(LOWER(col), LOWER($n)) > 0` in the SQL repositories.
pub fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(n) => haystack.to_lowercase().contains(&n.to_lowercase()),
        None => true,
    }
}

/// Exact match; a `None` expected value matches everything.
pub fn matches_exact<T: PartialEq + ?Sized>(value: &T, expected: Option<&T>) -> bool {
    expected.map_or(true, |e| e == value)
}
