//! Prize list codec.
//!
//! The store keeps the prize list as a single comma separated column, the API
//! exposes it as a JSON array.

/// Separator written between labels.
const SEPARATOR: &str = ", ";

/// Joins prize labels into the stored column value.
pub fn to_column(prizes: &[String]) -> String {
    prizes.join(SEPARATOR)
}

/// Splits a stored column value into trimmed, non-empty labels.
///
/// A missing column yields an empty list.
pub fn from_column(column: Option<&str>) -> Vec<String> {
    column
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_owned)
        .collect()
}
