//! Helpers for comma-separated attribute values.

/// Splits `value` on commas, trimming whitespace and dropping empty pieces.
pub fn split_list(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Parses `"x,y"` into two integers.
///
/// Returns `None` unless the list holds exactly two valid integers.
pub fn parse_int_pair(value: &str) -> Option<(i64, i64)> {
    match split_list(value).as_slice() {
        [x, y] => Some((x.parse().ok()?, y.parse().ok()?)),
        _ => None,
    }
}
