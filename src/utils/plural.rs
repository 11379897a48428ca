//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 papers)
/// - `plural_s(1)` -> `""` (1 paper)
/// - `plural_s(5)` -> `"s"` (5 papers)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "paper")` -> `"0 papers"`
/// - `plural_count(1, "paper")` -> `"1 paper"`
/// - `plural_count(5, "paper")` -> `"5 papers"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}
