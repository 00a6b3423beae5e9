/// Parses text as an `f64`, returning `0.0` when it is not a number.
///
/// The text is not trimmed, so surrounding whitespace makes it
/// unparseable. Rust's float grammar applies, which also accepts forms such
/// as `1e3`, `.5`, `inf` and `NaN`.
///
/// ## Parameters
/// - `text`: The text to parse.
///
/// ## Returns
/// The parsed value, or `0.0`.
///
/// ## Example
/// ```
/// use nula::util::num::parse_number;
///
/// assert_eq!(parse_number("3.25"), 3.25);
/// assert_eq!(parse_number(".5"), 0.5);
/// assert_eq!(parse_number(" 3"), 0.0);
/// assert_eq!(parse_number("three"), 0.0);
/// ```
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}
