/// Returns `true` if every character of `text` is an ASCII digit, `+`, `-` or
/// `.`.
///
/// The check is deliberately permissive: it screens the alphabet of a number,
/// not its grammar. Multiple dots or misplaced signs pass, and so does the
/// empty string. Conversion itself is left to
/// [`leading_float`](crate::util::num::leading_float).
///
/// # Example
/// ```
/// use linalgpro::util::text::is_numeric_literal;
///
/// assert!(is_numeric_literal("-3.14159"));
/// assert!(is_numeric_literal("1.2.3"));
/// assert!(is_numeric_literal("+-"));
/// assert!(!is_numeric_literal("2i"));
/// assert!(!is_numeric_literal("1e5"));
/// ```
#[must_use]
pub fn is_numeric_literal(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'))
}

/// Removes every space and newline character from `text`.
///
/// Only `' '` and `'\n'` are removed. Tabs, carriage returns and any other
/// whitespace are kept, which means they will later fail to match the
/// grammar.
///
/// # Example
/// ```
/// use linalgpro::util::text::strip_whitespace;
///
/// assert_eq!(strip_whitespace("<escalar, 4>\n"), "<escalar,4>");
/// assert_eq!(strip_whitespace("a\tb\r"), "a\tb\r");
/// ```
#[must_use]
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|&c| c != ' ' && c != '\n').collect()
}
