/// Numeric literal conversion.
///
/// This module converts the leading numeric prefix of a piece of text into an
/// `f64`, the way the C library's `strtod` does: leading whitespace is
/// skipped, the longest valid decimal prefix is converted and anything after
/// it is ignored.
///
/// Every number in the expression language passes through here, so the
/// accepted forms are defined in exactly one place.
pub mod num;
/// Character level helpers used before and during parsing.
///
/// These helpers screen numeric literals and remove insignificant whitespace
/// from the raw source text. They are pure functions without any state.
pub mod text;
