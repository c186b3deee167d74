/// Converts the longest numeric prefix of `text` into an `f64`.
///
/// Leading whitespace is skipped. The prefix may be an optionally signed
/// decimal number with an optional fraction and exponent (`-1.5`, `.5`,
/// `2.`, `1e-3`), or one of `inf`, `infinity` and `nan` in any case.
/// Characters after the prefix are ignored.
///
/// Returns `None` if `text` has no numeric prefix at all, for example when it
/// is empty, a lone sign or a lone dot. A decimal prefix whose magnitude is
/// too large for an `f64` is out of range and also yields `None`; only the
/// spelled-out `inf` and `infinity` produce an infinite value.
///
/// # Example
/// ```
/// use linalgpro::util::num::leading_float;
///
/// assert_eq!(leading_float("3.14159"), Some(3.14159));
/// assert_eq!(leading_float("1.2.3"), Some(1.2));
/// assert_eq!(leading_float("\t-.5x"), Some(-0.5));
/// assert_eq!(leading_float("2e3"), Some(2000.0));
/// assert_eq!(leading_float("2e"), Some(2.0));
/// assert_eq!(leading_float(""), None);
/// assert_eq!(leading_float("+-2"), None);
/// assert_eq!(leading_float("."), None);
/// assert_eq!(leading_float("1e400"), None);
/// assert_eq!(leading_float("-inf"), Some(f64::NEG_INFINITY));
/// ```
#[must_use]
pub fn leading_float(text: &str) -> Option<f64> {
    let trimmed =
        text.trim_start_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'));
    let len = numeric_prefix_len(trimmed.as_bytes());

    if len == 0 {
        return None;
    }

    let prefix = &trimmed[..len];
    let value: f64 = prefix.parse().ok()?;

    if value.is_infinite() && !prefix.ends_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(value)
}

/// Length in bytes of the numeric prefix of `bytes`, or `0` if there is none.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    for word in ["infinity", "inf", "nan"] {
        if let Some(candidate) = bytes.get(pos..pos + word.len())
           && candidate.eq_ignore_ascii_case(word.as_bytes())
        {
            return pos + word.len();
        }
    }

    let integer_digits = count_digits(&bytes[pos..]);
    pos += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[pos + 1..]);
        pos += 1 + fraction_digits;
    }

    if integer_digits + fraction_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exponent = pos + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent..]);
        if exponent_digits > 0 {
            pos = exponent + exponent_digits;
        }
    }

    pos
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
