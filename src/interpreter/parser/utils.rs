use crate::{error::ParseError, interpreter::parser::core::ParseResult, util::num::leading_float};

/// Parses a comma separated list of reals, the inside of `[ ... ]`.
///
/// Every item is converted with [`leading_float`], so trailing garbage after
/// a number is ignored, but an item without any numeric prefix, including an
/// empty one, is an error. An empty `text` therefore fails as well.
///
/// Grammar: `list := number ("," number)*`
///
/// # Parameters
/// - `text`: The list without its brackets.
/// - `offset`: Offset of `text` in the source, for error reporting.
pub(in crate::interpreter::parser) fn parse_reals(text: &str,
                                                  offset: usize)
                                                  -> ParseResult<Vec<f64>> {
    let mut values = Vec::new();
    let mut at = offset;

    for item in text.split(',') {
        let value = leading_float(item).ok_or_else(|| ParseError::invalid_number(item, at))?;
        values.push(value);
        at += item.len() + 1;
    }

    Ok(values)
}

/// The character at `index` of a leaf payload.
///
/// A payload always ends right before the `>` that closes its node, so
/// running off the end of the payload finds that `>`.
pub(in crate::interpreter::parser) fn char_at(payload: &str, index: usize) -> Option<char> {
    payload.get(index..)
           .and_then(|rest| rest.chars().next())
           .or(Some('>'))
}
