use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        parser::{
            core::ParseResult,
            utils::{char_at, parse_reals},
        },
        value::complex::ComplexNumber,
    },
    util::{num::leading_float, text::is_numeric_literal},
};

/// Parses the payload of `<escalar, ...>`.
///
/// The payload must consist of digits, signs and dots only (see
/// [`is_numeric_literal`]); its numeric prefix becomes the value.
///
/// # Parameters
/// - `payload`: Text between the tag's comma and the closing `>`.
/// - `offset`: Offset of `payload` in the source.
///
/// # Example
/// ```
/// use linalgpro::{ast::Expr, interpreter::parser::literal::parse_scalar};
///
/// assert_eq!(parse_scalar("-3.14159", 0).unwrap(), Expr::Scalar(-3.14159));
/// assert_eq!(parse_scalar("1.5.2", 0).unwrap(), Expr::Scalar(1.5));
/// assert!(parse_scalar("1e3", 0).is_err());
/// assert!(parse_scalar("", 0).is_err());
/// ```
pub fn parse_scalar(payload: &str, offset: usize) -> ParseResult<Expr> {
    Ok(Expr::Scalar(parse_screened_number(payload, offset)?))
}

/// Parses the payload of `<complejo, ...>`, such as `3.14-0.14i`.
///
/// The payload is split at its first `+`, or failing that its first `-`,
/// ignoring a sign in the very first position so that the real part may be
/// negative. Without such a sign the split is at the start and the empty
/// real part is rejected. The imaginary part keeps its sign and must end in
/// `i`.
///
/// # Example
/// ```
/// use linalgpro::{
///     ast::Expr,
///     interpreter::{parser::literal::parse_complex, value::complex::ComplexNumber},
/// };
///
/// assert_eq!(parse_complex("3.14-0.14i", 0).unwrap(),
///            Expr::Complex(ComplexNumber::new(3.14, -0.14)));
/// assert_eq!(parse_complex("-1+2i", 0).unwrap(),
///            Expr::Complex(ComplexNumber::new(-1.0, 2.0)));
/// assert!(parse_complex("2i", 0).is_err());
/// assert!(parse_complex("1+2", 0).is_err());
/// ```
pub fn parse_complex(payload: &str, offset: usize) -> ParseResult<Expr> {
    let split = sign_after_start(payload, '+').or_else(|| sign_after_start(payload, '-'))
                                              .unwrap_or(0);
    let (real_text, rest) = payload.split_at(split);

    let real = parse_screened_number(real_text, offset)?;
    let imaginary_text = rest.strip_suffix('i')
                             .ok_or(ParseError::MissingImaginaryUnit { offset })?;
    let imaginary = parse_screened_number(imaginary_text, offset + split)?;

    Ok(Expr::Complex(ComplexNumber::new(real, imaginary)))
}

/// Parses the payload of `<vector, ...>`, such as `[1,2,3]`.
///
/// # Example
/// ```
/// use linalgpro::interpreter::parser::literal::parse_vector;
///
/// assert_eq!(parse_vector("[1,2,3]", 0).unwrap(), vec![1.0, 2.0, 3.0]);
/// assert!(parse_vector("[]", 0).is_err());
/// assert!(parse_vector("[1,2", 0).is_err());
/// ```
pub fn parse_vector(payload: &str, offset: usize) -> ParseResult<Vec<f64>> {
    let Some(inner) = payload.strip_prefix('[') else {
        return Err(ParseError::ExpectedChar { expected: '[',
                                              found: char_at(payload, 0),
                                              offset });
    };

    let Some(inner) = inner.strip_suffix(']') else {
        return Err(ParseError::ExpectedChar { expected: ']',
                                              found:    Some('>'),
                                              offset:   offset + payload.len(), });
    };

    parse_reals(inner, offset + 1)
}

/// Parses the payload of `<matriz, ...>`, such as `[[1,2],[3,4]]`.
///
/// Each row ends at its first `]`. Rows may have different lengths; shapes
/// are only checked when matrices are added.
///
/// # Example
/// ```
/// use linalgpro::interpreter::parser::literal::parse_matrix;
///
/// assert_eq!(parse_matrix("[[1,2],[3]]", 0).unwrap(),
///            vec![vec![1.0, 2.0], vec![3.0]]);
/// assert!(parse_matrix("[]", 0).is_err());
/// assert!(parse_matrix("[[1],[2]", 0).is_err());
/// ```
pub fn parse_matrix(payload: &str, offset: usize) -> ParseResult<Vec<Vec<f64>>> {
    if !payload.starts_with('[') {
        return Err(ParseError::ExpectedChar { expected: '[',
                                              found: char_at(payload, 0),
                                              offset });
    }

    let mut rows = Vec::new();
    let mut at = 1;

    loop {
        let rest = &payload[at..];
        if !rest.starts_with('[') {
            return Err(ParseError::ExpectedChar { expected: '[',
                                                  found:    char_at(payload, at),
                                                  offset:   offset + at, });
        }

        let Some(close) = rest.find(']') else {
            return Err(ParseError::ExpectedChar { expected: ']',
                                                  found:    Some('>'),
                                                  offset:   offset + payload.len(), });
        };

        rows.push(parse_reals(&rest[1..close], offset + at + 1)?);
        at += close + 1;

        match char_at(payload, at) {
            Some(',') => at += 1,
            Some(']') if at + 1 == payload.len() => break,
            Some(']') => {
                return Err(ParseError::ExpectedChar { expected: '>',
                                                      found:    char_at(payload, at + 1),
                                                      offset:   offset + at + 1, });
            },
            found => {
                return Err(ParseError::ExpectedChar { expected: ']',
                                                      found,
                                                      offset: offset + at });
            },
        }
    }

    Ok(rows)
}

/// Parses the payload of `<variable, ...>`: an ASCII letter or `_` followed
/// by ASCII letters, digits and `_`.
///
/// # Example
/// ```
/// use linalgpro::{ast::Expr, interpreter::parser::literal::parse_variable};
///
/// assert_eq!(parse_variable("m_1", 0).unwrap(), Expr::variable("m_1"));
/// assert!(parse_variable("1m", 0).is_err());
/// assert!(parse_variable("", 0).is_err());
/// ```
pub fn parse_variable(payload: &str, offset: usize) -> ParseResult<Expr> {
    let mut chars = payload.chars();
    let valid = chars.next()
                     .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !valid {
        return Err(ParseError::InvalidIdentifier { name: payload.to_string(),
                                                   offset });
    }

    Ok(Expr::variable(payload))
}

/// Screens `text` with [`is_numeric_literal`] and converts its numeric
/// prefix.
fn parse_screened_number(text: &str, offset: usize) -> ParseResult<f64> {
    if !is_numeric_literal(text) {
        return Err(ParseError::invalid_number(text, offset));
    }
    leading_float(text).ok_or_else(|| ParseError::invalid_number(text, offset))
}

/// Byte offset of the first `sign` after the first character.
fn sign_after_start(text: &str, sign: char) -> Option<usize> {
    text.char_indices()
        .skip(1)
        .find(|&(_, c)| c == sign)
        .map(|(i, _)| i)
}
