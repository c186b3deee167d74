use tracing::{debug, trace};

use crate::{
    ast::{Expr, Operator, Tag},
    error::ParseError,
    interpreter::{
        limits::Limits,
        parser::literal::{parse_complex, parse_matrix, parse_scalar, parse_variable, parse_vector},
    },
    util::text::strip_whitespace,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses source text into an expression tree using the default [`Limits`].
///
/// See [`parse_with_limits`].
///
/// # Example
/// ```
/// use linalgpro::{ast::Expr, interpreter::parser::core::parse};
///
/// assert_eq!(parse("<escalar, 3.14159>").unwrap(), Expr::Scalar(3.14159));
/// assert!(parse("").is_err());
/// assert!(parse("<bogus, 1>").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    parse_with_limits(source, Limits::default())
}

/// Parses source text into an expression tree.
///
/// Spaces and newlines are removed first, then exactly one node must span
/// the remaining text:
///
/// ```text
///     expr     := "<" tag "," payload ">"
///     escalar  := number
///     complejo := number sign number "i"
///     vector   := "[" number ("," number)* "]"
///     matriz   := "[" row ("," row)* "]"        row := "[" number ("," number)* "]"
///     suma     := expr "," expr
///     multesc  := expr "," expr
///     variable := identifier
/// ```
///
/// # Errors
/// - `ParseError::EmptyInput` if nothing but spaces and newlines is given.
/// - `ParseError::NestingTooDeep` if nodes nest deeper than
///   `limits.max_depth`.
/// - `ParseError::TrailingInput` if text remains after the node.
/// - Any other `ParseError` describing where the text stops matching.
pub fn parse_with_limits(source: &str, limits: Limits) -> ParseResult<Expr> {
    let text = strip_whitespace(source);
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let result = Parser::new(&text, limits).parse_all();

    if let Err(e) = &result {
        debug!(error = %e, "parse failed");
    }
    result
}

/// Parses a `NAME=EXPR` binding, as given to the command line.
///
/// `NAME` must be a valid variable name, so that `<variable, NAME>` can refer
/// to it. `EXPR` is parsed with [`parse_with_limits`]; offsets in its errors
/// are relative to `EXPR`.
///
/// # Errors
/// - `ParseError::ExpectedChar` if there is no `=`.
/// - `ParseError::InvalidIdentifier` if `NAME` is not a variable name.
/// - Any error from parsing `EXPR`.
///
/// # Example
/// ```
/// use linalgpro::{
///     ast::Expr,
///     interpreter::{limits::Limits, parser::core::parse_binding},
/// };
///
/// let (name, value) = parse_binding("k=<escalar, 2>", Limits::default()).unwrap();
/// assert_eq!(name, "k");
/// assert_eq!(value, Expr::Scalar(2.0));
///
/// assert!(parse_binding("1k=<escalar, 2>", Limits::default()).is_err());
/// ```
pub fn parse_binding(text: &str, limits: Limits) -> ParseResult<(String, Expr)> {
    let (name, source) = text.split_once('=')
                             .ok_or(ParseError::ExpectedChar { expected: '=',
                                                               found:    None,
                                                               offset:   text.len(), })?;
    let name = name.trim();
    parse_variable(name, 0)?;

    Ok((name.to_string(), parse_with_limits(source, limits)?))
}

/// A cursor over whitespace-free source text.
///
/// The parser has no tokenizer. It keeps a byte offset into the text and
/// every parsing step advances that offset past what it consumed. All
/// delimiters of the grammar are ASCII, so every offset the parser stops at
/// is a character boundary.
#[derive(Debug)]
pub struct Parser<'a> {
    text:   &'a str,
    cursor: usize,
    depth:  usize,
    limits: Limits,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the start of `text`.
    ///
    /// `text` is taken as-is; whitespace is not removed here.
    #[must_use]
    pub const fn new(text: &'a str, limits: Limits) -> Self {
        Self { text,
               cursor: 0,
               depth: 0,
               limits }
    }

    /// The current byte offset into the text.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Parses one node that must span the rest of the text.
    ///
    /// # Errors
    /// Fails like [`Parser::parse_at`], and with `ParseError::TrailingInput`
    /// if the node ends before the text does.
    pub fn parse_all(mut self) -> ParseResult<Expr> {
        let expr = self.parse_at()?;
        if self.cursor < self.text.len() {
            return Err(ParseError::TrailingInput { offset: self.cursor });
        }
        Ok(expr)
    }

    /// Parses one node starting at the cursor and advances the cursor past
    /// its closing `>`.
    ///
    /// The tag is everything between the opening `<` and the first comma
    /// after it. Leaf payloads extend to the first `>`; operator payloads are
    /// parsed recursively.
    ///
    /// A failure anywhere inside the node fails the whole node. The cursor is
    /// left wherever the failure was detected.
    ///
    /// # Example
    /// ```
    /// use linalgpro::{
    ///     ast::Expr,
    ///     interpreter::{limits::Limits, parser::core::Parser},
    /// };
    ///
    /// let mut parser = Parser::new("<escalar,1><escalar,2>", Limits::default());
    ///
    /// assert_eq!(parser.parse_at().unwrap(), Expr::Scalar(1.0));
    /// assert_eq!(parser.cursor(), 11);
    /// assert_eq!(parser.parse_at().unwrap(), Expr::Scalar(2.0));
    /// ```
    pub fn parse_at(&mut self) -> ParseResult<Expr> {
        let start = self.cursor;
        if self.depth >= self.limits.max_depth {
            return Err(ParseError::NestingTooDeep { limit:  self.limits.max_depth,
                                                    offset: start, });
        }

        self.expect('<')?;
        let name_start = self.cursor;
        let name_end = self.find(',')?;
        let name = &self.text[name_start..name_end];
        let tag = Tag::from_name(name).ok_or_else(|| ParseError::unknown_tag(name, name_start))?;
        self.cursor = name_end + 1;

        trace!(%tag, offset = start, depth = self.depth, "parsing node");

        self.depth += 1;
        let result = match tag {
            Tag::Escalar => self.parse_leaf(parse_scalar),
            Tag::Complejo => self.parse_leaf(parse_complex),
            Tag::Vector => self.parse_leaf(|payload, offset| {
                                Ok(Expr::Vector(parse_vector(payload, offset)?))
                            }),
            Tag::Matriz => self.parse_leaf(|payload, offset| {
                                Ok(Expr::Matrix(parse_matrix(payload, offset)?))
                            }),
            Tag::Variable => self.parse_leaf(parse_variable),
            Tag::Suma => self.parse_binary(Operator::Add),
            Tag::MultEsc => self.parse_binary(Operator::ScalarMul),
        };
        self.depth -= 1;

        result
    }

    /// Hands the payload of a leaf node to `parse_payload` and moves the
    /// cursor past the node's closing `>`.
    fn parse_leaf<F>(&mut self, parse_payload: F) -> ParseResult<Expr>
        where F: FnOnce(&str, usize) -> ParseResult<Expr>
    {
        let payload_start = self.cursor;
        let payload_end = self.find('>')?;

        let expr = parse_payload(&self.text[payload_start..payload_end], payload_start)?;
        self.cursor = payload_end + 1;

        Ok(expr)
    }

    /// Consumes `expected` at the cursor.
    pub(in crate::interpreter::parser) fn expect(&mut self, expected: char) -> ParseResult<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.cursor += c.len_utf8();
                Ok(())
            },
            found => Err(ParseError::ExpectedChar { expected,
                                                    found,
                                                    offset: self.cursor }),
        }
    }

    /// The character at the cursor, if any.
    fn peek(&self) -> Option<char> {
        self.text[self.cursor..].chars().next()
    }

    /// Offset of the first `delimiter` at or after the cursor.
    fn find(&self, delimiter: char) -> ParseResult<usize> {
        self.text[self.cursor..]
            .find(delimiter)
            .map(|i| self.cursor + i)
            .ok_or(ParseError::ExpectedChar { expected: delimiter,
                                              found:    None,
                                              offset:   self.text.len(), })
    }
}
