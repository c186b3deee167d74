use thiserror::Error;

/// Represents all errors that can occur while parsing.
///
/// Every variant is a *malformed expression*: the input does not match the
/// grammar. Offsets are byte offsets into the input after spaces and
/// newlines have been removed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was empty, or contained nothing but spaces and newlines.
    #[error("Malformed expression: empty input.")]
    EmptyInput,
    /// A specific delimiter was required but something else was found.
    #[error("Malformed expression at offset {offset}: expected '{expected}', found {}.",
            describe(.found))]
    ExpectedChar {
        /// The delimiter the grammar requires here.
        expected: char,
        /// The character actually present, or `None` at end of input.
        found:    Option<char>,
        /// Where the delimiter was expected.
        offset:   usize,
    },
    /// The text between `<` and the first `,` is not a known tag.
    #[error("Malformed expression at offset {offset}: unknown tag '{tag}'.")]
    UnknownTag {
        /// The unrecognized tag.
        tag:    String,
        /// Where the tag starts.
        offset: usize,
    },
    /// A number could not be read.
    #[error("Malformed expression at offset {offset}: invalid number '{literal}'.")]
    InvalidNumber {
        /// The offending text.
        literal: String,
        /// Where the text starts.
        offset:  usize,
    },
    /// The imaginary part of a complex number does not end in `i`.
    #[error("Malformed expression at offset {offset}: imaginary part must end in 'i'.")]
    MissingImaginaryUnit {
        /// Where the complex payload starts.
        offset: usize,
    },
    /// A variable name is empty or contains characters other than ASCII
    /// letters, digits and `_`, or starts with a digit.
    #[error("Malformed expression at offset {offset}: invalid variable name '{name}'.")]
    InvalidIdentifier {
        /// The offending name.
        name:   String,
        /// Where the name starts.
        offset: usize,
    },
    /// A complete expression was read but input remains.
    #[error("Malformed expression at offset {offset}: unexpected trailing input.")]
    TrailingInput {
        /// Where the trailing input starts.
        offset: usize,
    },
    /// Nodes are nested deeper than the configured limit.
    #[error("Malformed expression at offset {offset}: nesting exceeds the limit of {limit}.")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit:  usize,
        /// Where the node that exceeded the limit starts.
        offset: usize,
    },
}

impl ParseError {
    /// Returns the offset at which parsing failed, or `None` for
    /// [`ParseError::EmptyInput`].
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::EmptyInput => None,
            Self::ExpectedChar { offset, .. }
            | Self::UnknownTag { offset, .. }
            | Self::InvalidNumber { offset, .. }
            | Self::MissingImaginaryUnit { offset }
            | Self::InvalidIdentifier { offset, .. }
            | Self::TrailingInput { offset }
            | Self::NestingTooDeep { offset, .. } => Some(*offset),
        }
    }

    pub(crate) fn unknown_tag(tag: &str, offset: usize) -> Self {
        Self::UnknownTag { tag: tag.to_string(),
                           offset }
    }

    pub(crate) fn invalid_number(literal: &str, offset: usize) -> Self {
        Self::InvalidNumber { literal: literal.to_string(),
                              offset }
    }
}

#[allow(clippy::ref_option)]
fn describe(found: &Option<char>) -> String {
    found.map_or_else(|| "end of input".to_string(), |c| format!("'{c}'"))
}
