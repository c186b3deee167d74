/// Parsing errors.
///
/// Defines every way the textual notation can fail to match the grammar.
/// All of them describe a malformed expression and carry the offset at which
/// matching stopped.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating an
/// expression tree: operands of the wrong kind, matrices of incompatible
/// shape, unbound variables and runaway nesting.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any error produced while turning source text into a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The text did not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree could not be reduced to a value.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
