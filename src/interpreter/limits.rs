/// Default maximum nesting depth for parsing and evaluation.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Resource limits for a parse or an evaluation.
///
/// Parsing and evaluation both recurse once per nesting level, so an
/// adversarial input could exhaust the stack. Exceeding `max_depth` fails
/// with a `NestingTooDeep` error instead.
///
/// # Example
/// ```
/// use linalgpro::interpreter::limits::{DEFAULT_MAX_DEPTH, Limits};
///
/// assert_eq!(Limits::default().max_depth, DEFAULT_MAX_DEPTH);
/// assert_eq!(Limits::new(8).max_depth, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of nested nodes. A lone leaf has depth 1.
    pub max_depth: usize,
}

impl Limits {
    /// Creates limits with the given maximum nesting depth.
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}
