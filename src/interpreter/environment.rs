use crate::ast::Expr;

/// An ordered list of variable bindings.
///
/// Bindings are only ever appended. Names do not have to be unique: a lookup
/// scans in insertion order and the first binding with a matching name wins,
/// so a later `bind` of the same name never shadows an earlier one.
///
/// The environment owns its values. [`Environment::lookup`] returns a copy of
/// the bound value rather than a reference, so nothing the caller does with
/// the result can affect the environment and later binds cannot invalidate
/// it.
///
/// ## Usage
///
/// ```
/// use linalgpro::{ast::Expr, interpreter::environment::Environment};
///
/// let mut env = Environment::new();
/// env.bind("x", Expr::Scalar(2.0));
/// env.bind("x", Expr::Scalar(3.0));
///
/// assert_eq!(env.lookup("x"), Some(Expr::Scalar(2.0)));
/// assert_eq!(env.lookup("y"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: Vec<(String, Expr)>,
}

impl Environment {
    /// Creates an environment without bindings.
    #[must_use]
    pub const fn new() -> Self {
        Self { bindings: Vec::new() }
    }

    /// Appends a binding of `name` to `value`.
    ///
    /// The environment takes ownership of `value`; pass a clone to keep using
    /// the original. Existing bindings of the same name are left in place and
    /// keep taking precedence.
    pub fn bind(&mut self, name: impl Into<String>, value: Expr) {
        self.bindings.push((name.into(), value));
    }

    /// Returns a copy of the value of the first binding named `name`, or
    /// `None` if there is no such binding.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Expr> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, value)| value.clone())
    }

    /// Returns a deep copy of the environment with its bindings in the same
    /// order.
    ///
    /// # Example
    /// ```
    /// use linalgpro::{ast::Expr, interpreter::environment::Environment};
    ///
    /// let mut original = Environment::new();
    /// original.bind("m", Expr::Matrix(vec![vec![1.0]]));
    ///
    /// let mut copy = original.duplicate();
    /// copy.bind("n", Expr::Scalar(1.0));
    ///
    /// assert_eq!(original.len(), 1);
    /// assert_eq!(copy.len(), 2);
    /// assert_eq!(copy.lookup("m"), original.lookup("m"));
    /// ```
    #[must_use]
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Number of bindings, counting repeated names.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over the bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Expr)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }
}
