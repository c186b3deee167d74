use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates a variable reference.
    ///
    /// The first binding of `name` is copied out of the environment and
    /// evaluated in the same environment, so a binding may hold an unevaluated
    /// tree that refers to other variables.
    ///
    /// # Errors
    /// - `RuntimeError::UnboundVariable` if `name` has no binding.
    /// - Any error from evaluating the bound value.
    ///
    /// # Example
    /// ```
    /// use linalgpro::{
    ///     ast::Expr,
    ///     interpreter::{environment::Environment, evaluator::core::eval},
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.bind("two", Expr::add(Expr::Scalar(1.0), Expr::Scalar(1.0)));
    ///
    /// let doubled = Expr::scalar_mul(Expr::Scalar(5.0), Expr::variable("two"));
    /// assert_eq!(eval(&doubled, &env).unwrap(), Expr::Scalar(10.0));
    /// assert!(eval(&Expr::variable("three"), &env).is_err());
    /// ```
    pub fn eval_variable(&mut self, name: &str) -> EvalResult<Expr> {
        let value = self.environment()
                        .lookup(name)
                        .ok_or_else(|| RuntimeError::UnboundVariable { name: name.to_string() })?;

        trace!(name, kind = %value.kind(), "resolved variable");

        self.eval(&value)
    }
}
