use tracing::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{environment::Environment, limits::Limits},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression with the default [`Limits`].
///
/// The result is always a leaf: a scalar, complex number, vector or matrix.
///
/// # Errors
/// See [`Evaluator::eval`].
///
/// # Example
/// ```
/// use linalgpro::{
///     ast::Expr,
///     interpreter::{environment::Environment, evaluator::core::eval},
/// };
///
/// let sum = Expr::add(Expr::Scalar(1.5), Expr::Scalar(2.0));
/// assert_eq!(eval(&sum, &Environment::new()).unwrap(), Expr::Scalar(3.5));
/// ```
pub fn eval(expr: &Expr, env: &Environment) -> EvalResult<Expr> {
    Evaluator::new(env, Limits::default()).eval(expr)
}

/// Reduces expression trees to values.
///
/// An evaluator borrows the environment it resolves variables in and keeps
/// track of how deep the current reduction is, so that runaway nesting, such
/// as a variable bound to an expression mentioning itself, ends in an error
/// instead of a stack overflow.
///
/// ## Usage
///
/// Create one evaluator per environment and call [`Evaluator::eval`] on as
/// many trees as needed; the depth returns to zero after every call.
#[derive(Debug)]
pub struct Evaluator<'env> {
    env:    &'env Environment,
    limits: Limits,
    depth:  usize,
}

impl<'env> Evaluator<'env> {
    /// Creates an evaluator resolving variables in `env`.
    #[must_use]
    pub const fn new(env: &'env Environment, limits: Limits) -> Self {
        Self { env,
               limits,
               depth: 0 }
    }

    /// The environment variables are resolved in.
    #[must_use]
    pub const fn environment(&self) -> &'env Environment {
        self.env
    }

    /// Evaluates an expression and returns the resulting leaf value.
    ///
    /// Leaves evaluate to a copy of themselves. Operators evaluate both
    /// operands first and then apply their rules to the resulting values.
    /// Variables evaluate to the value of their binding.
    ///
    /// # Errors
    /// - `RuntimeError::TypeMismatch` if an operator's operands have kinds it
    ///   has no rule for.
    /// - `RuntimeError::ShapeMismatch` if matrices of different shapes are
    ///   added.
    /// - `RuntimeError::UnboundVariable` if a variable has no binding.
    /// - `RuntimeError::NestingTooDeep` if evaluation nests deeper than the
    ///   configured limit.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Expr> {
        if self.depth >= self.limits.max_depth {
            return Err(RuntimeError::NestingTooDeep { limit: self.limits.max_depth });
        }

        self.depth += 1;
        let result = match expr {
            Expr::Scalar(_) | Expr::Complex(_) | Expr::Vector(_) | Expr::Matrix(_) => {
                Ok(expr.clone())
            },
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right),
            Expr::Variable(name) => self.eval_variable(name),
        };
        self.depth -= 1;

        if self.depth == 0
           && let Err(e) = &result
        {
            debug!(error = %e, "evaluation failed");
        }
        result
    }
}
