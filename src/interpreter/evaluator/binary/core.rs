use tracing::debug;

use crate::{
    ast::{Expr, Operator},
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates both operands of a binary node, left first, and applies the
    /// operator to the results.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `op`: The operator.
    /// - `right`: Right operand.
    pub fn eval_binary_op(&mut self,
                          left: &Expr,
                          op: Operator,
                          right: &Expr)
                          -> EvalResult<Expr> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;

        debug!(%op, left = %left.kind(), right = %right.kind(), "applying operator");

        Self::eval_binary(op, &left, &right)
    }

    /// Applies an operator to two evaluated operands.
    ///
    /// # Example
    /// ```
    /// use linalgpro::{
    ///     ast::{Expr, Operator},
    ///     interpreter::evaluator::core::Evaluator,
    /// };
    ///
    /// let m = Expr::Matrix(vec![vec![1.0, 2.0]]);
    /// let r = Evaluator::eval_binary(Operator::ScalarMul, &m, &Expr::Scalar(3.0)).unwrap();
    /// assert_eq!(r, Expr::Matrix(vec![vec![3.0, 6.0]]));
    /// ```
    pub fn eval_binary(op: Operator, left: &Expr, right: &Expr) -> EvalResult<Expr> {
        match op {
            Operator::Add => Self::eval_add(left, right),
            Operator::ScalarMul => Self::eval_scalar_mul(left, right),
        }
    }
}
