use crate::{
    ast::{Expr, Operator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::matrix,
    },
};

impl Evaluator<'_> {
    /// Multiplies an evaluated operand by an evaluated scalar.
    ///
    /// The scalar must be on the right. Scalars, complex numbers and
    /// matrices can be scaled; vectors cannot.
    ///
    /// # Errors
    /// `RuntimeError::TypeMismatch` if `right` is not a scalar or `left` is
    /// not a scalar, complex number or matrix.
    ///
    /// # Example
    /// ```
    /// use linalgpro::{ast::Expr, interpreter::evaluator::core::Evaluator};
    ///
    /// let r = Evaluator::eval_scalar_mul(&Expr::Scalar(1.5), &Expr::Scalar(4.0));
    /// assert_eq!(r.unwrap(), Expr::Scalar(6.0));
    ///
    /// // The scalar has to come second.
    /// let m = Expr::Matrix(vec![vec![1.0]]);
    /// assert!(Evaluator::eval_scalar_mul(&Expr::Scalar(2.0), &m).is_err());
    /// ```
    pub fn eval_scalar_mul(left: &Expr, right: &Expr) -> EvalResult<Expr> {
        match (left, right) {
            (Expr::Scalar(a), Expr::Scalar(s)) => Ok(Expr::Scalar(a * s)),
            (Expr::Complex(c), Expr::Scalar(s)) => Ok(Expr::Complex(c.scale(*s))),
            (Expr::Matrix(m), Expr::Scalar(s)) => Ok(Expr::Matrix(matrix::scale(m, *s))),
            _ => Err(RuntimeError::TypeMismatch { op:    Operator::ScalarMul,
                                                  left:  left.kind(),
                                                  right: right.kind(), }),
        }
    }
}
