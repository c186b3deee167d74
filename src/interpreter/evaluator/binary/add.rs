use crate::{
    ast::{Expr, Operator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::matrix,
    },
};

impl Evaluator<'_> {
    /// Adds two evaluated operands.
    ///
    /// | left    | right   | result                |
    /// |---------|---------|-----------------------|
    /// | scalar  | scalar  | scalar sum            |
    /// | complex | complex | sum of both parts     |
    /// | matrix  | matrix  | element-wise sum      |
    ///
    /// Anything else, including two vectors, is a type mismatch.
    ///
    /// # Errors
    /// - `RuntimeError::TypeMismatch` for operand kinds not in the table.
    /// - `RuntimeError::ShapeMismatch` for matrices whose row counts or row
    ///   lengths differ.
    ///
    /// # Example
    /// ```
    /// use linalgpro::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Evaluator, value::complex::ComplexNumber},
    /// };
    ///
    /// let a = Expr::Complex(ComplexNumber::new(1.0, 2.0));
    /// let b = Expr::Complex(ComplexNumber::new(3.0, -1.0));
    /// assert_eq!(Evaluator::eval_add(&a, &b).unwrap(),
    ///            Expr::Complex(ComplexNumber::new(4.0, 1.0)));
    ///
    /// assert!(Evaluator::eval_add(&Expr::Scalar(1.0), &a).is_err());
    /// ```
    pub fn eval_add(left: &Expr, right: &Expr) -> EvalResult<Expr> {
        match (left, right) {
            (Expr::Scalar(a), Expr::Scalar(b)) => Ok(Expr::Scalar(a + b)),
            (Expr::Complex(a), Expr::Complex(b)) => Ok(Expr::Complex(*a + *b)),
            (Expr::Matrix(a), Expr::Matrix(b)) => Ok(Expr::Matrix(matrix::add(a, b)?)),
            _ => Err(RuntimeError::TypeMismatch { op:    Operator::Add,
                                                  left:  left.kind(),
                                                  right: right.kind(), }),
        }
    }
}
