use thiserror::Error;

use crate::ast::{ExprKind, Operator};

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The operand kinds do not fit the operator's rules.
    #[error("Type mismatch: cannot apply {op} to {left} and {right}.")]
    TypeMismatch {
        /// The operator being applied.
        op:    Operator,
        /// Kind of the evaluated left operand.
        left:  ExprKind,
        /// Kind of the evaluated right operand.
        right: ExprKind,
    },
    /// Two matrices cannot be added because their shapes differ.
    ///
    /// With `row: None` the row counts differ and `left`/`right` are the row
    /// counts. With `row: Some(i)` row `i` differs and `left`/`right` are the
    /// lengths of that row.
    #[error("Shape mismatch: {}", describe_shape(.row, .left, .right))]
    ShapeMismatch {
        /// The first row whose lengths differ, if the row counts agree.
        row:   Option<usize>,
        /// Row count or row length of the left matrix.
        left:  usize,
        /// Row count or row length of the right matrix.
        right: usize,
    },
    /// A variable was referenced that has no binding.
    #[error("Unbound variable '{name}'.")]
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },
    /// Evaluation went deeper than the configured limit.
    #[error("Evaluation exceeds the nesting limit of {limit}.")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
    },
}

#[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref)]
fn describe_shape(row: &Option<usize>, left: &usize, right: &usize) -> String {
    match row {
        None => format!("matrices have {left} and {right} rows."),
        Some(i) => format!("row {i} has {left} and {right} elements."),
    }
}
