//! # linalgpro
//!
//! linalgpro is a small expression language for linear algebra values,
//! written in Rust. It parses a bracketed, tagged notation such as
//! `<suma, <complejo, 1+2i>, <complejo, 3-1i>>` into an expression tree and
//! evaluates the tree to a scalar, complex number, vector or matrix.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the small enums describing it:
/// the source tags, the operators and the node kinds used in diagnostics.
/// The AST is built by the parser, reduced by the evaluator and written back
/// out by the renderer.
///
/// # Responsibilities
/// - Defines the four value kinds and the two operators of the language.
/// - Provides structural equality, with `NaN` equal to itself.
/// - Provides constructors and inspection helpers for building trees in code.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating an expression. Parse errors report the offset at which the
/// text stopped matching; runtime errors report the operator and the kinds
/// or shapes of the operands involved.
pub mod error;
/// Orchestrates parsing, evaluation and rendering.
///
/// This module ties together the parser, the evaluator, the environment, the
/// renderer and the value types.
///
/// # Responsibilities
/// - Provides entry points for parsing and evaluating expressions.
/// - Manages variable bindings and resource limits.
/// - Converts trees back to their canonical text.
pub mod interpreter;
/// General utilities for reading numbers and cleaning source text.
///
/// These helpers are used by the parser but do not depend on it: they work
/// on plain strings and have no state.
pub mod util;

pub use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        environment::Environment,
        evaluator::core::eval,
        limits::Limits,
        parser::core::parse,
        render::render,
    },
};
use crate::interpreter::{evaluator::core::Evaluator, parser::core::parse_with_limits};

/// Parses and evaluates `source` without any variable bindings.
///
/// # Errors
/// Returns an error if the text is malformed or its tree cannot be
/// evaluated.
///
/// # Examples
/// ```
/// use linalgpro::{Expr, evaluate};
///
/// let value = evaluate("<multesc, <matriz, [[2,2],[3,3]]>, <escalar, 4>>").unwrap();
/// assert_eq!(value, Expr::Matrix(vec![vec![8.0, 8.0], vec![12.0, 12.0]]));
///
/// // A scalar cannot be added to a matrix.
/// assert!(evaluate("<suma, <escalar, 1>, <matriz, [[1]]>>").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Expr, Error> {
    evaluate_with(source, &Environment::new(), Limits::default())
}

/// Parses `source` and evaluates it in `env`, enforcing `limits` in both
/// phases.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use linalgpro::{Environment, Expr, Limits, evaluate_with};
///
/// let mut env = Environment::new();
/// env.bind("k", Expr::Scalar(0.5));
///
/// let value = evaluate_with("<multesc, <escalar, 8>, <variable, k>>", &env, Limits::default());
/// assert_eq!(value.unwrap(), Expr::Scalar(4.0));
/// ```
pub fn evaluate_with(source: &str, env: &Environment, limits: Limits) -> Result<Expr, Error> {
    let expr = parse_with_limits(source, limits)?;
    Ok(Evaluator::new(env, limits).eval(&expr)?)
}
