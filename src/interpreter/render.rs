use std::fmt::{self, Display, Write};

use crate::ast::{Expr, Tag};

/// Returns the canonical textual form of `expr`.
///
/// Equivalent to `expr.to_string()`.
///
/// # Example
/// ```
/// use linalgpro::{ast::Expr, interpreter::render::render};
///
/// let e = Expr::scalar_mul(Expr::Matrix(vec![vec![2.0, 2.0], vec![3.0, 3.0]]),
///                          Expr::Scalar(4.0));
/// assert_eq!(render(&e), "<multesc, <matriz, [[2,2],[3,3]]>, <escalar, 4>>");
/// ```
#[must_use]
pub fn render(expr: &Expr) -> String {
    expr.to_string()
}

/// Writes the tagged form the parser reads.
///
/// Reals use Rust's shortest round-trip formatting, which never uses an
/// exponent, so every finite leaf parses back to an equal value. Operators
/// embed the rendering of their operands.
impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => write!(f, "<{}, {value}>", Tag::Escalar),
            Self::Complex(value) => write!(f, "<{}, {value}>", Tag::Complejo),
            Self::Vector(values) => {
                write!(f, "<{}, ", Tag::Vector)?;
                write_reals(f, values)?;
                f.write_char('>')
            },
            Self::Matrix(rows) => {
                write!(f, "<{}, [", Tag::Matriz)?;
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write_reals(f, row)?;
                }
                f.write_str("]>")
            },
            Self::BinaryOp { left, op, right } => write!(f, "<{}, {left}, {right}>", op.tag()),
            Self::Variable(name) => write!(f, "<{}, {name}>", Tag::Variable),
        }
    }
}

/// Writes `[a,b,c]`.
fn write_reals(f: &mut fmt::Formatter<'_>, values: &[f64]) -> fmt::Result {
    f.write_char('[')?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        write!(f, "{value}")?;
    }
    f.write_char(']')
}
