use ordered_float::OrderedFloat;

use crate::interpreter::value::{complex::ComplexNumber, matrix::shape_of};

/// The tag that opens every node of the textual notation, as in
/// `<escalar, 4>` or `<suma, ..., ...>`.
///
/// Tags are spelled exactly as they appear in source text and are matched
/// case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `escalar`, a real scalar.
    Escalar,
    /// `complejo`, a complex number.
    Complejo,
    /// `vector`, a list of reals.
    Vector,
    /// `matriz`, a list of rows of reals.
    Matriz,
    /// `suma`, the addition operator.
    Suma,
    /// `multesc`, multiplication by a scalar.
    MultEsc,
    /// `variable`, a reference to a bound name.
    Variable,
}

impl Tag {
    /// All tags, in the order they are documented.
    pub const ALL: [Self; 7] = [Self::Escalar,
                                Self::Complejo,
                                Self::Vector,
                                Self::Matriz,
                                Self::Suma,
                                Self::MultEsc,
                                Self::Variable];

    /// Returns the tag spelled `name`, if there is one.
    ///
    /// # Example
    /// ```
    /// use linalgpro::ast::Tag;
    ///
    /// assert_eq!(Tag::from_name("multesc"), Some(Tag::MultEsc));
    /// assert_eq!(Tag::from_name("Escalar"), None);
    /// assert_eq!(Tag::from_name("bogus"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == name)
    }

    /// The spelling of the tag in source text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Escalar => "escalar",
            Self::Complejo => "complejo",
            Self::Vector => "vector",
            Self::Matriz => "matriz",
            Self::Suma => "suma",
            Self::MultEsc => "multesc",
            Self::Variable => "variable",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The binary operators of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition of two values of the same kind.
    Add,
    /// Multiplication of a value by a scalar on the right.
    ScalarMul,
}

impl Operator {
    /// The tag used to write this operator.
    #[must_use]
    pub const fn tag(self) -> Tag {
        match self {
            Self::Add => Tag::Suma,
            Self::ScalarMul => Tag::MultEsc,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "addition"),
            Self::ScalarMul => write!(f, "scalar multiplication"),
        }
    }
}

/// The kind of an expression node, without its payload.
///
/// Used in diagnostics to describe operands that did not fit an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprKind {
    /// See [`Expr::Scalar`].
    Scalar,
    /// See [`Expr::Complex`].
    Complex,
    /// See [`Expr::Vector`].
    Vector,
    /// See [`Expr::Matrix`].
    Matrix,
    /// An [`Expr::BinaryOp`] with [`Operator::Add`].
    Add,
    /// An [`Expr::BinaryOp`] with [`Operator::ScalarMul`].
    ScalarMul,
    /// See [`Expr::Variable`].
    Variable,
}

impl std::fmt::Display for ExprKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Scalar => "scalar",
            Self::Complex => "complex",
            Self::Vector => "vector",
            Self::Matrix => "matrix",
            Self::Add => "sum",
            Self::ScalarMul => "scalar product",
            Self::Variable => "variable",
        };
        f.write_str(name)
    }
}

/// An abstract syntax tree (AST) node of the expression language.
///
/// Leaf variants carry values; `BinaryOp` owns its two operands exclusively,
/// so a tree is always finite and acyclic. Leaves are never modified once
/// built: evaluating a leaf produces an equal copy of it.
///
/// Matrix rows are not required to have equal lengths. Shapes only matter to
/// the operators and are checked when a sum is evaluated.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A real number.
    Scalar(f64),
    /// A complex number.
    Complex(ComplexNumber),
    /// An ordered list of reals.
    Vector(Vec<f64>),
    /// An ordered list of rows, each an ordered list of reals.
    Matrix(Vec<Vec<f64>>),
    /// A binary operation on two sub-expressions.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    Operator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A reference to a value bound in the evaluation environment.
    Variable(String),
}

impl Expr {
    /// Builds `<suma, left, right>`.
    #[must_use]
    pub fn add(left: Self, right: Self) -> Self {
        Self::BinaryOp { left:  Box::new(left),
                         op:    Operator::Add,
                         right: Box::new(right), }
    }

    /// Builds `<multesc, left, right>`.
    #[must_use]
    pub fn scalar_mul(left: Self, right: Self) -> Self {
        Self::BinaryOp { left:  Box::new(left),
                         op:    Operator::ScalarMul,
                         right: Box::new(right), }
    }

    /// Builds `<variable, name>`.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Returns the kind of this node.
    ///
    /// # Example
    /// ```
    /// use linalgpro::ast::{Expr, ExprKind};
    ///
    /// assert_eq!(Expr::Scalar(1.0).kind(), ExprKind::Scalar);
    /// assert_eq!(Expr::scalar_mul(Expr::Scalar(1.0), Expr::Scalar(2.0)).kind(),
    ///            ExprKind::ScalarMul);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ExprKind {
        match self {
            Self::Scalar(_) => ExprKind::Scalar,
            Self::Complex(_) => ExprKind::Complex,
            Self::Vector(_) => ExprKind::Vector,
            Self::Matrix(_) => ExprKind::Matrix,
            Self::BinaryOp { op: Operator::Add, .. } => ExprKind::Add,
            Self::BinaryOp { op: Operator::ScalarMul,
                             .. } => ExprKind::ScalarMul,
            Self::Variable(_) => ExprKind::Variable,
        }
    }

    /// Returns `true` for value nodes: scalars, complex numbers, vectors and
    /// matrices.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Scalar(_) | Self::Complex(_) | Self::Vector(_) | Self::Matrix(_))
    }

    /// Returns the row lengths of a matrix, or `None` for any other node.
    ///
    /// # Example
    /// ```
    /// use linalgpro::ast::Expr;
    ///
    /// let m = Expr::Matrix(vec![vec![1.0, 2.0], vec![4.0, 5.0], vec![7.0, 8.0]]);
    /// assert_eq!(m.shape(), Some(vec![2, 2, 2]));
    /// assert_eq!(Expr::Vector(vec![1.0]).shape(), None);
    /// ```
    #[must_use]
    pub fn shape(&self) -> Option<Vec<usize>> {
        match self {
            Self::Matrix(rows) => Some(shape_of(rows)),
            _ => None,
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<ComplexNumber> for Expr {
    fn from(value: ComplexNumber) -> Self {
        Self::Complex(value)
    }
}

impl From<Vec<f64>> for Expr {
    fn from(value: Vec<f64>) -> Self {
        Self::Vector(value)
    }
}

impl From<Vec<Vec<f64>>> for Expr {
    fn from(value: Vec<Vec<f64>>) -> Self {
        Self::Matrix(value)
    }
}

/// Structural equality.
///
/// Reals are compared with `OrderedFloat`, so a tree containing `NaN` is
/// equal to a copy of itself.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            (Self::Complex(a), Self::Complex(b)) => a == b,
            (Self::Vector(a), Self::Vector(b)) => reals_eq(a, b),
            (Self::Matrix(a), Self::Matrix(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| reals_eq(x, y))
            },
            (Self::BinaryOp { left: l1,
                              op: o1,
                              right: r1, },
             Self::BinaryOp { left: l2,
                              op: o2,
                              right: r2, }) => o1 == o2 && l1 == l2 && r1 == r2,
            (Self::Variable(a), Self::Variable(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Expr {}

fn reals_eq(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| OrderedFloat(*x) == OrderedFloat(*y))
}
