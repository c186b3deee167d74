/// Complex number support.
///
/// Defines the `ComplexNumber` type carried by `Expr::Complex`. Only the
/// operations the language needs are provided: addition of two complex
/// numbers and scaling by a real factor.
pub mod complex;
/// Matrix helpers.
///
/// Matrices are stored as rows of reals. Rows are allowed to have different
/// lengths, so every helper here works row by row instead of assuming a
/// rectangular shape.
pub mod matrix;
