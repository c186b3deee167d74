/// Addition rules.
///
/// Scalars, complex numbers and matrices can be added to a value of the same
/// kind. Matrices must agree in shape row by row.
pub mod add;
/// Operator dispatch.
pub mod core;
/// Scalar multiplication rules.
///
/// The scalar must be the right operand. Scalars, complex numbers and
/// matrices can be scaled.
pub mod scalar_mul;
