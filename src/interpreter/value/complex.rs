use std::{fmt::Display, ops};

use ordered_float::OrderedFloat;

/// Represents a complex number with real and imaginary parts.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

/// Formats the number in the `R+Ii` / `R-Ii` form accepted by the parser.
///
/// The sign is taken from the sign bit of the imaginary part, so `-0.0` is
/// written as `R-0i`.
impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.imaginary.is_sign_negative() {
            write!(f, "{}{}i", self.real, self.imaginary)
        } else {
            write!(f, "{}+{}i", self.real, self.imaginary)
        }
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use linalgpro::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Multiplies both parts by a real factor.
    ///
    /// # Example
    /// ```
    /// use linalgpro::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(1.5, -2.0).scale(2.0);
    /// assert_eq!(c, ComplexNumber::new(3.0, -4.0));
    /// ```
    #[must_use]
    pub const fn scale(self, factor: f64) -> Self {
        Self { real:      self.real * factor,
               imaginary: self.imaginary * factor, }
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::Mul<f64> for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl From<(f64, f64)> for ComplexNumber {
    fn from(value: (f64, f64)) -> Self {
        Self { real:      value.0,
               imaginary: value.1, }
    }
}

/// Structural equality: parts are compared with `OrderedFloat`, so `NaN`
/// equals `NaN` and `0.0` equals `-0.0`.
impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}

impl Eq for ComplexNumber {}
