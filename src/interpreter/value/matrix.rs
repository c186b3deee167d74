use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Returns the length of every row of a matrix.
///
/// Matrices are not required to be rectangular, so the shape is the full
/// list of row lengths rather than a `(rows, columns)` pair.
///
/// # Example
/// ```
/// use linalgpro::interpreter::value::matrix::shape_of;
///
/// assert_eq!(shape_of(&[vec![1.0, 2.0], vec![3.0]]), vec![2, 1]);
/// assert!(shape_of(&[]).is_empty());
/// ```
#[must_use]
pub fn shape_of(rows: &[Vec<f64>]) -> Vec<usize> {
    rows.iter().map(Vec::len).collect()
}

/// Adds two matrices element by element.
///
/// The row counts must match, and then every pair of corresponding rows must
/// have the same length. Rows are checked in order and the first mismatch is
/// reported.
///
/// # Errors
/// - `RuntimeError::ShapeMismatch { row: None, .. }` if the row counts differ.
/// - `RuntimeError::ShapeMismatch { row: Some(i), .. }` if row `i` has a
///   different length on each side.
///
/// # Example
/// ```
/// use linalgpro::{error::RuntimeError, interpreter::value::matrix::add};
///
/// let a = vec![vec![1.0, 2.0], vec![3.0]];
/// let b = vec![vec![10.0, 20.0], vec![30.0]];
/// assert_eq!(add(&a, &b).unwrap(), vec![vec![11.0, 22.0], vec![33.0]]);
///
/// let c = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
/// assert!(matches!(add(&a, &c),
///                  Err(RuntimeError::ShapeMismatch { row: Some(1),
///                                                    left: 1,
///                                                    right: 2 })));
/// ```
pub fn add(left: &[Vec<f64>], right: &[Vec<f64>]) -> EvalResult<Vec<Vec<f64>>> {
    if left.len() != right.len() {
        return Err(RuntimeError::ShapeMismatch { row:   None,
                                                 left:  left.len(),
                                                 right: right.len(), });
    }

    let mut out = Vec::with_capacity(left.len());
    for (i, (l, r)) in left.iter().zip(right).enumerate() {
        if l.len() != r.len() {
            return Err(RuntimeError::ShapeMismatch { row:   Some(i),
                                                     left:  l.len(),
                                                     right: r.len(), });
        }
        out.push(l.iter().zip(r).map(|(a, b)| a + b).collect());
    }

    Ok(out)
}

/// Multiplies every element of a matrix by `factor`.
///
/// # Example
/// ```
/// use linalgpro::interpreter::value::matrix::scale;
///
/// let m = vec![vec![2.0, 2.0], vec![3.0, 3.0]];
/// assert_eq!(scale(&m, 4.0), vec![vec![8.0, 8.0], vec![12.0, 12.0]]);
/// ```
#[must_use]
pub fn scale(rows: &[Vec<f64>], factor: f64) -> Vec<Vec<f64>> {
    rows.iter()
        .map(|row| row.iter().map(|x| x * factor).collect())
        .collect()
}
