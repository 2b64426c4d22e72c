//! Euclidean (L2) distance between an estimated and a reference curve.
use crate::effectiveness::{errors::MetricResult, validation::validate_equal_lengths};
use argmin_math::ArgminL2Norm;
use ndarray::ArrayView1;

/// `‖truth − estimate‖₂`.
///
/// Empty inputs give `0.0`. Non-finite entries propagate into the result.
///
/// # Errors
/// `MetricError::LengthMismatch` if the slices differ in length.
///
/// # Example
/// ```
/// use protection_curves::l2_norm_error;
///
/// assert_eq!(l2_norm_error(&[0.0, 0.0], &[3.0, 4.0])?, 5.0);
/// # Ok::<(), protection_curves::effectiveness::errors::MetricError>(())
/// ```
pub fn l2_norm_error(estimate: &[f64], truth: &[f64]) -> MetricResult<f64> {
    validate_equal_lengths(estimate, truth)?;
    let diff = &ArrayView1::from(truth) - &ArrayView1::from(estimate);
    Ok(diff.l2_norm())
}
