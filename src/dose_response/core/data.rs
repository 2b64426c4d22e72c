//! Binary-outcome observation container for dose-response models.
//!
//! Purpose
//! -------
//! Provide a small, validated container pairing a continuous predictor
//! (e.g. antibody titer) with a binary outcome (e.g. infected or not). Both
//! models in this crate consume [`BinaryData`], so input checks happen once,
//! at the boundary.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x` and `y` are non-empty and of equal length.
//! - Every `x` is finite; every `y` is exactly `0.0` or `1.0`.
//! - Contents are immutable after construction.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path and delegation of each rejection to
//!   [`validation`](super::validation).
use crate::dose_response::{core::validation::validate_observations, errors::FitResult};
use ndarray::Array1;

/// `BinaryData` — validated predictor/outcome pairs.
///
/// Fields
/// ------
/// - `x`: `Array1<f64>`
///   Predictor values; finite.
/// - `y`: `Array1<f64>`
///   Outcomes aligned with `x`; each `0.0` or `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryData {
    /// Predictor values.
    pub x: Array1<f64>,
    /// Binary outcomes aligned with `x`.
    pub y: Array1<f64>,
}

impl BinaryData {
    /// Construct validated observations from owned arrays.
    ///
    /// # Errors
    /// Any error of [`validate_observations`].
    pub fn new(x: Array1<f64>, y: Array1<f64>) -> FitResult<Self> {
        validate_observations(x.view(), y.view())?;
        Ok(Self { x, y })
    }

    /// Construct validated observations by copying two slices.
    pub fn from_slices(x: &[f64], y: &[f64]) -> FitResult<Self> {
        Self::new(Array1::from(x.to_vec()), Array1::from(y.to_vec()))
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false` for a constructed value; kept for API symmetry with
    /// [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Number of observations with outcome `1`.
    pub fn positives(&self) -> usize {
        self.y.iter().filter(|&&v| v == 1.0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dose_response::errors::FitError;

    #[test]
    // Purpose
    // -------
    // Valid slices are copied verbatim and summarized correctly.
    fn from_slices_accepts_valid_observations() {
        // Arrange
        let x = [0.5, 1.5, 2.5];
        let y = [1.0, 0.0, 1.0];

        // Act
        let data = BinaryData::from_slices(&x, &y).expect("data should be valid");

        // Assert
        assert_eq!(data.len(), 3);
        assert!(!data.is_empty());
        assert_eq!(data.positives(), 2);
        assert_eq!(data.x.to_vec(), x.to_vec());
    }

    #[test]
    fn new_rejects_invalid_observations() {
        assert_eq!(BinaryData::from_slices(&[], &[]), Err(FitError::EmptyData));
        assert_eq!(
            BinaryData::from_slices(&[1.0], &[1.0, 0.0]),
            Err(FitError::LengthMismatch { x_len: 1, y_len: 2 })
        );
        assert!(matches!(
            BinaryData::from_slices(&[1.0, 2.0], &[1.0, -1.0]),
            Err(FitError::NonBinaryOutcome { index: 1, .. })
        ));
    }
}
