//! Errors for dose-response fitting (input validation, options, optimizer
//! failures).
//!
//! [`FitError`] is shared by the logistic and scaled-logistic models. It
//! implements `Display`/`Error` and, with `python-bindings`, converts into a
//! Python `ValueError`.
//!
//! ## Conventions
//! - **Indices are 0-based**.
//! - Outcomes are binary and stored as `f64` (`0.0` or `1.0`).
//! - Optimizer errors are normalized to [`FitError::OptimizationFailed`]
//!   with a human-readable status. Non-convergence of the simplex fit is
//!   *not* an error; see `fit_scaled_logit`.
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::optimization::errors::OptError;

/// Result alias for dose-response operations that may produce [`FitError`].
pub type FitResult<T> = Result<T, FitError>;

/// Unified error type for dose-response model fitting and prediction.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    // ---- Input/data validation ----
    /// No observations were supplied.
    EmptyData,

    /// Predictor and outcome sequences differ in length.
    LengthMismatch { x_len: usize, y_len: usize },

    /// A predictor value is NaN/±inf.
    NonFinitePredictor { index: usize, value: f64 },

    /// An outcome is not exactly `0.0` or `1.0`.
    NonBinaryOutcome { index: usize, value: f64 },

    /// Every outcome has the same value, so the logistic slope is not
    /// identified.
    SingleClass { class: f64 },

    /// A query point for prediction is NaN/±inf.
    NonFiniteQuery { index: usize, value: f64 },

    // ---- Parameters / options ----
    /// Parameter vector has the wrong length for the model.
    ParamLengthMismatch { expected: usize, actual: usize },

    /// Regularization strength must be finite and >= 0.
    InvalidLambda { value: f64 },

    /// Initial guess coordinates must be finite.
    InvalidInitialGuess { index: usize, value: f64 },

    // ---- Estimation / optimizer ----
    /// Optimizer failed; include a human-readable status/reason.
    OptimizationFailed { status: String },

    /// Model hasn't been fitted yet.
    ModelNotFitted,
}

impl std::error::Error for FitError {}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/data validation ----
            FitError::EmptyData => {
                write!(f, "Input data is empty.")
            }
            FitError::LengthMismatch { x_len, y_len } => {
                write!(f, "Predictor length ({x_len}) does not match outcome length ({y_len}).")
            }
            FitError::NonFinitePredictor { index, value } => {
                write!(f, "Predictor at index {index} is non-finite: {value}")
            }
            FitError::NonBinaryOutcome { index, value } => {
                write!(f, "Outcome at index {index} must be 0 or 1; got: {value}")
            }
            FitError::SingleClass { class } => {
                write!(f, "All outcomes equal {class}; both classes are required for a fit.")
            }
            FitError::NonFiniteQuery { index, value } => {
                write!(f, "Prediction point at index {index} is non-finite: {value}")
            }
            // ---- Parameters / options ----
            FitError::ParamLengthMismatch { expected, actual } => {
                write!(f, "Parameter length mismatch: expected {expected}, got {actual}")
            }
            FitError::InvalidLambda { value } => {
                write!(f, "Regularization strength must be finite and >= 0; got: {value}")
            }
            FitError::InvalidInitialGuess { index, value } => {
                write!(f, "Initial guess at index {index} must be finite; got: {value}")
            }
            // ---- Estimation / optimizer ----
            FitError::OptimizationFailed { status } => {
                write!(f, "Optimizer failed with status: {status}")
            }
            FitError::ModelNotFitted => {
                write!(f, "Model hasn't been fitted yet.")
            }
        }
    }
}

impl From<OptError> for FitError {
    fn from(err: OptError) -> FitError {
        FitError::OptimizationFailed { status: err.to_string() }
    }
}

/// Convert a [`FitError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl From<FitError> for PyErr {
    fn from(err: FitError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
