//! Errors for effectiveness metrics (odds-ratio transform, L2 error).
//!
//! [`MetricError`] makes the preconditions of the metrics explicit instead
//! of letting divisions by zero turn into infinities or NaNs.
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// Result alias for metric computations that may produce [`MetricError`].
pub type MetricResult<T> = Result<T, MetricError>;

#[derive(Debug, Clone, PartialEq)]
pub enum MetricError {
    /// No probabilities were supplied.
    EmptyInput,

    /// A probability is NaN/±inf.
    NonFiniteProbability { index: usize, value: f64 },

    /// A probability lies outside `[0, 1)`, so its odds are undefined.
    ProbabilityOutOfRange { index: usize, value: f64 },

    /// The baseline probability must lie strictly inside `(0, 1)`.
    DegenerateBaseline { value: f64 },

    /// Estimate and reference vectors differ in length.
    LengthMismatch { estimate_len: usize, truth_len: usize },
}

impl std::error::Error for MetricError {}

impl std::fmt::Display for MetricError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricError::EmptyInput => {
                write!(f, "Input probabilities are empty.")
            }
            MetricError::NonFiniteProbability { index, value } => {
                write!(f, "Probability at index {index} is non-finite: {value}")
            }
            MetricError::ProbabilityOutOfRange { index, value } => {
                write!(f, "Probability at index {index} must lie in [0, 1); got: {value}")
            }
            MetricError::DegenerateBaseline { value } => {
                write!(f, "Baseline probability must lie in (0, 1); got: {value}")
            }
            MetricError::LengthMismatch { estimate_len, truth_len } => {
                write!(
                    f,
                    "Estimate length ({estimate_len}) does not match reference length ({truth_len})."
                )
            }
        }
    }
}

/// Convert a [`MetricError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl From<MetricError> for PyErr {
    fn from(err: MetricError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
