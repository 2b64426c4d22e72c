//! protection_curves — dose-response curve fitting for correlates of
//! protection, with optional Python bindings.
//!
//! Purpose
//! -------
//! Fit probability curves of a binary outcome (e.g. infection) against a
//! continuous predictor (e.g. antibody titer) and derive summary metrics
//! from them. When the `python-bindings` feature is enabled, this module
//! also defines the `_protection_curves` extension module.
//!
//! Key behaviors
//! -------------
//! - [`fit_logistic_regression`]: unregularized logistic regression, then
//!   `P(y = 1)` at query points.
//! - [`scaled_logit`] / [`scaled_logit_curve`]: the curve
//!   `k / (1 + exp(β0 + β1·x))`.
//! - [`fit_scaled_logit`]: penalized maximum-likelihood fit of
//!   `(k, β0, β1)` with a Nelder–Mead simplex.
//! - [`one_minus_odds_ratio`]: relative effectiveness against the first
//!   (reference) group.
//! - [`l2_norm_error`]: Euclidean distance between two curves.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every operation is a pure function of its inputs; no I/O, no global
//!   state. Work is bounded by the optimizer iteration and evaluation caps.
//! - Invalid inputs are reported as `FitError` / `MetricError` values, never
//!   panics.
//!
//! Conventions
//! -----------
//! - Vectors are returned as `ndarray::Array1<f64>`, aligned with the input
//!   order.
//! - Logging goes through `tracing`; the crate never installs a subscriber.
//! - With `python-bindings`, every Rust error becomes a Python `ValueError`.
//!
//! Downstream usage
//! ----------------
//! - Rust callers use the functions re-exported here, or the model types in
//!   [`dose_response`] for explicit options and optimizer diagnostics.
//! - The Python package imports `_protection_curves` and calls the functions
//!   registered below under their historical names.

pub mod dose_response;
pub mod effectiveness;
pub mod optimization;
pub mod utils;

pub use crate::dose_response::{
    BinaryData, DEFAULT_INITIAL_GUESS, DEFAULT_LAMBDA_REG, FitError, FitResult, LogisticModel,
    ScaledLogitModel, fit_logistic_regression, fit_scaled_logit, neg_log_likelihood, scaled_logit,
    scaled_logit_curve,
};
pub use crate::effectiveness::{MetricError, MetricResult, l2_norm_error, one_minus_odds_ratio};

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyFloat};

#[cfg(feature = "python-bindings")]
use crate::utils::extract_f64_vec;

/// `fit_logistic_regression(x_data, y_data, x_vals_to_predict)` — fitted
/// `P(y = 1)` at each query point as a float64 array.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "fit_logistic_regression")]
#[pyo3(text_signature = "(x_data, y_data, x_vals_to_predict, /)")]
fn py_fit_logistic_regression<'py>(
    py: Python<'py>, x_data: &Bound<'py, PyAny>, y_data: &Bound<'py, PyAny>,
    x_vals_to_predict: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let x = extract_f64_vec(py, x_data, "x_data")?;
    let y = extract_f64_vec(py, y_data, "y_data")?;
    let query = extract_f64_vec(py, x_vals_to_predict, "x_vals_to_predict")?;
    let probs = fit_logistic_regression(&x, &y, &query)?;
    Ok(probs.into_pyarray_bound(py))
}

/// `scaled_logit(x, k, beta_0, beta_1)` — a float for scalar `x`, a float64
/// array for array-like `x`.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "scaled_logit")]
#[pyo3(text_signature = "(x, k, beta_0, beta_1, /)")]
fn py_scaled_logit<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, k: f64, beta_0: f64, beta_1: f64,
) -> PyResult<Bound<'py, PyAny>> {
    if let Ok(scalar) = x.extract::<f64>() {
        return Ok(PyFloat::new_bound(py, scaled_logit(scalar, k, beta_0, beta_1)).into_any());
    }
    let xs = extract_f64_vec(py, x, "x")?;
    Ok(scaled_logit_curve(&xs, k, beta_0, beta_1).into_pyarray_bound(py).into_any())
}

/// `fit_scaled_logit(x_data, y_data, lambda_reg=0.1, initial_guess=(0.5, -1, 1))`
/// — fitted `(k, beta_0, beta_1)`.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "fit_scaled_logit")]
#[pyo3(
    signature = (x_data, y_data, lambda_reg = DEFAULT_LAMBDA_REG, initial_guess = DEFAULT_INITIAL_GUESS),
    text_signature = "(x_data, y_data, /, lambda_reg=0.1, initial_guess=(0.5, -1, 1))"
)]
fn py_fit_scaled_logit<'py>(
    py: Python<'py>, x_data: &Bound<'py, PyAny>, y_data: &Bound<'py, PyAny>, lambda_reg: f64,
    initial_guess: (f64, f64, f64),
) -> PyResult<(f64, f64, f64)> {
    let x = extract_f64_vec(py, x_data, "x_data")?;
    let y = extract_f64_vec(py, y_data, "y_data")?;
    Ok(fit_scaled_logit(&x, &y, lambda_reg, initial_guess)?)
}

/// `one_minus_OR(predicted_probabilities)` — `1 − odds(pᵢ)/odds(p₀)` per
/// entry.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "one_minus_OR")]
#[pyo3(text_signature = "(predicted_probabilities, /)")]
fn py_one_minus_odds_ratio<'py>(
    py: Python<'py>, predicted_probabilities: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let probs = extract_f64_vec(py, predicted_probabilities, "predicted_probabilities")?;
    Ok(one_minus_odds_ratio(&probs)?.into_pyarray_bound(py))
}

/// `get_L2_norm_error(estimate, truth)` — `‖truth − estimate‖₂`.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "get_L2_norm_error")]
#[pyo3(text_signature = "(estimate, truth, /)")]
fn py_l2_norm_error<'py>(
    py: Python<'py>, estimate: &Bound<'py, PyAny>, truth: &Bound<'py, PyAny>,
) -> PyResult<f64> {
    let est = extract_f64_vec(py, estimate, "estimate")?;
    let tru = extract_f64_vec(py, truth, "truth")?;
    Ok(l2_norm_error(&est, &tru)?)
}

/// Initializer for the `_protection_curves` extension module.
///
/// Invoked by Python on import; registers the five curve-fitting functions.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _protection_curves<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_fit_logistic_regression, m)?)?;
    m.add_function(wrap_pyfunction!(py_scaled_logit, m)?)?;
    m.add_function(wrap_pyfunction!(py_fit_scaled_logit, m)?)?;
    m.add_function(wrap_pyfunction!(py_one_minus_odds_ratio, m)?)?;
    m.add_function(wrap_pyfunction!(py_l2_norm_error, m)?)?;
    Ok(())
}
