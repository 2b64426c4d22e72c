//! Dose-response validation helpers — reusable checks for observations,
//! query points, and fit options.
//!
//! Purpose
//! -------
//! Centralize the input checks used by [`BinaryData`](super::data::BinaryData),
//! the option builders, and the model entry points, so each constructor can
//! fail fast with a structured [`FitError`].
//!
//! Key behaviors
//! -------------
//! - Validate paired predictor/outcome sequences (non-empty, equal length,
//!   finite predictors, binary outcomes).
//! - Detect single-class outcome vectors, which leave the logistic slope
//!   unidentified.
//! - Validate prediction query points and scaled-logit fit options.
//!
//! Conventions
//! -----------
//! - Indices in errors are 0-based and refer to the first offending entry.
//! - Helpers never panic on invalid inputs and perform no logging.
//!
//! Testing notes
//! -------------
//! - Unit tests cover one valid case and each rejection path per helper.
use crate::dose_response::errors::{FitError, FitResult};
use ndarray::ArrayView1;

/// Validate paired observations.
///
/// # Errors
/// - [`FitError::EmptyData`] if `x` is empty.
/// - [`FitError::LengthMismatch`] if `x.len() != y.len()`.
/// - [`FitError::NonFinitePredictor`] for the first non-finite `x`.
/// - [`FitError::NonBinaryOutcome`] for the first `y` not in `{0, 1}`.
pub fn validate_observations(x: ArrayView1<f64>, y: ArrayView1<f64>) -> FitResult<()> {
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch { x_len: x.len(), y_len: y.len() });
    }
    if x.is_empty() {
        return Err(FitError::EmptyData);
    }
    if let Some((index, &value)) = x.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(FitError::NonFinitePredictor { index, value });
    }
    if let Some((index, &value)) = y.iter().enumerate().find(|(_, &v)| v != 0.0 && v != 1.0) {
        return Err(FitError::NonBinaryOutcome { index, value });
    }
    Ok(())
}

/// Require both outcome classes to be present.
///
/// Assumes `y` already passed [`validate_observations`].
///
/// # Errors
/// [`FitError::SingleClass`] carrying the only class observed.
pub fn validate_both_classes(y: ArrayView1<f64>) -> FitResult<()> {
    let positives = y.iter().filter(|&&v| v == 1.0).count();
    match positives {
        0 => Err(FitError::SingleClass { class: 0.0 }),
        n if n == y.len() => Err(FitError::SingleClass { class: 1.0 }),
        _ => Ok(()),
    }
}

/// Validate prediction query points (finite; empty is allowed).
///
/// # Errors
/// [`FitError::NonFiniteQuery`] for the first non-finite entry.
pub fn validate_query_points(x: &[f64]) -> FitResult<()> {
    if let Some((index, &value)) = x.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(FitError::NonFiniteQuery { index, value });
    }
    Ok(())
}

/// Validate an L2 regularization strength.
///
/// # Errors
/// [`FitError::InvalidLambda`] if `lambda_reg` is non-finite or negative.
pub fn validate_lambda(lambda_reg: f64) -> FitResult<()> {
    if !lambda_reg.is_finite() || lambda_reg < 0.0 {
        return Err(FitError::InvalidLambda { value: lambda_reg });
    }
    Ok(())
}

/// Validate the `(k, β0, β1)` starting point of a scaled-logit fit.
///
/// # Errors
/// [`FitError::InvalidInitialGuess`] for the first non-finite coordinate.
pub fn validate_initial_guess(guess: (f64, f64, f64)) -> FitResult<()> {
    let coords = [guess.0, guess.1, guess.2];
    if let Some((index, &value)) = coords.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(FitError::InvalidInitialGuess { index, value });
    }
    Ok(())
}
