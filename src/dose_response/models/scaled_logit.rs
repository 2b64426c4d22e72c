//! Scaled logistic model: curve, penalized likelihood, and simplex fit.
//!
//! The curve `f(x) = k / (1 + exp(β0 + β1·x))` is a logistic curve whose
//! upper asymptote `k` is fitted rather than fixed at 1, so it can describe
//! outcomes that never reach certainty (e.g. infection risk that plateaus
//! below 1 at low antibody titers).
//!
//! Key ideas:
//! - The objective is the Bernoulli negative log-likelihood with both
//!   `f(xᵢ)` and `1 − f(xᵢ)` clipped to `[ε, 1 − ε]` (`ε = 1e-10`), plus an
//!   L2 penalty `λ·β1²` that discourages steep slopes.
//! - Clipping keeps the objective finite for any finite `(k, β0, β1)`, even
//!   where `f` leaves `[0, 1]`, so no constraint on `k` is imposed.
//! - The objective is non-smooth at the clip boundaries, so the fit uses the
//!   derivative-free Nelder–Mead path of the optimizer layer.
//! - Non-convergence is not an error: a warning is logged and the best
//!   parameters found are kept.
use crate::{
    dose_response::{
        core::{
            data::BinaryData,
            options::ScaledLogitOptions,
            params::ScaledLogitParams,
            validation::validate_query_points,
        },
        errors::{FitError, FitResult},
    },
    optimization::{
        errors::OptResult,
        loglik_optimizer::{
            LogLikelihood, OptimOutcome, SimplexOptions, Theta, maximize_simplex,
            validation::validate_theta_input,
        },
        numerical_stability::clip_probability,
    },
};
use ndarray::Array1;
use tracing::warn;

/// Number of scaled-logit parameters `(k, β0, β1)`.
const N_PARAMS: usize = 3;

/// Scaled logistic function `k / (1 + exp(β0 + β1·x))`.
///
/// For `β1 > 0` and `k > 0` the value decreases in `x` and stays within
/// `[0, k]`. Never overflows for large `|x|`.
pub fn scaled_logit(x: f64, k: f64, beta_0: f64, beta_1: f64) -> f64 {
    ScaledLogitParams::new(k, beta_0, beta_1).evaluate(x)
}

/// [`scaled_logit`] applied element-wise, preserving order.
pub fn scaled_logit_curve(x: &[f64], k: f64, beta_0: f64, beta_1: f64) -> Array1<f64> {
    let params = ScaledLogitParams::new(k, beta_0, beta_1);
    x.iter().map(|&v| params.evaluate(v)).collect()
}

/// Penalized negative log-likelihood of the scaled-logit model:
///
/// `−Σ [yᵢ·ln clip(f(xᵢ)) + (1 − yᵢ)·ln clip(1 − f(xᵢ))] + λ·β1²`
///
/// with `clip` onto `[PROB_EPS, 1 − PROB_EPS]`.
pub fn neg_log_likelihood(params: &ScaledLogitParams, data: &BinaryData, lambda_reg: f64) -> f64 {
    let nll: f64 = data
        .x
        .iter()
        .zip(data.y.iter())
        .map(|(&x, &y)| {
            let f = params.evaluate(x);
            y * clip_probability(f).ln() + (1.0 - y) * clip_probability(1.0 - f).ln()
        })
        .sum();
    -nll + lambda_reg * params.beta_1 * params.beta_1
}

/// Scaled logistic model fitted by penalized maximum likelihood.
///
/// After [`fit`](Self::fit), `results` holds the simplex outcome and
/// `fitted_params` the best `(k, β0, β1)` found.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScaledLogitModel {
    /// Penalty, starting point, and simplex settings.
    pub options: ScaledLogitOptions,
    /// Fit results (populated after `fit`).
    pub results: Option<OptimOutcome>,
    /// Fitted parameters (populated after `fit`).
    pub fitted_params: Option<ScaledLogitParams>,
}

impl ScaledLogitModel {
    pub fn new(options: ScaledLogitOptions) -> Self {
        Self { options, results: None, fitted_params: None }
    }

    /// Fit `(k, β0, β1)` with Nelder–Mead from `options.initial_guess`.
    ///
    /// ## Behavior
    /// - Stops on the cost-spread tolerance, the iteration cap, or the
    ///   evaluation cap of `options.simplex`.
    /// - If the run stops on a cap, logs a `warn!` and keeps the best point
    ///   found; `results.converged` is then `false`.
    ///
    /// ## Errors
    /// - [`FitError::OptimizationFailed`] only if the solver cannot run at
    ///   all (e.g. an invalid simplex tolerance).
    pub fn fit(&mut self, data: &BinaryData) -> FitResult<()> {
        let theta0 = self.options.initial_guess.to_theta();
        let outcome = maximize_simplex(&*self, theta0, data, &self.options.simplex)?;
        if !outcome.converged {
            warn!(
                status = %outcome.status,
                iterations = outcome.iterations,
                cost_evals = ?outcome.fn_evals.get("cost_count"),
                "did not find optimal parameter fit to minimize likelihood; returning best found"
            );
        }
        self.fitted_params = Some(ScaledLogitParams::from_theta(&outcome.theta_hat)?);
        self.results = Some(outcome);
        Ok(())
    }

    /// Evaluate the fitted curve at each query point, in query order.
    ///
    /// ## Errors
    /// - [`FitError::ModelNotFitted`] before `fit`.
    /// - [`FitError::NonFiniteQuery`] for a non-finite query point.
    pub fn predict(&self, x: &[f64]) -> FitResult<Array1<f64>> {
        let params = self.fitted_params.ok_or(FitError::ModelNotFitted)?;
        validate_query_points(x)?;
        Ok(scaled_logit_curve(x, params.k, params.beta_0, params.beta_1))
    }
}

impl LogLikelihood for ScaledLogitModel {
    type Data = BinaryData;

    /// `ℓ(θ) = −neg_log_likelihood(θ)`, penalty included.
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<f64> {
        let params = ScaledLogitParams::new(theta[0], theta[1], theta[2]);
        Ok(-neg_log_likelihood(&params, data, self.options.lambda_reg))
    }

    /// `θ` must have length 3 and finite entries.
    fn check(&self, theta: &Theta, _data: &Self::Data) -> OptResult<()> {
        validate_theta_input(theta, N_PARAMS)
    }
}

/// Fit the scaled-logit model to `(x_data, y_data)` with an L2 penalty
/// `lambda_reg·β1²`, starting from `initial_guess = (k, β0, β1)`.
///
/// Uses the default simplex settings (tolerance `1e-10`, `10_000`
/// iterations, `20_000` cost evaluations). When they are exhausted, a
/// warning is logged and the best parameters found are returned anyway.
///
/// The `1e-10` tolerance applies to the spread (standard deviation) of the
/// objective over the simplex vertices only. argmin's Nelder–Mead has no
/// separate stopping rule on the spread of the vertices themselves, so a
/// run can stop while the vertices are still apart if their objective
/// values already agree to that tolerance.
///
/// # Errors
/// - Any observation error of [`BinaryData::new`].
/// - [`FitError::InvalidLambda`] / [`FitError::InvalidInitialGuess`].
///
/// # Example
/// ```
/// use protection_curves::{fit_scaled_logit, DEFAULT_INITIAL_GUESS};
///
/// let x = [0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0];
/// let y = [1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0];
/// let (k, _beta_0, beta_1) = fit_scaled_logit(&x, &y, 0.1, DEFAULT_INITIAL_GUESS)?;
/// assert!(k.is_finite() && beta_1.is_finite());
/// # Ok::<(), protection_curves::dose_response::errors::FitError>(())
/// ```
pub fn fit_scaled_logit(
    x_data: &[f64], y_data: &[f64], lambda_reg: f64, initial_guess: (f64, f64, f64),
) -> FitResult<(f64, f64, f64)> {
    let options = ScaledLogitOptions::new(lambda_reg, initial_guess, SimplexOptions::default())?;
    let data = BinaryData::from_slices(x_data, y_data)?;
    let mut model = ScaledLogitModel::new(options);
    model.fit(&data)?;
    let params = model.fitted_params.ok_or(FitError::ModelNotFitted)?;
    Ok(params.into())
}
