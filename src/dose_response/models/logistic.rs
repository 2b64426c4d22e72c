//! Logistic regression: analytic log-likelihood, gradient, and prediction.
//!
//! Fits `P(y = 1 | x) = σ(β0 + β1·x)` by unregularized maximum likelihood
//! through the shared L-BFGS layer.
//!
//! Key ideas:
//! - With `zᵢ = β0 + β1·xᵢ`, the log-likelihood is
//!   `ℓ(β) = Σ yᵢ·zᵢ − softplus(zᵢ)`, evaluated with [`safe_softplus`] so it
//!   stays finite for large `|zᵢ|`.
//! - The gradient is `∇ℓ = Σ (yᵢ − σ(zᵢ))·(1, xᵢ)`; no finite differences.
//! - The fit starts at `β = (0, 0)`. If the configured line search fails, it
//!   is retried once with the other one before the error is reported.
//!
//! On perfectly separable data the MLE does not exist; the slope grows until
//! the tolerances stop the run, and predictions saturate towards 0 and 1.
use crate::{
    dose_response::{
        core::{
            data::BinaryData,
            options::LogisticOptions,
            params::LogisticParams,
            validation::{validate_both_classes, validate_query_points},
        },
        errors::{FitError, FitResult},
    },
    optimization::{
        errors::{OptError, OptResult},
        loglik_optimizer::{
            Grad, LineSearcher, LogLikelihood, OptimOutcome, Theta, maximize_with_fallback,
            validation::validate_theta_input,
        },
        numerical_stability::{safe_logistic, safe_softplus},
    },
};
use ndarray::Array1;
use tracing::debug;

/// Number of logistic-regression parameters (intercept, slope).
const N_PARAMS: usize = 2;

/// `zᵢ = β0 + β1·xᵢ`, rejected once it overflows.
#[inline]
fn linear_predictor(b0: f64, b1: f64, x: f64, index: usize) -> OptResult<f64> {
    let z = b0 + b1 * x;
    if !z.is_finite() {
        return Err(OptError::NonFiniteObservationTerm { index, value: z });
    }
    Ok(z)
}

/// Logistic regression of a binary outcome on one predictor.
///
/// After [`fit`](Self::fit), `results` holds the optimizer outcome and
/// `fitted_params` the estimated intercept and slope.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogisticModel {
    /// Solver configuration.
    pub options: LogisticOptions,
    /// Fit results (populated after `fit`).
    pub results: Option<OptimOutcome>,
    /// Fitted parameters (populated after `fit`).
    pub fitted_params: Option<LogisticParams>,
    /// Line search of the run that produced `results`; differs from the
    /// configured one when the fallback was needed.
    pub line_searcher_used: Option<LineSearcher>,
}

impl LogisticModel {
    pub fn new(options: LogisticOptions) -> Self {
        Self { options, results: None, fitted_params: None, line_searcher_used: None }
    }

    /// Fit intercept and slope by maximum likelihood and cache the results.
    ///
    /// ## Steps
    /// 1. Require both outcome classes in `data`.
    /// 2. Run L-BFGS from `θ = (0, 0)` with `options.mle_opts`.
    /// 3. On failure (including a failed line search, which argmin reports
    ///    as a solver exit), retry once with the alternate line search.
    /// 4. Store the outcome in `results`, the estimates in `fitted_params`,
    ///    and the line search that produced them in `line_searcher_used`.
    ///
    /// ## Errors
    /// - [`FitError::SingleClass`] if every outcome is equal.
    /// - [`FitError::OptimizationFailed`] if both line searches fail.
    pub fn fit(&mut self, data: &BinaryData) -> FitResult<()> {
        validate_both_classes(data.y.view())?;
        let theta0 = Array1::zeros(N_PARAMS);
        let (outcome, used) =
            maximize_with_fallback(&*self, theta0, data, &self.options.mle_opts)?;
        if used != self.options.mle_opts.line_searcher {
            debug!(line_searcher = ?used, "logistic fit succeeded after line-search fallback");
        }
        if !outcome.converged {
            debug!(
                status = %outcome.status,
                iterations = outcome.iterations,
                "logistic fit stopped before convergence"
            );
        }
        self.fitted_params = Some(LogisticParams::from_theta(&outcome.theta_hat)?);
        self.results = Some(outcome);
        self.line_searcher_used = Some(used);
        Ok(())
    }

    /// `P(y = 1)` at each query point, in query order.
    ///
    /// ## Errors
    /// - [`FitError::ModelNotFitted`] before a successful `fit`.
    /// - [`FitError::NonFiniteQuery`] for a non-finite query point.
    pub fn predict_proba(&self, x: &[f64]) -> FitResult<Array1<f64>> {
        let params = self.fitted_params.ok_or(FitError::ModelNotFitted)?;
        validate_query_points(x)?;
        Ok(x.iter().map(|&v| params.probability(v)).collect())
    }
}

impl LogLikelihood for LogisticModel {
    type Data = BinaryData;

    /// `ℓ(β) = Σ yᵢ·zᵢ − softplus(zᵢ)`, `zᵢ = β0 + β1·xᵢ`, evaluated as
    /// `−[yᵢ·softplus(−zᵢ) + (1 − yᵢ)·softplus(zᵢ)]` so that well-classified
    /// observations keep their small contributions instead of cancelling to
    /// zero.
    ///
    /// An overflowing `zᵢ` is `OptError::NonFiniteObservationTerm`, so an
    /// extreme trial step fails cleanly instead of producing `inf − inf`.
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<f64> {
        let (b0, b1) = (theta[0], theta[1]);
        let mut ll = 0.0;
        for (index, (&x, &y)) in data.x.iter().zip(data.y.iter()).enumerate() {
            let z = linear_predictor(b0, b1, x, index)?;
            ll -= y * safe_softplus(-z) + (1.0 - y) * safe_softplus(z);
        }
        Ok(ll)
    }

    /// `θ` must have length 2 and finite entries.
    fn check(&self, theta: &Theta, _data: &Self::Data) -> OptResult<()> {
        validate_theta_input(theta, N_PARAMS)
    }

    /// `∇ℓ(β) = Σ (yᵢ − σ(zᵢ))·(1, xᵢ)`.
    fn grad(&self, theta: &Theta, data: &Self::Data) -> OptResult<Grad> {
        let (b0, b1) = (theta[0], theta[1]);
        let mut grad = Array1::zeros(N_PARAMS);
        for (index, (&x, &y)) in data.x.iter().zip(data.y.iter()).enumerate() {
            let resid = y - safe_logistic(linear_predictor(b0, b1, x, index)?);
            grad[0] += resid;
            grad[1] += resid * x;
        }
        Ok(grad)
    }
}

/// Fit an unregularized logistic regression of `y_data` on `x_data` and
/// return `P(y = 1)` at each of `x_vals_to_predict`, in the same order.
///
/// # Errors
/// - Any observation error of [`BinaryData::new`].
/// - [`FitError::SingleClass`] if `y_data` contains only one class.
/// - [`FitError::NonFiniteQuery`] for a non-finite query point.
/// - [`FitError::OptimizationFailed`] if the solver cannot run.
///
/// # Example
/// ```
/// use protection_curves::fit_logistic_regression;
///
/// let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [1.0, 1.0, 0.0, 1.0, 0.0, 0.0];
/// let p = fit_logistic_regression(&x, &y, &[0.0, 5.0])?;
/// assert!(p[0] > p[1]);
/// # Ok::<(), protection_curves::dose_response::errors::FitError>(())
/// ```
pub fn fit_logistic_regression(
    x_data: &[f64], y_data: &[f64], x_vals_to_predict: &[f64],
) -> FitResult<Array1<f64>> {
    validate_query_points(x_vals_to_predict)?;
    let data = BinaryData::from_slices(x_data, y_data)?;
    let mut model = LogisticModel::new(LogisticOptions::default());
    model.fit(&data)?;
    model.predict_proba(x_vals_to_predict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::loglik_optimizer::{MLEOptions, Tolerances, finite_diff::fd_gradient};
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // - Analytic gradient agrees with finite differences.
    // - Recovery of known coefficients from exact-proportion data, with the
    //   default and the Hager–Zhang configuration.
    // - Overflowing linear predictors are errors, not NaN.
    // - Separable data: finite, monotone, saturating predictions.
    // - Precondition errors (single class, unfitted model, bad queries).
    // -------------------------------------------------------------------------

    /// Grouped data where each level `x` carries `round(n·p(x))` positives,
    /// with `p(x) = σ(intercept + slope·x)`.
    fn exact_proportion_data(intercept: f64, slope: f64, n: usize) -> BinaryData {
        let truth = LogisticParams::new(intercept, slope);
        let mut x = Vec::new();
        let mut y = Vec::new();
        for level in -8..=8 {
            let xv = level as f64 * 0.5;
            let positives = (n as f64 * truth.probability(xv)).round() as usize;
            for i in 0..n {
                x.push(xv);
                y.push(if i < positives { 1.0 } else { 0.0 });
            }
        }
        BinaryData::from_slices(&x, &y).expect("synthetic data should be valid")
    }

    #[test]
    // Purpose
    // -------
    // The analytic gradient matches a finite-difference gradient of `value`.
    fn analytic_gradient_matches_finite_differences() {
        // Arrange
        let model = LogisticModel::default();
        let data = BinaryData::from_slices(&[-1.0, 0.0, 0.5, 2.0], &[1.0, 0.0, 1.0, 0.0])
            .expect("data should be valid");
        let theta = array![0.3, -0.4];

        // Act
        let analytic = model.grad(&theta, &data).expect("gradient should evaluate");
        let numeric = fd_gradient(&theta, |t: &Theta| Ok(model.value(t, &data)?))
            .expect("fd gradient should evaluate");

        // Assert
        assert_abs_diff_eq!(analytic[0], numeric[0], epsilon = 1e-6);
        assert_abs_diff_eq!(analytic[1], numeric[1], epsilon = 1e-6);
    }

    #[test]
    // Purpose
    // -------
    // The fit recovers the generating curve.
    //
    // Given
    // -----
    // - 17 predictor levels in [-4, 4], 400 observations each, with
    //   positives matching σ(1.0 − 0.8·x) up to rounding.
    //
    // Expect
    // ------
    // - Coefficients within 0.05 of the truth, predictions within 0.01.
    fn fit_recovers_known_coefficients() {
        // Arrange
        let data = exact_proportion_data(1.0, -0.8, 400);
        let mut model = LogisticModel::default();

        // Act
        model.fit(&data).expect("fit should succeed");
        let queries = [-4.0, -1.0, 0.0, 2.5, 4.0];
        let probs = model.predict_proba(&queries).expect("prediction should succeed");

        // Assert
        let params = model.fitted_params.expect("params are cached after fit");
        assert_abs_diff_eq!(params.intercept, 1.0, epsilon = 0.05);
        assert_abs_diff_eq!(params.slope, -0.8, epsilon = 0.05);
        let truth = LogisticParams::new(1.0, -0.8);
        for (&q, &p) in queries.iter().zip(probs.iter()) {
            assert_abs_diff_eq!(p, truth.probability(q), epsilon = 0.01);
        }
        assert!(model.results.is_some());
    }

    #[test]
    // Purpose
    // -------
    // A Hager–Zhang configuration still yields the maximum-likelihood fit.
    // On this data the Hager–Zhang line search overshoots to an overflowing
    // trial point; the fit must then fall back instead of keeping the
    // starting point.
    //
    // Given
    // -----
    // - 21 titer levels in [0, 8], 100 observations each, with positives
    //   matching σ(1.0 − 0.7·x) up to rounding.
    // - Hager–Zhang L-BFGS, memory 10, tolerances (1e-8, 1e-12, 500).
    //
    // Expect
    // ------
    // - A converged fit within 0.05 of (1.0, −0.7), not the start (0, 0).
    fn hager_zhang_configuration_recovers_known_coefficients() {
        // Arrange
        let truth = LogisticParams::new(1.0, -0.7);
        let mut x = Vec::new();
        let mut y = Vec::new();
        for level in 0..=20 {
            let xv = level as f64 * 0.4;
            let positives = (100.0 * truth.probability(xv)).round() as usize;
            for i in 0..100 {
                x.push(xv);
                y.push(if i < positives { 1.0 } else { 0.0 });
            }
        }
        let data = BinaryData::from_slices(&x, &y).expect("synthetic data should be valid");
        let tols = Tolerances::new(Some(1e-8), Some(1e-12), Some(500)).expect("valid tolerances");
        let mle_opts =
            MLEOptions::new(tols, LineSearcher::HagerZhang, Some(10)).expect("valid options");
        let mut model = LogisticModel::new(LogisticOptions::new(mle_opts));

        // Act
        model.fit(&data).expect("fit should succeed");

        // Assert
        let results = model.results.as_ref().expect("results are cached after fit");
        assert!(results.converged, "status: {}", results.status);
        let params = model.fitted_params.expect("params are cached after fit");
        assert_abs_diff_eq!(params.intercept, 1.0, epsilon = 0.05);
        assert_abs_diff_eq!(params.slope, -0.7, epsilon = 0.05);
        assert!(model.line_searcher_used.is_some());
    }

    #[test]
    // Purpose
    // -------
    // An overflowing linear predictor is reported with its observation index
    // by both `value` and `grad`.
    fn overflowing_linear_predictor_is_an_error() {
        let model = LogisticModel::default();
        let data = BinaryData::from_slices(&[-1.0, 2.0], &[1.0, 0.0]).expect("data is valid");
        let theta = array![0.0, f64::MAX];
        let expected = OptError::NonFiniteObservationTerm { index: 1, value: f64::INFINITY };

        assert_eq!(model.value(&theta, &data), Err(expected.clone()));
        assert_eq!(model.grad(&theta, &data), Err(expected));
        assert!(model.value(&array![0.0, 1e300], &data).expect("finite terms").is_finite());
    }

    #[test]
    // Purpose
    // -------
    // Perfectly separated classes still yield finite, monotone predictions
    // that approach 0 and 1 at the extremes.
    fn separable_data_gives_saturating_monotone_predictions() {
        let x = [-3.0, -2.0, -1.0, 1.0, 2.0, 3.0];
        let y = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0];

        let probs = fit_logistic_regression(&x, &y, &[-3.0, 0.0, 3.0]).expect("fit should succeed");

        assert!(probs.iter().all(|p| p.is_finite() && (0.0..=1.0).contains(p)));
        assert!(probs[0] < probs[1] && probs[1] < probs[2]);
        assert!(probs[0] < 0.01, "left tail: {}", probs[0]);
        assert!(probs[2] > 0.99, "right tail: {}", probs[2]);
    }

    #[test]
    fn fit_logistic_regression_preserves_query_order_and_handles_empty_queries() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0];

        let forward = fit_logistic_regression(&x, &y, &[0.0, 2.5, 5.0]).expect("fit succeeds");
        let reversed = fit_logistic_regression(&x, &y, &[5.0, 2.5, 0.0]).expect("fit succeeds");
        let empty = fit_logistic_regression(&x, &y, &[]).expect("fit succeeds");

        assert_abs_diff_eq!(forward[0], reversed[2], epsilon = 1e-12);
        assert_abs_diff_eq!(forward[2], reversed[0], epsilon = 1e-12);
        assert!(forward[0] < forward[2]);
        assert!(empty.is_empty());
    }

    #[test]
    fn preconditions_are_reported_as_fit_errors() {
        assert_eq!(
            fit_logistic_regression(&[0.0, 1.0], &[1.0, 1.0], &[0.5]),
            Err(FitError::SingleClass { class: 1.0 })
        );
        assert!(matches!(
            fit_logistic_regression(&[0.0, 1.0], &[0.0, 1.0], &[f64::NAN]),
            Err(FitError::NonFiniteQuery { index: 0, .. })
        ));
        assert_eq!(LogisticModel::default().predict_proba(&[0.0]), Err(FitError::ModelNotFitted));
    }
}
