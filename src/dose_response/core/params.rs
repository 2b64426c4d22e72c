//! Model-space parameters for the dose-response models.
//!
//! Both models are fit in an optimizer vector `θ` and converted back into
//! named parameters here:
//!
//! - [`LogisticParams`]: `θ = (intercept, slope)`,
//!   `P(y = 1 | x) = σ(intercept + slope·x)`.
//! - [`ScaledLogitParams`]: `θ = (k, β0, β1)`,
//!   `f(x) = k / (1 + exp(β0 + β1·x)) = k·σ(−(β0 + β1·x))`.
//!
//! Evaluation goes through [`safe_logistic`], so neither curve overflows for
//! large `|x|`.
use crate::{
    dose_response::errors::{FitError, FitResult},
    optimization::{loglik_optimizer::Theta, numerical_stability::safe_logistic},
};
use ndarray::array;

/// Intercept and slope of a fitted logistic regression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticParams {
    pub intercept: f64,
    pub slope: f64,
}

impl LogisticParams {
    pub fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Read `(intercept, slope)` from an optimizer vector.
    ///
    /// # Errors
    /// [`FitError::ParamLengthMismatch`] unless `theta.len() == 2`.
    pub fn from_theta(theta: &Theta) -> FitResult<Self> {
        if theta.len() != 2 {
            return Err(FitError::ParamLengthMismatch { expected: 2, actual: theta.len() });
        }
        Ok(Self { intercept: theta[0], slope: theta[1] })
    }

    pub fn to_theta(&self) -> Theta {
        array![self.intercept, self.slope]
    }

    /// Linear predictor `intercept + slope·x`.
    #[inline]
    pub fn linear_predictor(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// `P(y = 1 | x)`.
    #[inline]
    pub fn probability(&self, x: f64) -> f64 {
        safe_logistic(self.linear_predictor(x))
    }
}

/// Scale and logistic coefficients of the scaled-logit curve.
///
/// `k` is the curve's upper asymptote as `β0 + β1·x → −∞`; with `β1 > 0`
/// the curve decreases from `k` towards `0` as `x` grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledLogitParams {
    pub k: f64,
    pub beta_0: f64,
    pub beta_1: f64,
}

impl ScaledLogitParams {
    pub fn new(k: f64, beta_0: f64, beta_1: f64) -> Self {
        Self { k, beta_0, beta_1 }
    }

    /// Read `(k, β0, β1)` from an optimizer vector.
    ///
    /// # Errors
    /// [`FitError::ParamLengthMismatch`] unless `theta.len() == 3`.
    pub fn from_theta(theta: &Theta) -> FitResult<Self> {
        if theta.len() != 3 {
            return Err(FitError::ParamLengthMismatch { expected: 3, actual: theta.len() });
        }
        Ok(Self { k: theta[0], beta_0: theta[1], beta_1: theta[2] })
    }

    pub fn to_theta(&self) -> Theta {
        array![self.k, self.beta_0, self.beta_1]
    }

    /// `k / (1 + exp(β0 + β1·x))`.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.k * safe_logistic(-(self.beta_0 + self.beta_1 * x))
    }
}

impl From<(f64, f64, f64)> for ScaledLogitParams {
    fn from((k, beta_0, beta_1): (f64, f64, f64)) -> Self {
        Self { k, beta_0, beta_1 }
    }
}

impl From<ScaledLogitParams> for (f64, f64, f64) {
    fn from(p: ScaledLogitParams) -> Self {
        (p.k, p.beta_0, p.beta_1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn theta_conversions_check_length() {
        let logistic = LogisticParams::from_theta(&array![-1.0, 2.0]).expect("length 2");
        assert_eq!(logistic, LogisticParams::new(-1.0, 2.0));
        assert_eq!(logistic.to_theta(), array![-1.0, 2.0]);
        assert_eq!(
            LogisticParams::from_theta(&array![1.0]),
            Err(FitError::ParamLengthMismatch { expected: 2, actual: 1 })
        );

        let scaled = ScaledLogitParams::from_theta(&array![0.5, -1.0, 1.0]).expect("length 3");
        assert_eq!(<(f64, f64, f64)>::from(scaled), (0.5, -1.0, 1.0));
        assert_eq!(ScaledLogitParams::from((0.5, -1.0, 1.0)).to_theta(), array![0.5, -1.0, 1.0]);
        assert_eq!(
            ScaledLogitParams::from_theta(&array![1.0, 2.0]),
            Err(FitError::ParamLengthMismatch { expected: 3, actual: 2 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Evaluation matches the closed forms at moderate arguments and stays
    // finite in the tails.
    fn evaluation_matches_closed_form_and_saturates() {
        let logistic = LogisticParams::new(0.3, -0.7);
        let z: f64 = 0.3 - 0.7 * 2.0;
        assert_relative_eq!(logistic.probability(2.0), 1.0 / (1.0 + (-z).exp()), epsilon = 1e-15);

        let scaled = ScaledLogitParams::new(0.8, -1.0, 0.5);
        let direct = 0.8 / (1.0 + (-1.0_f64 + 0.5 * 3.0).exp());
        assert_relative_eq!(scaled.evaluate(3.0), direct, epsilon = 1e-15);

        assert_eq!(scaled.evaluate(1e6), 0.0);
        assert_relative_eq!(scaled.evaluate(-1e6), 0.8);
    }
}
