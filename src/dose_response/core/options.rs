//! Dose-response options — configuration for the two model fits.
//!
//! Purpose
//! -------
//! Keep solver settings and fit hyper-parameters out of the model code so
//! call sites pass explicit, validated options.
//!
//! Key behaviors
//! -------------
//! - [`LogisticOptions`] wraps the L-BFGS [`MLEOptions`] used by the
//!   unregularized logistic regression.
//! - [`ScaledLogitOptions`] bundles the L2 penalty on `β1`, the starting
//!   point `(k, β0, β1)`, and the Nelder–Mead [`SimplexOptions`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Component option types are validated by their own constructors;
//!   [`ScaledLogitOptions::new`] only checks `lambda_reg` and the initial
//!   guess.
//!
//! Testing notes
//! -------------
//! - Unit tests check the documented defaults and each rejection path of
//!   [`ScaledLogitOptions::new`].
use crate::{
    dose_response::{
        core::{
            params::ScaledLogitParams,
            validation::{validate_initial_guess, validate_lambda},
        },
        errors::FitResult,
    },
    optimization::loglik_optimizer::{LineSearcher, MLEOptions, SimplexOptions, Tolerances},
};

/// Default L2 penalty on `β1` for the scaled-logit fit.
pub const DEFAULT_LAMBDA_REG: f64 = 0.1;

/// Default `(k, β0, β1)` starting point for the scaled-logit fit.
pub const DEFAULT_INITIAL_GUESS: (f64, f64, f64) = (0.5, -1.0, 1.0);

/// Options for the logistic-regression fit.
///
/// Default: L-BFGS with More–Thuente line search, gradient tolerance `1e-8`,
/// cost-change tolerance `1e-12`, at most `1000` iterations, started from
/// `θ = (0, 0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticOptions {
    pub mle_opts: MLEOptions,
}

impl LogisticOptions {
    pub fn new(mle_opts: MLEOptions) -> Self {
        Self { mle_opts }
    }
}

impl Default for LogisticOptions {
    fn default() -> Self {
        Self {
            mle_opts: MLEOptions {
                tols: Tolerances {
                    tol_grad: Some(1e-8),
                    tol_cost: Some(1e-12),
                    max_iter: Some(1000),
                },
                line_searcher: LineSearcher::MoreThuente,
                lbfgs_mem: None,
            },
        }
    }
}

/// Options for the scaled-logit fit.
///
/// - `lambda_reg`: L2 penalty `λ` applied as `λ·β1²`; finite and `>= 0`.
/// - `initial_guess`: starting `(k, β0, β1)`; finite.
/// - `simplex`: Nelder–Mead tolerances and caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledLogitOptions {
    pub lambda_reg: f64,
    pub initial_guess: ScaledLogitParams,
    pub simplex: SimplexOptions,
}

impl ScaledLogitOptions {
    /// Construct validated options.
    ///
    /// # Errors
    /// - `FitError::InvalidLambda` for a negative or non-finite `lambda_reg`.
    /// - `FitError::InvalidInitialGuess` for a non-finite coordinate.
    pub fn new(
        lambda_reg: f64, initial_guess: (f64, f64, f64), simplex: SimplexOptions,
    ) -> FitResult<Self> {
        validate_lambda(lambda_reg)?;
        validate_initial_guess(initial_guess)?;
        Ok(Self { lambda_reg, initial_guess: initial_guess.into(), simplex })
    }
}

impl Default for ScaledLogitOptions {
    fn default() -> Self {
        Self {
            lambda_reg: DEFAULT_LAMBDA_REG,
            initial_guess: DEFAULT_INITIAL_GUESS.into(),
            simplex: SimplexOptions::default(),
        }
    }
}
