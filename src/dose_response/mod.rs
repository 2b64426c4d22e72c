//! dose_response — binary-outcome curve fitting: data, models, and errors.
//!
//! Purpose
//! -------
//! Fit probability curves of a binary outcome (e.g. infection) against a
//! continuous predictor (e.g. antibody titer). This is the main entry point
//! for correlate-of-protection curve fitting in the crate.
//!
//! Key behaviors
//! -------------
//! - Collect validated observation data, parameter types, options, and input
//!   checks in [`core`].
//! - Expose the logistic-regression and scaled-logit models in [`models`],
//!   both fitted through the shared `optimization` layer.
//! - Centralize errors in [`errors`] (`FitError`, `FitResult`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Observations are carried in validated [`BinaryData`]: equal-length,
//!   non-empty, finite predictors, outcomes in `{0, 1}`.
//! - Optimizer vectors are `θ = (intercept, slope)` for the logistic model
//!   and `θ = (k, β0, β1)` for the scaled logit; both live unconstrained.
//!
//! Conventions
//! -----------
//! - Predictions are returned as `Array1<f64>` aligned with the query order.
//! - No I/O. The only logging is a `warn!` when a scaled-logit fit stops on a
//!   cap and `debug!` events on the logistic fallback path.
//!
//! Downstream usage
//! ----------------
//! - One-shot use: [`fit_logistic_regression`] and [`fit_scaled_logit`].
//! - Repeated use or diagnostics: construct [`LogisticModel`] /
//!   [`ScaledLogitModel`] with explicit options, call `fit`, and inspect
//!   `results` (an `OptimOutcome`) and `fitted_params`.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    BinaryData, DEFAULT_INITIAL_GUESS, DEFAULT_LAMBDA_REG, LogisticOptions, LogisticParams,
    ScaledLogitOptions, ScaledLogitParams,
};
pub use self::errors::{FitError, FitResult};
pub use self::models::{
    LogisticModel, ScaledLogitModel, fit_logistic_regression, fit_scaled_logit,
    neg_log_likelihood, scaled_logit, scaled_logit_curve,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
//     use protection_curves::dose_response::prelude::*;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::errors::{FitError, FitResult};
    pub use super::models::prelude::*;
}
