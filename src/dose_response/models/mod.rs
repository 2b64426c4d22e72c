//! dose_response::models — the two fitted probability curves.
//!
//! Purpose
//! -------
//! Expose the user-facing dose-response models, each implementing
//! [`LogLikelihood`](crate::optimization::loglik_optimizer::LogLikelihood)
//! so it plugs into the shared optimizer layer.
//!
//! Key behaviors
//! -------------
//! - [`logistic`]: [`LogisticModel`] (L-BFGS, analytic gradient) and the
//!   one-shot [`fit_logistic_regression`].
//! - [`scaled_logit`]: [`ScaledLogitModel`] (Nelder–Mead, penalized
//!   likelihood), the curve functions [`scaled_logit`](fn@scaled_logit) /
//!   [`scaled_logit_curve`], the objective [`neg_log_likelihood`], and the
//!   one-shot [`fit_scaled_logit`].
//!
//! Testing notes
//! -------------
//! - Each model module tests `LogLikelihood` conformance, recovery of known
//!   parameters from exact-proportion synthetic data, and precondition
//!   errors.

pub mod logistic;
pub mod scaled_logit;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::logistic::{LogisticModel, fit_logistic_regression};
pub use self::scaled_logit::{
    ScaledLogitModel, fit_scaled_logit, neg_log_likelihood, scaled_logit, scaled_logit_curve,
};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::logistic::{LogisticModel, fit_logistic_regression};
    pub use super::scaled_logit::{
        ScaledLogitModel, fit_scaled_logit, scaled_logit, scaled_logit_curve,
    };
}
