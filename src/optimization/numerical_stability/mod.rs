//! numerical_stability — numerically robust transforms for Bernoulli models.
//!
//! Purpose
//! -------
//! Collect the scalar transforms shared by the logistic and scaled-logistic
//! likelihoods, together with the probability clipping margin, so the rest
//! of the crate can assume well-conditioned `f64` arithmetic.
//!
//! Key behaviors
//! -------------
//! - Provide a stable logistic link (`safe_logistic`) and softplus
//!   (`safe_softplus`) that never overflow.
//! - Centralize the clipping margin `PROB_EPS` and the `clip_probability`
//!   helper used before taking logarithms of model probabilities.
//!
//! Conventions
//! -----------
//! - All routines are pure scalar functions; vectorization happens at the
//!   call site with `ndarray` iterators or `mapv`.
//! - This module never logs, performs I/O, or touches global state.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] cover agreement with naïve formulas on
//!   safe grids, tail behavior, symmetry, and clipping bounds.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{PROB_EPS, clip_probability, safe_logistic, safe_softplus};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::transformations::{PROB_EPS, clip_probability, safe_logistic, safe_softplus};
}
