//! optimization — MLE stack, numerical helpers, and unified error surface.
//!
//! Purpose
//! -------
//! Provide the optimization layer shared by the dose-response models. It
//! combines an Argmin-backed log-likelihood optimizer, numerically stable
//! probability transforms, and a single error/result surface. Callers
//! implement a log-likelihood, choose a solver configuration, and obtain
//! fitted parameters and diagnostics without touching backend solver
//! details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **maximizing log-likelihoods** `ℓ(θ)`
//!   (`loglik_optimizer`), either with gradient-based L-BFGS ([`maximize`])
//!   or with the derivative-free Nelder–Mead simplex
//!   ([`maximize_simplex`]).
//! - Supply shared numerical primitives (`numerical_stability`) for the
//!   logistic link, softplus, and probability clipping used inside
//!   Bernoulli likelihoods.
//! - Normalize configuration issues, numerical failures, and backend solver
//!   errors into a single enum (`errors::OptError`) with a common result
//!   alias (`OptResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Optimizers operate on a plain parameter vector `θ` and assume that
//!   inputs are finite once validation has passed; invalid states are
//!   reported as `OptError`, not panics.
//! - Log-likelihood implementations treat domain violations as recoverable
//!   errors surfaced through the optimization layer.
//!
//! Conventions
//! -----------
//! - All solvers conceptually maximize a log-likelihood `ℓ(θ)` by minimizing
//!   an internal cost `c(θ) = -ℓ(θ)`; user-facing APIs and outcomes are
//!   expressed in terms of `ℓ`.
//! - Parameters and gradients are represented using `ndarray`-based aliases
//!   (`Theta`, `Grad`).
//! - Public optimization entrypoints that can fail return `OptResult<T>`;
//!   callers never see raw Argmin errors.
//! - This layer does not log; the model layer decides what a
//!   non-converged run means and reports it.
//!
//! Downstream usage
//! ----------------
//! - Model types implement `LogLikelihood` and call `maximize` or
//!   `maximize_simplex` with a parameter guess, data payload, and options to
//!   obtain an `OptimOutcome`.
//! - Front-ends typically import the curated surface via
//!   `optimization::prelude::*`.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules focus on local concerns: solver wiring,
//!   tolerance handling, evaluation budgets, finite-difference fallbacks,
//!   and agreement of the stable transforms with naïve formulas.
//! - End-to-end fits are exercised through the model tests in
//!   `dose_response` and the integration tests.
//!
//! [`maximize`]: loglik_optimizer::maximize
//! [`maximize_simplex`]: loglik_optimizer::maximize_simplex

pub mod errors;
pub mod loglik_optimizer;
pub mod numerical_stability;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use protection_curves::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::loglik_optimizer::prelude::*;
    pub use super::numerical_stability::prelude::*;
}
