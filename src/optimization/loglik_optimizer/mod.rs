//! loglik_optimizer — MLE-friendly, argmin-powered log-likelihood optimizer.
//!
//! Purpose
//! -------
//! Provide an Argmin-backed layer for **maximizing log-likelihoods** `ℓ(θ)`.
//! Models implement a single trait, [`LogLikelihood`], and call either
//! [`maximize`] (L-BFGS, analytic or finite-difference gradients) or
//! [`maximize_simplex`] (derivative-free Nelder–Mead).
//!
//! Key behaviors
//! -------------
//! - Convert log-likelihoods `ℓ(θ)` into Argmin cost functions
//!   `c(θ) = -ℓ(θ)` via [`adapter::ArgMinAdapter`].
//! - [`maximize`]:
//!   - validates the initial guess with [`LogLikelihood::check`],
//!   - selects an L-BFGS solver via [`builders`] based on [`LineSearcher`],
//!   - executes it via [`run::run_lbfgs`] and normalizes the result into an
//!     [`OptimOutcome`].
//!   A solver-side exit (e.g. a failed line search) is an error, not an
//!   outcome.
//! - [`maximize_with_fallback`]: [`maximize`], retried once with
//!   [`LineSearcher::alternate`] after a failure.
//! - [`maximize_simplex`]:
//!   - builds an initial simplex around the starting point,
//!   - meters cost evaluations through [`adapter::BudgetedAdapter`],
//!   - returns the best vertex as a non-converged [`OptimOutcome`] when the
//!     iteration or evaluation cap is hit.
//! - [`finite_diff`] supplies gradients for models that do not override
//!   [`LogLikelihood::grad`]. It is a generic facility of the L-BFGS path;
//!   the dose-response models either have analytic gradients or use the
//!   simplex.
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer **always maximizes** `ℓ(θ)` by minimizing `c(θ) = -ℓ(θ)`;
//!   models implement `ℓ(θ)` and `∇ℓ(θ)`, never the cost.
//! - [`LogLikelihood::value`] and [`LogLikelihood::grad`] report invalid
//!   inputs as [`OptError`](crate::optimization::errors::OptError) values,
//!   not panics.
//! - Configuration types ([`Tolerances`], [`MLEOptions`], [`SimplexOptions`])
//!   are validated on construction.
//!
//! Conventions
//! -----------
//! - Parameters are [`Theta`] (`Array1<f64>`); any mapping between
//!   constrained and unconstrained space belongs to the model layer.
//! - [`OptimOutcome::value`] is always expressed as `ℓ`, not as the cost.
//! - Errors bubble up as `OptResult<T>`; nothing here panics or uses
//!   `unsafe`.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover sign conventions and budget accounting
//!   ([`adapter`]), solver and simplex construction ([`builders`]),
//!   finite differences ([`finite_diff`]), option and outcome invariants
//!   ([`traits`], [`validation`]), and end-to-end runs of both entry
//!   points on toy objectives ([`api`]).

pub mod adapter;
pub mod api;
pub mod builders;
pub mod finite_diff;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::{maximize, maximize_simplex, maximize_with_fallback};
pub use self::traits::{
    LineSearcher, LogLikelihood, MLEOptions, OptimOutcome, SimplexOptions, Tolerances,
};
pub use self::types::{Cost, DEFAULT_LBFGS_MEM, FnEvalMap, Grad, Theta};

// ---- Optional convenience prelude for downstream crates -------------------
//
//     use protection_curves::optimization::loglik_optimizer::prelude::*;

pub mod prelude {
    pub use super::api::{maximize, maximize_simplex, maximize_with_fallback};
    pub use super::traits::{
        LineSearcher, LogLikelihood, MLEOptions, OptimOutcome, SimplexOptions, Tolerances,
    };
    pub use super::types::{Cost, Grad, Theta};
}
