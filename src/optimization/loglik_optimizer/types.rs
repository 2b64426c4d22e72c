//! Numeric aliases and solver wiring shared by the optimizer layer.
//!
//! Parameter vectors and gradients are `Array1<f64>`; the cost is a plain
//! `f64` and always means `c(θ) = −ℓ(θ)`. The solver aliases pin argmin's
//! generics once: L-BFGS per line search, and Nelder–Mead for the
//! derivative-free path. The simplex constants define how the starting
//! simplex is spread around `θ₀`.
use argmin::solver::{
    linesearch::{HagerZhangLineSearch, MoreThuenteLineSearch},
    neldermead::NelderMead,
    quasinewton::LBFGS,
};
use ndarray::Array1;
use std::collections::HashMap;

/// Parameter vector `θ` for log-likelihood optimization.
pub type Theta = Array1<f64>;

/// Gradient vector `∇ℓ(θ)` or `∇c(θ)`, matching the shape of `Theta`.
pub type Grad = Array1<f64>;

/// Solver-side objective, `c(θ) = −ℓ(θ)`.
pub type Cost = f64;

/// argmin's evaluation counters, keyed by name (`"cost_count"`, ...).
pub type FnEvalMap = HashMap<String, u64>;

/// Default history size (`m`) for L-BFGS runs.
pub const DEFAULT_LBFGS_MEM: usize = 7;

/// Relative perturbation applied to non-zero coordinates when building the
/// initial simplex around a starting point.
pub const SIMPLEX_NONZERO_DELTA: f64 = 0.05;

/// Absolute offset used for coordinates that start at exactly zero.
pub const SIMPLEX_ZERO_DELTA: f64 = 0.00025;

/// Hager–Zhang line search specialized to this crate’s numeric types.
pub type HagerZhangLS = HagerZhangLineSearch<Theta, Grad, Cost>;

/// More–Thuente line search specialized to this crate’s numeric types.
pub type MoreThuenteLS = MoreThuenteLineSearch<Theta, Grad, Cost>;

/// L-BFGS solver wired to the Hager–Zhang line search.
pub type LbfgsHagerZhang = LBFGS<HagerZhangLS, Theta, Grad, Cost>;

/// L-BFGS solver wired to the More–Thuente line search.
pub type LbfgsMoreThuente = LBFGS<MoreThuenteLS, Theta, Grad, Cost>;

/// Derivative-free Nelder–Mead simplex over `Theta`.
pub type SimplexSolver = NelderMead<Theta, Cost>;
