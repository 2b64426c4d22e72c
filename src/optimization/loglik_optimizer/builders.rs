//! loglik_optimizer::builders — solver construction helpers.
//!
//! Purpose
//! -------
//! Build the two solver families used by the optimizer layer from crate
//! options, so the runners never touch Argmin configuration directly.
//!
//! Key behaviors
//! -------------
//! - L-BFGS with either Hager–Zhang or More–Thuente line search, with
//!   optional gradient and cost-change tolerances applied by
//!   [`configure_lbfgs`].
//! - Nelder–Mead from an initial simplex built around a starting point by
//!   [`initial_simplex`], with the cost-spread tolerance from
//!   [`SimplexOptions`].
//!
//! Conventions
//! -----------
//! - Builders never set `max_iters`; the runners apply iteration caps on
//!   the executor state.
//! - Argmin configuration errors surface as [`OptError`] through
//!   `From<argmin::core::Error>`.
//!
//! [`OptError`]: crate::optimization::errors::OptError
use argmin::solver::quasinewton::LBFGS;

use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        traits::{MLEOptions, SimplexOptions},
        types::{
            Cost, DEFAULT_LBFGS_MEM, Grad, HagerZhangLS, LbfgsHagerZhang, LbfgsMoreThuente,
            MoreThuenteLS, SIMPLEX_NONZERO_DELTA, SIMPLEX_ZERO_DELTA, SimplexSolver, Theta,
        },
    },
};

/// Construct L-BFGS with Hager–Zhang line search.
///
/// Uses `opts.lbfgs_mem` (or [`DEFAULT_LBFGS_MEM`]) as history size and
/// applies the tolerances in `opts.tols`.
///
/// # Errors
/// Any tolerance Argmin rejects, as an `OptError`.
pub fn build_optimizer_hager_zhang(opts: &MLEOptions) -> OptResult<LbfgsHagerZhang> {
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    configure_lbfgs(LbfgsHagerZhang::new(HagerZhangLS::new(), mem), opts)
}

/// Construct L-BFGS with More–Thuente line search.
///
/// Same wiring as [`build_optimizer_hager_zhang`].
pub fn build_optimizer_more_thuente(opts: &MLEOptions) -> OptResult<LbfgsMoreThuente> {
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    configure_lbfgs(LbfgsMoreThuente::new(MoreThuenteLS::new(), mem), opts)
}

/// Apply the optional tolerances of `opts` to an L-BFGS solver of any
/// line-search type. Absent tolerances leave Argmin's defaults in place.
pub fn configure_lbfgs<L>(
    mut solver: LBFGS<L, Theta, Grad, Cost>, opts: &MLEOptions,
) -> OptResult<LBFGS<L, Theta, Grad, Cost>> {
    if let Some(g) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(g)?;
    }
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_tolerance_cost(c)?;
    }
    Ok(solver)
}

/// Initial simplex around `theta0`: the point itself followed by one vertex
/// per coordinate.
///
/// Vertex `i + 1` equals `theta0` with coordinate `i` scaled by
/// `1 + SIMPLEX_NONZERO_DELTA`, or set to `SIMPLEX_ZERO_DELTA` when that
/// coordinate is exactly zero.
pub fn initial_simplex(theta0: &Theta) -> Vec<Theta> {
    let mut vertices = Vec::with_capacity(theta0.len() + 1);
    vertices.push(theta0.clone());
    for i in 0..theta0.len() {
        let mut vertex = theta0.clone();
        vertex[i] = if vertex[i] != 0.0 {
            (1.0 + SIMPLEX_NONZERO_DELTA) * vertex[i]
        } else {
            SIMPLEX_ZERO_DELTA
        };
        vertices.push(vertex);
    }
    vertices
}

/// Construct a Nelder–Mead solver starting from [`initial_simplex`] of
/// `theta0`, stopping once the standard deviation of the vertex costs drops
/// below `opts.tol_cost`.
///
/// # Errors
/// Any tolerance Argmin rejects, as an `OptError`.
pub fn build_simplex(theta0: &Theta, opts: &SimplexOptions) -> OptResult<SimplexSolver> {
    let solver = SimplexSolver::new(initial_simplex(theta0)).with_sd_tolerance(opts.tol_cost)?;
    Ok(solver)
}
