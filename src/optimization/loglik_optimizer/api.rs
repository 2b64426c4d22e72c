//! High-level entry points for maximizing a `LogLikelihood`.
//!
//! - [`maximize`]: L-BFGS with the configured line search.
//! - [`maximize_with_fallback`]: [`maximize`], retried once with the other
//!   line search when the first run fails.
//! - [`maximize_simplex`]: derivative-free Nelder–Mead with an evaluation
//!   budget.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        OptimOutcome, Theta,
        adapter::{ArgMinAdapter, BudgetedAdapter, EvalBudget},
        builders::{build_optimizer_hager_zhang, build_optimizer_more_thuente, build_simplex},
        run::{run_lbfgs, run_simplex},
        traits::{LineSearcher, LogLikelihood, MLEOptions, SimplexOptions},
    },
};
use tracing::debug;

/// Maximize a log-likelihood `ℓ(θ)` using L-BFGS with the chosen line search.
///
/// # Behavior
/// - Validates the initial guess via `f.check(theta0, data)`.
/// - Exposes `c(θ) = -ℓ(θ)` to `argmin` through an `ArgMinAdapter`.
/// - Builds L-BFGS with **Hager–Zhang** or **More–Thuente** line search
///   from `opts.line_searcher` and runs it with `run_lbfgs`.
///
/// # Errors
/// - Propagates any error from `f.check`.
/// - Propagates builder errors from `build_optimizer_*`.
/// - Propagates runtime errors from `run_lbfgs` (e.g., line search failures).
///
/// # Example
/// ```no_run
/// use ndarray::array;
/// use protection_curves::optimization::errors::{OptError, OptResult};
/// use protection_curves::optimization::loglik_optimizer::{
///     LogLikelihood, MLEOptions, Theta, maximize,
/// };
///
/// struct Bowl;
/// impl LogLikelihood for Bowl {
///     type Data = ();
///     fn value(&self, theta: &Theta, _: &()) -> OptResult<f64> {
///         Ok(-theta.dot(theta))
///     }
///     fn check(&self, _: &Theta, _: &()) -> OptResult<()> {
///         Ok(())
///     }
/// }
///
/// let out = maximize(&Bowl, array![0.1, -0.2, 0.3], &(), &MLEOptions::default())?;
/// println!("θ̂ = {:?}", out.theta_hat);
/// # Ok::<(), OptError>(())
/// ```
pub fn maximize<F: LogLikelihood>(
    f: &F, theta0: Theta, data: &F::Data, opts: &MLEOptions,
) -> OptResult<OptimOutcome> {
    f.check(&theta0, data)?;
    let problem = ArgMinAdapter::new(f, data);
    match opts.line_searcher {
        LineSearcher::MoreThuente => {
            let solver = build_optimizer_more_thuente(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
        LineSearcher::HagerZhang => {
            let solver = build_optimizer_hager_zhang(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
    }
}

/// [`maximize`], retried once with `opts.line_searcher.alternate()` if the
/// first run fails.
///
/// Returns the outcome together with the line search that produced it. The
/// first failure is logged at `debug`; only the retry's error is returned.
pub fn maximize_with_fallback<F: LogLikelihood>(
    f: &F, theta0: Theta, data: &F::Data, opts: &MLEOptions,
) -> OptResult<(OptimOutcome, LineSearcher)> {
    match maximize(f, theta0.clone(), data, opts) {
        Ok(outcome) => Ok((outcome, opts.line_searcher)),
        Err(err) => {
            let retry = opts.with_line_searcher(opts.line_searcher.alternate());
            debug!(
                error = %err,
                retry_line_searcher = ?retry.line_searcher,
                "L-BFGS run failed, retrying with alternate line search"
            );
            let outcome = maximize(f, theta0, data, &retry)?;
            Ok((outcome, retry.line_searcher))
        }
    }
}

/// Maximize a log-likelihood `ℓ(θ)` with Nelder–Mead, without gradients.
///
/// # Behavior
/// - Validates the initial guess via `f.check(theta0, data)`.
/// - Builds the initial simplex around `theta0` (see
///   [`initial_simplex`](super::builders::initial_simplex)).
/// - Runs until the vertex costs agree within `opts.tol_cost`, or
///   `opts.max_iter` iterations, or `opts.max_fev` cost evaluations,
///   whichever comes first.
///
/// Hitting either cap is not an error: the outcome carries the best point
/// found and `converged == false`.
///
/// # Errors
/// - Propagates any error from `f.check` or from the model's `value`.
/// - Propagates builder errors from `build_simplex`.
pub fn maximize_simplex<F: LogLikelihood>(
    f: &F, theta0: Theta, data: &F::Data, opts: &SimplexOptions,
) -> OptResult<OptimOutcome> {
    f.check(&theta0, data)?;
    let solver = build_simplex(&theta0, opts)?;
    let budget = EvalBudget::new(opts.max_fev);
    let problem = BudgetedAdapter::new(f, data, &budget);
    run_simplex(problem, solver, &budget, opts)
}
