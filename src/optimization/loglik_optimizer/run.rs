//! Execution helpers that run an `argmin` solver on a log-likelihood problem
//! and return a crate-friendly [`OptimOutcome`].
//!
//! - [`run_lbfgs`] drives the gradient-based path over an [`ArgMinAdapter`].
//! - [`run_simplex`] drives Nelder–Mead over a [`BudgetedAdapter`] and turns
//!   an exhausted evaluation budget into a non-converged outcome.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{
        Grad, LogLikelihood, MLEOptions, OptimOutcome, SimplexOptions, Theta,
        adapter::{ArgMinAdapter, BudgetedAdapter, EvalBudget},
        types::SimplexSolver,
    },
};
use argmin::core::{Executor, IterState, State, TerminationReason, TerminationStatus};

/// Run an L-BFGS-style solver on `problem`, starting at `theta0`.
///
/// `opts.tols.max_iter`, when set, caps the executor iterations. The result
/// carries ℓ(θ̂) (not the cost), the termination status, iteration and
/// evaluation counts, and the norm of the last gradient when available.
///
/// # Errors
/// - Any `argmin` runtime error (model errors raised inside the cost or
///   gradient), via `From<argmin::core::Error>`.
/// - [`OptError::SolverExit`] when L-BFGS stops itself, e.g. after a failed
///   line search; argmin reports that as a termination status, not an error.
/// - Validation errors from [`OptimOutcome::new`].
///
/// # Examples
/// ```ignore
/// let problem = ArgMinAdapter::new(&model, &data);
/// let solver  = build_optimizer_hager_zhang(&opts)?;
/// let out     = run_lbfgs(theta0.clone(), &opts, problem, solver)?;
/// ```
pub fn run_lbfgs<'a, F, S>(
    theta0: Theta, opts: &MLEOptions, problem: ArgMinAdapter<'a, F>, solver: S,
) -> OptResult<OptimOutcome>
where
    F: LogLikelihood,
    S: argmin::core::Solver<ArgMinAdapter<'a, F>, IterState<Theta, Grad, (), (), (), f64>>
        + 'static,
{
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(theta0));
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    if let TerminationStatus::Terminated(TerminationReason::SolverExit(reason)) = &termination {
        return Err(OptError::SolverExit { reason: reason.clone() });
    }
    let grad = result.take_gradient();
    OptimOutcome::new(
        result.take_best_param(),
        -result.get_best_cost(),
        termination,
        iterations,
        function_counts,
        grad,
    )
}

/// Run Nelder–Mead on `problem` under the iteration and evaluation caps of
/// `opts`.
///
/// `budget` must be the same [`EvalBudget`] the adapter was built with.
/// When the adapter reports `OptError::MaxFevReached`, the run is
/// abandoned and the best vertex recorded by the budget is returned via
/// [`OptimOutcome::budget_exhausted`] with `converged == false`.
///
/// # Errors
/// - Any other `argmin` runtime error or model error.
/// - Validation errors from [`OptimOutcome`] construction.
pub fn run_simplex<'a, F>(
    problem: BudgetedAdapter<'a, F>, solver: SimplexSolver, budget: &'a EvalBudget,
    opts: &SimplexOptions,
) -> OptResult<OptimOutcome>
where
    F: LogLikelihood,
{
    let max_iter = opts.max_iter as u64;
    let run = Executor::new(problem, solver).configure(|state| state.max_iters(max_iter)).run();
    match run {
        Ok(res) => {
            let mut result = res.state().clone();
            let iterations = result.get_iter();
            let function_counts = result.get_func_counts().clone();
            let termination = result.get_termination_status().clone();
            OptimOutcome::new(
                result.take_best_param(),
                -result.get_best_cost(),
                termination,
                iterations,
                function_counts,
                None,
            )
        }
        Err(e) => match OptError::from(e) {
            OptError::MaxFevReached { max_fev } => {
                OptimOutcome::budget_exhausted(budget.take_best(), budget.evaluations(), max_fev)
            }
            other => Err(other),
        },
    }
}
