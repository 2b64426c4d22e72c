//! Model-facing trait and configuration types of the optimizer layer.
//!
//! - [`LogLikelihood`]: implemented by each fitted model.
//! - [`MLEOptions`] and [`Tolerances`]: configuration for the L-BFGS path.
//! - [`SimplexOptions`]: configuration for the Nelder–Mead path.
//! - [`LineSearcher`]: choice of line search used by L-BFGS.
//! - [`OptimOutcome`]: normalized result returned by `maximize` and
//!   `maximize_simplex`.
//!
//! Models report `ℓ(θ)` and, optionally, `∇ℓ(θ)`. Solvers see the cost
//! `c(θ) = −ℓ(θ)`; the sign flip lives in the adapters only.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{
        Cost, FnEvalMap, Grad, Theta,
        validation::{
            validate_theta_hat, validate_value, verify_max_fev, verify_tol_cost, verify_tol_grad,
        },
    },
};
use argmin::core::{TerminationReason, TerminationStatus};
use argmin_math::ArgminL2Norm;
use std::str::FromStr;

/// A log-likelihood `ℓ(θ)` over observations of type `Data`.
///
/// - `value`: `ℓ(θ)` itself (not the cost).
/// - `check`: run once on the starting point before any solver is built;
///   reject a `θ` of the wrong length or with non-finite entries here.
/// - `grad`: `∇ℓ(θ)`. The default reports `GradientNotImplemented`, which
///   makes the L-BFGS path fall back to finite differences. Nelder–Mead
///   never calls it.
pub trait LogLikelihood {
    type Data: 'static;

    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost>;
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()>;

    fn grad(&self, _theta: &Theta, _data: &Self::Data) -> OptResult<Grad> {
        Err(OptError::GradientNotImplemented)
    }
}

/// Line search inside L-BFGS.
///
/// Parses case-insensitively from `"MoreThuente"` / `"HagerZhang"`; any
/// other name is `OptError::InvalidLineSearch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSearcher {
    MoreThuente,
    HagerZhang,
}

impl LineSearcher {
    /// The other line search, used when a run is retried after a
    /// line-search failure.
    pub fn alternate(self) -> Self {
        match self {
            LineSearcher::MoreThuente => LineSearcher::HagerZhang,
            LineSearcher::HagerZhang => LineSearcher::MoreThuente,
        }
    }
}

impl FromStr for LineSearcher {
    type Err = OptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morethuente" => Ok(LineSearcher::MoreThuente),
            "hagerzhang" => Ok(LineSearcher::HagerZhang),
            _ => Err(OptError::InvalidLineSearch {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'MoreThuente' or 'HagerZhang'.",
            }),
        }
    }
}

/// L-BFGS configuration: stopping rules, line search, and history size
/// (`None` means [`DEFAULT_LBFGS_MEM`](super::types::DEFAULT_LBFGS_MEM)).
///
/// The default stops at a gradient norm of `1e-6` or after 300 iterations,
/// with More–Thuente. Models override this through their own options.
#[derive(Debug, Clone, PartialEq)]
pub struct MLEOptions {
    pub tols: Tolerances,
    pub line_searcher: LineSearcher,
    pub lbfgs_mem: Option<usize>,
}

impl MLEOptions {
    /// Tolerances arrive already validated; only the memory is checked.
    ///
    /// # Errors
    /// - [`OptError::InvalidLBFGSMem`] if `lbfgs_mem == Some(0)`.
    pub fn new(
        tols: Tolerances, line_searcher: LineSearcher, lbfgs_mem: Option<usize>,
    ) -> OptResult<Self> {
        if let Some(m) = lbfgs_mem {
            if m == 0 {
                return Err(OptError::InvalidLBFGSMem {
                    mem: m,
                    reason: "L-BFGS memory must be greater than zero.",
                });
            }
        }
        Ok(Self { tols, line_searcher, lbfgs_mem })
    }

    /// Same options with a different line search.
    pub fn with_line_searcher(&self, line_searcher: LineSearcher) -> Self {
        Self { line_searcher, ..self.clone() }
    }
}

impl Default for MLEOptions {
    fn default() -> Self {
        Self {
            tols: Tolerances { tol_grad: Some(1e-6), tol_cost: None, max_iter: Some(300) },
            line_searcher: LineSearcher::MoreThuente,
            lbfgs_mem: None,
        }
    }
}

/// Stopping rules for L-BFGS: gradient norm, cost change between
/// iterations, and an iteration cap. Each is optional, but a run needs at
/// least one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_grad: Option<f64>,
    pub tol_cost: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// # Errors
    /// - [`OptError::NoTolerancesProvided`] if all three are `None`.
    /// - [`OptError::InvalidTolGrad`] / [`OptError::InvalidTolCost`] for
    ///   non-finite or non-positive tolerances.
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(
        tol_grad: Option<f64>, tol_cost: Option<f64>, max_iter: Option<usize>,
    ) -> OptResult<Self> {
        if tol_grad.is_none() && tol_cost.is_none() && max_iter.is_none() {
            return Err(OptError::NoTolerancesProvided);
        }
        verify_tol_cost(tol_cost)?;
        verify_tol_grad(tol_grad)?;
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(OptError::InvalidMaxIter {
                    max_iter,
                    reason: "Maximum iterations must be greater than zero.",
                });
            }
        }
        Ok(Self { tol_grad, tol_cost, max_iter })
    }
}

/// Configuration for the Nelder–Mead path.
///
/// - `tol_cost`: stop once the standard deviation of the cost over the
///   simplex vertices falls below this value.
/// - `max_iter`: cap on simplex iterations.
/// - `max_fev`: cap on cost evaluations; when it is hit the best vertex seen
///   so far is returned as a non-converged outcome.
///
/// Default: `tol_cost = 1e-10`, `max_iter = 10_000`, `max_fev = 20_000`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplexOptions {
    pub tol_cost: f64,
    pub max_iter: usize,
    pub max_fev: usize,
}

impl SimplexOptions {
    /// Construct validated simplex options.
    ///
    /// # Errors
    /// - [`OptError::InvalidTolCost`] for a non-finite or non-positive tolerance.
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    /// - [`OptError::InvalidMaxFev`] if `max_fev == 0`.
    pub fn new(tol_cost: f64, max_iter: usize, max_fev: usize) -> OptResult<Self> {
        verify_tol_cost(Some(tol_cost))?;
        if max_iter == 0 {
            return Err(OptError::InvalidMaxIter {
                max_iter,
                reason: "Maximum iterations must be greater than zero.",
            });
        }
        verify_max_fev(max_fev)?;
        Ok(Self { tol_cost, max_iter, max_fev })
    }
}

impl Default for SimplexOptions {
    fn default() -> Self {
        Self { tol_cost: 1e-10, max_iter: 10_000, max_fev: 20_000 }
    }
}

/// Canonical result returned by `maximize` and `maximize_simplex`.
///
/// - `theta_hat`: best parameter vector found.
/// - `value`: best **log-likelihood** value `ℓ(θ)` (not the cost).
/// - `converged`: `true` only if the solver stopped on its own convergence
///   criterion (not on an iteration or evaluation cap).
/// - `status`: human-readable termination status string.
/// - `iterations`: number of optimizer iterations performed.
/// - `fn_evals`: function-evaluation counters (`cost_count`, `gradient_count`, ...).
/// - `grad_norm`: norm of the last available gradient, if present.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOutcome {
    pub theta_hat: Theta,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
    pub grad_norm: Option<f64>,
}

impl OptimOutcome {
    /// Build a validated [`OptimOutcome`] from raw solver state.
    ///
    /// Performs:
    /// - `theta_hat` check via `validate_theta_hat` (present and all finite).
    /// - `value` check via `validate_value` (finite).
    /// - Maps `TerminationStatus` into `(converged, status)`.
    /// - Computes `grad_norm` if a gradient was provided.
    ///
    /// # Errors
    /// - Propagates any validation errors for `theta_hat` or `value`.
    pub fn new(
        theta_hat_opt: Option<Theta>, value: f64, termination: TerminationStatus, iterations: u64,
        fn_evals: FnEvalMap, grad: Option<Grad>,
    ) -> OptResult<Self> {
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        validate_value(value)?;
        let converged = matches!(
            termination,
            TerminationStatus::Terminated(
                TerminationReason::SolverConverged | TerminationReason::TargetCostReached
            )
        );
        let status = match termination {
            TerminationStatus::NotTerminated => "Not terminated".to_string(),
            _ => format!("{termination:?}"),
        };
        let iterations = iterations as usize;
        let grad_norm = grad.map(|g| g.l2_norm());
        Ok(Self { theta_hat, value, converged, status, iterations, fn_evals, grad_norm })
    }

    /// Build a non-converged outcome from the best point seen before an
    /// evaluation budget ran out.
    ///
    /// The executor is torn down when the budget error is raised, so the
    /// iteration counter is not available and is reported as `0`.
    ///
    /// # Errors
    /// - Propagates validation errors for `theta_hat` or `value`.
    pub fn budget_exhausted(
        best: Option<(Theta, Cost)>, evaluations: usize, max_fev: usize,
    ) -> OptResult<Self> {
        let (theta_hat_opt, cost) = match best {
            Some((theta, cost)) => (Some(theta), cost),
            None => (None, f64::NAN),
        };
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        let value = -cost;
        validate_value(value)?;
        let mut fn_evals = FnEvalMap::new();
        fn_evals.insert("cost_count".to_string(), evaluations as u64);
        Ok(Self {
            theta_hat,
            value,
            converged: false,
            status: OptError::MaxFevReached { max_fev }.to_string(),
            iterations: 0,
            fn_evals,
            grad_norm: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // - Validation rules of `Tolerances::new`, `MLEOptions::new`,
    //   `SimplexOptions::new`.
    // - `LineSearcher` parsing and alternation.
    // - Mapping of termination statuses into `OptimOutcome::converged`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // `Tolerances::new` rejects an all-`None` configuration and
    // non-positive values.
    fn tolerances_new_rejects_invalid_configurations() {
        assert_eq!(Tolerances::new(None, None, None), Err(OptError::NoTolerancesProvided));
        assert!(matches!(
            Tolerances::new(Some(-1.0), None, None),
            Err(OptError::InvalidTolGrad { .. })
        ));
        assert!(matches!(
            Tolerances::new(None, Some(f64::NAN), None),
            Err(OptError::InvalidTolCost { .. })
        ));
        assert!(matches!(Tolerances::new(None, None, Some(0)), Err(OptError::InvalidMaxIter { .. })));
        assert!(Tolerances::new(Some(1e-8), None, Some(1000)).is_ok());
    }

    #[test]
    fn mle_options_new_rejects_zero_memory() {
        let tols = Tolerances::new(Some(1e-6), None, Some(10)).expect("valid tolerances");
        assert!(matches!(
            MLEOptions::new(tols, LineSearcher::HagerZhang, Some(0)),
            Err(OptError::InvalidLBFGSMem { mem: 0, .. })
        ));
        let opts = MLEOptions::new(tols, LineSearcher::HagerZhang, Some(5)).expect("valid options");
        assert_eq!(opts.with_line_searcher(LineSearcher::MoreThuente).lbfgs_mem, Some(5));
    }

    #[test]
    // Purpose
    // -------
    // The simplex defaults mirror the documented budget and the
    // constructor validates each field.
    fn simplex_options_defaults_and_validation() {
        let defaults = SimplexOptions::default();
        assert_eq!(defaults.tol_cost, 1e-10);
        assert_eq!(defaults.max_iter, 10_000);
        assert_eq!(defaults.max_fev, 20_000);

        assert!(matches!(SimplexOptions::new(0.0, 10, 10), Err(OptError::InvalidTolCost { .. })));
        assert!(matches!(SimplexOptions::new(1e-8, 0, 10), Err(OptError::InvalidMaxIter { .. })));
        assert!(matches!(SimplexOptions::new(1e-8, 10, 0), Err(OptError::InvalidMaxFev { .. })));
        assert!(SimplexOptions::new(1e-8, 10, 10).is_ok());
    }

    #[test]
    fn line_searcher_parses_case_insensitively_and_alternates() {
        assert_eq!("HAGERZHANG".parse::<LineSearcher>(), Ok(LineSearcher::HagerZhang));
        assert_eq!("moreThuente".parse::<LineSearcher>(), Ok(LineSearcher::MoreThuente));
        assert!(matches!(
            "backtracking".parse::<LineSearcher>(),
            Err(OptError::InvalidLineSearch { .. })
        ));
        assert_eq!(LineSearcher::MoreThuente.alternate(), LineSearcher::HagerZhang);
        assert_eq!(LineSearcher::HagerZhang.alternate(), LineSearcher::MoreThuente);
    }

    #[test]
    // Purpose
    // -------
    // Only a solver-declared convergence counts as converged; hitting the
    // iteration cap does not.
    //
    // Given
    // -----
    // - Identical raw state terminated by `SolverConverged` and by
    //   `MaxItersReached`.
    //
    // Expect
    // ------
    // - `converged` is `true` for the first and `false` for the second.
    fn optim_outcome_maps_termination_reasons() {
        // Arrange
        let converged_status = TerminationStatus::Terminated(TerminationReason::SolverConverged);
        let capped_status = TerminationStatus::Terminated(TerminationReason::MaxItersReached);

        // Act
        let converged = OptimOutcome::new(
            Some(array![1.0, 2.0]),
            -3.0,
            converged_status,
            12,
            FnEvalMap::new(),
            Some(array![3.0, 4.0]),
        )
        .expect("outcome should be valid");
        let capped = OptimOutcome::new(
            Some(array![1.0, 2.0]),
            -3.0,
            capped_status,
            50,
            FnEvalMap::new(),
            None,
        )
        .expect("outcome should be valid");

        // Assert
        assert!(converged.converged);
        assert_eq!(converged.grad_norm, Some(5.0));
        assert_eq!(converged.iterations, 12);
        assert!(!capped.converged);
        assert!(capped.grad_norm.is_none());
    }

    #[test]
    fn optim_outcome_rejects_missing_or_non_finite_estimates() {
        let status = TerminationStatus::Terminated(TerminationReason::SolverConverged);
        assert_eq!(
            OptimOutcome::new(None, 0.0, status.clone(), 1, FnEvalMap::new(), None),
            Err(OptError::MissingThetaHat)
        );
        assert!(matches!(
            OptimOutcome::new(Some(array![f64::NAN]), 0.0, status, 1, FnEvalMap::new(), None),
            Err(OptError::InvalidThetaHat { index: 0, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // A budget-exhausted outcome reports the best point as a non-converged
    // result with the evaluation count recorded.
    fn budget_exhausted_outcome_is_not_converged() {
        let outcome = OptimOutcome::budget_exhausted(Some((array![0.5, 1.0], 2.5)), 40, 40)
            .expect("outcome should be valid");

        assert!(!outcome.converged);
        assert_eq!(outcome.value, -2.5);
        assert_eq!(outcome.fn_evals.get("cost_count"), Some(&40));
        assert!(outcome.status.contains("40"));

        assert_eq!(OptimOutcome::budget_exhausted(None, 0, 3), Err(OptError::MissingThetaHat));
    }
}
