//! Adapters that expose a `LogLikelihood` as an `argmin` problem.
//!
//! Maximizing `ℓ(θ)` becomes minimizing `c(θ) = -ℓ(θ)`.
//!
//! - [`ArgMinAdapter`] serves the L-BFGS path: cost plus gradient, where an
//!   analytic `∇ℓ` is negated and a missing one is replaced by finite
//!   differences of the cost.
//! - [`BudgetedAdapter`] serves the Nelder–Mead path: cost only, metered
//!   against an [`EvalBudget`] that also remembers the best point seen, so
//!   the runner can return it when the budget runs out.
use std::cell::{Cell, RefCell};

use crate::optimization::{
    errors::OptError,
    loglik_optimizer::{
        finite_diff::fd_gradient,
        traits::LogLikelihood,
        types::{Cost, Grad, Theta},
        validation::validate_grad,
    },
};
use argmin::core::{CostFunction, Error, Gradient};

/// Bridges a `LogLikelihood` to `argmin`'s `CostFunction` and `Gradient`.
///
/// - `CostFunction::cost` returns `-ℓ(θ)`.
/// - `Gradient::gradient` returns `-∇ℓ(θ)` when the model provides it, or a
///   finite-difference gradient of the cost otherwise.
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: LogLikelihood> {
    pub f: &'a F,
    pub data: &'a F::Data,
}

impl<'a, F: LogLikelihood> ArgMinAdapter<'a, F> {
    pub fn new(f: &'a F, data: &'a F::Data) -> Self {
        Self { f, data }
    }
}

impl<'a, F: LogLikelihood> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate `c(θ) = -ℓ(θ)`.
    ///
    /// # Errors
    /// - Any `OptError` raised by the model's `value`.
    /// - `OptError::NonFiniteCost` if `ℓ(θ)` is not finite.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let output = self.f.value(theta, self.data)?;
        if !output.is_finite() {
            return Err((OptError::NonFiniteCost { value: output }).into());
        }
        Ok(-output)
    }
}

impl<'a, F: LogLikelihood> Gradient for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Gradient = Grad;

    /// Evaluate `∇c(θ)`.
    ///
    /// `GradientNotImplemented` from the model switches to
    /// [`fd_gradient`] over [`CostFunction::cost`]; any other model error is
    /// propagated unchanged.
    fn gradient(&self, theta: &Self::Param) -> Result<Self::Gradient, Error> {
        match self.f.grad(theta, self.data) {
            Ok(g) => {
                validate_grad(&g, theta.len())?;
                Ok(-g)
            }
            Err(OptError::GradientNotImplemented) => {
                Ok(fd_gradient(theta, |t: &Theta| self.cost(t))?)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Cost-evaluation budget shared between a [`BudgetedAdapter`] and its runner.
///
/// The executor takes ownership of the problem, so the counters live here
/// and the adapter only borrows them.
#[derive(Debug)]
pub struct EvalBudget {
    max_fev: usize,
    evals: Cell<usize>,
    best: RefCell<Option<(Theta, Cost)>>,
}

impl EvalBudget {
    pub fn new(max_fev: usize) -> Self {
        Self { max_fev, evals: Cell::new(0), best: RefCell::new(None) }
    }

    pub fn max_fev(&self) -> usize {
        self.max_fev
    }

    /// Number of cost evaluations performed so far.
    pub fn evaluations(&self) -> usize {
        self.evals.get()
    }

    /// Lowest-cost point seen so far, if any.
    pub fn take_best(&self) -> Option<(Theta, Cost)> {
        self.best.borrow_mut().take()
    }

    fn try_spend(&self) -> Result<(), OptError> {
        let used = self.evals.get();
        if used >= self.max_fev {
            return Err(OptError::MaxFevReached { max_fev: self.max_fev });
        }
        self.evals.set(used + 1);
        Ok(())
    }

    fn record(&self, theta: &Theta, cost: Cost) {
        let mut best = self.best.borrow_mut();
        let improved = match best.as_ref() {
            Some((_, best_cost)) => cost < *best_cost,
            None => true,
        };
        if improved {
            *best = Some((theta.clone(), cost));
        }
    }
}

/// Cost-only adapter that stops the run once its [`EvalBudget`] is spent.
///
/// Each call to `cost` consumes one evaluation. When none are left it
/// returns `OptError::MaxFevReached` without touching the model, which
/// aborts the executor; the runner turns that into a non-converged outcome
/// built from [`EvalBudget::take_best`].
pub struct BudgetedAdapter<'a, F: LogLikelihood> {
    inner: ArgMinAdapter<'a, F>,
    budget: &'a EvalBudget,
}

impl<'a, F: LogLikelihood> BudgetedAdapter<'a, F> {
    pub fn new(f: &'a F, data: &'a F::Data, budget: &'a EvalBudget) -> Self {
        Self { inner: ArgMinAdapter::new(f, data), budget }
    }
}

// Only the budget is printed; models and their data need not be `Debug`.
impl<'a, F: LogLikelihood> std::fmt::Debug for BudgetedAdapter<'a, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudgetedAdapter").field("budget", self.budget).finish_non_exhaustive()
    }
}

impl<'a, F: LogLikelihood> CostFunction for BudgetedAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        self.budget.try_spend()?;
        let cost = self.inner.cost(theta)?;
        self.budget.record(theta, cost);
        Ok(cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptResult;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // - Sign conventions of `ArgMinAdapter` for cost and gradient.
    // - Finite-difference fallback when the model has no gradient.
    // - Budget accounting and best-point tracking of `BudgetedAdapter`.
    // -------------------------------------------------------------------------

    /// ℓ(θ) = -(θ - 1)·(θ - 1), with an analytic gradient.
    struct ShiftedBowl;

    impl LogLikelihood for ShiftedBowl {
        type Data = ();

        fn value(&self, theta: &Theta, _: &()) -> OptResult<f64> {
            Ok(-theta.mapv(|t| (t - 1.0).powi(2)).sum())
        }

        fn check(&self, _: &Theta, _: &()) -> OptResult<()> {
            Ok(())
        }

        fn grad(&self, theta: &Theta, _: &()) -> OptResult<Grad> {
            Ok(theta.mapv(|t| -2.0 * (t - 1.0)))
        }
    }

    /// Same surface as `ShiftedBowl`, but without a gradient.
    struct ShiftedBowlNoGrad;

    impl LogLikelihood for ShiftedBowlNoGrad {
        type Data = ();

        fn value(&self, theta: &Theta, _: &()) -> OptResult<f64> {
            ShiftedBowl.value(theta, &())
        }

        fn check(&self, _: &Theta, _: &()) -> OptResult<()> {
            Ok(())
        }
    }

    #[test]
    // Purpose
    // -------
    // The adapter negates both the log-likelihood and its analytic gradient.
    fn argmin_adapter_flips_signs_for_cost_and_gradient() {
        // Arrange
        let adapter = ArgMinAdapter::new(&ShiftedBowl, &());
        let theta = array![0.0, 3.0];

        // Act
        let cost = adapter.cost(&theta).expect("cost should evaluate");
        let grad = adapter.gradient(&theta).expect("gradient should evaluate");

        // Assert
        assert_eq!(cost, 5.0);
        assert_eq!(grad, array![-2.0, 4.0]);
    }

    #[test]
    // Purpose
    // -------
    // Without an analytic gradient, the adapter differentiates the cost
    // numerically and lands close to the analytic answer.
    fn argmin_adapter_falls_back_to_finite_differences() {
        let adapter = ArgMinAdapter::new(&ShiftedBowlNoGrad, &());
        let theta = array![0.0, 3.0];

        let grad = adapter.gradient(&theta).expect("fd gradient should evaluate");

        assert!((grad[0] + 2.0).abs() < 1e-5);
        assert!((grad[1] - 4.0).abs() < 1e-5);
    }

    #[test]
    // Purpose
    // -------
    // The budgeted adapter refuses evaluations past `max_fev` and keeps the
    // lowest-cost point seen before that.
    //
    // Given
    // -----
    // - A budget of two evaluations.
    //
    // Expect
    // ------
    // - Two successful costs, then `MaxFevReached`.
    // - `take_best` returns the cheaper of the two evaluated points.
    fn budgeted_adapter_stops_at_max_fev_and_tracks_best() {
        // Arrange
        let budget = EvalBudget::new(2);
        let adapter = BudgetedAdapter::new(&ShiftedBowlNoGrad, &(), &budget);

        // Act
        let far = adapter.cost(&array![5.0]).expect("first evaluation is within budget");
        let near = adapter.cost(&array![1.5]).expect("second evaluation is within budget");
        let refused = adapter.cost(&array![1.0]);

        // Assert
        assert_eq!(far, 16.0);
        assert_eq!(near, 0.25);
        let err = OptError::from(refused.expect_err("third evaluation exceeds the budget"));
        assert_eq!(err, OptError::MaxFevReached { max_fev: 2 });
        assert_eq!(budget.evaluations(), 2);
        assert_eq!(budget.take_best(), Some((array![1.5], 0.25)));
    }

    /// Observations without a `Debug` impl.
    struct OpaqueData;

    /// Constant log-likelihood over `OpaqueData`.
    struct Flat;

    impl LogLikelihood for Flat {
        type Data = OpaqueData;

        fn value(&self, _: &Theta, _: &OpaqueData) -> OptResult<f64> {
            Ok(0.0)
        }

        fn check(&self, _: &Theta, _: &OpaqueData) -> OptResult<()> {
            Ok(())
        }
    }

    #[test]
    // Purpose
    // -------
    // `BudgetedAdapter` is printable for any model, reporting its budget
    // counters only.
    fn budgeted_adapter_debug_does_not_require_debug_data() {
        let budget = EvalBudget::new(3);
        let adapter = BudgetedAdapter::new(&Flat, &OpaqueData, &budget);
        adapter.cost(&array![0.0]).expect("within budget");

        let shown = format!("{adapter:?}");

        assert!(shown.starts_with("BudgetedAdapter"), "unexpected output: {shown}");
        assert!(shown.contains("max_fev: 3"), "unexpected output: {shown}");
        assert!(shown.contains("evals: Cell { value: 1 }"), "unexpected output: {shown}");
    }
}
