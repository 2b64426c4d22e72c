//! loglik_optimizer::finite_diff — finite-difference gradient fallback.
//!
//! Purpose
//! -------
//! Provide finite-difference gradients of a fallible scalar objective so the
//! L-BFGS path can run on log-likelihoods that do not implement an analytic
//! gradient, without the rest of the optimizer depending on the
//! `finitediff` API.
//!
//! This is a generic facility of the optimizer layer: it is reached through
//! [`ArgMinAdapter`](super::adapter::ArgMinAdapter) whenever a model keeps
//! the default [`LogLikelihood::grad`](super::traits::LogLikelihood::grad).
//! The built-in dose-response models do not rely on it at runtime
//! (logistic regression has an analytic gradient, the scaled logit uses the
//! derivative-free simplex); the logistic gradient is checked against it in
//! tests.
//!
//! Key behaviors
//! -------------
//! - [`fd_gradient`] tries central differences first and falls back to
//!   forward differences when the central pass hit an evaluation error or
//!   produced a non-finite gradient.
//! - [`run_fd_diff`] performs the forward pass with error capture and
//!   post-hoc validation.
//!
//! Conventions
//! -----------
//! - `finitediff` closures must return `f64`, so objective errors are
//!   stored in a shared `RefCell<Option<Error>>` and the closure returns
//!   `NaN`; after differencing, the captured error is turned back into a
//!   real error.
//! - Gradients returned from this module always satisfy [`validate_grad`].
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{Grad, Theta, validation::validate_grad},
};
use argmin::core::Error;
use finitediff::FiniteDiff;
use std::cell::RefCell;

/// Finite-difference gradient of a fallible objective at `theta`.
///
/// # Behavior
/// - Central differences first.
/// - If any evaluation failed, or the central gradient fails validation,
///   retry once with forward differences via [`run_fd_diff`].
///
/// # Errors
/// - The first error raised by `objective` on the forward pass.
/// - [`validate_grad`] errors if the forward gradient is still invalid.
pub fn fd_gradient<G>(theta: &Theta, objective: G) -> OptResult<Grad>
where
    G: Fn(&Theta) -> Result<f64, Error>,
{
    let closure_err: RefCell<Option<Error>> = RefCell::new(None);
    let func = |t: &Theta| -> f64 {
        match objective(t) {
            Ok(val) => val,
            Err(e) => {
                let mut slot = closure_err.borrow_mut();
                if slot.is_none() {
                    *slot = Some(e);
                }
                f64::NAN
            }
        }
    };
    let central = theta.central_diff(&func);
    if closure_err.borrow().is_none() && validate_grad(&central, theta.len()).is_ok() {
        return Ok(central);
    }
    run_fd_diff(theta, &func, &closure_err)
}

/// Forward-difference gradient with error capture and validation.
///
/// Clears `closure_err`, runs `forward_diff`, returns any error captured by
/// `func` during the pass, then validates the gradient.
///
/// # Errors
/// - The captured objective error (via `From<Error> for OptError`).
/// - `OptError::GradientDimMismatch` / `OptError::InvalidGradient` from
///   [`validate_grad`].
pub fn run_fd_diff<G: Fn(&Theta) -> f64>(
    theta: &Theta, func: &G, closure_err: &RefCell<Option<Error>>,
) -> OptResult<Grad> {
    closure_err.replace(None);
    let fd_grad = theta.forward_diff(func);
    if let Some(err) = closure_err.take() {
        return Err(err.into());
    }
    validate_grad(&fd_grad, theta.len())?;
    Ok(fd_grad)
}
