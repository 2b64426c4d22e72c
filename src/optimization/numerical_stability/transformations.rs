//! Numerical stability utilities.
//!
//! Provides safe implementations of the nonlinear transforms used by the
//! Bernoulli likelihoods in this crate. The guarded strategies keep `f64`
//! arithmetic in a well-conditioned regime, using explicit cutoffs
//! (`x > 20.0`) where the naïve formula would overflow.
//!
//! # Provided items
//! - [`PROB_EPS`]: clipping margin (1e-10) that keeps probabilities away
//!   from 0 and 1 before taking logarithms.
//! - [`clip_probability(p)`]: clamp `p` into `[PROB_EPS, 1 - PROB_EPS]`.
//! - [`safe_logistic(x)`]: stable `1 / (1 + exp(-x))`, mapping ℝ → [0, 1].
//! - [`safe_softplus(x)`]: stable `ln(1 + exp(x))`, mapping ℝ → (0, ∞).

/// Probability clipping margin for log-likelihood evaluation.
///
/// Bernoulli log-likelihoods evaluate `ln(p)` and `ln(1 - p)`; both are
/// infinite at the boundary. Clipping to `[PROB_EPS, 1 - PROB_EPS]` keeps the
/// loss finite so simplex and line-search steps can always compare costs.
pub const PROB_EPS: f64 = 1e-10;

/// Clamp a probability into `[PROB_EPS, 1 - PROB_EPS]`.
///
/// Values outside `[0, 1]` (e.g. a scaled curve with `k > 1` or `k < 0`)
/// are clamped as well. `NaN` is passed through unchanged.
#[inline]
pub fn clip_probability(p: f64) -> f64 {
    p.clamp(PROB_EPS, 1.0 - PROB_EPS)
}

/// Numerically stable logistic function `σ(x) = 1 / (1 + exp(-x))`.
///
/// The two branches avoid evaluating `exp` of a large positive argument:
///
/// - For `x ≥ 0`, `σ(x) = 1 / (1 + exp(-x))`.
/// - For `x < 0`, `σ(x) = exp(x) / (1 + exp(x))`.
///
/// # Returns
/// - `σ(x)` in `[0, 1]`; exact `0.0`/`1.0` only in the far tails.
#[inline]
pub fn safe_logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Numerically stable softplus: `softplus(x) = ln(1 + exp(x))`.
///
/// Computes softplus without overflow for large positive `x` and
/// with good precision for large negative `x`:
///
/// - For sufficiently large `x`, `softplus(x) ≈ x + ln1p(exp(-x)) ≈ x`.
/// - Otherwise, it falls back to `ln1p(exp(x))`.
///
/// The cutoff used here (`x > 20.0`) is a practical threshold that
/// keeps the calculation in a well-conditioned regime for `f64`.
#[inline]
pub fn safe_softplus(x: f64) -> f64 {
    if x > 20.0 { x } else { x.exp().ln_1p() }
}
