//! Precondition checks for the effectiveness metrics.
use crate::effectiveness::errors::{MetricError, MetricResult};

/// Validate a vector of predicted probabilities for the odds-ratio
/// transform.
///
/// # Errors
/// - [`MetricError::EmptyInput`] if `probs` is empty.
/// - [`MetricError::NonFiniteProbability`] for the first non-finite entry.
/// - [`MetricError::ProbabilityOutOfRange`] for the first entry outside
///   `[0, 1)`.
/// - [`MetricError::DegenerateBaseline`] if `probs[0]` is exactly `0`.
pub fn validate_probabilities(probs: &[f64]) -> MetricResult<()> {
    let baseline = *probs.first().ok_or(MetricError::EmptyInput)?;
    for (index, &value) in probs.iter().enumerate() {
        if !value.is_finite() {
            return Err(MetricError::NonFiniteProbability { index, value });
        }
        if !(0.0..1.0).contains(&value) {
            return Err(MetricError::ProbabilityOutOfRange { index, value });
        }
    }
    if baseline == 0.0 {
        return Err(MetricError::DegenerateBaseline { value: baseline });
    }
    Ok(())
}

/// Require two vectors to have the same length.
///
/// # Errors
/// [`MetricError::LengthMismatch`] otherwise.
pub fn validate_equal_lengths(estimate: &[f64], truth: &[f64]) -> MetricResult<()> {
    if estimate.len() != truth.len() {
        return Err(MetricError::LengthMismatch {
            estimate_len: estimate.len(),
            truth_len: truth.len(),
        });
    }
    Ok(())
}
