//! Relative effectiveness as one minus an odds ratio.
//!
//! Given predicted outcome probabilities `p₀, p₁, …` ordered so that `p₀` is
//! the reference group (e.g. the lowest antibody titer), the effectiveness
//! of group `i` relative to the reference is
//!
//! `1 − odds(pᵢ) / odds(p₀)`, with `odds(p) = p / (1 − p)`.
//!
//! The reference entry is always `0`; a group with lower risk than the
//! reference scores in `(0, 1]`, one with higher risk scores below `0`.
use crate::effectiveness::{errors::MetricResult, validation::validate_probabilities};
use ndarray::Array1;

/// Odds `p / (1 − p)` of a probability. Infinite at `p = 1`.
#[inline]
pub fn odds(p: f64) -> f64 {
    p / (1.0 - p)
}

/// `1 − odds(pᵢ) / odds(p₀)` for every entry of `predicted`, in order.
///
/// # Errors
/// - `MetricError::EmptyInput` for an empty slice.
/// - `MetricError::NonFiniteProbability` /
///   `MetricError::ProbabilityOutOfRange` unless every `pᵢ ∈ [0, 1)`.
/// - `MetricError::DegenerateBaseline` if `p₀ = 0`.
///
/// # Example
/// ```
/// use protection_curves::one_minus_odds_ratio;
///
/// let ve = one_minus_odds_ratio(&[0.5, 0.2])?;
/// assert_eq!(ve[0], 0.0);
/// assert!((ve[1] - 0.75).abs() < 1e-12);
/// # Ok::<(), protection_curves::effectiveness::errors::MetricError>(())
/// ```
pub fn one_minus_odds_ratio(predicted: &[f64]) -> MetricResult<Array1<f64>> {
    validate_probabilities(predicted)?;
    let baseline_odds = odds(predicted[0]);
    Ok(predicted.iter().map(|&p| 1.0 - odds(p) / baseline_odds).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effectiveness::errors::MetricError;
    use approx::assert_relative_eq;

    #[test]
    // Purpose
    // -------
    // The reference entry is always zero, and equal probabilities give
    // zero effectiveness.
    fn reference_entry_and_equal_probabilities_give_zero() {
        assert_eq!(one_minus_odds_ratio(&[0.3]).expect("valid input").to_vec(), vec![0.0]);
        assert_eq!(
            one_minus_odds_ratio(&[0.5, 0.5]).expect("valid input").to_vec(),
            vec![0.0, 0.0]
        );
    }

    #[test]
    // Purpose
    // -------
    // Values match the closed form, including a zero-risk group scoring 1
    // and a higher-risk group scoring below 0.
    fn values_match_closed_form() {
        let ve = one_minus_odds_ratio(&[0.4, 0.1, 0.0, 0.6]).expect("valid input");

        let base = 0.4 / 0.6;
        assert_eq!(ve[0], 0.0);
        assert_relative_eq!(ve[1], 1.0 - (0.1 / 0.9) / base, epsilon = 1e-12);
        assert_eq!(ve[2], 1.0);
        assert_relative_eq!(ve[3], 1.0 - 1.5 / base, epsilon = 1e-12);
        assert!(ve[3] < 0.0);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert_eq!(one_minus_odds_ratio(&[]), Err(MetricError::EmptyInput));
        assert_eq!(
            one_minus_odds_ratio(&[0.0, 0.2]),
            Err(MetricError::DegenerateBaseline { value: 0.0 })
        );
        assert_eq!(
            one_minus_odds_ratio(&[0.2, 1.0]),
            Err(MetricError::ProbabilityOutOfRange { index: 1, value: 1.0 })
        );
    }

    #[test]
    fn odds_of_common_probabilities() {
        assert_eq!(odds(0.5), 1.0);
        assert_eq!(odds(0.0), 0.0);
        assert_relative_eq!(odds(0.2), 0.25);
    }
}
