//! effectiveness — summary metrics derived from fitted probability curves.
//!
//! - [`odds_ratio`]: relative effectiveness `1 − odds(pᵢ)/odds(p₀)` of each
//!   group against a reference group ([`one_minus_odds_ratio`], [`odds`]).
//! - [`l2_error`]: Euclidean distance between an estimated and a reference
//!   curve ([`l2_norm_error`]).
//!
//! Both are pure functions over slices. Preconditions that would otherwise
//! produce silent infinities (empty input, degenerate baseline, length
//! mismatch) are checked in [`validation`] and reported as [`MetricError`].

pub mod errors;
pub mod l2_error;
pub mod odds_ratio;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{MetricError, MetricResult};
pub use self::l2_error::l2_norm_error;
pub use self::odds_ratio::{odds, one_minus_odds_ratio};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::errors::{MetricError, MetricResult};
    pub use super::l2_error::l2_norm_error;
    pub use super::odds_ratio::{odds, one_minus_odds_ratio};
}
