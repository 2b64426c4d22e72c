//! dose_response::core — observation data, parameters, options, validation.
//!
//! Building blocks shared by both dose-response models:
//!
//! - [`data`]: [`BinaryData`], validated predictor/outcome pairs.
//! - [`params`]: [`LogisticParams`] and [`ScaledLogitParams`] with their
//!   conversions to and from optimizer vectors.
//! - [`options`]: [`LogisticOptions`] and [`ScaledLogitOptions`].
//! - [`validation`]: reusable input checks returning `FitError`.

pub mod data;
pub mod options;
pub mod params;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::BinaryData;
pub use self::options::{
    DEFAULT_INITIAL_GUESS, DEFAULT_LAMBDA_REG, LogisticOptions, ScaledLogitOptions,
};
pub use self::params::{LogisticParams, ScaledLogitParams};
pub use self::validation::{
    validate_both_classes, validate_initial_guess, validate_lambda, validate_observations,
    validate_query_points,
};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::data::BinaryData;
    pub use super::options::{LogisticOptions, ScaledLogitOptions};
    pub use super::params::{LogisticParams, ScaledLogitParams};
}
