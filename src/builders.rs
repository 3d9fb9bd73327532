//! # Builders
//!
//! Named-parameter constructors for all the distributions, with the same names and
//! defaults that the usual statistics libraries use for their "frozen" distributions:
//!
//! | Builder | Distribution | Parameters (default) |
//! |---|---|---|
//! | [delta()] | [DiracDelta] | `value` (`0.0`) |
//! | [uniform()] | [Uniform] | `loc` (`0.0`), `scale` (`1.0`) |
//! | [expon()] | [Exponential] | `scale` (`1.0`) |
//! | [norm()] | [Normal] | `loc` (`0.0`), `scale` (`1.0`) |
//!
//! Every parameter accepts anything that can be converted into a [Param]
//! (scalars, `Vec`s, slices, `ndarray` arrays...).
//!
//! ```
//! use FasterDistributions::builders::norm;
//! use FasterDistributions::distribution_trait::Distribution;
//!
//! let normal = norm().loc(vec![0.0, 10.0]).scale(2.0).call().unwrap();
//! assert_eq!(normal.shape(), &[2]);
//!
//! // Standard normal
//! let std_normal = norm().call().unwrap();
//! assert_eq!(std_normal.shape(), &[] as &[usize]);
//! ```

use crate::{
    configuration::{DEFAULT_DIRAC_VALUE, DEFAULT_LOC, DEFAULT_SCALE},
    distributions::{
        Dirac::DiracDelta, Exponential::Exponential, Normal::Normal, Uniform::Uniform,
    },
    errors::DistError,
    params::Param,
};

/// Builds a [DiracDelta] at `value`.
#[bon::builder]
pub fn delta(
    #[builder(into, default = Param::scalar(DEFAULT_DIRAC_VALUE))] value: Param,
) -> DiracDelta {
    return DiracDelta::new(value);
}

/// Builds a [Uniform] in `[loc, loc + scale)`.
///
/// Returns [DistError::ShapeMismatch] if `loc` and `scale` cannot be broadcast together.
#[bon::builder]
pub fn uniform(
    #[builder(into, default = Param::scalar(DEFAULT_LOC))] loc: Param,
    #[builder(into, default = Param::scalar(DEFAULT_SCALE))] scale: Param,
) -> Result<Uniform, DistError> {
    return Uniform::new(loc, scale);
}

/// Builds an [Exponential] with mean `scale`.
#[bon::builder]
pub fn expon(
    #[builder(into, default = Param::scalar(DEFAULT_SCALE))] scale: Param,
) -> Exponential {
    return Exponential::new(scale);
}

/// Builds a [Normal] with mean `loc` and standard deviation `scale`.
///
/// Returns [DistError::NonPositiveScale] if any element of `scale` is not
/// stricly positive and [DistError::ShapeMismatch] if `loc` and `scale` cannot
/// be broadcast together.
#[bon::builder]
pub fn norm(
    #[builder(into, default = Param::scalar(DEFAULT_LOC))] loc: Param,
    #[builder(into, default = Param::scalar(DEFAULT_SCALE))] scale: Param,
) -> Result<Normal, DistError> {
    return Normal::new(loc, scale);
}
