//! # Dirac distribution
//!
//! The [Dirac distribution](https://en.wikipedia.org/wiki/Dirac_delta_function)
//! is a distribution that has probability of `1.0` for a fixed value and `0.0`
//! everywhere else. For this reason it always returns the same value.
//!
//! It's density is a generalized function (infinite at the value, `0.0`
//! everywhere else), so [DiracDelta] only implements [Distribution] and not
//! [ContinuousDistribution](crate::distribution_trait::ContinuousDistribution).

use ndarray::{ArrayD, ArrayViewD};
use tracing::debug;

use crate::{
    configuration::DEFAULT_DIRAC_VALUE,
    distribution_trait::Distribution,
    errors::DistError,
    params::{Param, broadcast_map},
};

/// A [Dirac delta](https://en.wikipedia.org/wiki/Dirac_delta_function) distribution
/// at `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct DiracDelta {
    value: ArrayD<f64>,
}

impl DiracDelta {
    /// Creates a [DiracDelta] that puts all the probability on `value`.
    ///
    /// `value` can be a scalar or an array.
    #[must_use]
    pub fn new(value: impl Into<Param>) -> DiracDelta {
        let value: ArrayD<f64> = value.into().into_inner();
        debug!(shape = ?value.shape(), "Created a DiracDelta distribution. ");
        return DiracDelta { value };
    }

    /// Returns the value where all the probability is.
    #[must_use]
    pub const fn get_value(&self) -> &ArrayD<f64> {
        return &self.value;
    }
}

impl Distribution for DiracDelta {
    /// Returns `value` for every `u` (NaNs included), with the broadcast shape
    /// of `u` and `value`.
    ///
    /// If `value` is an array and the shape of `u` is not compatible with it,
    /// [DistError::ShapeMismatch] is returned.
    fn ppf(&self, u: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError> {
        // Every quantile is the value itself (even for NaNs), we only need the shape.
        return broadcast_map(u, self.value.view(), |_, value: f64| value);
    }

    fn mean(&self) -> ArrayD<f64> {
        return self.value.clone();
    }

    fn std(&self) -> ArrayD<f64> {
        return ArrayD::zeros(self.value.raw_dim());
    }

    fn shape(&self) -> &[usize] {
        return self.value.shape();
    }

    fn median(&self) -> Result<ArrayD<f64>, DistError> {
        return Ok(self.value.clone());
    }
}

impl Default for DiracDelta {
    fn default() -> Self {
        return DiracDelta::new(DEFAULT_DIRAC_VALUE);
    }
}
