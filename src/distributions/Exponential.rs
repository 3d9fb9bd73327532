//! # Exponential distribution
//!
//! The [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution)
//! is a continuous distribution very important on statistics that measures
//! the time to the next poission event.
//!
//! A poission event does not have memory. Mathematically, if `e` follows
//! an Exponential distribution and `t_1 < t_2`
//! `P(t_1 < e) = P(t_1 < e | t_2 < e)`
//!
//! Here the Exponential distribution is parametrized by it's `scale`, wich is the
//! mean time between events. The rate is `lambda = 1 / scale`.
//!
//! The support is `[0, inf)`, but points outside of it are **not** checked: the
//! formulas are evaluated as they are.

use ndarray::{ArrayD, ArrayViewD};
use tracing::{debug, warn};

use crate::{
    configuration::DEFAULT_SCALE,
    distribution_trait::{ContinuousDistribution, Distribution},
    errors::DistError,
    params::{Param, evaluate},
};

/// The values of a single [Exponential] that are reused on every evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ExponentialConstants {
    scale: f64,
    /// `1 / scale`
    lambda: f64,
    /// `ln(lambda)`
    ln_lambda: f64,
}

impl ExponentialConstants {
    fn new(scale: f64) -> ExponentialConstants {
        let lambda: f64 = 1.0 / scale;
        return ExponentialConstants {
            scale,
            lambda,
            ln_lambda: lambda.ln(),
        };
    }
}

/// An [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution)
/// with mean `scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    constants: ArrayD<ExponentialConstants>,
}

impl Exponential {
    /// Creates a new [Exponential] distribution with the given `scale`
    /// (a scalar or an array). `0.0 < scale` is expected.
    ///
    /// The `scale` is not checked. A non-positive scale leads to NaNs and infinities
    /// in the results (and a warning in the logs).
    #[must_use]
    pub fn new(scale: impl Into<Param>) -> Exponential {
        let scale: Param = scale.into();

        if let Some(invalid) = scale.first_non_positive() {
            warn!(scale = invalid, "Exponential created with a non positive scale. ");
        }

        let constants: ArrayD<ExponentialConstants> = scale.map(ExponentialConstants::new);
        debug!(shape = ?constants.shape(), "Created an Exponential distribution. ");

        return Exponential { constants };
    }

    /// Returns the rate `lambda = 1 / scale`.
    #[must_use]
    pub fn get_lambda(&self) -> ArrayD<f64> {
        return self.constants.mapv(|c| c.lambda);
    }

    /// Returns the `scale`.
    #[must_use]
    pub fn get_scale(&self) -> ArrayD<f64> {
        return self.constants.mapv(|c| c.scale);
    }
}

impl Distribution for Exponential {
    fn ppf(&self, u: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError> {
        // `ln_1p` keeps the precision for small `u`
        return evaluate(u, &self.constants, |u, c| -c.scale * (-u).ln_1p());
    }

    fn mean(&self) -> ArrayD<f64> {
        return self.constants.mapv(|c| c.scale);
    }

    fn std(&self) -> ArrayD<f64> {
        return self.constants.mapv(|c| c.scale);
    }

    fn shape(&self) -> &[usize] {
        return self.constants.shape();
    }

    fn median(&self) -> Result<ArrayD<f64>, DistError> {
        return Ok(self.constants.mapv(|c| c.scale * std::f64::consts::LN_2));
    }
}

impl ContinuousDistribution for Exponential {
    fn pdf(&self, x: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError> {
        return evaluate(x, &self.constants, |x, c| c.lambda * (-c.lambda * x).exp());
    }

    fn logpdf(&self, x: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError> {
        return evaluate(x, &self.constants, |x, c| c.ln_lambda - c.lambda * x);
    }

    fn cdf(&self, x: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError> {
        // 1 - exp(-lambda * x), without the cancellation for small `lambda * x`
        return evaluate(x, &self.constants, |x, c| -(-c.lambda * x).exp_m1());
    }

    fn sf(&self, x: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError> {
        return evaluate(x, &self.constants, |x, c| (-c.lambda * x).exp());
    }
}

impl Default for Exponential {
    fn default() -> Self {
        return Exponential::new(DEFAULT_SCALE);
    }
}
