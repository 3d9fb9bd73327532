//! # Uniform distribution
//!
//! The [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution)
//! is a continuous distributions where all possible outcomes in the interval `[lo, hi)` have
//! equal likelyhood of happening.
//!
//! It is parametrized with the lower bound `loc` and the width of the interval
//! `scale`, so `hi = loc + scale`.
//!
//! The density is evaluated on the **open** interval `(lo, hi)`: exacly at
//! the bounds the pdf is `0.0` (and the logpdf is `-inf`).
//!

use ndarray::{ArrayD, ArrayViewD};
use tracing::{debug, warn};

use crate::{
    configuration::{DEFAULT_LOC, DEFAULT_SCALE},
    distribution_trait::{ContinuousDistribution, Distribution},
    errors::DistError,
    euclid::{INV_SQRT_12, clip},
    params::{Param, combine, evaluate},
};

/// The values of a single [Uniform] that are reused on every evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct UniformConstants {
    /// The minimum value
    lo: f64,
    /// The maximum value (`lo + scale`)
    hi: f64,
    scale: f64,
    /// `1 / scale`, the density inside the interval
    density: f64,
    /// `-ln(scale)`, the log density inside the interval
    log_density: f64,
}

impl UniformConstants {
    fn new(lo: f64, scale: f64) -> UniformConstants {
        return UniformConstants {
            lo,
            hi: lo + scale,
            scale,
            density: 1.0 / scale,
            log_density: -scale.ln(),
        };
    }

    #[inline]
    fn contains(&self, x: f64) -> bool {
        return self.lo < x && x < self.hi;
    }
}

/// A [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution)
/// in `[loc, loc + scale)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    constants: ArrayD<UniformConstants>,
}

impl Uniform {
    /// Creates a new [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution).
    ///
    ///  - `loc` indicates the minimum value.
    ///  - `scale` indicates the width of the interval. `0.0 < scale` is expected.
    ///  - Both can be scalars or arrays. If they are arrays, their shapes must be
    ///     compatible or [DistError::ShapeMismatch] will be returned.
    ///
    /// The `scale` is not checked. A non-positive scale leads to NaNs and infinities
    /// in the results (and a warning in the logs).
    pub fn new(loc: impl Into<Param>, scale: impl Into<Param>) -> Result<Uniform, DistError> {
        let (loc, scale): (Param, Param) = (loc.into(), scale.into());

        if let Some(invalid) = scale.first_non_positive() {
            warn!(scale = invalid, "Uniform created with a non positive scale. ");
        }

        let constants: ArrayD<UniformConstants> = combine(&loc, &scale, UniformConstants::new)?;
        debug!(shape = ?constants.shape(), "Created a Uniform distribution. ");

        return Ok(Uniform { constants });
    }

    /// Return the lower bound of the interval (`loc`).
    #[must_use]
    pub fn get_lo(&self) -> ArrayD<f64> {
        return self.constants.mapv(|c| c.lo);
    }

    /// Return the upper bound of the interval (`loc + scale`).
    #[must_use]
    pub fn get_hi(&self) -> ArrayD<f64> {
        return self.constants.mapv(|c| c.hi);
    }

    /// Return the width of the interval (`scale`).
    #[must_use]
    pub fn get_scale(&self) -> ArrayD<f64> {
        return self.constants.mapv(|c| c.scale);
    }
}

impl Distribution for Uniform {
    fn ppf(&self, u: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError> {
        return evaluate(u, &self.constants, |u, c| c.scale * u + c.lo);
    }

    fn mean(&self) -> ArrayD<f64> {
        return self.constants.mapv(|c| c.lo + c.scale * 0.5);
    }

    fn std(&self) -> ArrayD<f64> {
        return self.constants.mapv(|c| INV_SQRT_12 * c.scale);
    }

    fn shape(&self) -> &[usize] {
        return self.constants.shape();
    }
}

impl ContinuousDistribution for Uniform {
    fn pdf(&self, x: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError> {
        return evaluate(x, &self.constants, |x, c| {
            if c.contains(x) { c.density } else { 0.0 }
        });
    }

    fn logpdf(&self, x: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError> {
        return evaluate(x, &self.constants, |x, c| {
            if c.contains(x) {
                c.log_density
            } else {
                f64::NEG_INFINITY
            }
        });
    }

    fn cdf(&self, x: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError> {
        return evaluate(x, &self.constants, |x, c| clip((x - c.lo) / c.scale, 0.0, 1.0));
    }
}

impl Default for Uniform {
    fn default() -> Self {
        let constants: ArrayD<UniformConstants> =
            Param::scalar(DEFAULT_LOC).map(|lo| UniformConstants::new(lo, DEFAULT_SCALE));
        return Uniform { constants };
    }
}
