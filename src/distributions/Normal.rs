//! # Normal distribution
//!
//! The [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! ia a very important continuous probability distribution.
//!
//! This distribution is very frequent in statistics and extremly well studied.
//! It also has many properties, like maximum entropy or being it's own
//! conjugate distribution. It also has a key role en the [Central Limit Theorem](https://en.wikipedia.org/wiki/Central_limit_theorem)
//! (CLT), wich is a key theorem that says that the sum of `n` random variables
//! of **any** distribution will give a new random variable that is normally distributed
//! as `n` grows to infinity.
//!
//! It is parametrized by it's mean (`loc`) and it's standard deviation (`scale`).
//! The pdf and the logpdf have a closed form, but the cdf and the quantile function
//! are computed with the standard normal [ndtr] and [ndtri], which rely on the
//! error function.
//!

use ndarray::{ArrayD, ArrayViewD};
use tracing::debug;

use crate::{
    configuration::{DEFAULT_LOC, DEFAULT_SCALE},
    distribution_trait::{ContinuousDistribution, Distribution},
    errors::DistError,
    euclid::{INV_SQRT_2_PI, LN_2_PI, ndtr, ndtri},
    params::{Param, combine, evaluate},
};

/// The values of a single [Normal] that are reused on every evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct NormalConstants {
    /// The mean of the distribution
    loc: f64,
    /// The standard deviation of the distribution
    scale: f64,
    /// The normalitzation constant `C = (2 * pi * scale^2)^-0.5`
    norm_const: f64,
    /// `ln(C)`
    ln_norm_const: f64,
}

impl NormalConstants {
    fn new(loc: f64, scale: f64) -> NormalConstants {
        // (2 * pi * scale^2)^-0.5 = 1/sqrt(2 * pi) * 1/scale. Avoids squaring
        // (and overflowing) the scale.
        return NormalConstants {
            loc,
            scale,
            norm_const: INV_SQRT_2_PI / scale,
            ln_norm_const: -0.5 * LN_2_PI - scale.ln(),
        };
    }

    /// The standarized value `z = (x - loc) / scale`.
    #[inline]
    fn standarize(&self, x: f64) -> f64 {
        return (x - self.loc) / self.scale;
    }
}

/// A [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
/// with mean `loc` and standard deviation `scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    constants: ArrayD<NormalConstants>,
}

impl Normal {
    /// Create a [Normal] distribution.
    ///
    ///  - `loc` is the mean.
    ///  - `scale` is the standard deviation. Every element must be stricly
    ///     greater than `0.0` or [DistError::NonPositiveScale] will be returned.
    ///  - Both can be scalars or arrays. If they are arrays, their shapes must be
    ///     compatible or [DistError::ShapeMismatch] will be returned.
    pub fn new(loc: impl Into<Param>, scale: impl Into<Param>) -> Result<Normal, DistError> {
        let (loc, scale): (Param, Param) = (loc.into(), scale.into());

        if let Some(invalid) = scale.first_non_positive() {
            return Err(DistError::NonPositiveScale(invalid));
        }

        let constants: ArrayD<NormalConstants> = combine(&loc, &scale, NormalConstants::new)?;
        debug!(shape = ?constants.shape(), "Created a Normal distribution. ");

        return Ok(Normal { constants });
    }

    /// Returns the mean, the first parameter of the normal distribution.
    #[must_use]
    pub fn get_loc(&self) -> ArrayD<f64> {
        return self.constants.mapv(|c| c.loc);
    }

    /// Returns the standard deviation, the second parameter of the normal distribution.
    #[must_use]
    pub fn get_scale(&self) -> ArrayD<f64> {
        return self.constants.mapv(|c| c.scale);
    }
}

impl Distribution for Normal {
    fn ppf(&self, u: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError> {
        return evaluate(u, &self.constants, |u, c| ndtri(u) * c.scale + c.loc);
    }

    fn mean(&self) -> ArrayD<f64> {
        return self.constants.mapv(|c| c.loc);
    }

    fn std(&self) -> ArrayD<f64> {
        return self.constants.mapv(|c| c.scale);
    }

    fn shape(&self) -> &[usize] {
        return self.constants.shape();
    }

    fn median(&self) -> Result<ArrayD<f64>, DistError> {
        return Ok(self.mean());
    }
}

impl ContinuousDistribution for Normal {
    fn pdf(&self, x: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError> {
        return evaluate(x, &self.constants, |x, c| {
            let z: f64 = c.standarize(x);
            (-0.5 * z * z).exp() * c.norm_const
        });
    }

    fn logpdf(&self, x: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError> {
        return evaluate(x, &self.constants, |x, c| {
            let z: f64 = c.standarize(x);
            -0.5 * z * z + c.ln_norm_const
        });
    }

    fn cdf(&self, x: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError> {
        return evaluate(x, &self.constants, |x, c| ndtr(c.standarize(x)));
    }

    fn sf(&self, x: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError> {
        // Phi(-z) = 1 - Phi(z), but keeps the precision on the right tail
        return evaluate(x, &self.constants, |x, c| ndtr(-c.standarize(x)));
    }
}

impl Default for Normal {
    fn default() -> Self {
        let constants: ArrayD<NormalConstants> =
            Param::scalar(DEFAULT_LOC).map(|loc| NormalConstants::new(loc, DEFAULT_SCALE));
        return Normal { constants };
    }
}
