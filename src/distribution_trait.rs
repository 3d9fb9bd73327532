//! This script contains the interfaces used to comunicate with the distributions.
//!
//! All the distributions can be evaluated at arrays of points (a single point
//! is just a 0-dimensional array, see [crate::params::scalar]). The result has the
//! shape obtained by [broadcasting](crate::params) the shape of the points with the
//! shape of the parameters of the distribution.

use ndarray::{ArrayD, ArrayViewD, IxDyn};
use rand::Rng;

use crate::{errors::DistError, params::scalar};

/// The trait for any distribution. Every distribution can compute it's
/// quantiles and it's first moments.
pub trait Distribution {
    //Requiered methods:

    /// Evaluates the [quantile function](https://en.wikipedia.org/wiki/Quantile_function)
    /// (also known as ppf, the percent point function) at the probabilities `u`.
    ///
    /// `u` is expected to be inside `[0, 1]`, but it is **not** checked: values outside
    /// of it produce whatever the formula gives (usually a NaN or `+-inf`).
    fn ppf(&self, u: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError>;

    /// The [expected value](https://en.wikipedia.org/wiki/Expected_value) of the
    /// distribution (for every element of the parameters).
    fn mean(&self) -> ArrayD<f64>;

    /// The [standard deviation](https://en.wikipedia.org/wiki/Standard_deviation) of
    /// the distribution (for every element of the parameters).
    fn std(&self) -> ArrayD<f64>;

    /// The shape of the parameters of the distribution. Empty if all of them are scalars.
    fn shape(&self) -> &[usize];

    // Provided methods:

    /// The [variance](https://en.wikipedia.org/wiki/Variance) of the distribution.
    fn var(&self) -> ArrayD<f64> {
        return self.std().mapv_into(|s| s * s);
    }

    /// The [median](https://en.wikipedia.org/wiki/Median) of the distribution,
    /// the quantile `0.5`.
    fn median(&self) -> Result<ArrayD<f64>, DistError> {
        return self.ppf(scalar(0.5).view());
    }

    /// Returns the bounds of the interval that contains the central
    /// `confidence` fraction of the probability (equal tails).
    ///
    /// The bounds are `ppf((1 - confidence) / 2)` and `ppf((1 + confidence) / 2)`.
    /// If `confidence` is not inside `[0, 1]`, [DistError::InvalidConfidence] is returned.
    fn interval(&self, confidence: f64) -> Result<(ArrayD<f64>, ArrayD<f64>), DistError> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(DistError::InvalidConfidence(confidence));
        }

        let lower: ArrayD<f64> = self.ppf(scalar(0.5 * (1.0 - confidence)).view())?;
        let upper: ArrayD<f64> = self.ppf(scalar(0.5 * (1.0 + confidence)).view())?;
        return Ok((lower, upper));
    }

    /// Samples the distribution at random. The result has the shape of the
    /// parameters.
    ///
    /// Uses [Inverse transform sampling](https://en.wikipedia.org/wiki/Inverse_transform_sampling):
    /// a random uniform number in `[0, 1)` is generated for every element and
    /// then [Distribution::ppf] is evaluated.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ArrayD<f64>, DistError>
    where
        Self: Sized,
    {
        let quantiles: ArrayD<f64> = ArrayD::from_shape_simple_fn(IxDyn(self.shape()), || {
            rng.random::<f64>()
        });
        return self.ppf(quantiles.view());
    }

    /// Generates `n` samples of the distribution. The result has shape
    /// `[n, ...shape of the parameters]`.
    ///
    /// See [Distribution::sample] for more details.
    fn sample_multiple<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<ArrayD<f64>, DistError>
    where
        Self: Sized,
    {
        let mut shape: Vec<usize> = Vec::with_capacity(self.shape().len() + 1);
        shape.push(n);
        shape.extend_from_slice(self.shape());

        let quantiles: ArrayD<f64> =
            ArrayD::from_shape_simple_fn(IxDyn(&shape), || rng.random::<f64>());
        return self.ppf(quantiles.view());
    }
}

/// The trait for the distributions that have a (proper) density.
pub trait ContinuousDistribution: Distribution {
    //Requiered methods:

    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// (Probability Density function) of the distribution at the points `x`.
    fn pdf(&self, x: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError>;

    /// Evaluates the natural logarithm of the pdf at the points `x`.
    ///
    /// It is computed directly (not as `ln(pdf(x))`) so it keeps it's precision
    /// where the pdf underflows.
    fn logpdf(&self, x: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError>;

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative distribution function) at the points `x`.
    fn cdf(&self, x: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError>;

    // Provided methods:

    /// Evaluates the [survival function](https://en.wikipedia.org/wiki/Survival_function),
    /// `1 - cdf(x)`.
    fn sf(&self, x: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>, DistError> {
        return Ok(self.cdf(x)?.mapv_into(|c| 1.0 - c));
    }
}
