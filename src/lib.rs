#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::excessive_precision,
    clippy::nonminimal_bool
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
// ^Disable warning "crate `FasterDistributions` should have a snake case name convert the identifier to snake case: `faster_distributions`"
// The rest of the names will follow the snake_case convention.

//! # Faster Distributions
//!
//! This library provides closed-form implementations of some common distributions
//! for the cases where their parameters are fixed (scalars or arrays). They are
//! intended as faster replacements of the general purpose distribution objects
//! of the big statistics libraries, with the same parameters and the same results.
//!
//! Every constant that does not depend on the evaluated point (normalitzation
//! constants, logarithms, rates...) is computed once when the distribution is
//! created.
//!
//! ## Distributions
//!
//! We have defined the trait [Distribution](distribution_trait::Distribution) (quantiles, mean and standard deviation)
//! and [ContinuousDistribution](distribution_trait::ContinuousDistribution)
//! (pdf, logpdf and cdf) for the distributions that have a density:
//!
//!  - [x] [Dirac delta](distributions::Dirac::DiracDelta) ([Wiki](https://en.wikipedia.org/wiki/Dirac_delta_function)) (only [Distribution](distribution_trait::Distribution))
//!  - [x] [Uniform distribution](distributions::Uniform::Uniform) ([Wiki](https://en.wikipedia.org/wiki/Continuous_uniform_distribution))
//!  - [x] [Exponential distribution](distributions::Exponential::Exponential) ([Wiki](https://en.wikipedia.org/wiki/Exponential_distribution))
//!  - [x] [Normal distribution](distributions::Normal::Normal) ([Wiki](https://en.wikipedia.org/wiki/Normal_distribution))
//!
//! ## Parameters and broadcasting
//!
//! All the parameters can be scalars or arrays (see [params::Param]). The
//! distributions are evaluated at arrays of points and the results follow the
//! usual [broadcasting](params) rules. The [builders] module contains
//! constructors with named parameters and deafult values.
//!
//! ```
//! use FasterDistributions::builders::norm;
//! use FasterDistributions::distribution_trait::{ContinuousDistribution, Distribution};
//! use ndarray::array;
//!
//! let normal = norm().loc(vec![0.0, 1.0, 10.0]).scale(vec![1.0, 2.0, 100.0]).call().unwrap();
//! let points = array![[0.0, 1.0, 10.0], [1.0, 2.0, 3.0]].into_dyn();
//! let densities = normal.pdf(points.view()).unwrap();
//! assert_eq!(densities.shape(), &[2, 3]);
//! assert_eq!(normal.mean(), array![0.0, 1.0, 10.0].into_dyn());
//! ```
//!
//! ***
//!

pub mod builders;
pub mod configuration;
pub mod distribution_trait;
pub mod distributions;
pub mod errors;
pub mod euclid;
pub mod params;
