//! The implemented distributions. Each one lives in it's own module.
//!
//! Continuous distributions (with a density) implement
//! [ContinuousDistribution](crate::distribution_trait::ContinuousDistribution),
//! the [Dirac](Dirac::DiracDelta) only implements
//! [Distribution](crate::distribution_trait::Distribution).

pub mod Dirac;
pub mod Exponential;
pub mod Normal;
pub mod Uniform;
