//! This file contains the deafult values and other value choices used trough the library.
//!
//! The defaults are the same ones the usual statistics libraries use for their
//! "frozen" distributions, so `norm()`, `uniform()` and `expon()` without
//! arguments describe the standard version of each distribution.

/// The deafult location (`loc`) of a distribution: `0.0`.
///
/// Used by [Uniform](crate::distributions::Uniform::Uniform) (as the lower bound) and
/// [Normal](crate::distributions::Normal::Normal) (as the mean).
pub static DEFAULT_LOC: f64 = 0.0;

/// The deafult scale (`scale`) of a distribution: `1.0`.
///
/// Used by [Uniform](crate::distributions::Uniform::Uniform) (as the width),
/// [Exponential](crate::distributions::Exponential::Exponential) (as the mean) and
/// [Normal](crate::distributions::Normal::Normal) (as the standard deviation).
pub static DEFAULT_SCALE: f64 = 1.0;

/// The deafult value where the [DiracDelta](crate::distributions::Dirac::DiracDelta)
/// puts all it's mass: `0.0`.
pub static DEFAULT_DIRAC_VALUE: f64 = 0.0;
