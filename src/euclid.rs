//! Euclid contains uscefull math functions and constants.
//!
//! The special functions of the [Normal](crate::distributions::Normal::Normal)
//! have no closed form, so they are delegated to the (very precise) implementation
//! of the error function from [statrs].

use statrs::function::erf::{erfc, erfc_inv};
use std::f64::consts::SQRT_2;

/// `1/sqrt(2*pi) = 0.3989422804014327`. The maximum of the standard normal pdf.
pub const INV_SQRT_2_PI: f64 = 0.3989422804014327;

/// `ln(2*pi) = 1.8378770664093453`
pub const LN_2_PI: f64 = 1.8378770664093453;

/// `1/sqrt(12) = 0.28867513459481287`. The standard deviation of a uniform in `[0, 1]`.
pub const INV_SQRT_12: f64 = 0.28867513459481287;

/// The [cdf](https://en.wikipedia.org/wiki/Normal_distribution#Cumulative_distribution_function)
/// of the standard normal, `Phi(z)`.
///
/// ```text
/// Phi(z) = 0.5 * erfc(-z / sqrt(2))         if z < 0
/// Phi(z) = 1 - 0.5 * erfc(z / sqrt(2))      otherwise
/// ```
///
/// Using `erfc` instead of `1 + erf` keeps the relative precision on the left tail.
/// `erfc` is only evaluated at non-negative arguments, where it is the most precise.
#[must_use]
#[inline]
pub fn ndtr(z: f64) -> f64 {
    let t: f64 = z / SQRT_2;
    if z < 0.0 {
        return 0.5 * erfc(-t);
    }
    return 1.0 - 0.5 * erfc(t);
}

/// The [quantile function](https://en.wikipedia.org/wiki/Normal_distribution#Quantile_function)
/// of the standard normal, `Phi^-1(u)`.
///
/// ```text
/// Phi^-1(u) = -sqrt(2) * erfc^-1(2 * u)
/// ```
///
/// The upper half is computed as `-Phi^-1(1 - u)` (`1 - u` is exact there), so
/// `erfc^-1` is only evaluated inside `(0, 1]`.
///
///  - `ndtri(0.0) = -inf` and `ndtri(1.0) = inf`
///  - Returns a NaN if `u` is outside `[0, 1]` or is a NaN.
#[must_use]
#[inline]
pub fn ndtri(u: f64) -> f64 {
    if !(0.0..=1.0).contains(&u) {
        return f64::NAN;
    }
    if u == 0.0 {
        return f64::NEG_INFINITY;
    }
    if u == 1.0 {
        return f64::INFINITY;
    }
    if 0.5 < u {
        return SQRT_2 * erfc_inv(2.0 * (1.0 - u));
    }
    return -SQRT_2 * erfc_inv(2.0 * u);
}

/// Clamps `x` into `[min, max]`. NaNs are kept as NaNs.
#[must_use]
#[inline]
pub fn clip(x: f64, min: f64, max: f64) -> f64 {
    if x < min {
        return min;
    }
    if max < x {
        return max;
    }
    return x;
}
