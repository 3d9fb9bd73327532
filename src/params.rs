//! # Parameters and broadcasting
//!
//! Every distribution can be built from scalar parameters or from arrays of
//! parameters (one distribution per element). The same holds for the points
//! where a distribution is evaluated.
//!
//! Shapes are combined with the usual [broadcasting](https://numpy.org/doc/stable/user/basics.broadcasting.html)
//! rules: the shapes are aligned from the last axis and, for every axis, the
//! lengths must either be equal or one of them must be `1`. Missing axes count
//! as `1`. A scalar is a 0-dimensional array, so it can be broadcast to anything.

use ndarray::{Array, Array1, ArrayD, ArrayView, ArrayViewD, Dimension, Zip, arr0};

use crate::errors::DistError;

/// A parameter of a distribution: a scalar or an array of any dimension.
///
/// It can be created (with [From] / [Into]) from a `f64`, a `Vec<f64>`,
/// a slice, a fixed size array or any `ndarray` array of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Param(ArrayD<f64>);

impl Param {
    /// Creates a scalar (0-dimensional) parameter.
    #[must_use]
    pub fn scalar(value: f64) -> Param {
        return Param(arr0(value).into_dyn());
    }

    /// The shape of the parameter. Empty for scalars.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        return self.0.shape();
    }

    /// Returns a view of the values.
    #[must_use]
    pub fn view(&self) -> ArrayViewD<'_, f64> {
        return self.0.view();
    }

    /// Returns the underlying array.
    #[must_use]
    pub fn into_inner(self) -> ArrayD<f64> {
        return self.0;
    }

    /// Applies `f` to every element, returning an array with the same shape.
    pub(crate) fn map<P, F>(&self, f: F) -> ArrayD<P>
    where
        F: Fn(f64) -> P,
    {
        return self.0.map(|&v| f(v));
    }

    /// The first element that does not fulfill `0.0 < x` (NaNs included), if any.
    pub(crate) fn first_non_positive(&self) -> Option<f64> {
        return self.0.iter().copied().find(|&s| !(0.0 < s));
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        return Param::scalar(value);
    }
}

impl From<Vec<f64>> for Param {
    fn from(values: Vec<f64>) -> Self {
        return Param(Array1::from(values).into_dyn());
    }
}

impl From<&[f64]> for Param {
    fn from(values: &[f64]) -> Self {
        return Param(Array1::from(values.to_vec()).into_dyn());
    }
}

impl<const N: usize> From<[f64; N]> for Param {
    fn from(values: [f64; N]) -> Self {
        return Param(Array1::from(values.to_vec()).into_dyn());
    }
}

impl<D: Dimension> From<Array<f64, D>> for Param {
    fn from(values: Array<f64, D>) -> Self {
        return Param(values.into_dyn());
    }
}

impl<'a, D: Dimension> From<ArrayView<'a, f64, D>> for Param {
    fn from(values: ArrayView<'a, f64, D>) -> Self {
        return Param(values.to_owned().into_dyn());
    }
}

/// Creates a 0-dimensional array with the given value. Uscefull to evaluate
/// a distribution at a single point.
///
/// ```
/// use FasterDistributions::distribution_trait::ContinuousDistribution;
/// use FasterDistributions::distributions::Normal::Normal;
/// use FasterDistributions::params::{as_scalar, scalar};
///
/// let normal: Normal = Normal::new(0.0, 1.0).unwrap();
/// let density: f64 = as_scalar(&normal.pdf(scalar(0.0).view()).unwrap()).unwrap();
/// assert!((density - 0.3989422804014327).abs() < 1e-15);
/// ```
#[must_use]
pub fn scalar(value: f64) -> ArrayD<f64> {
    return arr0(value).into_dyn();
}

/// Returns the value of a 0-dimensional array (the result of evaluating
/// scalar parameters at a single point). Returns [None] for any other shape.
#[must_use]
pub fn as_scalar(values: &ArrayD<f64>) -> Option<f64> {
    if values.ndim() != 0 {
        return None;
    }
    return values.first().copied();
}

/// Computes the shape resulting of broadcasting the shapes `a` and `b` together.
///
/// Returns [DistError::ShapeMismatch] if they are not compatible.
pub fn broadcast_shape(a: &[usize], b: &[usize]) -> Result<Vec<usize>, DistError> {
    let ndim: usize = a.len().max(b.len());
    let (pad_a, pad_b): (usize, usize) = (ndim - a.len(), ndim - b.len());

    let mut shape: Vec<usize> = Vec::with_capacity(ndim);
    for axis in 0..ndim {
        // missing (leading) axes have length 1
        let len_a: usize = if axis < pad_a { 1 } else { a[axis - pad_a] };
        let len_b: usize = if axis < pad_b { 1 } else { b[axis - pad_b] };

        let len: usize = if len_a == len_b || len_b == 1 {
            len_a
        } else if len_a == 1 {
            len_b
        } else {
            return Err(DistError::ShapeMismatch(a.to_vec(), b.to_vec()));
        };
        shape.push(len);
    }

    return Ok(shape);
}

/// Broadcasts `a` and `b` together and applies `f` element-wise.
pub(crate) fn broadcast_map<A, B, R, F>(
    a: ArrayViewD<'_, A>,
    b: ArrayViewD<'_, B>,
    f: F,
) -> Result<ArrayD<R>, DistError>
where
    A: Copy,
    B: Copy,
    F: Fn(A, B) -> R,
{
    let shape: Vec<usize> = broadcast_shape(a.shape(), b.shape())?;

    let (a_full, b_full) = match (a.broadcast(shape.clone()), b.broadcast(shape)) {
        (Some(a_full), Some(b_full)) => (a_full, b_full),
        _ => return Err(DistError::ShapeMismatch(a.shape().to_vec(), b.shape().to_vec())),
    };

    return Ok(Zip::from(&a_full)
        .and(&b_full)
        .map_collect(|&x, &y| f(x, y)));
}

/// Combines 2 parameters into a single array of (cached) per-element values.
pub(crate) fn combine<P, F>(a: &Param, b: &Param, f: F) -> Result<ArrayD<P>, DistError>
where
    F: Fn(f64, f64) -> P,
{
    return broadcast_map(a.view(), b.view(), f);
}

/// Evaluates `f` for every point of `x` with the corresponding per-element
/// `constants` of a distribution, broadcasting both.
pub(crate) fn evaluate<P, F>(
    x: ArrayViewD<'_, f64>,
    constants: &ArrayD<P>,
    f: F,
) -> Result<ArrayD<f64>, DistError>
where
    P: Copy,
    F: Fn(f64, P) -> f64,
{
    return broadcast_map(x, constants.view(), f);
}
