use thiserror::Error;

/// An enum that indicates what went wrong when building or evaluating a distribution.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistError {
    /// A scale parameter was not stricly positive (`0.0 < scale` is requiered).
    /// Contains the first offending value (it may be a NaN).
    #[error("The scale parameter must be stricly positive, but {0} was found. ")]
    NonPositiveScale(f64),
    /// Two shapes could not be broadcast together. Contains both shapes.
    #[error("The shapes {0:?} and {1:?} cannot be broadcast together. ")]
    ShapeMismatch(Vec<usize>, Vec<usize>),
    /// The confidence level for an interval was not a valid probability. (`0.0 <= confidence <= 1.0`)
    #[error("The confidence level must be inside [0, 1], but {0} was found. ")]
    InvalidConfidence(f64),
}
