//! Error type shared by every integrator in this crate.

use thiserror::Error;

/// Errors that can occur while building an interval or estimating an integral.
///
/// Argument errors are reported before the integrand is evaluated even once.
/// An integrand that produces a non-finite value aborts the estimate at that
/// point; no partial result is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuadratureError {
    #[error("Step or iteration count must be at least 1")]
    ZeroSteps,

    #[error("Lower bound {lower} is greater than upper bound {upper}")]
    InvertedBounds { lower: f64, upper: f64 },

    #[error("Interval bounds must be finite, got [{lower}, {upper}]")]
    NonFiniteBound { lower: f64, upper: f64 },

    #[error("Interval [{lower}, {upper}] is too wide, its width overflows f64")]
    WidthOverflow { lower: f64, upper: f64 },

    #[error("Step count {0} is too large to discretize the interval")]
    TooManySteps(usize),

    #[error("Maximum value {0} must be finite and non-negative")]
    InvalidMaxValue(f64),

    #[error("Insufficient points for integration, need at least 2 points")]
    InsufficientPoints,

    #[error("Points must be in ascending order")]
    NotAscending,

    #[error("Integrand returned non-finite value {value} at x = {x}")]
    NonFiniteIntegrand { x: f64, value: f64 },
}

impl QuadratureError {
    /// True for every variant caused by a bad argument rather than by the integrand.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, QuadratureError::NonFiniteIntegrand { .. })
    }
}
