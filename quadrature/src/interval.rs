//! A function together with the closed interval it is integrated over.
//!
//! [`BoundedInterval`] is the value every integrator consumes. It also owns the
//! discretization helpers shared by the deterministic rules: an evenly spaced
//! grid over the interval and a grid-based estimate of the integrand's peak.

use rand::Rng;

use crate::error::QuadratureError;

/// Largest subinterval count whose `n + 1` grid points still fit in a `Vec<f64>`.
const MAX_GRID_STEPS: usize = isize::MAX as usize / std::mem::size_of::<f64>() - 1;

/// An integrand `f: R -> R` bounded on `[lower, upper]`.
///
/// The bounds are validated once at construction (`lower <= upper`, both
/// finite, finite width) and never change afterwards, so integrators can borrow the same
/// interval freely. A degenerate interval (`lower == upper`) is allowed and
/// integrates to zero.
///
/// # Examples
///
/// ```rust
/// use quadrature::BoundedInterval;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let parabola = BoundedInterval::new(|x: f64| x * x, -1.0, 1.0)?;
/// assert_eq!(parabola.width(), 2.0);
/// assert_eq!(parabola.points_over(4)?, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BoundedInterval<F>
where
    F: Fn(f64) -> f64,
{
    integrand: F,
    lower: f64,
    upper: f64,
}

impl<F> BoundedInterval<F>
where
    F: Fn(f64) -> f64,
{
    /// Create a new bounded interval.
    ///
    /// # Errors
    ///
    /// * `QuadratureError::NonFiniteBound` - either bound is NaN or infinite
    /// * `QuadratureError::InvertedBounds` - `lower > upper`
    /// * `QuadratureError::WidthOverflow` - `upper - lower` is not representable
    pub fn new(integrand: F, lower: f64, upper: f64) -> Result<Self, QuadratureError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(QuadratureError::NonFiniteBound { lower, upper });
        }
        if lower > upper {
            return Err(QuadratureError::InvertedBounds { lower, upper });
        }
        if !(upper - lower).is_finite() {
            return Err(QuadratureError::WidthOverflow { lower, upper });
        }

        Ok(Self {
            integrand,
            lower,
            upper,
        })
    }

    /// Left end of the interval.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Right end of the interval.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Length of the interval, `upper - lower`.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// True when the interval is a single point.
    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }

    /// Evaluate the integrand at `x`.
    ///
    /// # Errors
    ///
    /// Returns `QuadratureError::NonFiniteIntegrand` when the integrand yields NaN or
    /// an infinity. The value is passed through untouched otherwise.
    pub fn evaluate(&self, x: f64) -> Result<f64, QuadratureError> {
        let value = (self.integrand)(x);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(QuadratureError::NonFiniteIntegrand { x, value })
        }
    }

    /// Evenly spaced discretization of the interval into `n` subintervals.
    ///
    /// Returns `n + 1` points where point `i` is `lower + (i / n) * (upper - lower)`.
    /// The final point is pinned to `upper` so rounding never leaves the
    /// interval open at the right end.
    ///
    /// # Errors
    ///
    /// * `QuadratureError::ZeroSteps` - `n == 0`
    /// * `QuadratureError::TooManySteps` - `n + 1` points cannot be allocated
    pub fn points_over(&self, n: usize) -> Result<Vec<f64>, QuadratureError> {
        if n == 0 {
            return Err(QuadratureError::ZeroSteps);
        }
        if n > MAX_GRID_STEPS {
            return Err(QuadratureError::TooManySteps(n));
        }

        let width = self.width();
        let mut points = Vec::with_capacity(n + 1);
        // i / n stays in [0, 1), so the product cannot overflow for wide intervals
        points.extend((0..n).map(|i| self.lower + (i as f64 / n as f64) * width));
        points.push(self.upper);

        Ok(points)
    }

    /// Largest integrand value seen on `points_over(n)`.
    ///
    /// The search starts from 0, so the result is only meaningful for
    /// integrands that are non-negative on the interval: an everywhere
    /// negative integrand reports 0. This matches its one use, picking the
    /// height of the Monte Carlo bounding rectangle, which has the same
    /// non-negativity precondition. Peaks that fall between grid points are
    /// missed.
    pub fn estimate_max(&self, n: usize) -> Result<f64, QuadratureError> {
        let mut max = 0.0;
        for x in self.points_over(n)? {
            let y = self.evaluate(x)?;
            if y > max {
                max = y;
            }
        }
        Ok(max)
    }

    /// Draw an abscissa uniformly from `[lower, upper)`.
    pub fn sample_x<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.lower + rng.random::<f64>() * self.width()
    }
}
