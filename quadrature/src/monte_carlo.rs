//! Monte Carlo (rejection sampling) integration.
//!
//! Samples are drawn uniformly from the bounding rectangle
//! `[lower, upper] × [0, max_value]`, and the rectangle's area is scaled by
//! the fraction that lands strictly below the curve.
//!
//! # Preconditions
//!
//! The estimator is only unbiased when the integrand is non-negative on the
//! interval and never exceeds `max_value`. Neither condition is enforced:
//! samples that violate them are counted and reported through `log::warn!`,
//! but the estimate is returned unchanged and will be systematically off.
//!
//! # Randomness
//!
//! The random source is always injected. Seeding a [`MonteCarloIntegrator`]
//! with [`MonteCarloIntegrator::from_seed`] yields a `ChaCha8Rng` stream, so
//! the same seed reproduces the same estimate bit for bit. The expected value
//! converges to the integral as the number of iterations grows, with a
//! standard deviation that shrinks as `O(1/√iterations)`.

use log::{debug, warn};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::QuadratureError;
use crate::interval::BoundedInterval;

/// Rejection-sampling integrator that owns its random number generator.
///
/// [`estimate`](Self::estimate) takes `&mut self`, so a generator is only ever
/// used by one integration at a time. To share a caller's generator instead,
/// pass `&mut rng`, since `&mut R` is itself an `Rng`.
///
/// # Examples
///
/// ```rust
/// use quadrature::{BoundedInterval, MonteCarloIntegrator};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let circle = BoundedInterval::new(|x: f64| (1.0 - x * x).sqrt(), 0.0, 1.0)?;
///
/// let mut integrator = MonteCarloIntegrator::from_seed(7);
/// let quarter_pi = integrator.estimate(&circle, 100_000, 1.0)?;
/// assert!((quarter_pi - std::f64::consts::FRAC_PI_4).abs() < 0.01);
/// # Ok(())
/// # }
/// ```
pub struct MonteCarloIntegrator<R = ChaCha8Rng> {
    rng: R,
}

impl MonteCarloIntegrator<ChaCha8Rng> {
    /// Integrator driven by a `ChaCha8Rng` seeded with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Integrator seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::with_optional_seed(None)
    }

    /// Seeded when `seed` is given, otherwise seeded from entropy.
    pub fn with_optional_seed(seed: Option<u64>) -> Self {
        Self::from_seed(seed.unwrap_or_else(|| rand::rng().next_u64()))
    }
}

impl<R: Rng> MonteCarloIntegrator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Estimate the integral with `iterations` rejection samples under `max_value`.
    ///
    /// See [`estimate`] for the algorithm and error conditions.
    pub fn estimate<F>(
        &mut self,
        interval: &BoundedInterval<F>,
        iterations: usize,
        max_value: f64,
    ) -> Result<f64, QuadratureError>
    where
        F: Fn(f64) -> f64,
    {
        estimate(interval, iterations, max_value, &mut self.rng)
    }

    /// Estimate the integral with a bounding height taken from the integrand itself.
    ///
    /// The height is `interval.estimate_max(grid_steps)`, the largest value on an
    /// even grid. A peak between grid points can exceed it, which biases the
    /// estimate low; pick `grid_steps` fine enough to resolve the peak.
    pub fn estimate_with_auto_max<F>(
        &mut self,
        interval: &BoundedInterval<F>,
        iterations: usize,
        grid_steps: usize,
    ) -> Result<f64, QuadratureError>
    where
        F: Fn(f64) -> f64,
    {
        if iterations == 0 {
            return Err(QuadratureError::ZeroSteps);
        }
        let max_value = interval.estimate_max(grid_steps)?;
        debug!("Estimated bounding height {max_value} from {grid_steps} grid steps");
        self.estimate(interval, iterations, max_value)
    }
}

/// Estimate the integral of `interval` by rejection sampling.
///
/// Runs exactly `iterations` trials. Each draws `x` uniformly from
/// `[lower, upper)` and `y` uniformly from `[0, max_value)` and counts as a hit
/// when `y < f(x)`. Returns `(upper - lower) · max_value · hits / iterations`.
///
/// # Errors
///
/// * `QuadratureError::ZeroSteps` - `iterations == 0`
/// * `QuadratureError::InvalidMaxValue` - `max_value` is negative, NaN or infinite
/// * `QuadratureError::NonFiniteIntegrand` - the integrand produced NaN or ±∞
pub fn estimate<F, R>(
    interval: &BoundedInterval<F>,
    iterations: usize,
    max_value: f64,
    rng: &mut R,
) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
    R: Rng + ?Sized,
{
    if iterations == 0 {
        return Err(QuadratureError::ZeroSteps);
    }
    if !max_value.is_finite() || max_value < 0.0 {
        return Err(QuadratureError::InvalidMaxValue(max_value));
    }

    debug!(
        "Monte Carlo on [{}, {}] x [0, {max_value}] with {iterations} samples",
        interval.lower(),
        interval.upper()
    );

    let mut number_below = 0usize;
    let mut outside_box = 0usize;

    for _ in 0..iterations {
        let x = interval.sample_x(rng);
        let y = rng.random::<f64>() * max_value;
        let fx = interval.evaluate(x)?;

        if fx < 0.0 || fx > max_value {
            outside_box += 1;
        }
        if y < fx {
            number_below += 1;
        }
    }

    if outside_box > 0 {
        warn!(
            "{outside_box} of {iterations} samples fell outside [0, {max_value}]; \
             the Monte Carlo estimate is biased"
        );
    }

    let area = interval.width() * max_value;
    let result = area * (number_below as f64) / (iterations as f64);

    debug!("Monte Carlo estimate: {result} ({number_below} hits)");
    Ok(result)
}
