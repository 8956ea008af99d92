//! Composite Simpson's rule

use log::debug;

use crate::error::QuadratureError;
use crate::interval::BoundedInterval;

/// Composite Simpson's rule over `n` panels of two subintervals each.
pub struct SimpsonIntegrator;

impl SimpsonIntegrator {
    /// See [`estimate`].
    pub fn estimate<F>(interval: &BoundedInterval<F>, n: usize) -> Result<f64, QuadratureError>
    where
        F: Fn(f64) -> f64,
    {
        estimate(interval, n)
    }
}

/// Estimate the integral of `interval` with composite Simpson's rule.
///
/// The interval is split into `n` panels, each `2Δ` wide, giving the grid
/// `x₀ … x₂ₙ` with `Δ = (upper - lower) / 2n`. The estimate is
///
/// ```text
/// Δ/3 · ( f(x₀) + 4·Σ f(x₂ᵢ₋₁) + 2·Σ f(x₂ᵢ) + f(x₂ₙ) )
/// ```
///
/// where the odd sum runs over `i = 1..=n` and the even sum over the interior
/// points `i = 1..n`. Exact for polynomials up to degree 3; the error for
/// smooth integrands is `O(Δ⁴)`.
///
/// # Errors
///
/// * `QuadratureError::ZeroSteps` - `n == 0`
/// * `QuadratureError::TooManySteps` - the `2n + 1` point grid cannot be built
/// * `QuadratureError::NonFiniteIntegrand` - the integrand produced NaN or ±∞
pub fn estimate<F>(interval: &BoundedInterval<F>, n: usize) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    if n == 0 {
        return Err(QuadratureError::ZeroSteps);
    }

    let subintervals = n
        .checked_mul(2)
        .ok_or(QuadratureError::TooManySteps(n))?;
    let xs = interval.points_over(subintervals)?;
    let delta_x = interval.width() / subintervals as f64;

    debug!(
        "Simpson rule on [{}, {}] with {n} panels",
        interval.lower(),
        interval.upper()
    );

    let mut odd_sum = 0.0;
    for i in 1..=n {
        odd_sum += interval.evaluate(xs[2 * i - 1])?;
    }

    let mut even_sum = 0.0;
    for i in 1..n {
        even_sum += interval.evaluate(xs[2 * i])?;
    }

    let ends = interval.evaluate(xs[0])? + interval.evaluate(xs[subintervals])?;
    let result = delta_x * (ends + 4.0 * odd_sum + 2.0 * even_sum) / 3.0;

    debug!("Simpson estimate: {result}");
    Ok(result)
}
