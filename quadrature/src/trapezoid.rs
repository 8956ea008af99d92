//! Composite trapezoidal rule

use std::cmp::Ordering;

use log::debug;

use crate::error::QuadratureError;
use crate::interval::BoundedInterval;

/// Composite trapezoidal rule over evenly spaced subintervals.
pub struct TrapezoidIntegrator;

impl TrapezoidIntegrator {
    /// See [`estimate`].
    pub fn estimate<F>(interval: &BoundedInterval<F>, n: usize) -> Result<f64, QuadratureError>
    where
        F: Fn(f64) -> f64,
    {
        estimate(interval, n)
    }
}

/// Estimate the integral of `interval` with the composite trapezoidal rule.
///
/// Splits `[lower, upper]` into `n` subintervals of width `Δ = (upper - lower) / n`
/// and sums `(f(xᵢ) + f(xᵢ₊₁)) · Δ / 2` over them. Each grid point is
/// evaluated once. The result is exact for integrands that are affine on every
/// subinterval; for smooth integrands the error shrinks as `O(Δ²)`.
///
/// # Errors
///
/// * `QuadratureError::ZeroSteps` - `n == 0`
/// * `QuadratureError::TooManySteps` - the `n + 1` point grid cannot be built
/// * `QuadratureError::NonFiniteIntegrand` - the integrand produced NaN or ±∞
pub fn estimate<F>(interval: &BoundedInterval<F>, n: usize) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    let corners = interval.points_over(n)?;
    let delta_x = interval.width() / (n as f64);

    debug!(
        "Trapezoid rule on [{}, {}] with {n} subintervals",
        interval.lower(),
        interval.upper()
    );

    let mut integral_sum = 0.0;
    let mut y_left = interval.evaluate(corners[0])?;

    for &x_right in &corners[1..] {
        let y_right = interval.evaluate(x_right)?;

        // Trapezoid area: (base width) × (average height)
        integral_sum += delta_x * (y_left + y_right) / 2.0;

        y_left = y_right;
    }

    debug!("Trapezoid estimate: {integral_sum}");
    Ok(integral_sum)
}

/// Performs trapezoidal integration of a function over a set of points.
///
/// Unlike [`estimate`], the corners may be unevenly spaced, which suits
/// tabulated grids such as measured sample positions.
///
/// # Arguments
///
/// * `corners` - The x coordinates of the trapezoid corners in strictly ascending order
/// * `to_integrate` - The function to integrate
///
/// # Returns
///
/// The result of the trapezoidal integration or an error if the input is invalid.
pub fn trap_integrate<F>(corners: &[f64], to_integrate: F) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    if corners.len() < 2 {
        return Err(QuadratureError::InsufficientPoints);
    }

    // NaN corners compare as unordered and are rejected here too
    if corners
        .windows(2)
        .any(|pair| pair[0].partial_cmp(&pair[1]) != Some(Ordering::Less))
    {
        return Err(QuadratureError::NotAscending);
    }

    // The corners span their own interval; reuse its finiteness check on f
    let span = BoundedInterval::new(to_integrate, corners[0], corners[corners.len() - 1])?;

    let mut integral_sum = 0.0;
    let mut y_left = span.evaluate(corners[0])?;

    for pair in corners.windows(2) {
        let y_right = span.evaluate(pair[1])?;
        integral_sum += (pair[1] - pair[0]) * (y_left + y_right) / 2.0;
        y_left = y_right;
    }

    Ok(integral_sum)
}
