//! Numerical estimation of one-dimensional definite integrals.
//!
//! A [`BoundedInterval`] pairs an integrand with the closed interval to
//! integrate over. Any of three independent estimators can then be run on it:
//!
//! - **Monte Carlo**: rejection sampling inside a bounding rectangle
//!   ([`MonteCarloIntegrator`]), with an injectable, seedable random source
//! - **Trapezoid**: composite trapezoidal rule, error `O(Δ²)` ([`trapezoid`])
//! - **Simpson**: composite Simpson's rule, exact up to cubics ([`simpson`])
//!
//! Every estimator returns `Result<f64, QuadratureError>`. Bad arguments are
//! rejected before the integrand is evaluated, and an integrand that yields
//! NaN or an infinity stops the estimate with
//! [`QuadratureError::NonFiniteIntegrand`].
//!
//! ```rust
//! use quadrature::{simpson, trapezoid, BoundedInterval};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let circle = BoundedInterval::new(|x: f64| (1.0 - x * x).sqrt(), 0.0, 1.0)?;
//!
//! let pi_trap = 4.0 * trapezoid::estimate(&circle, 1000)?;
//! let pi_simpson = 4.0 * simpson::estimate(&circle, 1000)?;
//! assert!((pi_trap - std::f64::consts::PI).abs() < 1e-3);
//! assert!((pi_simpson - std::f64::consts::PI).abs() < 1e-3);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod interval;
pub mod monte_carlo;
pub mod simpson;
pub mod trapezoid;

pub use config::{IntegrationConfig, IntegrationMethod};
pub use error::QuadratureError;
pub use interval::BoundedInterval;
pub use monte_carlo::MonteCarloIntegrator;
pub use simpson::SimpsonIntegrator;
pub use trapezoid::{trap_integrate, TrapezoidIntegrator};
