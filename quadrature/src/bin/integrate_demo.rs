//! Integral estimation demo
//!
//! Integrates a few functions with known closed-form integrals and prints each
//! estimate next to the exact value:
//!
//! - quarter circle `√(1 - x²)` on `[0, 1]`, whose area is `π/4`
//! - parabola `x²` on `[-1, 1]`, whose area is `2/3`
//!
//! # Usage
//!
//! ```bash
//! # All three methods on both functions
//! cargo run --release --bin integrate_demo
//!
//! # Reproducible Monte Carlo with fewer samples
//! cargo run --release --bin integrate_demo -- --seed 42 --iterations 1000000
//!
//! # Only the quarter circle, using a stored run configuration
//! cargo run --release --bin integrate_demo -- --function quarter-circle --config run.json
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;
use quadrature::{
    simpson, trapezoid, BoundedInterval, IntegrationConfig, MonteCarloIntegrator, QuadratureError,
};

fn quarter_circle(x: f64) -> f64 {
    (1.0 - x * x).sqrt()
}

fn parabola(x: f64) -> f64 {
    x * x
}

/// Functions with known integrals available to the demo
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SampleFunction {
    /// √(1 - x²) on [0, 1]
    QuarterCircle,
    /// x² on [-1, 1]
    Parabola,
}

impl SampleFunction {
    const ALL: [SampleFunction; 2] = [SampleFunction::QuarterCircle, SampleFunction::Parabola];

    fn interval(&self) -> Result<BoundedInterval<fn(f64) -> f64>, QuadratureError> {
        match self {
            SampleFunction::QuarterCircle => {
                BoundedInterval::new(quarter_circle as fn(f64) -> f64, 0.0, 1.0)
            }
            SampleFunction::Parabola => {
                BoundedInterval::new(parabola as fn(f64) -> f64, -1.0, 1.0)
            }
        }
    }

    /// Exact value of the integral
    fn expected(&self) -> f64 {
        match self {
            SampleFunction::QuarterCircle => std::f64::consts::FRAC_PI_4,
            SampleFunction::Parabola => 2.0 / 3.0,
        }
    }

    /// Largest value the integrand takes on its interval
    fn max_value(&self) -> f64 {
        match self {
            // √(1 - x²) peaks at x = 0
            SampleFunction::QuarterCircle => 1.0,
            // x² peaks at both ends
            SampleFunction::Parabola => 1.0,
        }
    }
}

impl std::fmt::Display for SampleFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleFunction::QuarterCircle => write!(f, "quarter circle"),
            SampleFunction::Parabola => write!(f, "parabola"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "Integrate Demo",
    about = "Estimates known definite integrals with Monte Carlo, trapezoid and Simpson rules",
    long_about = None
)]
struct Args {
    /// Function to integrate (if not specified, integrates all)
    #[arg(long)]
    function: Option<SampleFunction>,

    /// Number of Monte Carlo samples
    #[arg(long, default_value_t = 10_000_000)]
    iterations: usize,

    /// Subintervals for the trapezoid rule and panels for Simpson's rule
    #[arg(long, default_value_t = 1000)]
    steps: usize,

    /// Seed for the Monte Carlo random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// JSON run configuration; runs only the configured method
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading run configuration from {}", path.display());
            Some(IntegrationConfig::load_from_file(path)?)
        }
        None => None,
    };

    let functions = match args.function {
        Some(function) => vec![function],
        None => SampleFunction::ALL.to_vec(),
    };

    for function in functions {
        let interval = function.interval()?;

        println!("{function}");
        println!("  Expected = {}", function.expected());

        if let Some(config) = &config {
            let estimate = config.integrate(&interval)?;
            println!("  {:<12} {estimate}", config.method.to_string());
        } else {
            let mut integrator = MonteCarloIntegrator::with_optional_seed(args.seed);
            let monte_carlo =
                integrator.estimate(&interval, args.iterations, function.max_value())?;
            let trap = trapezoid::estimate(&interval, args.steps)?;
            let simp = simpson::estimate(&interval, args.steps)?;

            println!("  {:<12} {monte_carlo}", "monte-carlo");
            println!("  {:<12} {trap}", "trapezoid");
            println!("  {:<12} {simp}", "simpson");
        }
        println!();
    }

    Ok(())
}
