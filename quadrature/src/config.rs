//! Serializable description of a single integration run.
//!
//! An [`IntegrationConfig`] names one method and its parameters so a run can
//! be stored as JSON and replayed later, e.g. by the `integrate_demo` binary.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::QuadratureError;
use crate::interval::BoundedInterval;
use crate::monte_carlo::MonteCarloIntegrator;
use crate::{simpson, trapezoid};

/// Available integration methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationMethod {
    /// Rejection sampling inside a bounding rectangle
    MonteCarlo,
    /// Composite trapezoidal rule
    Trapezoid,
    /// Composite Simpson's rule - Default
    Simpson,
}

impl std::fmt::Display for IntegrationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegrationMethod::MonteCarlo => write!(f, "monte-carlo"),
            IntegrationMethod::Trapezoid => write!(f, "trapezoid"),
            IntegrationMethod::Simpson => write!(f, "simpson"),
        }
    }
}

/// Parameters for one integration run.
///
/// Fields missing from a JSON document take their [`Default`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationConfig {
    /// Which integrator to run
    pub method: IntegrationMethod,
    /// Subintervals (trapezoid), panels (Simpson) or samples (Monte Carlo)
    pub steps: usize,
    /// Height of the Monte Carlo bounding rectangle; estimated on a grid when absent
    pub max_value: Option<f64>,
    /// Grid resolution used to estimate `max_value` when it is absent
    pub max_search_steps: usize,
    /// Monte Carlo RNG seed; seeded from entropy when absent
    pub seed: Option<u64>,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            method: IntegrationMethod::Simpson,
            steps: 1000,
            max_value: None,
            max_search_steps: 1000,
            seed: None,
        }
    }
}

impl IntegrationConfig {
    /// Config for `method` with `steps`, everything else defaulted
    pub fn new(method: IntegrationMethod, steps: usize) -> Self {
        Self {
            method,
            steps,
            ..Self::default()
        }
    }

    /// Run the configured integrator over `interval`.
    pub fn integrate<F>(&self, interval: &BoundedInterval<F>) -> Result<f64, QuadratureError>
    where
        F: Fn(f64) -> f64,
    {
        match self.method {
            IntegrationMethod::Trapezoid => trapezoid::estimate(interval, self.steps),
            IntegrationMethod::Simpson => simpson::estimate(interval, self.steps),
            IntegrationMethod::MonteCarlo => {
                let mut integrator = MonteCarloIntegrator::with_optional_seed(self.seed);
                match self.max_value {
                    Some(max_value) => integrator.estimate(interval, self.steps, max_value),
                    None => integrator.estimate_with_auto_max(
                        interval,
                        self.steps,
                        self.max_search_steps,
                    ),
                }
            }
        }
    }

    /// Save to JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    /// Load from JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
