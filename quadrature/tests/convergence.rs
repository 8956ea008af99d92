//! Cross-method accuracy and convergence checks against closed-form integrals

use std::f64::consts::{E, FRAC_PI_4};

use approx::assert_relative_eq;
use quadrature::{simpson, trapezoid, BoundedInterval, MonteCarloIntegrator, QuadratureError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn quarter_circle() -> BoundedInterval<impl Fn(f64) -> f64 + Sync> {
    BoundedInterval::new(|x: f64| (1.0 - x * x).sqrt(), 0.0, 1.0).unwrap()
}

#[test]
fn test_reference_values() {
    init_logging();

    let parabola = BoundedInterval::new(|x: f64| x * x, -1.0, 1.0).unwrap();
    let trap = trapezoid::estimate(&parabola, 1000).unwrap();
    assert_relative_eq!(trap, 0.6667, epsilon = 5e-5);

    let simp = simpson::estimate(&quarter_circle(), 1000).unwrap();
    assert_relative_eq!(simp, 0.7854, epsilon = 5e-5);
}

#[test]
fn test_monte_carlo_quarter_circle_over_seeds() {
    init_logging();
    let circle = quarter_circle();

    // σ of a single 10M-sample estimate is ~1.3e-4, far inside the ±0.01 band
    for seed in [1, 2, 3] {
        let mut integrator = MonteCarloIntegrator::from_seed(seed);
        let result = integrator.estimate(&circle, 10_000_000, 1.0).unwrap();
        assert!(
            (result - FRAC_PI_4).abs() < 0.01,
            "seed {seed}: estimate {result} too far from π/4"
        );
    }
}

#[test]
fn test_degenerate_interval_integrates_to_zero() {
    let point = BoundedInterval::new(|x: f64| x.sin() + 2.0, 0.75, 0.75).unwrap();

    assert_eq!(trapezoid::estimate(&point, 16).unwrap(), 0.0);
    assert_eq!(simpson::estimate(&point, 16).unwrap(), 0.0);
    assert_eq!(
        MonteCarloIntegrator::from_seed(4)
            .estimate(&point, 1000, 3.0)
            .unwrap(),
        0.0
    );
}

#[test]
fn test_polynomial_exactness() {
    // Trapezoid is exact for affine integrands, Simpson up to cubics
    let affine = BoundedInterval::new(|x: f64| 0.5 * x + 2.0, -3.0, 1.0).unwrap();
    let quadratic = BoundedInterval::new(|x: f64| 3.0 * x * x - x + 1.0, 0.0, 2.0).unwrap();
    let cubic = BoundedInterval::new(|x: f64| x * x * x + x, -2.0, 3.0).unwrap();

    // ∫₋₃¹ 0.5x + 2 = [x²/4 + 2x] = 2.25 - (-3.75) = 6
    assert_relative_eq!(trapezoid::estimate(&affine, 3).unwrap(), 6.0, epsilon = 1e-9);
    assert_relative_eq!(simpson::estimate(&affine, 3).unwrap(), 6.0, epsilon = 1e-9);
    // ∫₀² 3x² - x + 1 = [x³ - x²/2 + x] = 8 - 2 + 2 = 8
    assert_relative_eq!(simpson::estimate(&quadratic, 1).unwrap(), 8.0, epsilon = 1e-9);
    // ∫₋₂³ x³ + x = [x⁴/4 + x²/2] = (81/4 + 9/2) - (4 + 2) = 18.75
    assert_relative_eq!(simpson::estimate(&cubic, 2).unwrap(), 18.75, epsilon = 1e-9);
}

#[test]
fn test_error_decreases_with_steps() {
    let exp = BoundedInterval::new(|x: f64| x.exp(), 0.0, 1.0).unwrap();
    let exact = E - 1.0;

    let trap_errors: Vec<f64> = [2, 4, 8, 16, 32, 64, 128, 256, 512, 1024]
        .iter()
        .map(|&n| (trapezoid::estimate(&exp, n).unwrap() - exact).abs())
        .collect();
    for pair in trap_errors.windows(2) {
        assert!(pair[1] < pair[0], "trapezoid error did not shrink: {pair:?}");
    }

    // Simpson reaches round-off around 1e-13, so stop before then
    let simpson_errors: Vec<f64> = [1, 2, 4, 8, 16, 32, 64]
        .iter()
        .map(|&n| (simpson::estimate(&exp, n).unwrap() - exact).abs())
        .collect();
    for pair in simpson_errors.windows(2) {
        assert!(pair[1] < pair[0], "Simpson error did not shrink: {pair:?}");
    }

    // At the same n Simpson is far more accurate
    assert!(simpson_errors[6] * 1e3 < trap_errors[5]);
}

#[test]
fn test_trapezoid_error_order() {
    // Halving Δ should cut the trapezoid error by ~4
    let exp = BoundedInterval::new(|x: f64| x.exp(), 0.0, 1.0).unwrap();
    let exact = E - 1.0;

    let coarse = (trapezoid::estimate(&exp, 100).unwrap() - exact).abs();
    let fine = (trapezoid::estimate(&exp, 200).unwrap() - exact).abs();
    assert_relative_eq!(coarse / fine, 4.0, epsilon = 0.01);
}

#[test]
fn test_zero_steps_rejected_everywhere() {
    let circle = quarter_circle();

    assert_eq!(trapezoid::estimate(&circle, 0), Err(QuadratureError::ZeroSteps));
    assert_eq!(simpson::estimate(&circle, 0), Err(QuadratureError::ZeroSteps));
    assert_eq!(
        MonteCarloIntegrator::from_seed(0).estimate(&circle, 0, 1.0),
        Err(QuadratureError::ZeroSteps)
    );
}

#[test]
fn test_inverted_interval_rejected_before_integration() {
    let err = BoundedInterval::new(|x: f64| x, 1.0, -1.0).err().unwrap();

    assert!(err.is_invalid_argument());
    assert_eq!(
        err,
        QuadratureError::InvertedBounds {
            lower: 1.0,
            upper: -1.0
        }
    );
}

#[test]
fn test_non_finite_integrand_propagates() {
    let blows_up = BoundedInterval::new(|x: f64| 1.0 / (x - 0.5), 0.0, 1.0).unwrap();

    // x = 0.5 is a grid point for every even subinterval count
    for result in [
        trapezoid::estimate(&blows_up, 10),
        simpson::estimate(&blows_up, 10),
    ] {
        let err = result.unwrap_err();
        assert!(!err.is_invalid_argument());
        assert!(matches!(err, QuadratureError::NonFiniteIntegrand { x, .. } if x == 0.5));
    }

    let nan = BoundedInterval::new(|_| f64::NAN, 0.0, 1.0).unwrap();
    assert!(matches!(
        MonteCarloIntegrator::from_seed(9).estimate(&nan, 10, 1.0),
        Err(QuadratureError::NonFiniteIntegrand { .. })
    ));
}

#[test]
fn test_concurrent_integrations_share_one_interval() {
    let circle = quarter_circle();

    let (trap, simp, mc) = std::thread::scope(|s| {
        let trap = s.spawn(|| trapezoid::estimate(&circle, 500));
        let simp = s.spawn(|| simpson::estimate(&circle, 500));
        let mc = s.spawn(|| MonteCarloIntegrator::from_seed(21).estimate(&circle, 100_000, 1.0));
        (
            trap.join().unwrap().unwrap(),
            simp.join().unwrap().unwrap(),
            mc.join().unwrap().unwrap(),
        )
    });

    assert_eq!(trap, trapezoid::estimate(&circle, 500).unwrap());
    assert_eq!(simp, simpson::estimate(&circle, 500).unwrap());
    assert_eq!(
        mc,
        MonteCarloIntegrator::from_seed(21)
            .estimate(&circle, 100_000, 1.0)
            .unwrap()
    );
}
