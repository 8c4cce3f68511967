//! # Markowitz Solvers
//!
//! $$
//! \Sigma \mathbf{w}_{raw} = \mu - r_f \mathbf{1}
//! $$
//!
//! Analytical tangency portfolio and long-only simplex grid search.

use nalgebra::Vector3;
use tracing::debug;

use super::data::validate_inputs;
use super::stats::portfolio_stats;
use super::types::MarkowitzResult;
use super::types::OptimizeConfig;
use crate::error::OptimizeError;
use crate::error::Result;

/// Smallest accepted grid resolution.
pub const MIN_RESOLUTION: usize = 3;

/// Normalization denominators below this magnitude are treated as degenerate.
const NORMALIZATION_TOL: f64 = 1e-14;

/// Closed-form tangency portfolio; shorting allowed.
///
/// Solves the first-order condition `cov * raw = mu - rf * 1` and rescales
/// `raw` so the weights sum to one.
pub fn optimize_sharpe_unconstrained(
  mu: &[f64],
  cov: &[Vec<f64>],
  risk_free: f64,
) -> Result<MarkowitzResult> {
  let (mu, cov) = validate_inputs(mu, cov)?;

  let excess = mu - Vector3::repeat(risk_free);
  let raw = cov
    .lu()
    .solve(&excess)
    .ok_or(OptimizeError::SingularCovariance)?;

  let denom = raw.sum();
  if denom.abs() < NORMALIZATION_TOL {
    return Err(OptimizeError::DegenerateNormalization);
  }

  let result = portfolio_stats(&(raw / denom), &mu, &cov, risk_free);
  debug!(sharpe = result.sharpe_ratio, "analytical tangency solve finished");
  Ok(result)
}

/// Long-only Sharpe maximizer over a dense grid on the 2-simplex.
///
/// Constraints: `w_i >= 0`, `sum w_i = 1`. `resolution` points are placed
/// uniformly along the first weight axis; the second axis gets a sub-grid
/// with `max(2, round(max_w2 * (resolution - 1)) + 1)` points over the
/// shrinking `[0, 1 - w1]` range, so its spacing tracks the first axis and
/// the simplex edges stay as densely sampled as the interior. Ties on the
/// Sharpe ratio keep the earlier candidate (lower `w1`, then lower `w2`).
pub fn optimize_sharpe_long_only(
  mu: &[f64],
  cov: &[Vec<f64>],
  risk_free: f64,
  resolution: usize,
) -> Result<MarkowitzResult> {
  let (mu, cov) = validate_inputs(mu, cov)?;

  if resolution < MIN_RESOLUTION {
    return Err(OptimizeError::InvalidResolution {
      min: MIN_RESOLUTION,
      actual: resolution,
    });
  }

  // All-in on asset 1, with the Sharpe forced below every finite candidate
  // so the corner still stands as the answer when no candidate has volatility.
  let mut best = MarkowitzResult {
    weights: Vector3::new(1.0, 0.0, 0.0),
    expected_return: mu[0],
    volatility: cov[(0, 0)].max(0.0).sqrt(),
    sharpe_ratio: f64::NEG_INFINITY,
  };

  let steps = (resolution - 1) as f64;
  let mut evaluated = 0usize;

  for i in 0..resolution {
    let w1 = i as f64 / steps;
    let max_w2 = 1.0 - w1;
    let n2 = ((max_w2 * steps).round() as usize + 1).max(2);

    for j in 0..n2 {
      let w2 = max_w2 * j as f64 / (n2 - 1) as f64;
      // Exact complement, so w1 + w2 + w3 == 1 by construction; may dip
      // marginally below zero where w1 + w2 rounds past one.
      let w3 = 1.0 - w1 - w2;

      let candidate = portfolio_stats(&Vector3::new(w1, w2, w3), &mu, &cov, risk_free);
      evaluated += 1;
      if candidate.sharpe_ratio > best.sharpe_ratio {
        best = candidate;
      }
    }
  }

  debug!(
    evaluated,
    sharpe = best.sharpe_ratio,
    "long-only grid search finished"
  );
  Ok(best)
}

/// Convenience dispatcher over both solvers.
pub fn optimize_sharpe(
  mu: &[f64],
  cov: &[Vec<f64>],
  config: &OptimizeConfig,
) -> Result<MarkowitzResult> {
  if config.long_only {
    optimize_sharpe_long_only(mu, cov, config.risk_free, config.resolution)
  } else {
    optimize_sharpe_unconstrained(mu, cov, config.risk_free)
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;
  use nalgebra::Matrix3;
  use tracing_test::traced_test;

  use super::*;
  use crate::markowitz::data::covariance_from_vols;

  /// Annualized example basket: mu, vols, and correlations for 3 assets.
  fn example_inputs() -> (Vec<f64>, Vec<Vec<f64>>) {
    let sigmas = Vector3::new(0.15, 0.22, 0.18);
    let corr = Matrix3::new(1.0, 0.30, 0.45, 0.30, 1.0, 0.40, 0.45, 0.40, 1.0);
    let cov = covariance_from_vols(&sigmas, &corr);

    let rows = (0..3)
      .map(|i| (0..3).map(|j| cov[(i, j)]).collect())
      .collect();
    (vec![0.08, 0.12, 0.10], rows)
  }

  #[test]
  fn analytical_weights_sum_to_one() {
    let (mu, cov) = example_inputs();
    let result = optimize_sharpe_unconstrained(&mu, &cov, 0.02).unwrap();

    assert_abs_diff_eq!(result.weights.sum(), 1.0, epsilon = 1e-9);
    assert!(result.sharpe_ratio.is_finite());
  }

  #[test]
  fn grid_result_stays_on_simplex() {
    let (mu, cov) = example_inputs();
    let result = optimize_sharpe_long_only(&mu, &cov, 0.02, 1501).unwrap();

    assert!(result.volatility > 0.0);
    assert_abs_diff_eq!(result.weights.sum(), 1.0, epsilon = 1e-9);
    for k in 0..3 {
      assert!(result.weights[k] >= -1e-12);
      assert!(result.weights[k] <= 1.0 + 1e-12);
    }
  }

  #[test]
  fn grid_beats_every_corner() {
    let (mu, cov) = example_inputs();
    let result = optimize_sharpe_long_only(&mu, &cov, 0.02, 501).unwrap();

    let (mu_v, cov_m) = validate_inputs(&mu, &cov).unwrap();
    for corner in [
      Vector3::new(1.0, 0.0, 0.0),
      Vector3::new(0.0, 1.0, 0.0),
      Vector3::new(0.0, 0.0, 1.0),
    ] {
      let corner_stats = portfolio_stats(&corner, &mu_v, &cov_m, 0.02);
      assert!(result.sharpe_ratio >= corner_stats.sharpe_ratio);
    }
  }

  #[test]
  fn grid_search_is_deterministic() {
    let (mu, cov) = example_inputs();
    let a = optimize_sharpe_long_only(&mu, &cov, 0.02, 301).unwrap();
    let b = optimize_sharpe_long_only(&mu, &cov, 0.02, 301).unwrap();

    assert_eq!(a.weights, b.weights);
    assert_eq!(a.expected_return, b.expected_return);
    assert_eq!(a.volatility, b.volatility);
    assert_eq!(a.sharpe_ratio, b.sharpe_ratio);
  }

  #[test]
  fn grid_and_analytical_agree_when_tangency_is_interior() {
    // All long weights in the unconstrained optimum, so the constrained
    // search must land on (nearly) the same portfolio.
    let (mu, cov) = example_inputs();
    let unconstrained = optimize_sharpe_unconstrained(&mu, &cov, 0.02).unwrap();
    let gridded = optimize_sharpe_long_only(&mu, &cov, 0.02, 2001).unwrap();

    if unconstrained.weights.min() >= 0.0 {
      assert_abs_diff_eq!(
        gridded.sharpe_ratio,
        unconstrained.sharpe_ratio,
        epsilon = 1e-4
      );
    }
  }

  #[test]
  fn rejects_resolution_below_minimum() {
    let (mu, cov) = example_inputs();
    let err = optimize_sharpe_long_only(&mu, &cov, 0.02, 2).unwrap_err();
    assert_eq!(err, OptimizeError::InvalidResolution { min: 3, actual: 2 });
  }

  #[test]
  fn rejects_singular_covariance() {
    let mu = vec![0.08, 0.12, 0.10];
    let cov = vec![
      vec![0.04, 0.04, 0.04],
      vec![0.04, 0.04, 0.04],
      vec![0.04, 0.04, 0.04],
    ];
    let err = optimize_sharpe_unconstrained(&mu, &cov, 0.0).unwrap_err();
    assert_eq!(err, OptimizeError::SingularCovariance);
  }

  #[test]
  fn rejects_degenerate_normalization() {
    // Zero excess returns solve to the zero direction, which cannot be
    // rescaled to a fully-invested portfolio.
    let (_, cov) = example_inputs();
    let mu = vec![0.02, 0.02, 0.02];
    let err = optimize_sharpe_unconstrained(&mu, &cov, 0.02).unwrap_err();
    assert_eq!(err, OptimizeError::DegenerateNormalization);
  }

  #[test]
  fn validation_errors_propagate_from_solvers() {
    let (_, cov) = example_inputs();
    assert!(matches!(
      optimize_sharpe_long_only(&[0.08, 0.12], &cov, 0.0, 101),
      Err(OptimizeError::Shape { name: "mu", .. })
    ));

    let (mu, mut cov) = example_inputs();
    cov[0][1] += 1e-6;
    assert!(matches!(
      optimize_sharpe_unconstrained(&mu, &cov, 0.0),
      Err(OptimizeError::Asymmetric { .. })
    ));
  }

  #[test]
  fn dispatcher_selects_configured_solver() {
    let (mu, cov) = example_inputs();

    let long_only = optimize_sharpe(
      &mu,
      &cov,
      &OptimizeConfig {
        risk_free: 0.02,
        long_only: true,
        resolution: 301,
      },
    )
    .unwrap();
    let direct = optimize_sharpe_long_only(&mu, &cov, 0.02, 301).unwrap();
    assert_eq!(long_only.weights, direct.weights);

    let unconstrained = optimize_sharpe(
      &mu,
      &cov,
      &OptimizeConfig {
        risk_free: 0.02,
        long_only: false,
        ..OptimizeConfig::default()
      },
    )
    .unwrap();
    let direct = optimize_sharpe_unconstrained(&mu, &cov, 0.02).unwrap();
    assert_eq!(unconstrained.weights, direct.weights);
  }

  #[test]
  fn default_config_is_long_only_grid() {
    let config = OptimizeConfig::default();
    assert!(config.long_only);
    assert_eq!(config.resolution, 2001);
    assert_eq!(config.risk_free, 0.0);
  }

  #[traced_test]
  #[test]
  fn grid_search_emits_completion_event() {
    let (mu, cov) = example_inputs();
    optimize_sharpe_long_only(&mu, &cov, 0.02, 101).unwrap();
    assert!(logs_contain("long-only grid search finished"));
  }
}
