//! # Portfolio Statistics
//!
//! $$
//! \sigma_p^2 = \mathbf{w}^\top \Sigma \mathbf{w}
//! $$
//!
//! Pure scoring function shared by both solvers.

use nalgebra::Matrix3;
use nalgebra::Vector3;

use super::types::MarkowitzResult;

/// Return, volatility, and Sharpe ratio for an arbitrary weight vector.
///
/// The weights are not required to lie on the simplex; short or levered
/// positions are scored as-is. A negative quadratic form (numerical noise or
/// a non-PSD covariance) is clamped to zero variance, and a zero-volatility
/// portfolio gets a `NEG_INFINITY` Sharpe so it loses every maximize-Sharpe
/// comparison against finite candidates.
#[must_use]
pub fn portfolio_stats(
  weights: &Vector3<f64>,
  mu: &Vector3<f64>,
  cov: &Matrix3<f64>,
  risk_free: f64,
) -> MarkowitzResult {
  let expected_return = weights.dot(mu);
  let variance = (cov * weights).dot(weights);
  let volatility = variance.max(0.0).sqrt();

  let sharpe_ratio = if volatility > 0.0 {
    (expected_return - risk_free) / volatility
  } else {
    f64::NEG_INFINITY
  };

  MarkowitzResult {
    weights: *weights,
    expected_return,
    volatility,
    sharpe_ratio,
  }
}
