//! # Markowitz Types
//!
//! $$
//! \mathbf{w}^\*=\arg\max_{\mathbf{w}} \frac{\mathbb E[R_p]-r_f}{\sigma_p}
//! $$
//!
//! Result container and solver configuration for the three-asset optimizer.

use nalgebra::Vector3;

/// Output of a single solver call.
///
/// Plain value record, constructed once as the final answer and never
/// mutated afterwards.
#[derive(Clone, Copy, Debug)]
pub struct MarkowitzResult {
  /// Final portfolio weights.
  pub weights: Vector3<f64>,
  /// Expected portfolio return (annualized if inputs are annualized).
  pub expected_return: f64,
  /// Portfolio volatility, never negative.
  pub volatility: f64,
  /// Sharpe ratio `(expected_return - risk_free) / volatility`, or
  /// `f64::NEG_INFINITY` for zero-volatility portfolios.
  pub sharpe_ratio: f64,
}

/// Runtime configuration for [`optimize_sharpe`](crate::markowitz::optimize_sharpe).
#[derive(Clone, Copy, Debug)]
pub struct OptimizeConfig {
  /// Risk-free rate subtracted from returns before computing Sharpe.
  pub risk_free: f64,
  /// Select the long-only grid search instead of the analytical solver.
  pub long_only: bool,
  /// Grid density along the first weight axis for the long-only search.
  pub resolution: usize,
}

impl Default for OptimizeConfig {
  fn default() -> Self {
    Self {
      risk_free: 0.0,
      long_only: true,
      resolution: 2001,
    }
  }
}
