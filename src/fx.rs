//! # FX Hedge
//!
//! $$
//! \mathbf{w}_{mv} = \frac{\Sigma^{-1}\mathbf{1}}{\mathbf{1}^\top\Sigma^{-1}\mathbf{1}}
//! $$
//!
//! Minimum-variance weights for a fully-invested two-currency basket.

use impl_new_derive::ImplNew;
use nalgebra::Matrix2;
use nalgebra::Vector2;
use tracing::debug;

use crate::error::OptimizeError;
use crate::error::Result;

/// Two-leg FX basket measured in a common base currency.
///
/// Leg A is quoted in base-currency terms (e.g. EUR/USD), leg B inversely
/// (e.g. USD/JPY), so leg B's base-currency return is the negative of its
/// quoted return and the effective correlation between the legs is
/// `-corr_quoted`.
#[derive(ImplNew, Clone, Copy, Debug)]
pub struct FxHedge {
  /// Volatility of the base-quoted leg.
  pub vol_a: f64,
  /// Volatility of the inversely quoted leg.
  pub vol_b: f64,
  /// Correlation between the two quoted returns.
  pub corr_quoted: f64,
}

/// Minimum-variance split for an [`FxHedge`], degenerate cases included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HedgeAllocation {
  /// Both legs are riskless; every fully-invested split has zero variance.
  Indeterminate,
  /// Leg A is riskless; full weight on it.
  AllLegA,
  /// Leg B is riskless; full weight on it.
  AllLegB,
  /// Closed-form minimum-variance weights; either may be negative.
  Split { weight_a: f64, weight_b: f64 },
}

impl FxHedge {
  /// Covariance of base-currency returns, with the sign flip applied to the
  /// inversely quoted leg.
  #[must_use]
  pub fn covariance(&self) -> Matrix2<f64> {
    let off = -self.corr_quoted * self.vol_a * self.vol_b;
    Matrix2::new(self.vol_a * self.vol_a, off, off, self.vol_b * self.vol_b)
  }

  /// Fully-invested weights minimizing basket variance, no sign constraint.
  pub fn min_variance_weights(&self) -> Result<(f64, f64)> {
    let inv = self
      .covariance()
      .try_inverse()
      .ok_or(OptimizeError::SingularCovariance)?;

    let ones = Vector2::repeat(1.0);
    let scaled = inv * ones;
    let weights = scaled / ones.dot(&scaled);
    Ok((weights[0], weights[1]))
  }

  /// Basket volatility for explicit leg weights.
  #[must_use]
  pub fn portfolio_volatility(&self, weight_a: f64, weight_b: f64) -> f64 {
    let w = Vector2::new(weight_a, weight_b);
    (self.covariance() * w).dot(&w).max(0.0).sqrt()
  }

  /// Minimum-variance allocation with the zero-volatility boundaries
  /// resolved before the matrix path runs.
  pub fn allocation(&self) -> Result<HedgeAllocation> {
    let allocation = if self.vol_a == 0.0 && self.vol_b == 0.0 {
      HedgeAllocation::Indeterminate
    } else if self.vol_a == 0.0 {
      HedgeAllocation::AllLegA
    } else if self.vol_b == 0.0 {
      HedgeAllocation::AllLegB
    } else {
      let (weight_a, weight_b) = self.min_variance_weights()?;
      HedgeAllocation::Split { weight_a, weight_b }
    };

    debug!(?allocation, "fx hedge allocation resolved");
    Ok(allocation)
  }
}
