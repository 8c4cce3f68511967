//! Error types shared by the Markowitz solvers and the FX hedge.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, OptimizeError>;

/// Failure modes surfaced by input validation and the solvers.
///
/// Every variant is terminal: there is no retry and no partial result, the
/// caller must supply better-conditioned inputs.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum OptimizeError {
  /// An input vector or matrix has the wrong dimensions.
  #[error("{name} must have {expected} entries per dimension, got {actual}")]
  Shape {
    name: &'static str,
    expected: usize,
    actual: usize,
  },
  /// Covariance matrix is not symmetric within the absolute tolerance.
  #[error("covariance is not symmetric: |cov[{row}][{col}] - cov[{col}][{row}]| = {delta:e}")]
  Asymmetric { row: usize, col: usize, delta: f64 },
  /// A linear solve or inversion hit a singular or ill-conditioned matrix.
  #[error("covariance is singular or ill-conditioned")]
  SingularCovariance,
  /// The unnormalized tangency direction sums to ~0, so no finite
  /// fully-invested portfolio exists along it.
  #[error("degenerate solution: normalization denominator is ~0")]
  DegenerateNormalization,
  /// Grid resolution below the supported minimum.
  #[error("grid resolution must be at least {min}, got {actual}")]
  InvalidResolution { min: usize, actual: usize },
}
