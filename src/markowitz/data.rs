//! # Input Validation and Covariance Construction
//!
//! $$
//! \Sigma_{ij} = \sigma_i \sigma_j \rho_{ij}
//! $$
//!
//! Boundary between caller-supplied numeric slices and the fixed-size types
//! the solvers operate on.

use nalgebra::Matrix3;
use nalgebra::Vector3;

use crate::error::OptimizeError;
use crate::error::Result;

/// Number of assets in the Markowitz basket.
pub const ASSETS: usize = 3;

/// Absolute tolerance for the covariance symmetry check.
pub const SYMMETRY_TOL: f64 = 1e-10;

/// Check shape and symmetry of caller inputs and convert them to fixed-size
/// copies.
///
/// No positive-semi-definiteness check is performed here; a non-PSD matrix
/// that passes surfaces downstream as a clamped zero variance or a solver
/// failure.
pub fn validate_inputs(mu: &[f64], cov: &[Vec<f64>]) -> Result<(Vector3<f64>, Matrix3<f64>)> {
  if mu.len() != ASSETS {
    return Err(OptimizeError::Shape {
      name: "mu",
      expected: ASSETS,
      actual: mu.len(),
    });
  }
  if cov.len() != ASSETS {
    return Err(OptimizeError::Shape {
      name: "cov",
      expected: ASSETS,
      actual: cov.len(),
    });
  }
  for row in cov {
    if row.len() != ASSETS {
      return Err(OptimizeError::Shape {
        name: "cov",
        expected: ASSETS,
        actual: row.len(),
      });
    }
  }

  let sigma = Matrix3::from_fn(|i, j| cov[i][j]);
  for i in 0..ASSETS {
    for j in (i + 1)..ASSETS {
      let delta = (sigma[(i, j)] - sigma[(j, i)]).abs();
      if delta > SYMMETRY_TOL {
        return Err(OptimizeError::Asymmetric { row: i, col: j, delta });
      }
    }
  }

  Ok((Vector3::from_column_slice(mu), sigma))
}

/// Build a covariance matrix from per-asset volatilities and a correlation
/// matrix.
#[must_use]
pub fn covariance_from_vols(sigmas: &Vector3<f64>, corr: &Matrix3<f64>) -> Matrix3<f64> {
  Matrix3::from_fn(|i, j| sigmas[i] * sigmas[j] * corr[(i, j)])
}

/// Recover a correlation matrix from a covariance matrix.
///
/// Unit diagonal; off-diagonal entries are clamped to `[-1, 1]` and zeroed
/// where a variance vanishes.
#[must_use]
pub fn correlation_from_cov(cov: &Matrix3<f64>) -> Matrix3<f64> {
  Matrix3::from_fn(|i, j| {
    if i == j {
      return 1.0;
    }
    let denom = (cov[(i, i)].max(0.0) * cov[(j, j)].max(0.0)).sqrt();
    if denom > 1e-15 {
      (cov[(i, j)] / denom).clamp(-1.0, 1.0)
    } else {
      0.0
    }
  })
}
