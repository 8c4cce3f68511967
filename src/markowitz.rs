//! # Markowitz
//!
//! $$
//! \mathbf{w}^\* = \frac{\Sigma^{-1}(\mu - r_f\mathbf{1})}{\mathbf{1}^\top \Sigma^{-1}(\mu - r_f\mathbf{1})}
//! $$
//!
//! Mean-variance optimization for a fixed three-asset basket.

pub mod data;
pub mod optimizers;
pub mod stats;
pub mod types;

pub use data::correlation_from_cov;
pub use data::covariance_from_vols;
pub use data::validate_inputs;
pub use optimizers::optimize_sharpe;
pub use optimizers::optimize_sharpe_long_only;
pub use optimizers::optimize_sharpe_unconstrained;
pub use stats::portfolio_stats;
pub use types::MarkowitzResult;
pub use types::OptimizeConfig;
