//! # markowitz-rs
//!
//! $$
//! \mathbf{w}^\*=\arg\max_{\mathbf{1}^\top\mathbf{w}=1} \frac{\mu^\top\mathbf{w}-r_f}{\sqrt{\mathbf{w}^\top\Sigma\mathbf{w}}}
//! $$
//!
//! Mean-variance (Markowitz) optimal portfolios for small, fixed-size asset
//! baskets: an analytical tangency solver and a long-only simplex grid search
//! for three assets, plus a closed-form minimum-variance hedge for a
//! two-currency FX basket.

pub mod error;
pub mod fx;
pub mod markowitz;

pub use error::OptimizeError;
pub use error::Result;
