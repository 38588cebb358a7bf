//! # fps-series
//!
//! Truncated formal power series arithmetic over exact coefficients.
//!
//! A series a0 + a1*X + a2*X^2 + ... is stored up to a finite truncation
//! order. X is a formal symbol: nothing is ever evaluated or approximated,
//! and all questions of convergence are absent. This crate provides:
//! - [`DenseSeries`]: coefficient vector, index = exponent
//! - [`SparseSeries`]: sorted non-zero terms with pruned multiplication
//! - Ring operations: addition, Cauchy product, inversion, division
//! - Exact Maclaurin generators for exp, sin, cos, log(1+x)
//!
//! ## Truncation discipline
//!
//! `add` and `mul` truncate to the shorter operand: the validity horizon
//! of a result can never exceed the less precise input. The truncation is
//! silent, so associativity only holds when all operands carry sufficient
//! precision.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;
pub mod elementary;
pub mod error;
pub mod sparse;

#[cfg(test)]
mod proptests;

pub use dense::DenseSeries;
pub use error::SeriesError;
pub use sparse::SparseSeries;
