//! # fps-rings
//!
//! Coefficient arithmetic for truncated formal power series.
//!
//! This crate provides:
//! - The [`Ring`] and [`Field`] traits the series engine is generic over
//! - [`Q`], arbitrary precision rationals backed by `dashu`
//!
//! ## Performance Notes
//!
//! - Rationals are always kept in lowest terms, so every addition and
//!   multiplication pays a GCD reduction
//! - Small values use stack allocation inside `dashu`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use rationals::Q;
pub use traits::{Field, Ring};
