//! Error types for series operations.

use thiserror::Error;

/// Errors raised by series arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// A series is invertible in the formal power series ring iff its
    /// constant term is non-zero.
    #[error("series is not invertible: constant term is zero")]
    NonInvertible,
}
