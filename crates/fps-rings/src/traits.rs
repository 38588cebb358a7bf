//! Algebraic structure traits.
//!
//! These are the seams the series engine is written against: any type
//! implementing [`Field`] can serve as the coefficient domain.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Embeds a non-negative integer as 1 + 1 + ... (n times).
    fn from_usize(n: usize) -> Self {
        let mut result = Self::zero();
        let one = Self::one();
        for _ in 0..n {
            result = result + one.clone();
        }
        result
    }
}

/// A field is a ring where every non-zero element has a multiplicative inverse.
pub trait Field: Ring {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn field_div(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by zero")
    }
}
