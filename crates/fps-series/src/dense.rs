//! Dense truncated power series.
//!
//! Coefficients are stored in ascending exponent order and the length of
//! the vector *is* the truncation precision:
//!
//! `[a0, a1, ..., an]` = a0 + a1*X + ... + an*X^n + O(X^{n+1})
//!
//! Unlike a polynomial, trailing zeros are never stripped: a zero in a high
//! slot is real information (the coefficient is known to be zero up to the
//! precision horizon).

use fps_rings::traits::{Field, Ring};

use crate::error::SeriesError;
use crate::sparse::SparseSeries;

/// A dense truncated power series.
///
/// Every operation returns a new value; operands are never mutated.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DenseSeries<R: Ring> {
    /// Coefficients in ascending exponent order; length = precision.
    coeffs: Vec<R>,
}

impl<R: Ring> DenseSeries<R> {
    /// Creates a series from coefficients, stored verbatim.
    #[must_use]
    pub fn new(coeffs: Vec<R>) -> Self {
        Self { coeffs }
    }

    /// Creates the zero series known to precision `n`.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self {
            coeffs: vec![R::zero(); n],
        }
    }

    /// Creates the constant series c + O(X^n).
    #[must_use]
    pub fn constant(c: R, n: usize) -> Self {
        let mut coeffs = vec![R::zero(); n];
        if let Some(slot) = coeffs.first_mut() {
            *slot = c;
        }
        Self { coeffs }
    }

    /// Returns the truncation precision (number of known coefficients).
    #[must_use]
    pub fn precision(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if no coefficients are known (precision 0).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the coefficient of X^i, zero beyond the precision horizon.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns all known coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Reduces the precision to at most `n` coefficients.
    #[must_use]
    pub fn truncate(&self, n: usize) -> Self {
        Self {
            coeffs: self.coeffs[..n.min(self.coeffs.len())].to_vec(),
        }
    }

    /// Adds two series.
    ///
    /// The result is truncated to the shorter operand; the truncation is
    /// silent. Commutative; associative only when all operands share
    /// sufficient precision.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let cn = self.coeffs.len().min(other.coeffs.len());
        let mut coeffs = Vec::with_capacity(cn);

        for n in 0..cn {
            coeffs.push(self.coeffs[n].clone() + other.coeffs[n].clone());
        }

        Self { coeffs }
    }

    /// Negates a series.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c.clone()).collect(),
        }
    }

    /// Subtracts two series, truncating to the shorter operand.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies every coefficient by a constant.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|x| x.clone() * c.clone()).collect(),
        }
    }

    /// Multiplies two series (Cauchy product).
    ///
    /// `(a*b)[n] = Σ_{j=0..n} a[j]*b[n-j]`, truncated to the shorter
    /// operand. O(n²) coefficient multiply-adds, all exact.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let cn = self.coeffs.len().min(other.coeffs.len());
        let mut coeffs = Vec::with_capacity(cn);

        for n in 0..cn {
            let mut s = R::zero();
            for j in 0..=n {
                s = s + self.coeffs[j].clone() * other.coeffs[n - j].clone();
            }
            coeffs.push(s);
        }

        Self { coeffs }
    }

    /// Raises the series to a non-negative integer power.
    ///
    /// Binary exponentiation over the truncated product; every
    /// intermediate stays at this series' precision. `pow(0)` is the
    /// one-series at the same precision.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::constant(R::one(), self.precision());
        }
        if n == 1 {
            return self.clone();
        }

        let mut result = Self::constant(R::one(), self.precision());
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }

        result
    }

    /// Converts to the sparse representation, dropping zero coefficients.
    #[must_use]
    pub fn to_sparse(&self) -> SparseSeries<R> {
        SparseSeries::from_coeffs(&self.coeffs)
    }
}

impl<R: Field> DenseSeries<R> {
    /// Computes the multiplicative inverse b with a*b = 1 + O(X^n).
    ///
    /// Matching coefficients of a*b = 1 gives the recurrence
    ///
    /// `b[0] = 1/a[0]`, `b[n] = -(Σ_{i=1..n} a[i]*b[n-i]) / a[0]`
    ///
    /// which is inherently sequential in n. The result has the same
    /// precision as `self`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NonInvertible`] if the constant term is zero
    /// (or the series is empty).
    pub fn inverse(&self) -> Result<Self, SeriesError> {
        let a0 = match self.coeffs.first() {
            Some(c) if !c.is_zero() => c,
            _ => return Err(SeriesError::NonInvertible),
        };
        let a0_inv = a0.inv().ok_or(SeriesError::NonInvertible)?;

        let n = self.coeffs.len();
        let mut b = Vec::with_capacity(n);
        b.push(a0_inv.clone());

        for k in 1..n {
            let mut s = R::zero();
            for i in 1..=k {
                s = s + self.coeffs[i].clone() * b[k - i].clone();
            }
            b.push(-(s * a0_inv.clone()));
        }

        Ok(Self { coeffs: b })
    }

    /// Divides two series: a/b = a * (1/b).
    ///
    /// The result is truncated to the shorter operand.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NonInvertible`] if `other` has a zero
    /// constant term.
    pub fn div(&self, other: &Self) -> Result<Self, SeriesError> {
        Ok(self.mul(&other.inverse()?))
    }
}

impl<R: Ring + std::fmt::Display> std::fmt::Display for DenseSeries<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let terms: Vec<_> = self
            .coeffs
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| format!("({c})*X^{i}"))
            .collect();

        if terms.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", terms.join(" + "))
        }
    }
}
