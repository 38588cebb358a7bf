//! Maclaurin series for elementary functions.
//!
//! Each generator builds the first `n` exact coefficients by a
//! term-by-term recurrence (no factorial tables, no floating point) and
//! wraps them as a [`DenseSeries`]. Sparse fixtures are obtained through
//! [`DenseSeries::to_sparse`].

use fps_rings::traits::Field;

use crate::dense::DenseSeries;

/// exp(x) = 1 + x + x^2/2! + x^3/3! + ...
#[must_use]
pub fn exp<R: Field>(n: usize) -> DenseSeries<R> {
    let mut coeffs = Vec::with_capacity(n);
    let mut t = R::one();

    for i in 1..=n {
        coeffs.push(t.clone());
        t = t.field_div(&R::from_usize(i));
    }

    DenseSeries::new(coeffs)
}

/// sin(x) = x - x^3/3! + x^5/5! - ...
#[must_use]
pub fn sin<R: Field>(n: usize) -> DenseSeries<R> {
    let mut coeffs = Vec::with_capacity(n);
    let mut sign = R::one();
    let mut inv_fact = R::one();

    for i in 0..n {
        if i % 2 == 1 {
            coeffs.push(sign.clone() * inv_fact.clone());
            sign = -sign;
        } else {
            coeffs.push(R::zero());
        }
        inv_fact = inv_fact.field_div(&R::from_usize(i + 1));
    }

    DenseSeries::new(coeffs)
}

/// cos(x) = 1 - x^2/2! + x^4/4! - ...
#[must_use]
pub fn cos<R: Field>(n: usize) -> DenseSeries<R> {
    let mut coeffs = Vec::with_capacity(n);
    let mut sign = R::one();
    let mut inv_fact = R::one();

    for i in 0..n {
        if i % 2 == 0 {
            coeffs.push(sign.clone() * inv_fact.clone());
            sign = -sign;
        } else {
            coeffs.push(R::zero());
        }
        inv_fact = inv_fact.field_div(&R::from_usize(i + 1));
    }

    DenseSeries::new(coeffs)
}

/// log(1+x) = x - x^2/2 + x^3/3 - ...
#[must_use]
pub fn log1p<R: Field>(n: usize) -> DenseSeries<R> {
    let mut coeffs = Vec::with_capacity(n);
    let mut sign = R::one();

    for i in 0..n {
        if i == 0 {
            coeffs.push(R::zero());
            continue;
        }
        coeffs.push(sign.clone().field_div(&R::from_usize(i)));
        sign = -sign;
    }

    DenseSeries::new(coeffs)
}

/// 1/(1-x) = 1 + x + x^2 + ...
#[must_use]
pub fn geometric<R: Field>(n: usize) -> DenseSeries<R> {
    DenseSeries::new(vec![R::one(); n])
}
