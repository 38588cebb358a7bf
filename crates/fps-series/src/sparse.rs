//! Sparse truncated power series.
//!
//! Terms are stored as (exponent, coefficient) pairs sorted by ascending
//! exponent, with zero coefficients never stored. Unlisted exponents are
//! implicitly zero. The truncation precision is *not* part of the value:
//! absence of high-degree terms does not bound precision intrinsically, so
//! truncating operations take an explicit cutoff.

use std::collections::BTreeMap;

use fps_rings::traits::Ring;

use crate::dense::DenseSeries;

/// A sparse truncated power series.
///
/// Invariants: terms are sorted strictly ascending by exponent, no
/// exponent appears twice, and every stored coefficient is non-zero.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SparseSeries<R: Ring> {
    /// Non-zero terms in ascending exponent order.
    terms: Vec<(usize, R)>,
}

impl<R: Ring> SparseSeries<R> {
    /// Creates a series from a dense coefficient slice, dropping zeros.
    #[must_use]
    pub fn from_coeffs(coeffs: &[R]) -> Self {
        Self {
            terms: coeffs
                .iter()
                .enumerate()
                .filter(|(_, c)| !c.is_zero())
                .map(|(e, c)| (e, c.clone()))
                .collect(),
        }
    }

    /// Creates a series from (exponent, coefficient) pairs.
    ///
    /// Terms are sorted, like exponents are combined, and zero
    /// coefficients are stripped.
    #[must_use]
    pub fn from_terms(terms: Vec<(usize, R)>) -> Self {
        let mut acc: BTreeMap<usize, R> = BTreeMap::new();
        for (e, c) in terms {
            let sum = match acc.remove(&e) {
                Some(prev) => prev + c,
                None => c,
            };
            if !sum.is_zero() {
                acc.insert(e, sum);
            }
        }

        Self {
            terms: acc.into_iter().collect(),
        }
    }

    /// Creates the zero series.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Returns true if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of non-zero terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the non-zero terms in ascending exponent order.
    #[must_use]
    pub fn terms(&self) -> &[(usize, R)] {
        &self.terms
    }

    /// Returns the coefficient of X^e, zero if not stored.
    #[must_use]
    pub fn coeff(&self, e: usize) -> R {
        match self.terms.binary_search_by_key(&e, |(exp, _)| *exp) {
            Ok(i) => self.terms[i].1.clone(),
            Err(_) => R::zero(),
        }
    }

    /// Adds two series termwise.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut terms = self.terms.clone();
        terms.extend(other.terms.clone());
        Self::from_terms(terms)
    }

    /// Negates a series.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(e, c)| (*e, -c.clone())).collect(),
        }
    }

    /// Multiplies two series, keeping only exponents below `prec`.
    ///
    /// Both operands' terms are sorted ascending, so once an exponent sum
    /// `e1 + e2` reaches `prec` every later `e2` overshoots as well and
    /// the inner loop stops early. Worst case is still O(|a|·|b|), but
    /// with truncation the pruning skips the entire useless tail.
    ///
    /// Cancellation can produce zero sums that were in neither input, so
    /// the accumulated map is filtered through a final strip-zero pass.
    #[must_use]
    pub fn mul_truncated(&self, other: &Self, prec: usize) -> Self {
        let mut acc: BTreeMap<usize, R> = BTreeMap::new();

        for (e1, v1) in &self.terms {
            for (e2, v2) in &other.terms {
                let exp = e1 + e2;
                if exp >= prec {
                    break;
                }
                let sum = match acc.remove(&exp) {
                    Some(prev) => prev + v1.clone() * v2.clone(),
                    None => v1.clone() * v2.clone(),
                };
                acc.insert(exp, sum);
            }
        }

        Self {
            terms: acc.into_iter().filter(|(_, c)| !c.is_zero()).collect(),
        }
    }

    /// Converts to a dense series of precision `prec`, filling implicit
    /// zeros and dropping terms at or beyond the cutoff.
    #[must_use]
    pub fn to_dense(&self, prec: usize) -> DenseSeries<R> {
        let mut coeffs = vec![R::zero(); prec];
        for (e, c) in &self.terms {
            if *e < prec {
                coeffs[*e] = c.clone();
            }
        }
        DenseSeries::new(coeffs)
    }
}

impl<R: Ring + std::fmt::Display> std::fmt::Display for SparseSeries<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        let terms: Vec<_> = self
            .terms
            .iter()
            .map(|(e, c)| format!("({c})*X^{e}"))
            .collect();

        write!(f, "{}", terms.join(" + "))
    }
}
