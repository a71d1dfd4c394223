//! Dense univariate polynomials with verbatim coefficient storage.
//!
//! Unlike a normalizing representation, this type never trims trailing
//! zero coefficients: the stored length is part of the value. All
//! arithmetic allocates a fresh polynomial; operands are never mutated.

use std::fmt;

use itertools::{EitherOrBoth, Itertools};
use ruffini_rings::Ring;

use crate::error::PolynomialError;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order: index 0 is the
/// constant term. The sequence is non-empty and immutable once
/// constructed.
///
/// Equality is structural — element-wise coefficients and identical
/// length. `[1, 0]` and `[1]` are not equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial<R: Ring> {
    /// Coefficients in ascending degree order, never empty.
    coeffs: Vec<R>,
}

impl<R: Ring> Polynomial<R> {
    /// Creates a polynomial from coefficients in ascending degree order.
    ///
    /// The sequence is stored verbatim: trailing zeros are kept and count
    /// towards the degree.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::EmptyCoefficients`] if `coeffs` is
    /// empty.
    pub fn new(coeffs: Vec<R>) -> Result<Self, PolynomialError> {
        if coeffs.is_empty() {
            return Err(PolynomialError::EmptyCoefficients);
        }
        Ok(Self { coeffs })
    }

    /// Creates a polynomial by cloning a coefficient slice.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::EmptyCoefficients`] if `coeffs` is
    /// empty.
    pub fn from_slice(coeffs: &[R]) -> Result<Self, PolynomialError> {
        Self::new(coeffs.to_vec())
    }

    /// Internal constructor for results of arithmetic, which are non-empty
    /// whenever the operands are.
    pub(crate) fn from_coeffs(coeffs: Vec<R>) -> Self {
        debug_assert!(!coeffs.is_empty());
        Self { coeffs }
    }

    /// Creates the zero polynomial `[0]`.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![R::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self {
            coeffs: vec![R::zero(), R::one()],
        }
    }

    /// Creates the monomial c * x^n.
    ///
    /// Storage is verbatim, so `monomial(0, 3)` really stores four zero
    /// coefficients and reports degree 3.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = c;
        Self { coeffs }
    }

    /// Returns the stored degree: length − 1.
    ///
    /// Trailing zero coefficients count, so this may exceed the highest
    /// nonzero term.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if every stored coefficient is zero.
    ///
    /// Length-agnostic: `[0]` and `[0, 0, 0]` are both zero here even
    /// though they are structurally unequal.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(num_traits::Zero::is_zero)
    }

    /// Returns the coefficient of the highest stored slot.
    #[must_use]
    pub fn leading_coeff(&self) -> &R {
        self.coeffs.last().unwrap()
    }

    /// Returns the coefficient of x^i, or zero for out-of-range indices.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns all coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Consumes the polynomial, returning its coefficient sequence.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<R> {
        self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let mut result = R::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Adds two polynomials.
    ///
    /// Overlapping low-order slots are summed element-wise; the unmatched
    /// tail of the longer operand is copied verbatim. Result length is
    /// `max(len(self), len(other))`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .zip_longest(other.coeffs.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) => a.clone() + b.clone(),
                EitherOrBoth::Left(a) => a.clone(),
                EitherOrBoth::Right(b) => b.clone(),
            })
            .collect();
        Self::from_coeffs(coeffs)
    }

    /// Subtracts another polynomial.
    ///
    /// Overlapping slots are `self[i] − other[i]`; `self`'s unmatched tail
    /// is copied verbatim, while `other`'s unmatched tail is negated. Not
    /// commutative.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .zip_longest(other.coeffs.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) => a.clone() - b.clone(),
                EitherOrBoth::Left(a) => a.clone(),
                EitherOrBoth::Right(b) => -b.clone(),
            })
            .collect();
        Self::from_coeffs(coeffs)
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::from_coeffs(self.coeffs.iter().map(|c| -c.clone()).collect())
    }

    /// Multiplies two polynomials by discrete convolution.
    ///
    /// Result length is always `len(self) + len(other) − 1`, with no
    /// zero-operand short-circuit: a zero polynomial still yields a
    /// full-length all-zero result. O(N·M) time.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![R::zero(); n + m - 1];

        for i in 0..n {
            for j in 0..m {
                result[i + j] =
                    result[i + j].clone() + self.coeffs[i].clone() * other.coeffs[j].clone();
            }
        }

        Self::from_coeffs(result)
    }

    /// Adds a scalar to the constant term; length is preserved.
    #[must_use]
    pub fn add_scalar(&self, s: &R) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs[0] = coeffs[0].clone() + s.clone();
        Self::from_coeffs(coeffs)
    }

    /// Subtracts a scalar from the constant term; length is preserved.
    #[must_use]
    pub fn sub_scalar(&self, s: &R) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs[0] = coeffs[0].clone() - s.clone();
        Self::from_coeffs(coeffs)
    }

    /// Computes `s − self`: every coefficient is negated, then the scalar
    /// is added to the negated constant term.
    ///
    /// Distinct from [`sub_scalar`](Self::sub_scalar); operand order
    /// matters for subtraction.
    #[must_use]
    pub fn sub_from_scalar(&self, s: &R) -> Self {
        let mut coeffs: Vec<R> = self.coeffs.iter().map(|c| -c.clone()).collect();
        coeffs[0] = coeffs[0].clone() + s.clone();
        Self::from_coeffs(coeffs)
    }

    /// Multiplies every coefficient by a scalar; length is preserved.
    ///
    /// The scalar path is special-cased rather than routed through
    /// degree-0 convolution, keeping it length-consistent with
    /// [`add_scalar`](Self::add_scalar).
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        Self::from_coeffs(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }
}

impl<R: Ring> From<R> for Polynomial<R> {
    fn from(c: R) -> Self {
        Self::constant(c)
    }
}

impl<R: Ring> fmt::Display for Polynomial<R> {
    /// Renders in descending degree order, `" + "`-joined.
    ///
    /// Zero terms are elided; a coefficient of exactly one renders as a
    /// bare `x` or `x^d`; an all-zero polynomial renders as `0`. Negative
    /// coefficients are embedded verbatim (`"-3x^2 + 5"`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use num_traits::{One, Zero};

        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            let term = match i {
                0 => format!("{c}"),
                1 if c.is_one() => "x".to_string(),
                1 => format!("{c}x"),
                _ if c.is_one() => format!("x^{i}"),
                _ => format!("{c}x^{i}"),
            };
            terms.push(term);
        }

        if terms.is_empty() {
            return write!(f, "0");
        }

        terms.reverse();
        write!(f, "{}", terms.join(" + "))
    }
}
