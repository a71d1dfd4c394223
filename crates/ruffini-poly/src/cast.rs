//! Checked scalar bridge for runtime operand kinds.
//!
//! The operator overloads accept scalars of the coefficient type only.
//! Callers holding some other primitive numeric kind go through these
//! checked entry points, which convert the scalar exactly or fail with
//! [`PolynomialError::UnsupportedOperand`] — never a silent lossy
//! coercion.

use num_traits::{NumCast, ToPrimitive};
use ruffini_rings::Ring;

use crate::error::PolynomialError;
use crate::polynomial::Polynomial;

/// Converts a scalar into `R`, requiring the round trip back through `S`
/// to reproduce the original value exactly.
///
/// Fractional values into integer coefficients, out-of-range values, and
/// non-self-equal values (`NaN`) all fail the round trip.
fn exact_cast<R, S>(scalar: S) -> Result<R, PolynomialError>
where
    R: Ring + NumCast + ToPrimitive,
    S: NumCast + ToPrimitive + PartialEq + Copy,
{
    let Some(value) = R::from(scalar) else {
        return Err(PolynomialError::UnsupportedOperand);
    };
    match S::from(value.clone()) {
        Some(back) if back == scalar => Ok(value),
        _ => Err(PolynomialError::UnsupportedOperand),
    }
}

impl<R: Ring + NumCast + ToPrimitive> Polynomial<R> {
    /// Adds a scalar of any primitive numeric kind to the constant term.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::UnsupportedOperand`] if `scalar` has no
    /// exact representation in `R`.
    pub fn checked_add_scalar<S>(&self, scalar: S) -> Result<Self, PolynomialError>
    where
        S: NumCast + ToPrimitive + PartialEq + Copy,
    {
        Ok(self.add_scalar(&exact_cast(scalar)?))
    }

    /// Subtracts a scalar of any primitive numeric kind from the constant
    /// term.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::UnsupportedOperand`] if `scalar` has no
    /// exact representation in `R`.
    pub fn checked_sub_scalar<S>(&self, scalar: S) -> Result<Self, PolynomialError>
    where
        S: NumCast + ToPrimitive + PartialEq + Copy,
    {
        Ok(self.sub_scalar(&exact_cast(scalar)?))
    }

    /// Scales every coefficient by a scalar of any primitive numeric kind.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::UnsupportedOperand`] if `scalar` has no
    /// exact representation in `R`.
    pub fn checked_mul_scalar<S>(&self, scalar: S) -> Result<Self, PolynomialError>
    where
        S: NumCast + ToPrimitive + PartialEq + Copy,
    {
        Ok(self.scale(&exact_cast(scalar)?))
    }
}
