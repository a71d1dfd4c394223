//! Algebraic structure traits.
//!
//! This module defines the coefficient capability bundle used by the
//! polynomial types.

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

/// A ring-like capability set: a type with addition, subtraction,
/// multiplication, and negation, plus the two identities.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// `PartialEq` rather than `Eq` is required so that floating-point
/// coefficients qualify. Unsigned integers do not qualify: they have no
/// negation.
///
/// A blanket implementation covers every type with the listed
/// capabilities; the trait is never implemented by hand.
pub trait Ring:
    Clone
    + PartialEq
    + Debug
    + Display
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
}

impl<T> Ring for T where
    T: Clone
        + PartialEq
        + Debug
        + Display
        + Zero
        + One
        + Add<Output = Self>
        + Sub<Output = Self>
        + Mul<Output = Self>
        + Neg<Output = Self>
{
}
