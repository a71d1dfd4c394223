//! Error types for polynomial construction and scalar bridging.

use thiserror::Error;

/// Errors produced by the polynomial API.
///
/// Every operation is pure and atomic: it either fully succeeds with a new
/// polynomial or fails with one of these kinds and no side effect.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PolynomialError {
    /// A polynomial needs at least a constant term; an empty coefficient
    /// sequence would make `degree()` underflow.
    #[error("empty coefficient sequence: a polynomial has at least a constant term")]
    EmptyCoefficients,

    /// A scalar operand has no exact representation in the coefficient
    /// type. Lossy values are never silently coerced.
    #[error("unsupported operand: scalar is not exactly representable in the coefficient type")]
    UnsupportedOperand,
}
