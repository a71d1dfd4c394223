//! # ruffini-poly
//!
//! Univariate polynomial arithmetic over a generic coefficient ring.
//!
//! This crate provides:
//! - [`Polynomial`], a dense univariate polynomial value type
//! - Addition, subtraction, and multiplication with polynomial and
//!   scalar operands, on both sides
//! - Canonical descending-degree rendering via `Display`
//!
//! ## Representation
//!
//! Coefficients are stored in ascending degree order, verbatim: the
//! constructor never trims trailing zeros, and no arithmetic operation
//! normalizes its result. `degree()` is therefore the index of the highest
//! *stored* slot, and equality is structural — `[1, 0]` and `[1]` are
//! distinct values even though they agree as functions. Callers who need
//! mathematical equivalence must canonicalize trailing zeros themselves.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cast;
pub mod error;
pub mod ops;
pub mod polynomial;

#[cfg(test)]
mod proptests;

pub use error::PolynomialError;
pub use polynomial::Polynomial;
