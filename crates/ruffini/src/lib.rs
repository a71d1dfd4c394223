//! # Ruffini
//!
//! A small univariate polynomial value type for Rust.
//!
//! Ruffini provides construction, degree query, structural equality,
//! canonical rendering, and the three arithmetic operators with both
//! polynomial and scalar operands. It is a reusable numeric building
//! block, not a computer-algebra system: no root finding, calculus,
//! division, or factoring.
//!
//! ## Representation contract
//!
//! Coefficients are stored verbatim in ascending degree order. Trailing
//! zeros are never trimmed, so `[1, 0]` and `[1]` are distinct values and
//! `degree()` reports the highest stored slot.
//!
//! ## Quick Start
//!
//! ```rust
//! use ruffini::prelude::*;
//!
//! let p = Polynomial::new(vec![1i64, 2]).unwrap(); // 1 + 2x
//! let q = Polynomial::new(vec![3i64, 4]).unwrap(); // 3 + 4x
//!
//! assert_eq!((&p * &q).coeffs(), &[3, 10, 8]);
//! assert_eq!((&p + 1).to_string(), "2x + 2");
//! assert_eq!((10 - &p).coeffs(), &[9, -2]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use ruffini_poly as poly;
pub use ruffini_rings as rings;

pub use ruffini_poly::{Polynomial, PolynomialError};
pub use ruffini_rings::Ring;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ruffini_poly::{Polynomial, PolynomialError};
    pub use ruffini_rings::Ring;
}
