//! # ruffini-rings
//!
//! Algebraic capability traits for the ruffini polynomial crates.
//!
//! This crate provides:
//! - The [`Ring`] capability bundle that coefficient types must satisfy
//!
//! The bundle is built on the `num_traits` vocabulary (`Zero`, `One`) plus
//! the `core::ops` arithmetic traits, with a blanket implementation, so
//! every signed integer primitive, both float primitives, and any user
//! numeric type with these capabilities qualifies without extra glue.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod traits;

pub use traits::Ring;
