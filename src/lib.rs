// ============================================================================
// Exact Rational Library
// Always-reduced rational arithmetic with validated mutation
// ============================================================================

//! # Exact Rational
//!
//! A signed rational number type over `i64` components, kept permanently in
//! reduced (lowest-terms) form with a positive denominator.
//!
//! ## Features
//!
//! - **Canonical at rest**: every reachable value is reduced, so equality
//!   and hashing coincide with equality of rational value
//! - **Validated mutation**: setters re-validate and re-reduce before
//!   committing; a zero denominator is rejected without side effects
//! - **Checked arithmetic** with `i128` intermediates and explicit overflow
//!   errors
//! - **Decimal boundary** conversions via `rust_decimal`
//!
//! ## Example
//!
//! ```rust
//! use exact_rational::{Rational, RationalError};
//!
//! let half = Rational::new(2, 4).unwrap();    // stored as 1/2
//! let third = Rational::new(1, 3).unwrap();
//!
//! let sum = half.checked_add(third).unwrap();
//! assert_eq!(sum, Rational::new(5, 6).unwrap());
//! assert_eq!(sum.to_string(), "5/6");
//!
//! // A zero denominator is rejected before anything changes
//! let mut value = half;
//! assert_eq!(value.set_denominator(0), Err(RationalError::ZeroDenominator));
//! assert_eq!(value, half);
//! ```

pub mod numeric;

// Re-exports for convenience
pub use numeric::{Rational, RationalError, RationalResult};
