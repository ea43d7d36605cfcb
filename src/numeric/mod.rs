// ============================================================================
// Numeric Module
// Always-reduced rational arithmetic
// ============================================================================
//
// This module provides:
// - Rational: signed i64 rational number kept in lowest terms
// - RationalError: error types for construction, mutation, and arithmetic
//
// Design principles:
// - Values are canonical at rest: reduced, with a positive denominator
// - Fallible operations return Result; only the Add operator panics
// - i128 intermediates for overflow-safe cross-multiplication

mod errors;
mod rational;

pub use errors::{RationalError, RationalResult};
pub use rational::Rational;
