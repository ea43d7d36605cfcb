// ============================================================================
// Rational Errors
// Error types for construction, mutation, and arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing or operating on rational values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RationalError {
    /// Denominator was, or would become, zero
    ZeroDenominator,
    /// Result does not fit in the i64 component range
    Overflow,
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RationalError::ZeroDenominator => {
                write!(f, "invalid denominator: denominator must be nonzero")
            },
            RationalError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded representable range")
            },
        }
    }
}

impl std::error::Error for RationalError {}

/// Result type alias for rational operations
pub type RationalResult<T> = Result<T, RationalError>;
