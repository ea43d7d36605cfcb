// ============================================================================
// Rational Number
// Always-reduced signed rational arithmetic over i64 components
// ============================================================================

use super::errors::{RationalError, RationalResult};
use num_integer::Integer;
use rust_decimal::Decimal;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;

/// Signed rational number kept permanently in lowest terms.
///
/// Internally stores a numerator/denominator pair of i64. The pair is
/// canonical at rest:
/// - the denominator is strictly positive (sign lives on the numerator),
/// - the components share no common factor (zero is stored as `0/1`).
///
/// Every constructor and setter re-establishes the canonical form before
/// committing, so an unreduced or zero-denominator pair is never observable.
///
/// # Example
/// ```
/// use exact_rational::Rational;
///
/// let half = Rational::new(2, 4).unwrap();    // stored as 1/2
/// let third = Rational::new(1, 3).unwrap();
/// let sum = half.checked_add(third).unwrap();
/// assert_eq!(sum.to_string(), "5/6");
/// ```
#[derive(Clone, Copy)]
pub struct Rational {
    numer: i64,
    denom: i64,
}

// ============================================================================
// Reduction
// ============================================================================

/// Reduce a widened pair to canonical i64 form.
///
/// Runs in i128 so that cross-multiplied intermediates and the sign flip
/// cannot wrap. Callers keep both magnitudes strictly below 2^127 (i64
/// products and `Decimal` mantissas all qualify).
fn reduce(numer: i128, denom: i128) -> RationalResult<(i64, i64)> {
    if denom == 0 {
        tracing::debug!("rejected zero denominator (numerator {})", numer);
        return Err(RationalError::ZeroDenominator);
    }

    // gcd(0, d) = |d|, so a zero numerator collapses to 0/1 without
    // special-casing.
    let g = numer.unsigned_abs().gcd(&denom.unsigned_abs()) as i128;
    let mut numer = numer / g;
    let mut denom = denom / g;
    if denom < 0 {
        numer = -numer;
        denom = -denom;
    }

    let numer = i64::try_from(numer).map_err(|_| RationalError::Overflow)?;
    let denom = i64::try_from(denom).map_err(|_| RationalError::Overflow)?;
    Ok((numer, denom))
}

impl Rational {
    /// Zero (0/1)
    pub const ZERO: Self = Self { numer: 0, denom: 1 };

    /// One (1/1)
    pub const ONE: Self = Self { numer: 1, denom: 1 };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from numerator and denominator, reducing to lowest terms.
    ///
    /// A negative denominator moves its sign onto the numerator, so
    /// `new(1, -2)` equals `new(-1, 2)`. The numerator itself is
    /// unrestricted.
    ///
    /// # Errors
    /// - `ZeroDenominator` if `denominator == 0`
    /// - `Overflow` if sign normalization lands outside i64 range (only
    ///   reachable with `i64::MIN` components)
    ///
    /// # Example
    /// ```
    /// use exact_rational::Rational;
    ///
    /// let half = Rational::new(2, 4).unwrap();
    /// assert_eq!(half.numerator(), 1);
    /// assert_eq!(half.denominator(), 2);
    /// ```
    pub fn new(numerator: i64, denominator: i64) -> RationalResult<Self> {
        let (numer, denom) = reduce(numerator as i128, denominator as i128)?;
        Ok(Self { numer, denom })
    }

    /// Create from an integer value (denominator 1).
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self { numer: value, denom: 1 }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the reduced numerator. Carries the sign of the value.
    #[inline]
    pub const fn numerator(self) -> i64 {
        self.numer
    }

    /// Get the reduced denominator. Always positive.
    #[inline]
    pub const fn denominator(self) -> i64 {
        self.denom
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.numer == 0
    }

    /// Check if value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.numer > 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.numer < 0
    }

    /// Check if the value is a whole number.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.denom == 1
    }

    // ========================================================================
    // Validated Mutation
    // ========================================================================

    /// Replace the numerator, re-reducing against the current denominator.
    ///
    /// Always succeeds: the stored denominator is positive and the reducing
    /// divisor divides it, so both quotients stay in range.
    pub fn set_numerator(&mut self, numerator: i64) {
        let g = numerator.unsigned_abs().gcd(&self.denom.unsigned_abs()) as i64;
        self.numer = numerator / g;
        self.denom /= g;
    }

    /// Replace the denominator, re-reducing against the current numerator.
    ///
    /// Validation happens before anything is committed: on error the value
    /// is left exactly as it was.
    ///
    /// # Errors
    /// - `ZeroDenominator` if `denominator == 0`
    /// - `Overflow` when moving a negative sign onto an `i64::MIN` numerator
    pub fn set_denominator(&mut self, denominator: i64) -> RationalResult<()> {
        self.set_parts(self.numer, denominator)
    }

    /// Replace both components in one step, validating and reducing once.
    ///
    /// Unlike two single-field updates, the pair is reduced against itself,
    /// so `set_parts(2, 4)` leaves the value at `1/2` regardless of what it
    /// held before.
    ///
    /// # Errors
    /// - `ZeroDenominator` if `denominator == 0`
    /// - `Overflow` if sign normalization lands outside i64 range
    pub fn set_parts(&mut self, numerator: i64, denominator: i64) -> RationalResult<()> {
        let (numer, denom) = reduce(numerator as i128, denominator as i128)?;
        self.numer = numer;
        self.denom = denom;
        Ok(())
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Checked addition by cross-multiplication.
    ///
    /// Intermediates run in i128, where products of i64 components cannot
    /// wrap, and are reduced before narrowing back. Additions whose reduced
    /// result fits i64 therefore succeed even when the raw cross products
    /// would not.
    ///
    /// # Errors
    /// Returns `Overflow` if the reduced sum is outside i64 range.
    pub fn checked_add(self, rhs: Self) -> RationalResult<Self> {
        let numer =
            self.numer as i128 * rhs.denom as i128 + rhs.numer as i128 * self.denom as i128;
        let denom = self.denom as i128 * rhs.denom as i128;
        let (numer, denom) = reduce(numer, denom)?;
        Ok(Self { numer, denom })
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Convert to f64 by floating-point division of the reduced pair.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// This is intended for display and API boundaries. Non-terminating
    /// expansions such as 1/3 are rounded at `Decimal`'s own precision.
    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.numer) / Decimal::from(self.denom)
    }

    /// Convert from `rust_decimal::Decimal` exactly.
    ///
    /// The decimal `m × 10^-s` becomes the reduced form of `m / 10^s`.
    ///
    /// # Errors
    /// Returns `Overflow` if the reduced pair does not fit i64.
    pub fn from_decimal(value: Decimal) -> RationalResult<Self> {
        let denom = 10i128.pow(value.scale());
        let (numer, denom) = reduce(value.mantissa(), denom)?;
        Ok(Self { numer, denom })
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Rational {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// The representation is canonical, so component-wise equality is equality of
// rational value and the hash agrees with it.
impl PartialEq for Rational {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.numer == other.numer && self.denom == other.denom
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numer.hash(state);
        self.denom.hash(state);
    }
}

// Infallible Add for ergonomics (panics on overflow - use checked_add in
// production)
impl Add for Rational {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("Rational addition overflow")
    }
}

impl num_traits::Zero for Rational {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.numer == 0
    }
}

impl From<i64> for Rational {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numer, self.denom)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

// ============================================================================
// Tests
// ============================================================================
