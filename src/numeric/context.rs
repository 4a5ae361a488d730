// ============================================================================
// Math Context
// Precision + rounding-mode configuration for approximate decimal arithmetic
// ============================================================================

use super::errors::{KernelError, KernelResult};
use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Pow, Zero};

/// Arbitrary-precision evaluation context: a number of significant digits
/// and a rounding mode.
///
/// Exact operations (addition, subtraction, multiplication of decimals)
/// never consult a context; the context governs the two places where
/// rounding is unavoidable: division and final result rounding.
///
/// # Example
/// ```
/// use bigdecimal::{BigDecimal, RoundingMode};
/// use numeric_kernel::numeric::MathContext;
///
/// let mc = MathContext::new(10, RoundingMode::HalfUp).unwrap();
/// let third = mc.div(&BigDecimal::from(1), &BigDecimal::from(3)).unwrap();
/// assert_eq!(third.to_string(), "0.3333333333");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathContext {
    precision: u64,
    rounding: RoundingMode,
}

impl MathContext {
    /// Default evaluation context: 100 significant digits, half-up.
    pub const DEFAULT: Self = Self {
        precision: 100,
        rounding: RoundingMode::HalfUp,
    };

    /// Create a context with the given number of significant digits.
    ///
    /// # Errors
    /// `ZeroPrecision` if `precision` is zero.
    pub fn new(precision: u64, rounding: RoundingMode) -> KernelResult<Self> {
        if precision == 0 {
            return Err(KernelError::ZeroPrecision);
        }
        Ok(Self {
            precision,
            rounding,
        })
    }

    /// Number of significant digits kept by this context.
    #[inline]
    pub fn precision(&self) -> u64 {
        self.precision
    }

    /// Rounding mode applied when digits must be discarded.
    #[inline]
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding
    }

    /// Derived context with `guard` additional significant digits.
    ///
    /// Iterative algorithms evaluate at the widened context and round the
    /// final result at the original one.
    pub fn with_extra_digits(&self, guard: u64) -> Self {
        Self {
            precision: self.precision + guard,
            rounding: self.rounding,
        }
    }

    /// Same precision, different rounding mode.
    pub fn with_rounding_mode(&self, rounding: RoundingMode) -> Self {
        Self {
            precision: self.precision,
            rounding,
        }
    }

    /// Round `value` to this context's number of significant digits.
    ///
    /// Values that already fit are returned unchanged (no padding).
    pub fn round(&self, value: &BigDecimal) -> BigDecimal {
        let digits = value.digits();
        if digits <= self.precision {
            return value.clone();
        }
        let (_, scale) = value.as_bigint_and_exponent();
        let dropped = (digits - self.precision) as i64;
        value.with_scale_round(scale - dropped, self.rounding)
    }

    /// Divide `num` by `den`, correct to this context's precision.
    ///
    /// Performed as scaled integer long division with one guard digit: the
    /// numerator is shifted so the integer quotient carries at least
    /// `precision + 1` digits, a nonzero remainder marks the last digit
    /// sticky (a trailing 0 or 5 becomes 1 or 6, so the exact quotient is
    /// never mistaken for an exact value or a clean tie), and the result is
    /// rounded once at this context.
    ///
    /// # Errors
    /// `DivisionByZero` if `den` is zero.
    pub fn div(&self, num: &BigDecimal, den: &BigDecimal) -> KernelResult<BigDecimal> {
        if den.is_zero() {
            return Err(KernelError::DivisionByZero);
        }
        if num.is_zero() {
            return Ok(BigDecimal::zero());
        }

        let (n_int, n_scale) = num.as_bigint_and_exponent();
        let (d_int, d_scale) = den.as_bigint_and_exponent();

        // num/den = (n_int / d_int) * 10^(d_scale - n_scale); shift the
        // numerator so the integer quotient has enough significant digits
        let shift =
            (self.precision as i64 + 1 + den.digits() as i64 - num.digits() as i64).max(0);

        let sign = if n_int.sign() == d_int.sign() {
            Sign::Plus
        } else {
            Sign::Minus
        };

        let n_mag = n_int.magnitude() * BigUint::from(10u32).pow(shift as u32);
        let d_mag = d_int.magnitude();
        let quotient = &n_mag / d_mag;
        let remainder = &n_mag % d_mag;

        // sticky digit: dropped digits continue below, so the rounding
        // position must not see an exact value (…0) or a clean tie (…5)
        let quotient = if !remainder.is_zero() && (&quotient % 5u32).is_zero() {
            quotient + 1u32
        } else {
            quotient
        };

        let raw = BigDecimal::new(
            BigInt::from_biguint(sign, quotient),
            n_scale - d_scale + shift,
        );
        Ok(self.round(&raw))
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self::DEFAULT
    }
}
