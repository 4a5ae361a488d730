// ============================================================================
// Decimal-Coordinate Complex Number
// Complex arithmetic over arbitrary-scale BigDecimal coordinates
// ============================================================================

use super::complex_int::ComplexInt;
use super::polar::PolarForm;
use crate::matrix::Matrix;
use crate::numeric::{KernelError, KernelResult, MathContext};
use crate::solver::{sqrt, SquareRootContext};
use bigdecimal::BigDecimal;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable complex number with arbitrary-scale [`BigDecimal`] coordinates.
///
/// Same contract as [`ComplexInt`], over the decimal coordinate space.
/// Addition, subtraction, multiplication, conjugation and `abs_pow2` are
/// exact (scales grow as needed); division rounds each coordinate at
/// [`MathContext::DEFAULT`] because decimal quotients need not terminate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComplexDecimal {
    re: BigDecimal,
    im: BigDecimal,
}

impl ComplexDecimal {
    /// Create `re + im·i`.
    pub fn new(re: BigDecimal, im: BigDecimal) -> Self {
        Self { re, im }
    }

    /// The additive identity `0 + 0i`
    pub fn zero() -> Self {
        Self::new(BigDecimal::zero(), BigDecimal::zero())
    }

    /// The multiplicative identity `1 + 0i`
    pub fn one() -> Self {
        Self::new(BigDecimal::one(), BigDecimal::zero())
    }

    /// The imaginary unit `0 + 1i`
    pub fn i() -> Self {
        Self::new(BigDecimal::zero(), BigDecimal::one())
    }

    /// Real coordinate
    #[inline]
    pub fn re(&self) -> &BigDecimal {
        &self.re
    }

    /// Imaginary coordinate
    #[inline]
    pub fn im(&self) -> &BigDecimal {
        &self.im
    }

    /// Whether this is the additive identity
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// Sign-flip the imaginary coordinate.
    pub fn conjugate(&self) -> Self {
        Self::new(self.re.clone(), -self.im.clone())
    }

    /// Squared modulus `re² + im²`; exact.
    pub fn abs_pow2(&self) -> BigDecimal {
        &self.re * &self.re + &self.im * &self.im
    }

    /// Modulus `√(re² + im²)`, approximated by the solver under `ctx`.
    pub fn abs(&self, ctx: &SquareRootContext) -> KernelResult<BigDecimal> {
        sqrt(&self.abs_pow2(), ctx)
    }

    /// Divide by `divisor`, rounding each coordinate at
    /// [`MathContext::DEFAULT`].
    ///
    /// # Errors
    /// `DivisorNotInvertible` when `divisor` is zero.
    pub fn div(&self, divisor: &Self) -> KernelResult<Self> {
        if divisor.is_zero() {
            return Err(KernelError::DivisorNotInvertible);
        }
        let mc = MathContext::DEFAULT;
        let denominator = divisor.abs_pow2();
        let numerator = self.clone() * divisor.conjugate();
        Ok(Self::new(
            mc.div(&numerator.re, &denominator)?,
            mc.div(&numerator.im, &denominator)?,
        ))
    }

    /// Multiplicative inverse `conjugate / abs_pow2`, rounded at
    /// [`MathContext::DEFAULT`].
    ///
    /// # Errors
    /// `NotInvertible` when this number is zero.
    pub fn inverse(&self) -> KernelResult<Self> {
        if self.is_zero() {
            return Err(KernelError::NotInvertible);
        }
        let mc = MathContext::DEFAULT;
        let denominator = self.abs_pow2();
        let conjugate = self.conjugate();
        Ok(Self::new(
            mc.div(&conjugate.re, &denominator)?,
            mc.div(&conjugate.im, &denominator)?,
        ))
    }

    /// Integer power by repeated multiplication; exact, scales grow with the
    /// exponent.
    pub fn pow(&self, exponent: u32) -> Self {
        if exponent == 0 {
            return Self::one();
        }
        let mut acc = self.clone();
        for _ in 1..exponent {
            acc = acc * self.clone();
        }
        acc
    }

    /// Quadrant-correct argument in radians, evaluated at `mc`.
    ///
    /// # Errors
    /// `ArgumentOfZero` when this number is zero.
    pub fn argument(&self, mc: &MathContext) -> KernelResult<BigDecimal> {
        super::argument_of(&self.re, &self.im, mc)
    }

    /// Polar representation `(abs, argument)` under `ctx`.
    ///
    /// # Errors
    /// `ArgumentOfZero` when this number is zero.
    pub fn polar_form(&self, ctx: &SquareRootContext) -> KernelResult<PolarForm> {
        let angular = self.argument(ctx.math())?;
        let radial = self.abs(ctx)?;
        Ok(PolarForm::new(radial, angular))
    }

    /// The 2×2 matrix `{{re, −im}, {im, re}}`, isomorphic to
    /// multiplication by this number.
    pub fn matrix(&self) -> Matrix<BigDecimal> {
        Matrix::from_raw(
            2,
            2,
            vec![
                self.re.clone(),
                -self.im.clone(),
                self.im.clone(),
                self.re.clone(),
            ],
        )
    }
}

/// Exact widening from integer coordinates.
impl From<ComplexInt> for ComplexDecimal {
    fn from(value: ComplexInt) -> Self {
        Self::new(
            BigDecimal::from(value.re().clone()),
            BigDecimal::from(value.im().clone()),
        )
    }
}

// ============================================================================
// Operator and Identity Impls
// ============================================================================

impl Add for ComplexDecimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for ComplexDecimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for ComplexDecimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let re = &self.re * &rhs.re - &self.im * &rhs.im;
        let im = &self.re * &rhs.im + &self.im * &rhs.re;
        Self::new(re, im)
    }
}

impl Neg for ComplexDecimal {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl Zero for ComplexDecimal {
    fn zero() -> Self {
        ComplexDecimal::zero()
    }

    fn is_zero(&self) -> bool {
        ComplexDecimal::is_zero(self)
    }
}

impl One for ComplexDecimal {
    fn one() -> Self {
        ComplexDecimal::one()
    }
}

impl fmt::Display for ComplexDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i", self.re, self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use std::str::FromStr;

    const PI_REF: &str = "3.141592653589793238462643383279502884197169399375105820974944592307816406286208998628034825342117068";
    const SQRT2_REF: &str = "1.414213562373095048801688724209698078569671875376948073176679737990732478462107038850387534327641573";

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn z(re: &str, im: &str) -> ComplexDecimal {
        ComplexDecimal::new(dec(re), dec(im))
    }

    fn assert_close(actual: &BigDecimal, expected: &BigDecimal, tolerance: &str) {
        let error = (actual - expected).abs();
        assert!(
            error < dec(tolerance),
            "expected {} within {}, got {}",
            expected,
            tolerance,
            actual
        );
    }

    #[test]
    fn test_rectangular_arithmetic_is_exact() {
        let a = z("0.1", "0.2");
        let b = z("0.3", "0.4");
        assert_eq!(a.clone() + b.clone(), z("0.4", "0.6"));
        assert_eq!(b.clone() - a.clone(), z("0.2", "0.2"));
        // (0.1 + 0.2i)(0.3 + 0.4i) = −0.05 + 0.10i, no binary float drift
        assert_eq!(a.clone() * b, z("-0.05", "0.10"));
        assert_eq!(-a, z("-0.1", "-0.2"));
    }

    #[test]
    fn test_conjugate_and_abs_pow2() {
        let a = z("1.5", "-2.5");
        assert_eq!(a.conjugate(), z("1.5", "2.5"));
        assert_eq!(a.abs_pow2(), dec("8.50"));
    }

    #[test]
    fn test_abs_of_unit_diagonal() {
        // |1 + i| = √2
        let modulus = z("1", "1").abs(&SquareRootContext::default()).unwrap();
        assert_close(&modulus, &dec(SQRT2_REF), "1e-9");
    }

    #[test]
    fn test_div_and_inverse() {
        let quotient = z("-0.05", "0.10").div(&z("0.3", "0.4")).unwrap();
        assert_close(quotient.re(), &dec("0.1"), "1e-90");
        assert_close(quotient.im(), &dec("0.2"), "1e-90");

        let inverse = z("0", "2").inverse().unwrap();
        assert_eq!(inverse.re(), &BigDecimal::zero());
        assert_close(inverse.im(), &dec("-0.5"), "1e-90");

        assert_eq!(
            z("1", "1").div(&ComplexDecimal::zero()).unwrap_err(),
            KernelError::DivisorNotInvertible
        );
        assert_eq!(
            ComplexDecimal::zero().inverse().unwrap_err(),
            KernelError::NotInvertible
        );
    }

    #[test]
    fn test_inverse_times_self_is_one() {
        let a = z("3", "4");
        let product = a.clone() * a.inverse().unwrap();
        assert_close(product.re(), &BigDecimal::one(), "1e-90");
        assert_close(product.im(), &BigDecimal::zero(), "1e-90");
    }

    #[test]
    fn test_pow() {
        let i = ComplexDecimal::i();
        assert_eq!(i.pow(0), ComplexDecimal::one());
        assert_eq!(i.pow(2), -ComplexDecimal::one());
        assert_eq!(z("0.5", "0").pow(3), z("0.125", "0"));
    }

    #[test]
    fn test_polar_round_trip_unit_diagonal() {
        // (1, 1): radial √2, angular π/4
        let ctx = SquareRootContext::default();
        let polar = z("1", "1").polar_form(&ctx).unwrap();
        assert_close(polar.radial(), &dec(SQRT2_REF), "1e-9");
        let quarter_pi = ctx
            .math()
            .div(&dec(PI_REF), &BigDecimal::from(4))
            .unwrap();
        assert_close(polar.angular(), &quarter_pi, "1e-90");

        let back = polar.complex_number(ctx.math()).unwrap();
        assert_close(back.re(), &BigDecimal::one(), "1e-9");
        assert_close(back.im(), &BigDecimal::one(), "1e-9");
    }

    #[test]
    fn test_argument_of_zero() {
        assert_eq!(
            ComplexDecimal::zero()
                .argument(&MathContext::DEFAULT)
                .unwrap_err(),
            KernelError::ArgumentOfZero
        );
    }

    #[test]
    fn test_from_complex_int_is_exact() {
        let exact = ComplexInt::new(BigInt::from(-7), BigInt::from(12));
        let widened = ComplexDecimal::from(exact);
        assert_eq!(widened, z("-7", "12"));
    }

    #[test]
    fn test_matrix_view() {
        let m = z("1.5", "2.5").matrix();
        assert_eq!(m.get(1, 2).unwrap(), &dec("-2.5"));
        assert_eq!(m.trace().unwrap(), dec("3.0"));
        assert_eq!(m.det().unwrap(), z("1.5", "2.5").abs_pow2());
    }

    #[test]
    fn test_display() {
        assert_eq!(z("1.5", "-0.5").to_string(), "1.5 + -0.5i");
    }
}
