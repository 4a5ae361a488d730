// ============================================================================
// Integer-Coordinate Complex Number
// Exact complex arithmetic over BigInt coordinates
// ============================================================================

use super::polar::PolarForm;
use crate::matrix::Matrix;
use crate::numeric::{KernelError, KernelResult, MathContext};
use crate::solver::{sqrt, SquareRootContext};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable complex number with exact [`BigInt`] coordinates.
///
/// Addition, subtraction, multiplication, conjugation and `abs_pow2` are
/// exact. Division truncates component-wise (Gaussian integers are not
/// closed under division); [`abs`](ComplexInt::abs) is the only operation
/// that leaves the exact domain, delegating to the square-root solver.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use numeric_kernel::complex::ComplexInt;
/// use numeric_kernel::solver::SquareRootContext;
///
/// let z = ComplexInt::new(BigInt::from(3), BigInt::from(4));
/// assert_eq!(z.abs_pow2(), BigInt::from(25));
/// let modulus = z.abs(&SquareRootContext::default()).unwrap();
/// assert!((modulus - bigdecimal::BigDecimal::from(5)).abs() < "0.001".parse::<bigdecimal::BigDecimal>().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComplexInt {
    re: BigInt,
    im: BigInt,
}

impl ComplexInt {
    /// Create `re + im·i`.
    pub fn new(re: BigInt, im: BigInt) -> Self {
        Self { re, im }
    }

    /// The additive identity `0 + 0i`
    pub fn zero() -> Self {
        Self::new(BigInt::zero(), BigInt::zero())
    }

    /// The multiplicative identity `1 + 0i`
    pub fn one() -> Self {
        Self::new(BigInt::one(), BigInt::zero())
    }

    /// The imaginary unit `0 + 1i`
    pub fn i() -> Self {
        Self::new(BigInt::zero(), BigInt::one())
    }

    /// Real coordinate
    #[inline]
    pub fn re(&self) -> &BigInt {
        &self.re
    }

    /// Imaginary coordinate
    #[inline]
    pub fn im(&self) -> &BigInt {
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

    /// Squared modulus `re² + im²`; exact, no rounding involved.
    pub fn abs_pow2(&self) -> BigInt {
        &self.re * &self.re + &self.im * &self.im
    }

    /// Modulus `√(re² + im²)`, approximated by the solver under `ctx`.
    /// The sole point where exact arithmetic becomes approximate.
    pub fn abs(&self, ctx: &SquareRootContext) -> KernelResult<BigDecimal> {
        sqrt(&BigDecimal::from(self.abs_pow2()), ctx)
    }

    /// Divide by `divisor`, truncating each coordinate toward zero.
    ///
    /// # Errors
    /// `DivisorNotInvertible` when `divisor` is zero.
    pub fn div(&self, divisor: &Self) -> KernelResult<Self> {
        if divisor.is_zero() {
            return Err(KernelError::DivisorNotInvertible);
        }
        let denominator = divisor.abs_pow2();
        let numerator = self.clone() * divisor.conjugate();
        Ok(Self::new(
            numerator.re / &denominator,
            numerator.im / &denominator,
        ))
    }

    /// Multiplicative inverse `conjugate / abs_pow2`, truncating.
    ///
    /// # Errors
    /// `NotInvertible` when this number is zero.
    pub fn inverse(&self) -> KernelResult<Self> {
        if self.is_zero() {
            return Err(KernelError::NotInvertible);
        }
        let denominator = self.abs_pow2();
        let conjugate = self.conjugate();
        Ok(Self::new(
            conjugate.re / &denominator,
            conjugate.im / &denominator,
        ))
    }

    /// Integer power by repeated multiplication.
    ///
    /// `pow(0)` is the multiplicative identity and `pow(1)` a clone of the
    /// receiver; value semantics replace the shared-instance identity a
    /// reference-based implementation would return.
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
        super::argument_of(
            &BigDecimal::from(self.re.clone()),
            &BigDecimal::from(self.im.clone()),
            mc,
        )
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
    /// multiplication by this number. An alternate view; arithmetic never
    /// uses it internally.
    pub fn matrix(&self) -> Matrix<BigInt> {
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

// ============================================================================
// Operator and Identity Impls
// ============================================================================

impl Add for ComplexInt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for ComplexInt {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for ComplexInt {
    type Output = Self;

    // (a + bi)(c + di) = (ac − bd) + (ad + bc)i
    fn mul(self, rhs: Self) -> Self {
        let re = &self.re * &rhs.re - &self.im * &rhs.im;
        let im = &self.re * &rhs.im + &self.im * &rhs.re;
        Self::new(re, im)
    }
}

impl Neg for ComplexInt {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl Zero for ComplexInt {
    fn zero() -> Self {
        ComplexInt::zero()
    }

    fn is_zero(&self) -> bool {
        ComplexInt::is_zero(self)
    }
}

impl One for ComplexInt {
    fn one() -> Self {
        ComplexInt::one()
    }
}

impl fmt::Display for ComplexInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i", self.re, self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::RoundingMode;
    use proptest::prelude::*;
    use std::str::FromStr;

    const PI_REF: &str = "3.141592653589793238462643383279502884197169399375105820974944592307816406286208998628034825342117068";

    fn z(re: i64, im: i64) -> ComplexInt {
        ComplexInt::new(BigInt::from(re), BigInt::from(im))
    }

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
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
    fn test_constants_and_display() {
        assert_eq!(ComplexInt::zero().to_string(), "0 + 0i");
        assert_eq!(ComplexInt::one().to_string(), "1 + 0i");
        assert_eq!(ComplexInt::i().to_string(), "0 + 1i");
        assert_eq!(z(3, -4).to_string(), "3 + -4i");
    }

    #[test]
    fn test_rectangular_arithmetic() {
        assert_eq!(z(1, 2) + z(3, 4), z(4, 6));
        assert_eq!(z(1, 2) - z(3, 4), z(-2, -2));
        assert_eq!(z(1, 2) * z(3, 4), z(-5, 10));
        assert_eq!(-z(1, -2), z(-1, 2));
        assert_eq!(z(1, 2).conjugate(), z(1, -2));
    }

    #[test]
    fn test_imaginary_unit_squares_to_minus_one() {
        assert_eq!(ComplexInt::i() * ComplexInt::i(), -ComplexInt::one());
    }

    #[test]
    fn test_pow() {
        let base = z(1, 1);
        assert_eq!(base.pow(0), ComplexInt::one());
        assert_eq!(base.pow(1), base);
        assert_eq!(base.pow(2), z(0, 2));
        assert_eq!(base.pow(3), z(-2, 2));
        assert_eq!(z(0, 1).pow(4), ComplexInt::one());
    }

    #[test]
    fn test_div_exact() {
        // (-5 + 10i) / (3 + 4i) = 1 + 2i
        assert_eq!(z(-5, 10).div(&z(3, 4)).unwrap(), z(1, 2));
    }

    #[test]
    fn test_div_by_zero() {
        let err = z(1, 1).div(&ComplexInt::zero()).unwrap_err();
        assert_eq!(err, KernelError::DivisorNotInvertible);
        assert_eq!(err.to_string(), "divisor not invertible");
    }

    #[test]
    fn test_inverse() {
        assert_eq!(ComplexInt::one().inverse().unwrap(), ComplexInt::one());
        assert_eq!(ComplexInt::i().inverse().unwrap(), z(0, -1));
        assert_eq!(
            ComplexInt::zero().inverse().unwrap_err(),
            KernelError::NotInvertible
        );
    }

    #[test]
    fn test_abs() {
        let three_four = z(3, 4);
        assert_eq!(three_four.abs_pow2(), BigInt::from(25));
        let modulus = three_four.abs(&SquareRootContext::default()).unwrap();
        assert!(modulus > dec("4.999"));
        assert!(modulus < dec("5.001"));
    }

    #[test]
    fn test_argument_quadrants() {
        let mc = MathContext::new(40, RoundingMode::HalfUp).unwrap();
        let pi = dec(PI_REF);
        let quarter_pi = mc.div(&pi, &BigDecimal::from(4)).unwrap();
        let half_pi = mc.div(&pi, &BigDecimal::from(2)).unwrap();

        assert_close(&z(1, 1).argument(&mc).unwrap(), &quarter_pi, "1e-35");
        assert_close(
            &z(-1, 1).argument(&mc).unwrap(),
            &(&quarter_pi * BigDecimal::from(3)),
            "1e-35",
        );
        assert_close(
            &z(-1, -1).argument(&mc).unwrap(),
            &(&quarter_pi * BigDecimal::from(-3)),
            "1e-35",
        );
        assert_close(&z(0, 5).argument(&mc).unwrap(), &half_pi, "1e-35");
        assert_close(&z(0, -5).argument(&mc).unwrap(), &(-&half_pi), "1e-35");
        assert_eq!(z(7, 0).argument(&mc).unwrap(), BigDecimal::zero());

        // negative real axis gets +π (imaginary part treated as >= 0)
        assert_close(&z(-3, 0).argument(&mc).unwrap(), &pi, "1e-35");
    }

    #[test]
    fn test_argument_of_zero_is_invalid_state() {
        let err = ComplexInt::zero().argument(&MathContext::DEFAULT).unwrap_err();
        assert_eq!(err, KernelError::ArgumentOfZero);
        assert_eq!(err.kind(), crate::numeric::ErrorKind::InvalidState);
    }

    #[test]
    fn test_polar_form() {
        let polar = z(3, 4).polar_form(&SquareRootContext::default()).unwrap();
        assert_close(polar.radial(), &BigDecimal::from(5), "0.001");
        // atan(4/3) ≈ 0.9272952180016122
        assert_close(polar.angular(), &dec("0.9272952180016122"), "1e-10");
    }

    #[test]
    fn test_matrix_view() {
        let m = z(3, 4).matrix();
        assert_eq!(m.get(1, 1).unwrap(), &BigInt::from(3));
        assert_eq!(m.get(1, 2).unwrap(), &BigInt::from(-4));
        assert_eq!(m.get(2, 1).unwrap(), &BigInt::from(4));
        assert_eq!(m.get(2, 2).unwrap(), &BigInt::from(3));
        // det of the representation equals the squared modulus
        assert_eq!(m.det().unwrap(), z(3, 4).abs_pow2());
        // and the representation is multiplicative
        let product = z(1, 2).matrix().mul(&z(3, 4).matrix()).unwrap();
        assert_eq!(product, (z(1, 2) * z(3, 4)).matrix());
    }

    // ------------------------------------------------------------------
    // Algebraic laws
    // ------------------------------------------------------------------

    fn arb_complex() -> impl Strategy<Value = ComplexInt> {
        (-1000i64..1000, -1000i64..1000).prop_map(|(re, im)| z(re, im))
    }

    proptest! {
        #[test]
        fn prop_addition_commutes(a in arb_complex(), b in arb_complex()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn prop_multiplication_commutes(a in arb_complex(), b in arb_complex()) {
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn prop_associativity(a in arb_complex(), b in arb_complex(), c in arb_complex()) {
            prop_assert_eq!(
                (a.clone() + b.clone()) + c.clone(),
                a.clone() + (b.clone() + c.clone())
            );
            prop_assert_eq!((a.clone() * b.clone()) * c.clone(), a * (b * c));
        }

        #[test]
        fn prop_distributivity(a in arb_complex(), b in arb_complex(), c in arb_complex()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn prop_additive_inverse(a in arb_complex()) {
            prop_assert_eq!(a.clone() + (-a), ComplexInt::zero());
        }

        #[test]
        fn prop_conjugation_involution(a in arb_complex()) {
            prop_assert_eq!(a.conjugate().conjugate(), a);
        }

        #[test]
        fn prop_abs_pow2_multiplicative(a in arb_complex(), b in arb_complex()) {
            prop_assert_eq!(
                (a.clone() * b.clone()).abs_pow2(),
                a.abs_pow2() * b.abs_pow2()
            );
        }
    }
}
