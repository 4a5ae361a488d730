// ============================================================================
// Polar Form
// (radial, angular) representation of a complex number
// ============================================================================

use super::complex_decimal::ComplexDecimal;
use crate::numeric::{KernelResult, MathContext};
use crate::trig;
use bigdecimal::BigDecimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Polar representation `(radial, angular)` of a complex number, with the
/// angle in radians.
///
/// Produced by the `polar_form` conversions on [`ComplexInt`](super::ComplexInt)
/// and [`ComplexDecimal`]; any `(r, θ)` pair can also be staged directly and
/// converted back with [`complex_number`](PolarForm::complex_number). The
/// struct itself does no validation or normalization: a negative radius or an
/// angle outside `(−π, π]` is carried through as given.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolarForm {
    radial: BigDecimal,
    angular: BigDecimal,
}

impl PolarForm {
    /// Create the pair `(radial, angular)`.
    pub fn new(radial: BigDecimal, angular: BigDecimal) -> Self {
        Self { radial, angular }
    }

    /// Distance from the origin
    #[inline]
    pub fn radial(&self) -> &BigDecimal {
        &self.radial
    }

    /// Angle in radians
    #[inline]
    pub fn angular(&self) -> &BigDecimal {
        &self.angular
    }

    /// Rectangular form `(r·cos θ, r·sin θ)`, each coordinate rounded at
    /// `mc` after the exact product.
    pub fn complex_number(&self, mc: &MathContext) -> KernelResult<ComplexDecimal> {
        let re = mc.round(&(&self.radial * trig::cos(&self.angular, mc)?));
        let im = mc.round(&(&self.radial * trig::sin(&self.angular, mc)?));
        Ok(ComplexDecimal::new(re, im))
    }
}

impl std::fmt::Display for PolarForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.radial, self.angular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::RoundingMode;
    use num_traits::{One, Zero};
    use std::str::FromStr;

    const PI_REF: &str = "3.141592653589793238462643383279502884197169399375105820974944592307816406286208998628034825342117068";

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
    fn test_accessors_and_display() {
        let polar = PolarForm::new(dec("2.5"), dec("0.75"));
        assert_eq!(polar.radial(), &dec("2.5"));
        assert_eq!(polar.angular(), &dec("0.75"));
        assert_eq!(polar.to_string(), "2.5,0.75");
    }

    #[test]
    fn test_unit_circle_axes() {
        let mc = MathContext::new(40, RoundingMode::HalfUp).unwrap();
        let half_pi = mc.div(&dec(PI_REF), &BigDecimal::from(2)).unwrap();

        // (1, 0) is the real unit
        let east = PolarForm::new(BigDecimal::one(), BigDecimal::zero())
            .complex_number(&mc)
            .unwrap();
        assert_eq!(east.re(), &BigDecimal::one());
        assert_eq!(east.im(), &BigDecimal::zero());

        // (1, π/2) is the imaginary unit
        let north = PolarForm::new(BigDecimal::one(), half_pi)
            .complex_number(&mc)
            .unwrap();
        assert_close(north.re(), &BigDecimal::zero(), "1e-35");
        assert_close(north.im(), &BigDecimal::one(), "1e-35");

        // (1, π) is −1
        let west = PolarForm::new(BigDecimal::one(), dec(PI_REF))
            .complex_number(&mc)
            .unwrap();
        assert_close(west.re(), &(-BigDecimal::one()), "1e-35");
        assert_close(west.im(), &BigDecimal::zero(), "1e-35");
    }

    #[test]
    fn test_radius_scales_both_coordinates() {
        let mc = MathContext::new(30, RoundingMode::HalfUp).unwrap();
        let quarter_pi = mc.div(&dec(PI_REF), &BigDecimal::from(4)).unwrap();
        let point = PolarForm::new(dec("2"), quarter_pi).complex_number(&mc).unwrap();
        // 2·cos(π/4) = √2
        let sqrt2 = dec("1.41421356237309504880168872421");
        assert_close(point.re(), &sqrt2, "1e-25");
        assert_close(point.im(), &sqrt2, "1e-25");
    }
}
