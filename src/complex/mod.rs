// ============================================================================
// Complex Module
// Rectangular and polar complex arithmetic over exact coordinates
// ============================================================================
//
// This module provides:
// - ComplexInt: complex numbers with exact BigInt coordinates
// - ComplexDecimal: complex numbers with arbitrary-scale BigDecimal
//   coordinates
// - PolarForm: (radial, angular) representation, convertible both ways
//
// The two coordinate spaces implement one algebraic contract as independent
// concrete types sharing the Ring capability bound; there is no generic
// base-type hierarchy. Arithmetic is exact; only `abs` (via the solver) and
// the trigonometric conversions introduce approximation.

mod complex_decimal;
mod complex_int;
mod polar;

pub use complex_decimal::ComplexDecimal;
pub use complex_int::ComplexInt;
pub use polar::PolarForm;

use crate::numeric::{KernelError, KernelResult, MathContext};
use crate::trig;
use bigdecimal::BigDecimal;
use num_bigint::Sign;
use num_traits::Zero;

/// Quadrant-correct argument of `(re, im)` in radians.
///
/// `atan(im/re)` covers the right half-plane; the left half-plane is
/// restored by adding π (upper) or subtracting π (lower), and the imaginary
/// axis maps to ±π/2 directly.
///
/// # Errors
/// `ArgumentOfZero` for the origin, where no angle is defined.
pub(crate) fn argument_of(
    re: &BigDecimal,
    im: &BigDecimal,
    mc: &MathContext,
) -> KernelResult<BigDecimal> {
    if re.is_zero() && im.is_zero() {
        return Err(KernelError::ArgumentOfZero);
    }

    if re.is_zero() {
        let half_pi = mc.div(&trig::pi(mc), &BigDecimal::from(2))?;
        return Ok(if im.sign() == Sign::Plus {
            half_pi
        } else {
            -half_pi
        });
    }

    let base = trig::atan(&mc.div(im, re)?, mc)?;
    if re.sign() == Sign::Plus {
        return Ok(base);
    }
    let shifted = if im.sign() == Sign::Minus {
        base - trig::pi(mc)
    } else {
        base + trig::pi(mc)
    };
    Ok(mc.round(&shifted))
}
