// ============================================================================
// Trigonometric Evaluation
// Arbitrary-precision sin / cos / atan / pi for polar conversions
// ============================================================================
//
// Everything here evaluates at the caller's MathContext plus a fixed number
// of guard digits, then rounds the final result at the caller's context.
// Series terms are rounded at the working context as they are produced so
// intermediate values cannot grow without bound.

use crate::numeric::{KernelResult, MathContext};
use crate::solver::{sqrt, SquareRootContext};
use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, Sign};
use num_traits::{One, Pow, Zero};
use std::str::FromStr;

/// Guard digits carried by every series evaluation
const GUARD_DIGITS: u64 = 10;

/// π to the context's precision, via Machin's formula
/// `π = 16·atan(1/5) − 4·atan(1/239)` evaluated on scaled integers.
pub fn pi(mc: &MathContext) -> BigDecimal {
    let width = mc.precision() + GUARD_DIGITS;
    let unit = BigInt::from(10u32).pow(width as u32);

    let scaled = atan_inverse(5, &unit) * 16u32 - atan_inverse(239, &unit) * 4u32;
    mc.round(&BigDecimal::new(scaled, width as i64))
}

/// `atan(1/k)` as a scaled integer (`result · 10^-width` where `unit`
/// is `10^width`), by the alternating series
/// `Σ (−1)^n / ((2n+1)·k^(2n+1))`.
fn atan_inverse(k: u32, unit: &BigInt) -> BigInt {
    let k_squared = BigInt::from(k) * k;
    let mut power = unit / k;
    let mut sum = power.clone();
    let mut n = 1u32;
    loop {
        power = &power / &k_squared;
        if power.is_zero() {
            break;
        }
        let term = &power / (2 * n + 1);
        if n % 2 == 1 {
            sum -= term;
        } else {
            sum += term;
        }
        n += 1;
    }
    sum
}

/// Arc tangent of `x` at the context's precision.
///
/// `|x| > 1` is folded onto `(−1, 1)` with `atan(x) = ±π/2 − atan(1/x)`;
/// the remaining range is halved via
/// `atan(x) = 2·atan(x / (1 + √(1+x²)))` (square root from the solver at
/// working precision) until the Taylor series converges quickly.
pub fn atan(x: &BigDecimal, mc: &MathContext) -> KernelResult<BigDecimal> {
    if x.is_zero() {
        return Ok(BigDecimal::zero());
    }

    let work = mc.with_extra_digits(GUARD_DIGITS);
    let one = BigDecimal::one();

    if x.abs() > one {
        let half_pi = work.div(&pi(&work), &BigDecimal::from(2))?;
        let inner = atan(&work.div(&one, x)?, &work)?;
        let result = if x.sign() == Sign::Plus {
            half_pi - inner
        } else {
            -half_pi - inner
        };
        return Ok(mc.round(&result));
    }

    // halve the argument until the series term ratio x² is at most ~0.16
    let threshold = BigDecimal::from_str("0.4").expect("literal");
    let sqrt_ctx = SquareRootContext::converging(work);
    let mut reduced = x.clone();
    let mut doublings = 0u32;
    while reduced.abs() > threshold {
        let squared = work.round(&(&reduced * &reduced));
        let hypotenuse = sqrt(&(squared + &one), &sqrt_ctx)?;
        reduced = work.div(&reduced, &(hypotenuse + &one))?;
        doublings += 1;
    }

    // Taylor: x − x³/3 + x⁵/5 − …
    let eps = BigDecimal::new(BigInt::one(), work.precision() as i64);
    let x_squared = work.round(&(&reduced * &reduced));
    let mut power = reduced.clone();
    let mut sum = reduced;
    let mut n = 1u32;
    loop {
        power = work.round(&(&power * &x_squared));
        let term = work.div(&power, &BigDecimal::from(2 * n + 1))?;
        if term.abs() < eps {
            break;
        }
        if n % 2 == 1 {
            sum = sum - term;
        } else {
            sum = sum + term;
        }
        n += 1;
    }

    let two = BigDecimal::from(2);
    for _ in 0..doublings {
        sum = sum * &two;
    }
    Ok(mc.round(&sum))
}

/// Sine of `x` (radians) at the context's precision.
pub fn sin(x: &BigDecimal, mc: &MathContext) -> KernelResult<BigDecimal> {
    let work = mc.with_extra_digits(GUARD_DIGITS);
    let reduced = reduce_mod_two_pi(x, &work)?;

    // Σ (−1)^n x^(2n+1)/(2n+1)!, term updated incrementally
    let eps = BigDecimal::new(BigInt::one(), work.precision() as i64);
    let x_squared = work.round(&(&reduced * &reduced));
    let mut term = reduced.clone();
    let mut sum = reduced;
    let mut n = 1u32;
    loop {
        term = work.round(&(&term * &x_squared));
        term = work.div(&term, &BigDecimal::from(2 * n * (2 * n + 1)))?;
        term = -term;
        if term.abs() < eps {
            break;
        }
        sum = sum + &term;
        n += 1;
    }
    Ok(mc.round(&sum))
}

/// Cosine of `x` (radians) at the context's precision.
pub fn cos(x: &BigDecimal, mc: &MathContext) -> KernelResult<BigDecimal> {
    let work = mc.with_extra_digits(GUARD_DIGITS);
    let reduced = reduce_mod_two_pi(x, &work)?;

    // Σ (−1)^n x^(2n)/(2n)!, term updated incrementally
    let eps = BigDecimal::new(BigInt::one(), work.precision() as i64);
    let x_squared = work.round(&(&reduced * &reduced));
    let mut term = BigDecimal::one();
    let mut sum = BigDecimal::one();
    let mut n = 1u32;
    loop {
        term = work.round(&(&term * &x_squared));
        term = work.div(&term, &BigDecimal::from((2 * n - 1) * (2 * n)))?;
        term = -term;
        if term.abs() < eps {
            break;
        }
        sum = sum + &term;
        n += 1;
    }
    Ok(mc.round(&sum))
}

/// Fold `x` into one turn, `[0, 2π)` up to working-precision rounding.
fn reduce_mod_two_pi(x: &BigDecimal, work: &MathContext) -> KernelResult<BigDecimal> {
    let two_pi = pi(work) * BigDecimal::from(2);
    if x.abs() < two_pi {
        return Ok(x.clone());
    }
    let turns = work.div(x, &two_pi)?;
    let whole = turns.with_scale_round(0, RoundingMode::Floor);
    Ok(x - whole * two_pi)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PI_REF: &str = "3.14159265358979323846264338327950288419716939937510582097494459230781640628620899862803482534211706798";

    fn mc(precision: u64) -> MathContext {
        MathContext::new(precision, RoundingMode::HalfUp).unwrap()
    }

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn assert_close(actual: &BigDecimal, expected: &BigDecimal, tolerance: &str) {
        let error = (actual - expected).abs();
        assert!(
            error < dec(tolerance),
            "expected {} within {}, got {} (off by {})",
            expected,
            tolerance,
            actual,
            error
        );
    }

    #[test]
    fn test_pi_reference_digits() {
        let value = pi(&mc(50));
        assert_close(&value, &dec(PI_REF), "1e-45");
    }

    #[test]
    fn test_pi_default_precision() {
        let value = pi(&MathContext::DEFAULT);
        assert_close(&value, &dec(PI_REF), "1e-95");
    }

    #[test]
    fn test_atan_zero_and_one() {
        assert_eq!(atan(&BigDecimal::zero(), &mc(30)).unwrap(), BigDecimal::zero());

        // atan(1) = π/4
        let quarter_pi = mc(40).div(&dec(PI_REF), &BigDecimal::from(4)).unwrap();
        let value = atan(&BigDecimal::one(), &mc(40)).unwrap();
        assert_close(&value, &quarter_pi, "1e-35");
    }

    #[test]
    fn test_atan_odd_symmetry() {
        let context = mc(30);
        let plus = atan(&dec("0.75"), &context).unwrap();
        let minus = atan(&dec("-0.75"), &context).unwrap();
        assert_close(&(plus + minus), &BigDecimal::zero(), "1e-25");
    }

    #[test]
    fn test_atan_beyond_unit_interval() {
        // atan(2) + atan(1/2) = π/2
        let context = mc(30);
        let outer = atan(&BigDecimal::from(2), &context).unwrap();
        let inner = atan(&dec("0.5"), &context).unwrap();
        let half_pi = context.div(&dec(PI_REF), &BigDecimal::from(2)).unwrap();
        assert_close(&(outer + inner), &half_pi, "1e-25");

        let negative = atan(&BigDecimal::from(-2), &context).unwrap();
        let positive = atan(&BigDecimal::from(2), &context).unwrap();
        assert_close(&(negative + positive), &BigDecimal::zero(), "1e-25");
    }

    #[test]
    fn test_sin_special_values() {
        let context = mc(40);
        assert_eq!(sin(&BigDecimal::zero(), &context).unwrap(), BigDecimal::zero());

        // sin(π/2) = 1
        let half_pi = context.div(&dec(PI_REF), &BigDecimal::from(2)).unwrap();
        assert_close(&sin(&half_pi, &context).unwrap(), &BigDecimal::one(), "1e-35");

        // sin(π) = 0
        assert_close(
            &sin(&dec(PI_REF), &context).unwrap(),
            &BigDecimal::zero(),
            "1e-35",
        );
    }

    #[test]
    fn test_cos_special_values() {
        let context = mc(40);
        assert_eq!(cos(&BigDecimal::zero(), &context).unwrap(), BigDecimal::one());

        // cos(π) = −1
        assert_close(
            &cos(&dec(PI_REF), &context).unwrap(),
            &(-BigDecimal::one()),
            "1e-35",
        );
    }

    #[test]
    fn test_pythagorean_identity() {
        let context = mc(30);
        let x = dec("1.2345");
        let s = sin(&x, &context).unwrap();
        let c = cos(&x, &context).unwrap();
        assert_close(&(&s * &s + &c * &c), &BigDecimal::one(), "1e-25");
    }

    #[test]
    fn test_argument_reduction() {
        // sin(x + 2π) = sin(x)
        let context = mc(30);
        let x = dec("0.5");
        let two_pi = dec(PI_REF) * BigDecimal::from(2);
        let shifted = sin(&(&x + &two_pi), &context).unwrap();
        let plain = sin(&x, &context).unwrap();
        assert_close(&shifted, &plain, "1e-25");
    }
}
