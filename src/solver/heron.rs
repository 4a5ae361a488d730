// ============================================================================
// Heron Square-Root Solver
// Seeded Newton iteration for f(x) = x^2 - n at configurable precision
// ============================================================================

use super::context::SquareRootContext;
use super::trace::{IterationTrace, NoOpTraceSink, TraceSink};
use crate::numeric::{KernelError, KernelResult};
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::{One, Zero};

/// Approximate `√value` with Heron's method.
///
/// The iteration is `successor = (predecessor² + value) / (2·predecessor)`,
/// with the division performed at the context's precision and rounding mode.
/// It stops when two successive approximations differ by at most the
/// context's abort criterion, or when the iteration budget runs out,
/// whichever comes first. An exhausted budget returns the best-so-far
/// approximation without signalling non-convergence; that is part of the
/// contract, and the per-iteration trace records are the only visibility.
///
/// # Errors
/// `NegativeRadicand` if `value < 0`.
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use numeric_kernel::solver::{sqrt, SquareRootContext};
///
/// let root = sqrt(&BigDecimal::from(2), &SquareRootContext::default()).unwrap();
/// let square = &root * &root;
/// assert!((square - BigDecimal::from(2)).abs() < "1e-10".parse::<BigDecimal>().unwrap());
/// ```
pub fn sqrt(value: &BigDecimal, ctx: &SquareRootContext) -> KernelResult<BigDecimal> {
    sqrt_with_sink(value, ctx, &NoOpTraceSink)
}

/// [`sqrt`] with per-iteration records delivered to `sink`.
pub fn sqrt_with_sink(
    value: &BigDecimal,
    ctx: &SquareRootContext,
    sink: &dyn TraceSink,
) -> KernelResult<BigDecimal> {
    if value.sign() == Sign::Minus {
        return Err(KernelError::NegativeRadicand(value.clone()));
    }
    // exact, and keeps the iteration's divisor away from zero
    if value.is_zero() {
        return Ok(BigDecimal::zero());
    }

    let mc = ctx.math();
    let two = BigDecimal::from(2);
    let mut predecessor = seed(value, ctx);

    for iteration in 1..=ctx.max_iterations() {
        let numerator = mc.round(&(&predecessor * &predecessor)) + value;
        let denominator = &two * &predecessor;
        let successor = mc.div(&numerator, &denominator)?;
        let delta = (&successor - &predecessor).abs();

        tracing::trace!(
            iteration,
            predecessor = %predecessor,
            successor = %successor,
            delta = %delta,
            "heron iteration"
        );
        sink.on_iteration(&IterationTrace {
            iteration,
            predecessor: predecessor.clone(),
            successor: successor.clone(),
            delta: delta.clone(),
        });

        predecessor = successor;
        if delta <= *ctx.abort_criterion() {
            break;
        }
    }

    Ok(predecessor)
}

/// Exact square root of a perfect square.
///
/// Verifies perfect-squareness by summing consecutive odd integers
/// (`1 + 3 + 5 + … + (2k−1) = k²`) until reaching or passing `value`; an
/// O(√n) check by design.
///
/// # Errors
/// - `NegativeRadicand` if `value < 0`
/// - `NotAPerfectSquare` if no integer root exists
pub fn sqrt_of_perfect_square(value: &BigInt) -> KernelResult<BigInt> {
    if value.sign() == Sign::Minus {
        return Err(KernelError::NegativeRadicand(BigDecimal::from(value.clone())));
    }

    let mut sum = BigInt::zero();
    let mut odd = BigInt::one();
    let mut root = BigInt::zero();
    while &sum < value {
        sum += &odd;
        odd += 2u32;
        root += 1u32;
    }

    if &sum == value {
        Ok(root)
    } else {
        Err(KernelError::NotAPerfectSquare(value.clone()))
    }
}

/// Seed within the order of magnitude of the true root.
///
/// Decomposes `value = C · 10^(2k)` with `1 ≤ C < 100` (scientific notation
/// forced to an even exponent) and seeds `2·10^k` for `C < 10` and `6·10^k`
/// otherwise, since `√C` then lies in `[1, 3.17)` resp. `[3.16, 10)`.
fn seed(value: &BigDecimal, ctx: &SquareRootContext) -> BigDecimal {
    let (_, scale) = value.as_bigint_and_exponent();
    // value = c · 10^m with 1 <= c < 10
    let m = value.digits() as i64 - scale - 1;

    let (coefficient, k) = if m.rem_euclid(2) == 0 {
        (2, m / 2)
    } else {
        (6, (m - 1).div_euclid(2))
    };

    let seed = BigDecimal::new(BigInt::from(coefficient), -k);
    seed.with_scale((ctx.initial_scale() as i64).max(-k))
}
