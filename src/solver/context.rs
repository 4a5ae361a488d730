// ============================================================================
// Square-Root Context
// Immutable configuration for the iterative square-root solver
// ============================================================================

use crate::numeric::{KernelError, KernelResult, MathContext};
use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::One;

/// Configuration for [`sqrt`](crate::solver::sqrt).
///
/// - `abort_criterion`: convergence threshold, strictly between 0 and 1;
///   iteration stops once two successive approximations differ by at most
///   this amount.
/// - `max_iterations`: hard iteration budget. Exhausting it returns the
///   best-so-far approximation without signalling non-convergence; callers
///   tune the budget to the tolerance they need.
/// - `initial_scale`: minimum number of decimal places kept on the seed.
/// - `math`: precision/rounding context for the per-iteration division.
///
/// Defaults: `1e-10`, `10`, `10`, 128 significant digits half-up.
#[derive(Debug, Clone)]
pub struct SquareRootContext {
    abort_criterion: BigDecimal,
    max_iterations: u32,
    initial_scale: u32,
    math: MathContext,
}

impl SquareRootContext {
    /// Create a context, validating every bound.
    ///
    /// # Errors
    /// - `AbortCriterionOutOfRange` unless `0 < abort_criterion < 1`
    /// - `ZeroIterationBudget` if `max_iterations` is zero
    pub fn new(
        abort_criterion: BigDecimal,
        max_iterations: u32,
        initial_scale: u32,
        math: MathContext,
    ) -> KernelResult<Self> {
        Self::validate_abort_criterion(&abort_criterion)?;
        if max_iterations == 0 {
            return Err(KernelError::ZeroIterationBudget);
        }
        Ok(Self {
            abort_criterion,
            max_iterations,
            initial_scale,
            math,
        })
    }

    /// Context that converges to the full precision of `math`: the abort
    /// criterion is one unit in the last significant digit and the budget
    /// is wide enough for Newton's quadratic convergence from the seed.
    pub fn converging(math: MathContext) -> Self {
        Self {
            abort_criterion: BigDecimal::new(BigInt::one(), math.precision() as i64),
            max_iterations: 64,
            initial_scale: 10,
            math,
        }
    }

    /// Replace the abort criterion, revalidating it.
    pub fn with_abort_criterion(mut self, abort_criterion: BigDecimal) -> KernelResult<Self> {
        Self::validate_abort_criterion(&abort_criterion)?;
        self.abort_criterion = abort_criterion;
        Ok(self)
    }

    /// Replace the iteration budget, revalidating it.
    pub fn with_max_iterations(mut self, max_iterations: u32) -> KernelResult<Self> {
        if max_iterations == 0 {
            return Err(KernelError::ZeroIterationBudget);
        }
        self.max_iterations = max_iterations;
        Ok(self)
    }

    /// Replace the minimum seed scale.
    pub fn with_initial_scale(mut self, initial_scale: u32) -> Self {
        self.initial_scale = initial_scale;
        self
    }

    /// Replace the evaluation context.
    pub fn with_math_context(mut self, math: MathContext) -> Self {
        self.math = math;
        self
    }

    #[inline]
    pub fn abort_criterion(&self) -> &BigDecimal {
        &self.abort_criterion
    }

    #[inline]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[inline]
    pub fn initial_scale(&self) -> u32 {
        self.initial_scale
    }

    #[inline]
    pub fn math(&self) -> &MathContext {
        &self.math
    }

    fn validate_abort_criterion(abort_criterion: &BigDecimal) -> KernelResult<()> {
        let zero = BigDecimal::from(0);
        let one = BigDecimal::from(1);
        if *abort_criterion <= zero || *abort_criterion >= one {
            return Err(KernelError::AbortCriterionOutOfRange(
                abort_criterion.clone(),
            ));
        }
        Ok(())
    }
}

impl Default for SquareRootContext {
    /// `1e-10`, 10 iterations, seed scale 10, 128 digits half-up.
    fn default() -> Self {
        Self {
            abort_criterion: BigDecimal::new(BigInt::one(), 10),
            max_iterations: 10,
            initial_scale: 10,
            math: MathContext::DEFAULT
                .with_extra_digits(28)
                .with_rounding_mode(RoundingMode::HalfUp),
        }
    }
}
