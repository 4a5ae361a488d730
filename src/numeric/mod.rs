// ============================================================================
// Numeric Module
// Error taxonomy and precision/rounding configuration for the kernel
// ============================================================================
//
// This module provides:
// - KernelError / ErrorKind / KernelResult: the failure taxonomy shared by
//   every kernel operation
// - MathContext: significant-digit precision + rounding mode, with rounding
//   and precision-correct division
//
// Design principles:
// - Exact arithmetic never consults a context; only division and final
//   rounding do
// - All fallible operations return Result (no panics)
// - Failures are pure functions of the inputs

mod context;
mod errors;

pub use context::MathContext;
pub use errors::{ErrorKind, KernelError, KernelResult};
