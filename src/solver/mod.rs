// ============================================================================
// Solver Module
// Iterative square-root approximation (Heron's method)
// ============================================================================
//
// This module provides:
// - sqrt / sqrt_with_sink: seeded Newton iteration at configurable
//   precision, with an iteration budget that silently returns the
//   best-so-far approximation when exhausted
// - sqrt_of_perfect_square: exact integer roots, verified by odd-number
//   summation
// - SquareRootContext: validated, immutable solver configuration
// - TraceSink: fire-and-forget per-iteration diagnostics
//
// The solver is a leaf: it depends on nothing else in the kernel, while the
// complex types delegate their modulus computation here.

mod context;
mod heron;
mod trace;

pub use context::SquareRootContext;
pub use heron::{sqrt, sqrt_of_perfect_square, sqrt_with_sink};
pub use trace::{IterationTrace, LoggingTraceSink, NoOpTraceSink, TraceSink};
