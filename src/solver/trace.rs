// ============================================================================
// Iteration Trace Sink
// Fire-and-forget per-iteration diagnostics for the square-root solver
// ============================================================================

use bigdecimal::BigDecimal;

/// One Heron iteration, as reported to a [`TraceSink`].
#[derive(Debug, Clone)]
pub struct IterationTrace {
    /// 1-based iteration counter
    pub iteration: u32,
    /// Approximation entering the iteration
    pub predecessor: BigDecimal,
    /// Approximation produced by the iteration
    pub successor: BigDecimal,
    /// `|successor - predecessor|`, compared against the abort criterion
    pub delta: BigDecimal,
}

/// Sink for per-iteration trace records.
/// Implementations can feed dashboards, convergence plots, test probes etc.
/// Never required for correctness; the solver ignores whatever the sink does.
pub trait TraceSink: Send + Sync {
    /// Observe one iteration
    fn on_iteration(&self, trace: &IterationTrace);
}

/// No-op sink, used by the plain [`sqrt`](crate::solver::sqrt) entry point
pub struct NoOpTraceSink;

impl TraceSink for NoOpTraceSink {
    fn on_iteration(&self, _trace: &IterationTrace) {
        // Do nothing
    }
}

/// Sink that forwards every record to `tracing`
pub struct LoggingTraceSink;

impl TraceSink for LoggingTraceSink {
    fn on_iteration(&self, trace: &IterationTrace) {
        tracing::debug!("square-root iteration: {:?}", trace);
    }
}
