//! Per-run performance metrics for the simulation engine.
//!
//! [`RunMetrics`] captures timing and health data for a single
//! [`simulate_with_metrics`](crate::model::Model::simulate_with_metrics)
//! call, enabling telemetry and profiling of inference loops.

/// Timing and health metrics collected during a single simulation run.
///
/// All durations are in microseconds. Assembly and propagation do not
/// sum to the total; the remainder is parameter splitting and output
/// bookkeeping.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunMetrics {
    /// Wall-clock time for the entire run, in microseconds.
    pub total_us: u64,
    /// Time spent assembling the system matrix, in microseconds.
    pub assemble_us: u64,
    /// Time spent evaluating the trajectory, in microseconds.
    pub propagate_us: u64,
    /// Number of time points evaluated.
    pub time_points: usize,
    /// Number of non-finite entries in the output trajectory. Non-zero
    /// means the parameter split drove the system outside the range the
    /// exponential can represent.
    pub nonfinite_entries: usize,
}
