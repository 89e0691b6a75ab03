//! Multi-point trajectory evaluation.
//!
//! Each time point is an independent `exp(A·t)·x0` evaluation, so the
//! work fans out naturally: workers drain an index/time channel and send
//! finished columns back over a reply channel.

use std::thread;

use nalgebra::{DMatrix, DVector};

use crate::error::PropagateError;
use crate::expm::{check_dimensions, state_unchecked};

/// How a trajectory's time points are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Every time point evaluated in turn on the calling thread.
    Sequential,
    /// Time points fanned out over a pool of `workers` threads.
    ///
    /// `workers` is clamped to `1..=times.len()`; requesting more
    /// workers than time points just idles the extras, so they are not
    /// spawned.
    Parallel {
        /// Number of worker threads to spawn.
        workers: usize,
    },
}

impl Default for Evaluation {
    fn default() -> Self {
        Evaluation::Sequential
    }
}

/// Evaluates `x(t) = exp(A·t)·x0` at every requested time point.
///
/// Returns an `n × times.len()` matrix whose column `i` is the state at
/// `times[i]`. Every column is computed directly from `x0`, never by
/// stepping from a neighbouring column, so the result is identical under
/// either [`Evaluation`] strategy and any worker count.
///
/// # Errors
///
/// - [`PropagateError::NotSquare`] when `a` is not square.
/// - [`PropagateError::StateLength`] when `x0` does not match `a`'s
///   dimension.
pub fn evaluate(
    a: &DMatrix<f64>,
    x0: &DVector<f64>,
    times: &[f64],
    strategy: Evaluation,
) -> Result<DMatrix<f64>, PropagateError> {
    check_dimensions(a, x0)?;
    match strategy {
        Evaluation::Sequential => Ok(evaluate_sequential(a, x0, times)),
        Evaluation::Parallel { workers } => Ok(evaluate_parallel(a, x0, times, workers)),
    }
}

fn evaluate_sequential(a: &DMatrix<f64>, x0: &DVector<f64>, times: &[f64]) -> DMatrix<f64> {
    let mut out = DMatrix::zeros(x0.len(), times.len());
    for (index, &t) in times.iter().enumerate() {
        out.set_column(index, &state_unchecked(a, x0, t));
    }
    out
}

fn evaluate_parallel(
    a: &DMatrix<f64>,
    x0: &DVector<f64>,
    times: &[f64],
    workers: usize,
) -> DMatrix<f64> {
    let workers = workers.clamp(1, times.len().max(1));
    let (task_tx, task_rx) = crossbeam_channel::unbounded();
    let (reply_tx, reply_rx) = crossbeam_channel::unbounded();

    for (index, &t) in times.iter().enumerate() {
        let _ = task_tx.send((index, t));
    }
    drop(task_tx);

    let mut out = DMatrix::zeros(x0.len(), times.len());
    thread::scope(|scope| {
        for _ in 0..workers {
            let task_rx = task_rx.clone();
            let reply_tx = reply_tx.clone();
            scope.spawn(move || {
                while let Ok((index, t)) = task_rx.recv() {
                    let _ = reply_tx.send((index, state_unchecked(a, x0, t)));
                }
                // Channel drained, worker exits cleanly.
            });
        }
        drop(reply_tx);

        for (index, state) in reply_rx.iter() {
            out.set_column(index, &state);
        }
    });
    out
}
