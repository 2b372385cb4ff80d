//! Background simulation worker
//!
//! One dedicated thread per run. The worker owns its generator and the
//! in-progress sequence; the only things crossing the thread boundary are the
//! one-shot start parameters, a cancel flag and one-way [`WorkerMessage`]s.

use std::any::Any;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, RecvError, unbounded};
use log::{debug, error, warn};

use wf_core::{WfError, WfResult};

use crate::entropy::{EntropySource, OsEntropy};
use crate::generator::SpinGenerator;
use crate::runner::SimulationRunner;
use crate::sequence::{SimulationProgress, SimulationResult};

/// Messages sent from the worker thread to its owner
#[derive(Debug)]
pub enum WorkerMessage {
    /// Periodic progress at the runner's cadence
    Progress(SimulationProgress),
    /// Run finished; always the last message of a successful run
    Complete(SimulationResult),
    /// Run aborted with an error (entropy failure, invalid input)
    Failed(WfError),
}

/// Handle to a simulation running on its own thread.
///
/// Dropping the handle cancels the run.
pub struct SimulationWorker {
    handle: Option<JoinHandle<()>>,
    events: Receiver<WorkerMessage>,
    cancelled: Arc<AtomicBool>,
    total: usize,
}

impl SimulationWorker {
    /// Start a run backed by the OS entropy source
    pub fn spawn(size: usize, progress_steps: usize) -> WfResult<Self> {
        Self::spawn_with(size, progress_steps, OsEntropy::new())
    }

    /// Start a run with an explicit entropy source
    pub fn spawn_with<E>(size: usize, progress_steps: usize, entropy: E) -> WfResult<Self>
    where
        E: EntropySource + 'static,
    {
        if size == 0 {
            return Err(WfError::InvalidSimulationSize(size));
        }

        let (tx, rx) = unbounded();
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        let handle = thread::Builder::new()
            .name("wf-sim-worker".into())
            .spawn(move || {
                let mut runner = SimulationRunner::with_generator(SpinGenerator::with_entropy(entropy))
                    .with_progress_steps(progress_steps)
                    .with_cancel_flag(Arc::clone(&flag));

                let outcome = runner.run_until(size, |current, total| {
                    if flag.load(Ordering::Relaxed) {
                        return ControlFlow::Break(());
                    }
                    // Owner hung up: nobody will read the result
                    if tx
                        .send(WorkerMessage::Progress(SimulationProgress::new(current, total)))
                        .is_err()
                    {
                        return ControlFlow::Break(());
                    }
                    ControlFlow::Continue(())
                });

                match outcome {
                    Ok(spins) => {
                        let _ = tx.send(WorkerMessage::Complete(SimulationResult::new(spins)));
                    }
                    Err(WfError::Cancelled) => debug!("Worker run of {} spins cancelled", size),
                    Err(e) => {
                        error!("Worker run of {} spins failed: {}", size, e);
                        let _ = tx.send(WorkerMessage::Failed(e));
                    }
                }
            })
            .map_err(|e| WfError::WorkerFailed(format!("failed to spawn worker: {e}")))?;

        debug!("Spawned simulation worker for {} spins", size);

        Ok(Self {
            handle: Some(handle),
            events: rx,
            cancelled,
            total: size,
        })
    }

    /// Message stream from the worker
    pub fn events(&self) -> &Receiver<WorkerMessage> {
        &self.events
    }

    /// Requested run size
    pub fn total(&self) -> usize {
        self.total
    }

    /// Ask the worker to stop within [`CANCEL_CHECK_STRIDE`](crate::runner::CANCEL_CHECK_STRIDE) spins.
    ///
    /// A cancelled run never delivers `Complete`.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::Relaxed) {
            warn!("Cancelling simulation worker ({} spins)", self.total);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Block until the run completes, forwarding progress.
    pub fn wait<F>(mut self, mut on_progress: F) -> WfResult<SimulationResult>
    where
        F: FnMut(SimulationProgress),
    {
        loop {
            match self.events.recv() {
                Ok(WorkerMessage::Progress(progress)) => on_progress(progress),
                Ok(WorkerMessage::Complete(result)) => {
                    self.join()?;
                    return Ok(result);
                }
                Ok(WorkerMessage::Failed(e)) => {
                    self.join()?;
                    return Err(e);
                }
                Err(RecvError) => return Err(self.disconnected()),
            }
        }
    }

    /// Error to report once the channel closed without a final message
    pub(crate) fn disconnected(&mut self) -> WfError {
        match self.join() {
            Err(e) => e,
            Ok(()) if self.is_cancelled() => WfError::Cancelled,
            Ok(()) => WfError::WorkerFailed("worker exited without delivering a result".into()),
        }
    }

    fn join(&mut self) -> WfResult<()> {
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .map_err(|payload| WfError::WorkerFailed(panic_message(payload.as_ref()))),
            None => Ok(()),
        }
    }
}

impl Drop for SimulationWorker {
    fn drop(&mut self) {
        // Detach; the thread exits within one cancel-check stride
        if self.handle.is_some() {
            self.cancelled.store(true, Ordering::Relaxed);
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("worker panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("worker panicked: {s}")
    } else {
        "worker panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::SeededEntropy;
    use std::sync::atomic::AtomicUsize;

    struct BrokenEntropy;

    impl EntropySource for BrokenEntropy {
        fn next_u32(&mut self) -> WfResult<u32> {
            Err(WfError::EntropyUnavailable("no device".into()))
        }
    }

    struct PanickingEntropy;

    impl EntropySource for PanickingEntropy {
        fn next_u32(&mut self) -> WfResult<u32> {
            panic!("entropy exploded")
        }
    }

    #[test]
    fn test_worker_completes() {
        let worker = SimulationWorker::spawn(200_000, 100).unwrap();
        let mut updates = Vec::new();
        let result = worker.wait(|p| updates.push(p)).unwrap();

        assert_eq!(result.total_spins, 200_000);
        assert_eq!(result.spins.len(), 200_000);
        assert_eq!(updates.len(), 101);
        assert_eq!(updates.last().map(|p| p.current), Some(200_000));
        assert!(updates.windows(2).all(|w| w[0].current < w[1].current));
    }

    #[test]
    fn test_worker_matches_foreground_run() {
        let worker = SimulationWorker::spawn_with(5_000, 100, SeededEntropy::new(11)).unwrap();
        let background = worker.wait(|_| {}).unwrap();
        let foreground = SimulationRunner::with_generator(SpinGenerator::seeded(11))
            .run(5_000)
            .unwrap();
        assert_eq!(background.spins, foreground);
    }

    #[test]
    fn test_worker_rejects_zero_size() {
        assert!(matches!(
            SimulationWorker::spawn(0, 100),
            Err(WfError::InvalidSimulationSize(0))
        ));
    }

    #[test]
    fn test_cancel_never_completes() {
        let worker = SimulationWorker::spawn(20_000_000, 100).unwrap();
        // Wait for the first progress message so the run is definitely underway
        match worker.events().recv().unwrap() {
            WorkerMessage::Progress(p) => assert_eq!(p.current, 1),
            other => panic!("unexpected first message: {other:?}"),
        }
        worker.cancel();
        assert!(worker.is_cancelled());
        assert!(matches!(worker.wait(|_| {}), Err(WfError::Cancelled)));
    }

    struct CountingEntropy {
        inner: SeededEntropy,
        draws: Arc<AtomicUsize>,
    }

    impl EntropySource for CountingEntropy {
        fn next_u32(&mut self) -> WfResult<u32> {
            self.draws.fetch_add(1, Ordering::Relaxed);
            self.inner.next_u32()
        }
    }

    #[test]
    fn test_cancel_with_single_progress_step_stops_early() {
        let size = 5_000_000;
        let draws = Arc::new(AtomicUsize::new(0));
        let entropy = CountingEntropy {
            inner: SeededEntropy::new(9),
            draws: Arc::clone(&draws),
        };
        let worker = SimulationWorker::spawn_with(size, 1, entropy).unwrap();
        worker.cancel();

        assert!(matches!(worker.wait(|_| {}), Err(WfError::Cancelled)));
        assert!(draws.load(Ordering::Relaxed) < size);
    }

    #[test]
    fn test_entropy_failure_reported() {
        let worker = SimulationWorker::spawn_with(1_000, 100, BrokenEntropy).unwrap();
        assert!(matches!(
            worker.wait(|_| {}),
            Err(WfError::EntropyUnavailable(_))
        ));
    }

    #[test]
    fn test_worker_panic_reported() {
        let worker = SimulationWorker::spawn_with(1_000, 100, PanickingEntropy).unwrap();
        match worker.wait(|_| {}) {
            Err(WfError::WorkerFailed(msg)) => assert!(msg.contains("entropy exploded")),
            other => panic!("expected worker failure, got {other:?}"),
        }
    }
}
