//! Batch simulation runner

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use log::debug;

use wf_core::{WfError, WfResult};

use crate::config::progress_interval;
use crate::entropy::{EntropySource, OsEntropy};
use crate::generator::SpinGenerator;
use crate::sequence::{SimulationResult, SpinSequence};

/// Default progress callbacks per run
pub const DEFAULT_PROGRESS_STEPS: usize = 100;

/// Spins between cancel-flag checks, independent of progress cadence
pub const CANCEL_CHECK_STRIDE: usize = 1024;

/// Drives a [`SpinGenerator`] for a fixed number of spins.
///
/// Progress fires every `max(1, size / progress_steps)` spins, starting with
/// the first, and always on the final spin. The callback count stays around
/// `progress_steps` no matter how large the run is.
pub struct SimulationRunner<E: EntropySource = OsEntropy> {
    generator: SpinGenerator<E>,
    progress_steps: usize,
    cancel: Option<Arc<AtomicBool>>,
}

impl SimulationRunner<OsEntropy> {
    pub fn new() -> Self {
        Self::with_generator(SpinGenerator::new())
    }
}

impl Default for SimulationRunner<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntropySource> SimulationRunner<E> {
    pub fn with_generator(generator: SpinGenerator<E>) -> Self {
        Self {
            generator,
            progress_steps: DEFAULT_PROGRESS_STEPS,
            cancel: None,
        }
    }

    /// Builder: set progress cadence
    pub fn with_progress_steps(mut self, steps: usize) -> Self {
        self.progress_steps = steps.max(1);
        self
    }

    /// Builder: stop with `Cancelled` once `flag` is set.
    ///
    /// Checked every [`CANCEL_CHECK_STRIDE`] spins.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn cancel_requested(&self) -> bool {
        self.cancel.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Generate `size` spins without progress reporting
    pub fn run(&mut self, size: usize) -> WfResult<SpinSequence> {
        self.run_with_progress(size, |_, _| {})
    }

    /// Generate `size` spins, reporting `(current, total)` at a bounded cadence
    pub fn run_with_progress<F>(&mut self, size: usize, mut on_progress: F) -> WfResult<SpinSequence>
    where
        F: FnMut(usize, usize),
    {
        self.run_until(size, |current, total| {
            on_progress(current, total);
            ControlFlow::Continue(())
        })
    }

    /// Like [`run_with_progress`](Self::run_with_progress), wrapped in a timestamped result
    pub fn simulate<F>(&mut self, size: usize, on_progress: F) -> WfResult<SimulationResult>
    where
        F: FnMut(usize, usize),
    {
        self.run_with_progress(size, on_progress)
            .map(SimulationResult::new)
    }

    /// Core loop. The progress hook may stop the run at any progress point,
    /// in which case the partial sequence is dropped and `Cancelled` returned.
    pub(crate) fn run_until<F>(&mut self, size: usize, mut on_progress: F) -> WfResult<SpinSequence>
    where
        F: FnMut(usize, usize) -> ControlFlow<()>,
    {
        if size == 0 {
            return Err(WfError::InvalidSimulationSize(size));
        }

        let interval = progress_interval(size, self.progress_steps);
        debug!("Simulating {} spins (progress every {})", size, interval);
        let start = Instant::now();

        let mut spins = SpinSequence::with_capacity(size);
        for i in 0..size {
            if i % CANCEL_CHECK_STRIDE == 0 && self.cancel_requested() {
                debug!("Simulation cancelled at {}/{}", i, size);
                return Err(WfError::Cancelled);
            }
            spins.push(self.generator.spin()?);

            if (i % interval == 0 || i == size - 1) && on_progress(i + 1, size).is_break() {
                debug!("Simulation stopped at {}/{}", i + 1, size);
                return Err(WfError::Cancelled);
            }
        }

        debug!("Simulated {} spins in {:?}", size, start.elapsed());
        Ok(spins)
    }
}

/// Run a simulation on the calling thread with the OS entropy source
pub fn run_simulation(size: usize, on_progress: Option<&mut dyn FnMut(usize, usize)>) -> WfResult<SpinSequence> {
    let mut runner = SimulationRunner::new();
    match on_progress {
        Some(callback) => runner.run_with_progress(size, callback),
        None => runner.run(size),
    }
}
