//! Simulation lifecycle for interactive front ends
//!
//! Picks foreground or worker execution by run size, tracks the latest
//! progress snapshot and holds the finished result.

use crossbeam_channel::TryRecvError;
use log::{error, info};

use wf_core::{WfError, WfResult};

use crate::config::SimulationConfig;
use crate::runner::SimulationRunner;
use crate::sequence::{SimulationProgress, SimulationResult};
use crate::worker::{SimulationWorker, WorkerMessage};

pub struct SimulationController {
    config: SimulationConfig,
    worker: Option<SimulationWorker>,
    progress: SimulationProgress,
    result: Option<SimulationResult>,
    running: bool,
}

impl SimulationController {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            worker: None,
            progress: SimulationProgress::default(),
            result: None,
            running: false,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Latest progress snapshot
    pub fn progress(&self) -> SimulationProgress {
        self.progress
    }

    /// Finished run, if any
    pub fn result(&self) -> Option<&SimulationResult> {
        self.result.as_ref()
    }

    pub fn take_result(&mut self) -> Option<SimulationResult> {
        self.result.take()
    }

    /// Whether the current run executes on a worker thread
    pub fn in_background(&self) -> bool {
        self.worker.is_some()
    }

    /// Start a run of `size` spins.
    ///
    /// Below the background threshold the run completes before this returns.
    /// At or above it, the run moves to a worker and completes through
    /// [`poll`](Self::poll) or [`wait`](Self::wait). Any run already in
    /// flight is cancelled first.
    pub fn start(&mut self, size: usize) -> WfResult<()> {
        if size == 0 {
            return Err(WfError::InvalidSimulationSize(size));
        }
        if self.running {
            self.stop();
        }

        self.result = None;
        self.progress = SimulationProgress::new(0, size);
        self.running = true;

        if self.config.runs_in_background(size) {
            info!("Starting background simulation of {} spins", size);
            match SimulationWorker::spawn(size, self.config.progress_steps) {
                Ok(worker) => {
                    self.worker = Some(worker);
                    Ok(())
                }
                Err(e) => Err(self.abandon(e)),
            }
        } else {
            info!("Running simulation of {} spins", size);
            let progress = &mut self.progress;
            let outcome = SimulationRunner::new()
                .with_progress_steps(self.config.progress_steps)
                .simulate(size, |current, total| {
                    *progress = SimulationProgress::new(current, total);
                });
            match outcome {
                Ok(result) => {
                    self.finish(result);
                    Ok(())
                }
                Err(e) => Err(self.abandon(e)),
            }
        }
    }

    /// Drain pending worker messages without blocking.
    ///
    /// Returns `Ok(true)` once a result is available.
    pub fn poll(&mut self) -> WfResult<bool> {
        loop {
            let message = match &self.worker {
                Some(worker) => worker.events().try_recv(),
                None => return Ok(self.result.is_some()),
            };

            match message {
                Ok(WorkerMessage::Progress(progress)) => self.progress = progress,
                Ok(WorkerMessage::Complete(result)) => {
                    self.worker = None;
                    self.finish(result);
                    return Ok(true);
                }
                Ok(WorkerMessage::Failed(e)) => return Err(self.abandon(e)),
                Err(TryRecvError::Empty) => return Ok(false),
                Err(TryRecvError::Disconnected) => {
                    let e = match self.worker.as_mut() {
                        Some(worker) => worker.disconnected(),
                        None => WfError::NotStarted,
                    };
                    return Err(self.abandon(e));
                }
            }
        }
    }

    /// Block until the current run finishes
    pub fn wait(&mut self) -> WfResult<&SimulationResult> {
        if let Some(worker) = self.worker.take() {
            let progress = &mut self.progress;
            match worker.wait(|p| *progress = p) {
                Ok(result) => self.finish(result),
                Err(e) => return Err(self.abandon(e)),
            }
        }
        self.result.as_ref().ok_or(WfError::NotStarted)
    }

    /// Cancel any run in flight and return to idle.
    ///
    /// Partial output is discarded.
    pub fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.cancel();
        }
        self.running = false;
    }

    fn finish(&mut self, result: SimulationResult) {
        info!("Simulation complete: {} spins", result.total_spins);
        self.progress = SimulationProgress::completed(result.total_spins);
        self.result = Some(result);
        self.running = false;
    }

    fn abandon(&mut self, e: WfError) -> WfError {
        if !matches!(e, WfError::Cancelled) {
            error!("Simulation failed: {}", e);
        }
        if let Some(worker) = self.worker.take() {
            worker.cancel();
        }
        self.running = false;
        e
    }
}

impl Default for SimulationController {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
