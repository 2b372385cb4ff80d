//! # wf-sim: Spin generation and batch simulation for WheelForge
//!
//! Generates uniformly distributed European roulette outcomes from the OS
//! CSPRNG and drives them in batches of any size with bounded progress
//! reporting.
//!
//! ## Architecture
//!
//! ```text
//! EntropySource (OsEntropy | SeededEntropy)
//!     │
//!     v
//! SpinGenerator ──> SimulationRunner ──> SpinSequence
//!                        │
//!                        ├── foreground: run_with_progress()
//!                        └── SimulationWorker (one thread, message passing)
//!                                 │
//!                                 v
//!                        SimulationController (start / poll / wait / stop)
//! ```

pub mod config;
pub mod controller;
pub mod entropy;
pub mod generator;
pub mod runner;
pub mod sequence;
pub mod worker;

pub use config::*;
pub use controller::*;
pub use entropy::*;
pub use generator::*;
pub use runner::*;
pub use sequence::*;
pub use worker::*;
