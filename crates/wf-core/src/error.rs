//! Error types for WheelForge

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum WfError {
    #[error("Invalid wheel number: {0} (expected 0-36)")]
    InvalidNumber(u8),

    #[error("Invalid simulation size: {0} (must be at least 1)")]
    InvalidSimulationSize(usize),

    #[error("Statistics require at least one spin")]
    EmptySequence,

    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Simulation worker failed: {0}")]
    WorkerFailed(String),

    #[error("Simulation cancelled")]
    Cancelled,

    #[error("No simulation has been started")]
    NotStarted,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias
pub type WfResult<T> = Result<T, WfError>;
