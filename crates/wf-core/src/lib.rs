//! wf-core: Number domain and shared types for WheelForge
//!
//! Static European wheel reference data (physical order, colors, dozens,
//! columns, racetrack sectors, neighbor table) plus the error type used by
//! every other WheelForge crate. Pure data, no behavior beyond lookups.

mod error;
mod number;
pub mod wheel;

pub use error::*;
pub use number::*;
pub use wheel::{Sector, WHEEL_ORDER, neighbors_of};
