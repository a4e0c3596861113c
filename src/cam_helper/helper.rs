//! Sensor helper module
//!
//! This module defines the `SensorHelper` interface the control pipeline
//! consumes and the generic implementation driven by per-sensor calibration
//! data.

mod facade;
pub mod types;

pub use facade::{CamHelper, SensorHelper, exposure, exposure_lines};
pub use types::{RegisterDelays, SensorConfig};
