//! Analogue gain codec module
//!
//! This module converts between physical analogue gain multipliers and the
//! raw register codes a sensor's analogue front end accepts.

mod model;

pub use model::{GainCalibration, GainModel};
