//! Common utilities module
//!
//! This module contains shared definitions used across the calibration
//! helpers.

pub mod error;

pub use error::{CalibrationError, Result};
