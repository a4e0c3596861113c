//! Embedded metadata status module
//!
//! This module defines the register snapshot a sensor appends to each frame
//! and the decoded per-frame device status derived from it.

pub mod types;

pub use types::{DeviceStatus, RegisterMap, StatusRegisters};
