//! Camera sensor calibration module
//!
//! This module provides the per-sensor numeric and timing models the control
//! pipeline needs: gain/code codecs, register effect delays, the mode-switch
//! mistrust window, and embedded-metadata device status decoding, all behind
//! one `SensorHelper` interface resolved through a name-keyed registry.

pub mod common;
pub mod gain;
pub mod helper;
pub mod registry;
pub mod sensors;
pub mod status;


pub use common::{
    CalibrationError,
    Result,
};

pub use gain::{
    GainCalibration,
    GainModel,
};

pub use status::{
    DeviceStatus,
    RegisterMap,
    StatusRegisters,
};

pub use helper::{
    CamHelper,
    RegisterDelays,
    SensorConfig,
    SensorHelper,
};

pub use registry::{
    HelperRegistry,
    lookup,
};
