//! Per-sensor calibration helpers for a camera ISP control pipeline.
//!
//! Each supported image sensor gets a helper exposing its gain code
//! conversions, register-write pipelining delays, and decoding of the
//! embedded-metadata register stream into per-frame device status.

pub mod cam_helper;
pub mod logger;

pub use cam_helper::{
    CalibrationError,
    CamHelper,
    DeviceStatus,
    GainCalibration,
    GainModel,
    HelperRegistry,
    RegisterDelays,
    RegisterMap,
    Result,
    SensorConfig,
    SensorHelper,
    StatusRegisters,
};
