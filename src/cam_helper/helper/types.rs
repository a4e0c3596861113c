//! Per-sensor calibration data types

use crate::cam_helper::gain::GainCalibration;
use crate::cam_helper::status::StatusRegisters;

/// How many frame periods pass between writing a control register and its
/// value taking effect on the sensor's output.
///
/// The three delays are characterized together and the pipeline's pacing
/// logic consumes them together. Fixed per sensor, not derivable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterDelays {
    /// Frames until a new exposure (integration time) is visible.
    pub exposure: u32,
    /// Frames until a new analogue gain is visible.
    pub gain: u32,
    /// Frames until a new frame length (vblank) is visible.
    pub frame_length: u32,
}

/// Everything that distinguishes one sensor model's helper from another's.
///
/// A sensor variant is this record plus nothing else: the gain formula and
/// its constants, the register pipelining delays, the mode-switch mistrust
/// window, and the embedded-data register set if the sensor produces
/// embedded data at all. `embedded_data` doubles as the capability flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorConfig {
    pub name: &'static str,
    pub gain: GainCalibration,
    pub delays: RegisterDelays,
    /// Frames after a mode switch whose metadata must not be trusted.
    pub mistrust_frames_mode_switch: u32,
    /// Smallest allowed difference between frame length and integration
    /// time, in lines.
    pub frame_integration_diff: u32,
    pub embedded_data: Option<StatusRegisters>,
}
