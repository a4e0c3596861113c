//! The sensor helper interface and its data-driven implementation.
//!
//! The pipeline only ever talks to `SensorHelper`; which sensor sits behind
//! it is decided once, by name, through the registry. Adding a sensor means
//! adding a `SensorConfig`, not touching pipeline code.

use std::time::Duration;

use tracing::debug;

use crate::cam_helper::common::error::{CalibrationError, Result};
use crate::cam_helper::helper::types::{RegisterDelays, SensorConfig};
use crate::cam_helper::status::types::{DeviceStatus, RegisterMap, StatusRegisters};

/// Per-sensor calibration surface consumed by the control pipeline.
///
/// All operations are pure computations over sensor-fixed constants; calls
/// are independent and reentrant.
pub trait SensorHelper {
    /// The sensor model this helper was built for.
    fn name(&self) -> &str;

    /// Converts an analogue gain multiplier to the sensor's register code.
    /// Out-of-range gains clamp; this never fails.
    fn gain_code(&self, gain: f64) -> u32;

    /// Converts a gain register code back to an analogue gain multiplier.
    fn gain(&self, code: u32) -> f64;

    /// Register-write pipelining delays, in frame periods.
    fn delays(&self) -> RegisterDelays;

    /// Number of frames after a mode switch whose metadata the consumer
    /// must discard. Enforcement is the consumer's responsibility.
    fn mistrust_frames_mode_switch(&self) -> u32;

    /// Whether this sensor appends an embedded-data register stream to its
    /// frames. Must be checked before requesting a `RegisterMap` at all.
    fn embedded_data_present(&self) -> bool;

    /// The register addresses the embedded-data parser should extract, when
    /// embedded data is present.
    fn embedded_registers(&self) -> Option<&StatusRegisters>;

    /// Smallest allowed difference between frame length and integration
    /// time, in lines.
    fn frame_integration_diff(&self) -> u32;

    /// Longest integration time, in lines, the sensor accepts at the given
    /// frame length.
    fn max_exposure_lines(&self, frame_length: u32) -> u32 {
        frame_length.saturating_sub(self.frame_integration_diff())
    }

    /// Decodes one frame's register snapshot into device status, using the
    /// current mode's line time to express exposure as a duration.
    fn decode_status(&self, registers: &RegisterMap, line_duration: Duration)
        -> Result<DeviceStatus>;
}

/// Integration time for a line count at the given line time.
pub fn exposure(lines: u32, line_duration: Duration) -> Duration {
    line_duration * lines
}

/// Line count whose integration time best matches the requested shutter
/// speed, truncated to whole lines.
pub fn exposure_lines(shutter: Duration, line_duration: Duration) -> u32 {
    (shutter.as_nanos() / line_duration.as_nanos().max(1)) as u32
}

/// Generic helper implementation parameterized entirely by `SensorConfig`.
pub struct CamHelper {
    config: SensorConfig,
}

impl CamHelper {
    pub fn new(config: SensorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }
}

fn register_value(registers: &RegisterMap, address: u32) -> Result<u32> {
    registers
        .get(&address)
        .copied()
        .ok_or(CalibrationError::MissingRegister(address))
}

/// Reads a 16-bit quantity split across a byte-wide high/low register pair.
/// Each half is masked to 8 bits so a corrupt metadata stream cannot push
/// the combination past 16 bits.
fn register_pair(registers: &RegisterMap, hi: u32, lo: u32) -> Result<u32> {
    let hi = register_value(registers, hi)? & 0xFF;
    let lo = register_value(registers, lo)? & 0xFF;
    Ok(hi * 256 + lo)
}

impl SensorHelper for CamHelper {
    fn name(&self) -> &str {
        self.config.name
    }

    fn gain_code(&self, gain: f64) -> u32 {
        self.config.gain.encode(gain)
    }

    fn gain(&self, code: u32) -> f64 {
        self.config.gain.decode(code)
    }

    fn delays(&self) -> RegisterDelays {
        self.config.delays
    }

    fn mistrust_frames_mode_switch(&self) -> u32 {
        self.config.mistrust_frames_mode_switch
    }

    fn embedded_data_present(&self) -> bool {
        self.config.embedded_data.is_some()
    }

    fn embedded_registers(&self) -> Option<&StatusRegisters> {
        self.config.embedded_data.as_ref()
    }

    fn frame_integration_diff(&self) -> u32 {
        self.config.frame_integration_diff
    }

    fn decode_status(&self, registers: &RegisterMap, line_duration: Duration)
        -> Result<DeviceStatus>
    {
        let status_registers = self
            .config
            .embedded_data
            .as_ref()
            .ok_or_else(|| CalibrationError::EmbeddedDataUnsupported(self.config.name.to_string()))?;

        let exposure_lines = register_pair(
            registers,
            status_registers.exposure_hi,
            status_registers.exposure_lo,
        )?;
        let gain_code = register_pair(
            registers,
            status_registers.gain_hi,
            status_registers.gain_lo,
        )?;
        let frame_length = register_pair(
            registers,
            status_registers.frame_length_hi,
            status_registers.frame_length_lo,
        )?;

        debug!(
            sensor = self.config.name,
            exposure_lines,
            gain_code,
            frame_length,
            "Decoded device status"
        );

        Ok(DeviceStatus {
            exposure_lines,
            shutter_speed: exposure(exposure_lines, line_duration),
            analogue_gain: self.config.gain.decode(gain_code),
            frame_length,
        })
    }
}
