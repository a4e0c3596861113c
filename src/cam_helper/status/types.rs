//! Per-frame register snapshot and device status types

use std::collections::BTreeMap;
use std::time::Duration;

/// Register snapshot extracted from one frame's embedded data, keyed by
/// register address. Supplied by the metadata parser upstream; this crate
/// only reads it.
pub type RegisterMap = BTreeMap<u32, u32>;

/// The register addresses a sensor's device status is assembled from.
///
/// Exposure and frame length are 16-bit quantities split across a high/low
/// pair of byte-wide registers, as is the gain code on the sensors
/// supported here; decoding masks each half to 8 bits. The embedded-data
/// parser is asked to extract exactly these six addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRegisters {
    pub exposure_hi: u32,
    pub exposure_lo: u32,
    pub gain_hi: u32,
    pub gain_lo: u32,
    pub frame_length_hi: u32,
    pub frame_length_lo: u32,
}

impl StatusRegisters {
    /// All addresses the embedded-data parser must extract for this sensor.
    pub fn register_list(&self) -> [u32; 6] {
        [
            self.exposure_hi,
            self.exposure_lo,
            self.gain_hi,
            self.gain_lo,
            self.frame_length_hi,
            self.frame_length_lo,
        ]
    }
}

/// What the sensor was actually doing for one captured frame.
///
/// Built fresh per decode; the crate keeps no frame history.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceStatus {
    /// Integration time in scan lines, as read from the registers.
    pub exposure_lines: u32,
    /// Integration time as a duration, using the mode's line time.
    pub shutter_speed: Duration,
    /// Analogue gain multiplier in effect for the frame.
    pub analogue_gain: f64,
    /// Total frame length in scan lines, vertical blanking included.
    pub frame_length: u32,
}
