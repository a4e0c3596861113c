//! Gain conversion formulas.
//!
//! Two formula shapes cover the supported sensor generations: a
//! reciprocal-linear form used by most Sony rolling-shutter sensors and a
//! logarithmic form used by sensors whose gain register steps in fixed
//! fractions of a decibel. Which shape applies, and with which constants,
//! is part of each sensor's calibration data.

/// Conversion formula between an analogue gain multiplier and its register
/// code. Constants come from the sensor datasheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GainModel {
    /// `code = n * (1 - 1/gain)`, inverted as `gain = n / (n - code)`.
    ReciprocalLinear { numerator: f64 },
    /// `code = k * log10(gain)`, inverted as `gain = 10^(code / k)`.
    Logarithmic { scale: f64 },
}

/// A sensor's complete gain calibration: the formula plus the gain and code
/// ranges the hardware accepts.
///
/// Conversions never fail. Out-of-range inputs are clamped on both sides,
/// since the AGC loop must always receive a code it can apply. For the
/// reciprocal-linear form `max_code` must stay below `numerator`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainCalibration {
    pub model: GainModel,
    pub min_gain: f64,
    pub max_gain: f64,
    pub min_code: u32,
    pub max_code: u32,
}

impl GainCalibration {
    /// Converts a gain multiplier to its register code.
    ///
    /// The gain is clamped into the valid gain range before evaluation and
    /// the resulting code is clamped into the valid code range, since the
    /// formula can land just outside it at the domain edges. Fractional
    /// codes truncate toward zero, matching the register granularity.
    pub fn encode(&self, gain: f64) -> u32 {
        let gain = gain.clamp(self.min_gain, self.max_gain);
        let code = match self.model {
            GainModel::ReciprocalLinear { numerator } => numerator * (1.0 - 1.0 / gain),
            GainModel::Logarithmic { scale } => scale * gain.log10(),
        };
        (code as u32).clamp(self.min_code, self.max_code)
    }

    /// Converts a register code back to a gain multiplier.
    pub fn decode(&self, code: u32) -> f64 {
        let code = f64::from(code.clamp(self.min_code, self.max_code));
        match self.model {
            GainModel::ReciprocalLinear { numerator } => numerator / (numerator - code),
            GainModel::Logarithmic { scale } => 10f64.powf(code / scale),
        }
    }
}
