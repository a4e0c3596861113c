//! Sony IMX477 camera helper.

use crate::cam_helper::gain::{GainCalibration, GainModel};
use crate::cam_helper::helper::{CamHelper, RegisterDelays, SensorConfig, SensorHelper};
use crate::cam_helper::registry::HelperRegistry;
use crate::cam_helper::status::StatusRegisters;

const STATUS_REGISTERS: StatusRegisters = StatusRegisters {
    exposure_hi: 0x0202,
    exposure_lo: 0x0203,
    gain_hi: 0x0204,
    gain_lo: 0x0205,
    frame_length_hi: 0x0340,
    frame_length_lo: 0x0341,
};

pub fn config() -> SensorConfig {
    SensorConfig {
        name: "imx477",
        gain: GainCalibration {
            model: GainModel::ReciprocalLinear { numerator: 1024.0 },
            min_gain: 1.0,
            max_gain: 1024.0 / 46.0,
            min_code: 0,
            max_code: 978,
        },
        delays: RegisterDelays {
            exposure: 2,
            gain: 2,
            frame_length: 3,
        },
        mistrust_frames_mode_switch: 0,
        frame_integration_diff: 22,
        embedded_data: Some(STATUS_REGISTERS),
    }
}

fn create() -> Box<dyn SensorHelper> {
    Box::new(CamHelper::new(config()))
}

pub fn register(registry: &mut HelperRegistry) {
    registry.register("imx477", create);
}
