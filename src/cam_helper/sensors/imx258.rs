//! Sony IMX258 camera helper.

use crate::cam_helper::gain::{GainCalibration, GainModel};
use crate::cam_helper::helper::{CamHelper, RegisterDelays, SensorConfig, SensorHelper};
use crate::cam_helper::registry::HelperRegistry;
use crate::cam_helper::status::StatusRegisters;

/*
 * One gain register pair and a pair each for exposure and frame length.
 * I2C addresses from the Sony IMX258 datasheet.
 */
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
        name: "imx258",
        gain: GainCalibration {
            model: GainModel::ReciprocalLinear { numerator: 256.0 },
            min_gain: 1.0,
            max_gain: 16.0,
            min_code: 0,
            max_code: 240,
        },
        delays: RegisterDelays {
            exposure: 2,
            gain: 2,
            frame_length: 2,
        },
        /*
         * The sensor occasionally emits one bogus metadata frame at a mode
         * switch (though not at start-up).
         */
        mistrust_frames_mode_switch: 1,
        frame_integration_diff: 4,
        embedded_data: Some(STATUS_REGISTERS),
    }
}

fn create() -> Box<dyn SensorHelper> {
    Box::new(CamHelper::new(config()))
}

pub fn register(registry: &mut HelperRegistry) {
    registry.register("imx258", create);
}
