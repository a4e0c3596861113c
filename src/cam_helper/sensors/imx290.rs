//! Sony IMX290 camera helper.

use crate::cam_helper::gain::{GainCalibration, GainModel};
use crate::cam_helper::helper::{CamHelper, RegisterDelays, SensorConfig, SensorHelper};
use crate::cam_helper::registry::HelperRegistry;

pub fn config() -> SensorConfig {
    SensorConfig {
        name: "imx290",
        gain: GainCalibration {
            /*
             * The gain register steps in units of 0.3 dB and saturates at
             * 0xF0, i.e. 72 dB.
             */
            model: GainModel::Logarithmic { scale: 200.0 / 3.0 },
            min_gain: 1.0,
            max_gain: 3981.0717055349722,
            min_code: 0,
            max_code: 240,
        },
        delays: RegisterDelays {
            exposure: 2,
            gain: 2,
            frame_length: 2,
        },
        mistrust_frames_mode_switch: 1,
        frame_integration_diff: 2,
        /* The IMX290 does not produce an embedded data stream. */
        embedded_data: None,
    }
}

fn create() -> Box<dyn SensorHelper> {
    Box::new(CamHelper::new(config()))
}

pub fn register(registry: &mut HelperRegistry) {
    registry.register("imx290", create);
}
