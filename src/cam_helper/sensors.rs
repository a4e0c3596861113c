//! Built-in sensor variants
//!
//! One module per supported sensor model, each contributing its calibration
//! data and a registration call. Constants here come from datasheets and
//! bench characterization of the respective sensors.

pub mod imx258;
pub mod imx290;
pub mod imx477;

use crate::cam_helper::registry::HelperRegistry;

/// Registers every built-in sensor helper. Called once while the global
/// registry is being initialized, before any lookup.
pub(crate) fn register_all(registry: &mut HelperRegistry) {
    imx258::register(registry);
    imx290::register(registry);
    imx477::register(registry);
}
