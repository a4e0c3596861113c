//! Name-keyed table of sensor helper constructors.
//!
//! The process-wide table is built exactly once, before the first lookup,
//! by `sensors::register_all`; it is read-only afterwards, so lookups need
//! no locking. Registration order carries no meaning and a duplicate name
//! is a programming error in a sensor module, not a runtime condition.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::cam_helper::common::error::{CalibrationError, Result};
use crate::cam_helper::helper::SensorHelper;
use crate::cam_helper::sensors;

/// Constructor for one sensor model's helper.
pub type HelperCtor = fn() -> Box<dyn SensorHelper>;

pub struct HelperRegistry {
    table: HashMap<&'static str, HelperCtor>,
}

impl HelperRegistry {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Registers a helper constructor under a sensor model name.
    ///
    /// Fails with `DuplicateRegistration` if the name is already taken; no
    /// override or priority semantics exist.
    pub fn try_register(&mut self, name: &'static str, ctor: HelperCtor) -> Result<()> {
        if self.table.contains_key(name) {
            return Err(CalibrationError::DuplicateRegistration(name.to_string()));
        }
        self.table.insert(name, ctor);
        debug!(sensor = name, "Registered camera helper");
        Ok(())
    }

    /// Registers a helper constructor, treating a duplicate name as a fatal
    /// startup contract violation.
    pub fn register(&mut self, name: &'static str, ctor: HelperCtor) {
        if let Err(e) = self.try_register(name, ctor) {
            panic!("sensor helper registration failed: {e}");
        }
    }

    /// Constructs a new helper for the named sensor model.
    pub fn lookup(&self, name: &str) -> Result<Box<dyn SensorHelper>> {
        match self.table.get(name) {
            Some(ctor) => Ok(ctor()),
            None => {
                warn!(sensor = name, "No camera helper registered");
                Err(CalibrationError::UnknownSensor(name.to_string()))
            }
        }
    }

    /// Names of all registered sensor models, in no particular order.
    pub fn sensor_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.keys().copied()
    }
}

impl Default for HelperRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static REGISTRY: Lazy<HelperRegistry> = Lazy::new(|| {
    let mut registry = HelperRegistry::new();
    sensors::register_all(&mut registry);
    registry
});

/// The process-wide registry holding all built-in sensor helpers.
pub fn global() -> &'static HelperRegistry {
    &REGISTRY
}

/// Constructs a new helper for the named sensor from the global registry.
pub fn lookup(name: &str) -> Result<Box<dyn SensorHelper>> {
    global().lookup(name)
}
