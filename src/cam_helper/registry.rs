//! Sensor helper registry module
//!
//! This module resolves a sensor model name to a freshly constructed helper
//! instance.

mod table;

pub use table::{HelperCtor, HelperRegistry, global, lookup};
