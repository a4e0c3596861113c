use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalibrationError {
    #[error("No camera helper registered for sensor '{0}'")]
    UnknownSensor(String),

    #[error("Register 0x{0:04x} missing from embedded data")]
    MissingRegister(u32),

    #[error("Camera helper for sensor '{0}' registered twice")]
    DuplicateRegistration(String),

    #[error("Sensor '{0}' does not produce embedded data")]
    EmbeddedDataUnsupported(String),
}

pub type Result<T> = std::result::Result<T, CalibrationError>;
