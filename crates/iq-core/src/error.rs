use iq_devices::DeviceError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{name} must be a finite number")]
    NotFinite { name: &'static str },
    #[error("unknown mode: {0}")]
    UnknownMode(String),
    #[error(transparent)]
    Device(#[from] DeviceError),
}

impl CoreError {
    /// True when the caller supplied a value the sliders would never produce.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, CoreError::Device(_))
    }
}
