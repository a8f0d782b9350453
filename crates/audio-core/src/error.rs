use thiserror::Error;

use crate::device::{DeviceId, Selector};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AudioError {
    #[error("No default output device found")]
    NoDeviceFound,

    #[error("Device {device} has no '{selector}' property")]
    PropertyNotFound { device: DeviceId, selector: Selector },

    #[error("Property '{selector}' of device {device} cannot be set")]
    PropertyNotSettable { device: DeviceId, selector: Selector },

    #[error("Audio hardware error: {0}")]
    Hardware(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Platform not supported: {0}")]
    PlatformNotSupported(String),
}
