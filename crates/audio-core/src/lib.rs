mod config;
mod controller;
mod device;
mod error;
mod traits;
mod volume;

#[cfg(test)]
mod test_support;

pub use config::{ControllerConfig, DEFAULT_MUTE_THRESHOLD};
pub use controller::OutputVolumeController;
pub use device::{DeviceId, Element, PropertyAddress, Scope, Selector};
pub use error::AudioError;
pub use traits::AudioHardware;
pub use volume::{clamp_volume, MuteState, VolumeChange, VolumeStatus};
