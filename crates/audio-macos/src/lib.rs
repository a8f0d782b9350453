//! macOS volume control backed by Core Audio
//!
//! The default output device is reached through the HAL system object and
//! its volume through the virtual main volume property, which covers every
//! output channel at once.

#[cfg(target_os = "macos")]
mod hardware;

pub use sysvol_audio_core::{
    AudioError, AudioHardware, ControllerConfig, DeviceId, MuteState, OutputVolumeController,
    VolumeStatus,
};

#[cfg(target_os = "macos")]
pub use hardware::SystemHardware;

/// Controller over the Core Audio default output device
#[cfg(target_os = "macos")]
pub fn controller(config: ControllerConfig) -> OutputVolumeController<SystemHardware> {
    OutputVolumeController::with_config(SystemHardware::new(), config)
}
