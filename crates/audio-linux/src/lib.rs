//! Linux volume control (stub)
//!
//! This crate will contain the Linux-specific hardware layer
//! using ALSA or PulseAudio.

mod hardware;

pub use sysvol_audio_core::{
    AudioError, AudioHardware, ControllerConfig, DeviceId, MuteState, OutputVolumeController,
    VolumeStatus,
};
pub use hardware::SystemHardware;

/// Controller over the Linux default output device
pub fn controller(config: ControllerConfig) -> OutputVolumeController<SystemHardware> {
    OutputVolumeController::with_config(SystemHardware::new(), config)
}
