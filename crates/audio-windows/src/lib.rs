//! Windows volume control (stub)
//!
//! This crate will contain the Windows-specific hardware layer
//! using the WASAPI endpoint volume interface.

mod hardware;

pub use sysvol_audio_core::{
    AudioError, AudioHardware, ControllerConfig, DeviceId, MuteState, OutputVolumeController,
    VolumeStatus,
};
pub use hardware::SystemHardware;

/// Controller over the Windows default output device
pub fn controller(config: ControllerConfig) -> OutputVolumeController<SystemHardware> {
    OutputVolumeController::with_config(SystemHardware::new(), config)
}
