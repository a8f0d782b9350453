//! Linux hardware layer (stub)
//!
//! No mixer is wired up yet, so the system object never reports a default
//! output device. Every controller operation therefore resolves the
//! unknown device and returns its safe default.

use sysvol_audio_core::{AudioError, AudioHardware, DeviceId, PropertyAddress};

/// Linux hardware layer (stub)
///
/// Placeholder until a backend over ALSA or PulseAudio exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHardware {
    // Private field to prevent external construction
    _private: (),
}

impl SystemHardware {
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn unsupported() -> AudioError {
        AudioError::PlatformNotSupported("Linux volume control coming soon".to_string())
    }
}

impl AudioHardware for SystemHardware {
    fn has_property(&self, device: DeviceId, address: &PropertyAddress) -> bool {
        tracing::debug!(device = %device, selector = %address.selector, "No Linux audio hardware layer");
        false
    }

    fn is_property_settable(
        &self,
        _device: DeviceId,
        _address: &PropertyAddress,
    ) -> Result<bool, AudioError> {
        Err(Self::unsupported())
    }

    fn property_u32(
        &self,
        _device: DeviceId,
        _address: &PropertyAddress,
    ) -> Result<u32, AudioError> {
        Err(Self::unsupported())
    }

    fn property_f32(
        &self,
        _device: DeviceId,
        _address: &PropertyAddress,
    ) -> Result<f32, AudioError> {
        Err(Self::unsupported())
    }

    fn set_property_u32(
        &self,
        _device: DeviceId,
        _address: &PropertyAddress,
        _value: u32,
    ) -> Result<(), AudioError> {
        Err(Self::unsupported())
    }

    fn set_property_f32(
        &self,
        _device: DeviceId,
        _address: &PropertyAddress,
        _value: f32,
    ) -> Result<(), AudioError> {
        Err(Self::unsupported())
    }
}
