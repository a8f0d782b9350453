//! Volume and mute control of the default output device
//!
//! Every operation follows the same protocol against the hardware layer:
//! resolve the default output device, check that the property exists, check
//! that it is settable, then get or set it. Nothing is cached between calls.
//!
//! The `try_*` methods return the reason a step failed. The plain methods are
//! fail-soft: they log the failure and fall back to a safe default (`0.0`,
//! `false`, or no effect).

use crate::config::ControllerConfig;
use crate::device::{DeviceId, PropertyAddress};
use crate::error::AudioError;
use crate::traits::AudioHardware;
use crate::volume::{clamp_volume, MuteState, VolumeChange, VolumeStatus};

pub struct OutputVolumeController<H> {
    hardware: H,
    config: ControllerConfig,
}

impl<H: AudioHardware> OutputVolumeController<H> {
    pub fn new(hardware: H) -> Self {
        Self::with_config(hardware, ControllerConfig::default())
    }

    pub fn with_config(hardware: H, config: ControllerConfig) -> Self {
        Self { hardware, config }
    }

    pub fn hardware(&self) -> &H {
        &self.hardware
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    // ========================================================================
    // Device resolution
    // ========================================================================

    fn resolve_default_output_device(&self) -> Result<DeviceId, AudioError> {
        let address = PropertyAddress::default_output_device();

        if !self.hardware.has_property(DeviceId::SYSTEM_OBJECT, &address) {
            return Err(AudioError::NoDeviceFound);
        }

        let device = DeviceId(self.hardware.property_u32(DeviceId::SYSTEM_OBJECT, &address)?);
        if device.is_unknown() {
            return Err(AudioError::NoDeviceFound);
        }
        Ok(device)
    }

    /// Current default output device, or [`DeviceId::UNKNOWN`]
    pub fn default_output_device(&self) -> DeviceId {
        match self.resolve_default_output_device() {
            Ok(device) => device,
            Err(e) => {
                tracing::warn!(error = %e, "Unable to get default output device");
                DeviceId::UNKNOWN
            }
        }
    }

    /// Resolve the device for a dependent operation, rejecting the unknown handle
    fn device(&self) -> Result<DeviceId, AudioError> {
        let device = self.default_output_device();
        if device.is_unknown() {
            return Err(AudioError::NoDeviceFound);
        }
        Ok(device)
    }

    /// Existence and settability guard shared by all writes
    fn ensure_settable(&self, device: DeviceId, address: &PropertyAddress) -> Result<(), AudioError> {
        let selector = address.selector;
        if !self.hardware.has_property(device, address) {
            return Err(AudioError::PropertyNotFound { device, selector });
        }
        if !self.hardware.is_property_settable(device, address)? {
            return Err(AudioError::PropertyNotSettable { device, selector });
        }
        Ok(())
    }

    // ========================================================================
    // Volume
    // ========================================================================

    pub fn try_system_volume(&self) -> Result<f32, AudioError> {
        let device = self.device()?;
        let address = PropertyAddress::output_volume();

        if !self.hardware.has_property(device, &address) {
            return Err(AudioError::PropertyNotFound {
                device,
                selector: address.selector,
            });
        }

        let volume = self.hardware.property_f32(device, &address)?;
        Ok(clamp_volume(volume))
    }

    /// Volume of the default output device in [0, 1]; `0.0` on any failure
    pub fn system_volume(&self) -> f32 {
        self.try_system_volume().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Unable to read system volume");
            0.0
        })
    }

    /// Write a volume level, muting instead when it is under the threshold
    ///
    /// Levels under the mute threshold mute the device and leave the volume
    /// scalar untouched. When the device has no usable mute control the
    /// clamped level is written as a plain volume instead. Levels at or above
    /// the threshold are written and then mute is cleared whenever the device
    /// can be unmuted, whatever its previous state.
    pub fn try_set_system_volume(&self, requested: f32) -> Result<VolumeChange, AudioError> {
        let device = self.device()?;

        let level = clamp_volume(requested);
        if level != requested {
            tracing::debug!(requested, level, "Tentative volume was out of range; clamped");
        }

        let mute_address = PropertyAddress::output_mute();
        let wants_mute = level < self.config.mute_threshold;

        if wants_mute {
            match self.ensure_settable(device, &mute_address) {
                Ok(()) => {
                    self.hardware.set_property_u32(device, &mute_address, 1)?;
                    tracing::debug!(device = %device, level, "Muted device below threshold");
                    return Ok(VolumeChange::Muted);
                }
                Err(e) => {
                    tracing::warn!(
                        device = %device,
                        error = %e,
                        "Should mute device but could not; setting low volume instead"
                    );
                }
            }
        }

        let volume_address = PropertyAddress::output_volume();
        self.ensure_settable(device, &volume_address)?;
        let written = self.hardware.set_property_f32(device, &volume_address, level);

        // Mute is cleared even when the volume write failed
        let unmuted = !wants_mute && self.clear_mute(device, &mute_address);
        written?;
        Ok(VolumeChange::VolumeSet { level, unmuted })
    }

    /// Clear mute after a volume write; reports whether it was cleared
    fn clear_mute(&self, device: DeviceId, mute_address: &PropertyAddress) -> bool {
        if let Err(e) = self.ensure_settable(device, mute_address) {
            tracing::debug!(device = %device, error = %e, "No mute control to clear");
            return false;
        }
        match self.hardware.set_property_u32(device, mute_address, 0) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(device = %device, error = %e, "Unable to unmute device");
                false
            }
        }
    }

    /// Fire-and-forget variant of [`try_set_system_volume`](Self::try_set_system_volume)
    pub fn set_system_volume(&self, volume: f32) {
        if let Err(e) = self.try_set_system_volume(volume) {
            tracing::warn!(volume, error = %e, "Unable to set system volume");
        }
    }

    pub fn increase_system_volume_by(&self, amount: f32) {
        self.set_system_volume(self.system_volume() + amount);
    }

    pub fn decrease_system_volume_by(&self, amount: f32) {
        self.set_system_volume(self.system_volume() - amount);
    }

    // ========================================================================
    // Mute
    // ========================================================================

    pub fn try_apply_mute(&self, muted: bool) -> Result<(), AudioError> {
        let device = self.device()?;
        let address = PropertyAddress::output_mute();

        self.ensure_settable(device, &address)?;
        self.hardware
            .set_property_u32(device, &address, u32::from(muted))
    }

    /// Set or clear mute; does nothing (beyond logging) when unsupported
    pub fn apply_mute(&self, muted: bool) {
        if let Err(e) = self.try_apply_mute(muted) {
            tracing::warn!(muted, error = %e, "Cannot change mute status");
        }
    }

    pub fn try_is_muted(&self) -> Result<bool, AudioError> {
        let device = self.device()?;
        let address = PropertyAddress::output_mute();

        // Mute is only reported for devices that can also change it
        self.ensure_settable(device, &address)?;
        Ok(self.hardware.property_u32(device, &address)? != 0)
    }

    /// Tri-state mute query
    pub fn mute_state(&self) -> MuteState {
        match self.try_is_muted() {
            Ok(true) => MuteState::Muted,
            Ok(false) => MuteState::Unmuted,
            Err(e) => {
                tracing::warn!(error = %e, "Unable to read mute status");
                MuteState::Unavailable
            }
        }
    }

    /// Whether the device is muted
    ///
    /// Returns `false` both when the device is unmuted and when the state
    /// cannot be read (no device, no mute control, read error). Use
    /// [`mute_state`](Self::mute_state) to tell the two apart.
    pub fn is_muted(&self) -> bool {
        self.mute_state().is_muted()
    }

    /// Flip the mute switch; returns the new state, or `Unavailable` if the write failed
    pub fn toggle_mute(&self) -> MuteState {
        let next = match self.mute_state() {
            MuteState::Unavailable => return MuteState::Unavailable,
            MuteState::Muted => MuteState::Unmuted,
            MuteState::Unmuted => MuteState::Muted,
        };
        match self.try_apply_mute(next.is_muted()) {
            Ok(()) => next,
            Err(e) => {
                tracing::warn!(error = %e, "Cannot toggle mute status");
                MuteState::Unavailable
            }
        }
    }

    pub fn status(&self) -> VolumeStatus {
        let device = self.default_output_device();
        VolumeStatus {
            device: (!device.is_unknown()).then_some(device),
            volume: self.system_volume(),
            mute: self.mute_state(),
        }
    }
}
