use crate::device::{DeviceId, PropertyAddress};
use crate::error::AudioError;

/// Property-level access to the platform audio hardware layer
///
/// Mirrors the HAL protocol: check that a property exists, check that it
/// can be set, then get or set its value. Implementations must not cache
/// anything; every call goes to the OS.
pub trait AudioHardware {
    /// Whether `device` exposes the property at `address`
    fn has_property(&self, device: DeviceId, address: &PropertyAddress) -> bool;

    /// Whether the property at `address` accepts writes
    fn is_property_settable(
        &self,
        device: DeviceId,
        address: &PropertyAddress,
    ) -> Result<bool, AudioError>;

    /// Read a `u32` property (device handles, mute switches)
    fn property_u32(&self, device: DeviceId, address: &PropertyAddress)
        -> Result<u32, AudioError>;

    /// Read an `f32` property (volume scalars)
    fn property_f32(&self, device: DeviceId, address: &PropertyAddress)
        -> Result<f32, AudioError>;

    fn set_property_u32(
        &self,
        device: DeviceId,
        address: &PropertyAddress,
        value: u32,
    ) -> Result<(), AudioError>;

    fn set_property_f32(
        &self,
        device: DeviceId,
        address: &PropertyAddress,
        value: f32,
    ) -> Result<(), AudioError>;
}
