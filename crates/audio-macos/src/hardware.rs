//! Core Audio property access through the HAL object API
//!
//! Each call maps one-to-one onto `AudioObjectHasProperty`,
//! `AudioObjectIsPropertySettable`, `AudioObjectGetPropertyData` and
//! `AudioObjectSetPropertyData`.

use cidre::core_audio as ca;
use sysvol_audio_core::{AudioError, AudioHardware, DeviceId, PropertyAddress};

/// Core Audio hardware abstraction layer
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHardware;

impl SystemHardware {
    pub fn new() -> Self {
        Self
    }
}

fn obj(device: DeviceId) -> ca::Obj {
    ca::Obj(device.0)
}

fn prop_addr(address: &PropertyAddress) -> ca::PropAddr {
    ca::PropAddr {
        selector: ca::PropSelector(address.selector.0),
        scope: ca::PropScope(address.scope.0),
        element: ca::PropElement(address.element.0),
    }
}

fn hardware_error(
    op: &str,
    device: DeviceId,
    address: &PropertyAddress,
    e: impl std::fmt::Debug,
) -> AudioError {
    AudioError::Hardware(format!(
        "{} '{}' on device {} failed: {:?}",
        op, address.selector, device, e
    ))
}

impl AudioHardware for SystemHardware {
    fn has_property(&self, device: DeviceId, address: &PropertyAddress) -> bool {
        let present = obj(device).has_prop(&prop_addr(address));
        tracing::trace!(device = %device, selector = %address.selector, present, "has property");
        present
    }

    fn is_property_settable(
        &self,
        device: DeviceId,
        address: &PropertyAddress,
    ) -> Result<bool, AudioError> {
        obj(device)
            .is_prop_settable(&prop_addr(address))
            .map_err(|e| hardware_error("settable query", device, address, e))
    }

    fn property_u32(
        &self,
        device: DeviceId,
        address: &PropertyAddress,
    ) -> Result<u32, AudioError> {
        obj(device)
            .prop::<u32>(&prop_addr(address))
            .map_err(|e| hardware_error("read", device, address, e))
    }

    fn property_f32(
        &self,
        device: DeviceId,
        address: &PropertyAddress,
    ) -> Result<f32, AudioError> {
        obj(device)
            .prop::<f32>(&prop_addr(address))
            .map_err(|e| hardware_error("read", device, address, e))
    }

    fn set_property_u32(
        &self,
        device: DeviceId,
        address: &PropertyAddress,
        value: u32,
    ) -> Result<(), AudioError> {
        obj(device)
            .set_prop(&prop_addr(address), &value)
            .map_err(|e| hardware_error("write", device, address, e))
    }

    fn set_property_f32(
        &self,
        device: DeviceId,
        address: &PropertyAddress,
        value: f32,
    ) -> Result<(), AudioError> {
        obj(device)
            .set_prop(&prop_addr(address), &value)
            .map_err(|e| hardware_error("write", device, address, e))
    }
}
