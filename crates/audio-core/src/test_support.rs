//! In-memory audio hardware used by the controller tests

use std::cell::{Cell, RefCell};

use crate::device::{DeviceId, PropertyAddress, Selector};
use crate::error::AudioError;
use crate::traits::AudioHardware;

pub const FAKE_DEVICE: DeviceId = DeviceId(42);

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Has(DeviceId, Selector),
    Settable(DeviceId, Selector),
    GetU32(DeviceId, Selector),
    GetF32(DeviceId, Selector),
    SetU32(DeviceId, Selector, u32),
    SetF32(DeviceId, Selector, f32),
}

impl Call {
    pub fn device(&self) -> DeviceId {
        match self {
            Call::Has(d, _)
            | Call::Settable(d, _)
            | Call::GetU32(d, _)
            | Call::GetF32(d, _)
            | Call::SetU32(d, _, _)
            | Call::SetF32(d, _, _) => *d,
        }
    }

    pub fn is_write(&self) -> bool {
        matches!(self, Call::SetU32(..) | Call::SetF32(..))
    }
}

/// Property slot of the fake device
#[derive(Debug, Clone, Copy)]
struct Slot {
    present: bool,
    settable: bool,
    settable_error: bool,
    read_error: bool,
    write_error: bool,
}

impl Slot {
    fn healthy() -> Self {
        Self {
            present: true,
            settable: true,
            settable_error: false,
            read_error: false,
            write_error: false,
        }
    }
}

/// Fake HAL with one output device that records every call
pub struct FakeHardware {
    default_device: Option<DeviceId>,
    default_lookup_error: bool,
    volume: Cell<f32>,
    volume_slot: Slot,
    mute: Cell<u32>,
    mute_slot: Slot,
    calls: RefCell<Vec<Call>>,
}

impl Default for FakeHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeHardware {
    /// Device 42, volume 0.5, unmuted, everything settable
    pub fn new() -> Self {
        Self {
            default_device: Some(FAKE_DEVICE),
            default_lookup_error: false,
            volume: Cell::new(0.5),
            volume_slot: Slot::healthy(),
            mute: Cell::new(0),
            mute_slot: Slot::healthy(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn without_default_device(mut self) -> Self {
        self.default_device = None;
        self
    }

    /// The system object reports `DeviceId::UNKNOWN` as default output
    pub fn with_unknown_default_device(mut self) -> Self {
        self.default_device = Some(DeviceId::UNKNOWN);
        self
    }

    pub fn failing_default_lookup(mut self) -> Self {
        self.default_lookup_error = true;
        self
    }

    pub fn with_volume(self, volume: f32) -> Self {
        self.volume.set(volume);
        self
    }

    pub fn muted(self) -> Self {
        self.mute.set(1);
        self
    }

    pub fn without_volume(mut self) -> Self {
        self.volume_slot.present = false;
        self
    }

    pub fn volume_not_settable(mut self) -> Self {
        self.volume_slot.settable = false;
        self
    }

    pub fn failing_volume_settable_query(mut self) -> Self {
        self.volume_slot.settable_error = true;
        self
    }

    pub fn failing_volume_read(mut self) -> Self {
        self.volume_slot.read_error = true;
        self
    }

    pub fn failing_volume_write(mut self) -> Self {
        self.volume_slot.write_error = true;
        self
    }

    pub fn without_mute(mut self) -> Self {
        self.mute_slot.present = false;
        self
    }

    pub fn mute_not_settable(mut self) -> Self {
        self.mute_slot.settable = false;
        self
    }

    pub fn failing_mute_settable_query(mut self) -> Self {
        self.mute_slot.settable_error = true;
        self
    }

    pub fn failing_mute_read(mut self) -> Self {
        self.mute_slot.read_error = true;
        self
    }

    pub fn failing_mute_write(mut self) -> Self {
        self.mute_slot.write_error = true;
        self
    }

    pub fn volume(&self) -> f32 {
        self.volume.get()
    }

    pub fn mute(&self) -> u32 {
        self.mute.get()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_write).collect()
    }

    /// Calls addressed to anything other than the system object
    pub fn device_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.device() != DeviceId::SYSTEM_OBJECT)
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn slot(&self, device: DeviceId, selector: Selector) -> Option<Slot> {
        if Some(device) != self.default_device || device.is_unknown() {
            return None;
        }
        let slot = match selector {
            Selector::VIRTUAL_MAIN_VOLUME => self.volume_slot,
            Selector::MUTE => self.mute_slot,
            _ => return None,
        };
        slot.present.then_some(slot)
    }

    fn missing(device: DeviceId, selector: Selector) -> AudioError {
        AudioError::Hardware(format!("unknown property '{}' on {}", selector, device))
    }
}

impl AudioHardware for FakeHardware {
    fn has_property(&self, device: DeviceId, address: &PropertyAddress) -> bool {
        self.record(Call::Has(device, address.selector));
        if device == DeviceId::SYSTEM_OBJECT {
            return address.selector == Selector::DEFAULT_OUTPUT_DEVICE
                && self.default_device.is_some();
        }
        self.slot(device, address.selector).is_some()
    }

    fn is_property_settable(
        &self,
        device: DeviceId,
        address: &PropertyAddress,
    ) -> Result<bool, AudioError> {
        self.record(Call::Settable(device, address.selector));
        let slot = self
            .slot(device, address.selector)
            .ok_or_else(|| Self::missing(device, address.selector))?;
        if slot.settable_error {
            return Err(AudioError::Hardware("settable query failed".to_string()));
        }
        Ok(slot.settable)
    }

    fn property_u32(
        &self,
        device: DeviceId,
        address: &PropertyAddress,
    ) -> Result<u32, AudioError> {
        self.record(Call::GetU32(device, address.selector));
        if device == DeviceId::SYSTEM_OBJECT && address.selector == Selector::DEFAULT_OUTPUT_DEVICE {
            if self.default_lookup_error {
                return Err(AudioError::Hardware("default device lookup failed".to_string()));
            }
            return self
                .default_device
                .map(|d| d.0)
                .ok_or_else(|| Self::missing(device, address.selector));
        }
        let slot = self
            .slot(device, address.selector)
            .filter(|_| address.selector == Selector::MUTE)
            .ok_or_else(|| Self::missing(device, address.selector))?;
        if slot.read_error {
            return Err(AudioError::Hardware("mute read failed".to_string()));
        }
        Ok(self.mute.get())
    }

    fn property_f32(
        &self,
        device: DeviceId,
        address: &PropertyAddress,
    ) -> Result<f32, AudioError> {
        self.record(Call::GetF32(device, address.selector));
        let slot = self
            .slot(device, address.selector)
            .filter(|_| address.selector == Selector::VIRTUAL_MAIN_VOLUME)
            .ok_or_else(|| Self::missing(device, address.selector))?;
        if slot.read_error {
            return Err(AudioError::Hardware("volume read failed".to_string()));
        }
        Ok(self.volume.get())
    }

    fn set_property_u32(
        &self,
        device: DeviceId,
        address: &PropertyAddress,
        value: u32,
    ) -> Result<(), AudioError> {
        self.record(Call::SetU32(device, address.selector, value));
        let slot = self
            .slot(device, address.selector)
            .filter(|_| address.selector == Selector::MUTE)
            .ok_or_else(|| Self::missing(device, address.selector))?;
        if slot.write_error || !slot.settable {
            return Err(AudioError::Hardware("mute write failed".to_string()));
        }
        self.mute.set(value);
        Ok(())
    }

    fn set_property_f32(
        &self,
        device: DeviceId,
        address: &PropertyAddress,
        value: f32,
    ) -> Result<(), AudioError> {
        self.record(Call::SetF32(device, address.selector, value));
        let slot = self
            .slot(device, address.selector)
            .filter(|_| address.selector == Selector::VIRTUAL_MAIN_VOLUME)
            .ok_or_else(|| Self::missing(device, address.selector))?;
        if slot.write_error || !slot.settable {
            return Err(AudioError::Hardware("volume write failed".to_string()));
        }
        self.volume.set(value);
        Ok(())
    }
}
