//! Device handles and property addresses
//!
//! Audio hardware is modelled the way the platform HALs expose it: every
//! attribute of a device is a property reached through a
//! [`PropertyAddress`] (selector + scope + element). Selectors and scopes are
//! four-character codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle of an audio object
///
/// Handles are never cached by the controller; the default output device is
/// looked up again for every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(pub u32);

impl DeviceId {
    /// No device. Terminal: nothing can be done with it.
    pub const UNKNOWN: Self = Self(0);

    /// The HAL system object, owner of the default-device properties.
    pub const SYSTEM_OBJECT: Self = Self(1);

    pub fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// Build a big-endian four-character code
const fn four_cc(code: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*code)
}

fn fmt_four_cc(code: u32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let bytes = code.to_be_bytes();
    if bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
        for b in bytes {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    } else {
        write!(f, "0x{:08x}", code)
    }
}

/// Which property of an object is addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector(pub u32);

impl Selector {
    /// Default output device of the system object
    pub const DEFAULT_OUTPUT_DEVICE: Self = Self(four_cc(b"dOut"));

    /// Virtual main volume, a scalar in [0, 1] covering all channels
    pub const VIRTUAL_MAIN_VOLUME: Self = Self(four_cc(b"vmvc"));

    /// Mute switch, a u32 where non-zero means muted
    pub const MUTE: Self = Self(four_cc(b"mute"));
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_four_cc(self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scope(pub u32);

impl Scope {
    pub const GLOBAL: Self = Self(four_cc(b"glob"));
    pub const OUTPUT: Self = Self(four_cc(b"outp"));
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_four_cc(self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element(pub u32);

impl Element {
    pub const MAIN: Self = Self(0);
}

/// Fully qualified property address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyAddress {
    pub selector: Selector,
    pub scope: Scope,
    pub element: Element,
}

impl PropertyAddress {
    pub const fn new(selector: Selector, scope: Scope, element: Element) -> Self {
        Self {
            selector,
            scope,
            element,
        }
    }

    /// `dOut` on the system object
    pub const fn default_output_device() -> Self {
        Self::new(Selector::DEFAULT_OUTPUT_DEVICE, Scope::GLOBAL, Element::MAIN)
    }

    /// Output-scope virtual main volume of a device
    pub const fn output_volume() -> Self {
        Self::new(Selector::VIRTUAL_MAIN_VOLUME, Scope::OUTPUT, Element::MAIN)
    }

    /// Output-scope mute switch of a device
    pub const fn output_mute() -> Self {
        Self::new(Selector::MUTE, Scope::OUTPUT, Element::MAIN)
    }
}
