use serde::{Deserialize, Serialize};

use crate::device::DeviceId;

/// Clamp a volume scalar into [0.0, 1.0]
///
/// NaN maps to 0.0 so that nothing outside the range ever reaches the device.
#[inline]
pub fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

/// Mute switch as seen by [`mute_state`](crate::OutputVolumeController::mute_state)
///
/// Unlike `is_muted`, this keeps "cannot tell" apart from "not muted".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuteState {
    Muted,
    Unmuted,
    /// No device, no mute control, or the read failed
    Unavailable,
}

impl MuteState {
    pub fn is_muted(self) -> bool {
        self == MuteState::Muted
    }
}

/// What a volume write ended up doing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VolumeChange {
    /// Requested level was under the mute threshold and the device was muted
    Muted,
    /// The volume scalar was written; `unmuted` tells whether mute was also cleared
    VolumeSet { level: f32, unmuted: bool },
}

/// Point-in-time view of the default output device
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeStatus {
    pub device: Option<DeviceId>,
    pub volume: f32,
    pub mute: MuteState,
}
