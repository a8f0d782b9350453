//! Controller configuration

use serde::{Deserialize, Serialize};

use crate::error::AudioError;

/// Volume below which a set request mutes the device instead
pub const DEFAULT_MUTE_THRESHOLD: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub mute_threshold: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            mute_threshold: DEFAULT_MUTE_THRESHOLD,
        }
    }
}

impl ControllerConfig {
    pub fn with_mute_threshold(mute_threshold: f32) -> Result<Self, AudioError> {
        let config = Self { mute_threshold };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AudioError> {
        if !(0.0..=1.0).contains(&self.mute_threshold) {
            return Err(AudioError::InvalidConfig(format!(
                "mute threshold {} is outside [0, 1]",
                self.mute_threshold
            )));
        }
        Ok(())
    }
}
