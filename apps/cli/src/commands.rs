//! Subcommand handlers
//!
//! Each handler runs one controller operation and renders what should be
//! printed on stdout. Failures of the audio layer are not errors here: the
//! controller logs them and reports its safe default.

use sysvol_audio_core::{AudioHardware, MuteState, OutputVolumeController, VolumeStatus};

use crate::cli::Command;

fn format_volume(volume: f32) -> String {
    format!("{:.2}", volume)
}

fn format_mute(state: MuteState) -> &'static str {
    match state {
        MuteState::Muted => "muted",
        MuteState::Unmuted => "unmuted",
        MuteState::Unavailable => "unavailable",
    }
}

fn format_status(status: &VolumeStatus) -> String {
    let device = status
        .device
        .map(|d| d.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    format!(
        "device: {}\nvolume: {}\nmute: {}",
        device,
        format_volume(status.volume),
        format_mute(status.mute)
    )
}

/// Run `command`; returns the text to print, if any
pub fn run<H: AudioHardware>(
    controller: &OutputVolumeController<H>,
    command: &Command,
) -> anyhow::Result<Option<String>> {
    tracing::debug!(?command, "Running command");

    let output = match *command {
        Command::Device => {
            let device = controller.default_output_device();
            Some(if device.is_unknown() {
                "unknown".to_string()
            } else {
                device.to_string()
            })
        }
        Command::Get => Some(format_volume(controller.system_volume())),
        Command::Set { level } => {
            controller.set_system_volume(level);
            None
        }
        Command::Up { delta } => {
            controller.increase_system_volume_by(delta);
            None
        }
        Command::Down { delta } => {
            controller.decrease_system_volume_by(delta);
            None
        }
        Command::Mute => {
            controller.apply_mute(true);
            None
        }
        Command::Unmute => {
            controller.apply_mute(false);
            None
        }
        Command::Toggle => Some(format_mute(controller.toggle_mute()).to_string()),
        Command::IsMuted => Some(controller.is_muted().to_string()),
        Command::Status { json } => {
            let status = controller.status();
            Some(if json {
                serde_json::to_string(&status)?
            } else {
                format_status(&status)
            })
        }
    };

    Ok(output)
}
