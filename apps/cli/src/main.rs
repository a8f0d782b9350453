//! `sysvol`: volume and mute control of the default output device
//!
//! - **macOS**: Core Audio default output device
//! - **Windows** / **Linux**: no hardware layer yet; every command reports
//!   the unknown device and its safe defaults

mod cli;
mod commands;
mod logging;

use anyhow::Context;
use clap::Parser;
use sysvol_audio_core::ControllerConfig;

#[cfg(target_os = "macos")]
use sysvol_audio_macos::controller;

#[cfg(target_os = "windows")]
use sysvol_audio_windows::controller;

#[cfg(target_os = "linux")]
use sysvol_audio_linux::controller;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log);

    let config = ControllerConfig::with_mute_threshold(cli.mute_threshold)
        .context("invalid --mute-threshold")?;
    let controller = controller(config);

    if let Some(output) = commands::run(&controller, &cli.command)? {
        println!("{}", output);
    }
    Ok(())
}
