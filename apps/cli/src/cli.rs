//! Command-line interface definitions for `sysvol`.

use clap::{Args, Parser, Subcommand};
use sysvol_audio_core::DEFAULT_MUTE_THRESHOLD;

/// Step used by `up` and `down` when no delta is given (1/16, the macOS key step)
pub const DEFAULT_STEP: f32 = 0.0625;

#[derive(Parser, Debug)]
#[command(
    name = "sysvol",
    about = "Read and change the volume of the default output device",
    version
)]
pub struct Cli {
    /// Volume below which `set`, `up` and `down` mute the device instead
    #[arg(
        long,
        global = true,
        env = "SYSVOL_MUTE_THRESHOLD",
        default_value_t = DEFAULT_MUTE_THRESHOLD,
        value_name = "LEVEL"
    )]
    pub mute_threshold: f32,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the default output device id, or `unknown`
    Device,
    /// Print the current volume in [0, 1]
    Get,
    /// Set the volume; levels under the mute threshold mute instead
    Set {
        #[arg(value_name = "LEVEL", allow_negative_numbers = true)]
        level: f32,
    },
    /// Raise the volume
    Up {
        #[arg(value_name = "DELTA", default_value_t = DEFAULT_STEP)]
        delta: f32,
    },
    /// Lower the volume
    Down {
        #[arg(value_name = "DELTA", default_value_t = DEFAULT_STEP)]
        delta: f32,
    },
    /// Mute the default output device
    Mute,
    /// Unmute the default output device
    Unmute,
    /// Flip the mute switch
    Toggle,
    /// Print `true` when muted; unsupported devices also print `false`
    IsMuted,
    /// Print device, volume and mute state
    Status {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Logging controls
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Set log level to trace (our crates only)
    #[arg(long, global = true, conflicts_with_all = ["debug", "log_level", "log_filter"])]
    pub trace: bool,

    /// Set log level to debug (our crates only)
    #[arg(long, global = true, conflicts_with_all = ["trace", "log_level", "log_filter"])]
    pub debug: bool,

    /// Set a single log level for our crates (error|warn|info|debug|trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Explicit tracing filter directive (overrides other flags),
    /// e.g. "sysvol_audio_core=debug"
    #[arg(long, global = true)]
    pub log_filter: Option<String>,
}
