//! Tracing subscriber setup for the CLI
//!
//! Logs go to stderr so stdout only carries command output.

use std::env;

use tracing_subscriber::EnvFilter;

use crate::cli::LogArgs;

/// Crate targets that constitute "our" logs
pub fn our_crates() -> &'static [&'static str] {
    &[
        "sysvol",
        "sysvol_audio_core",
        "sysvol_audio_macos",
        "sysvol_audio_linux",
        "sysvol_audio_windows",
    ]
}

/// Filter directive setting the same `level` for all of our crates
pub fn level_spec_for(level: &str) -> String {
    let lvl = level.to_ascii_lowercase();
    our_crates()
        .iter()
        .map(|t| format!("{}={}", t, lvl))
        .collect::<Vec<_>>()
        .join(",")
}

/// Final filter spec with precedence:
/// - `log_filter`
/// - `trace`/`debug`/`log_level` (crate-scoped)
/// - `RUST_LOG`
/// - crate-scoped `warn`
pub fn compute_spec(args: &LogArgs, rust_log: Option<String>) -> String {
    if let Some(spec) = &args.log_filter {
        return spec.clone();
    }
    if args.trace {
        return level_spec_for("trace");
    }
    if args.debug {
        return level_spec_for("debug");
    }
    if let Some(lvl) = &args.log_level {
        return level_spec_for(lvl);
    }
    rust_log.unwrap_or_else(|| level_spec_for("warn"))
}

pub fn init(args: &LogArgs) {
    let spec = compute_spec(args, env::var("RUST_LOG").ok());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&spec))
        .with_writer(std::io::stderr)
        .compact()
        .init();

    tracing::debug!(filter = %spec, "Logging initialized");
}
