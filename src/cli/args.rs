//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// Configuration bootstrap for a self-hosted portfolio site.
///
/// Creates `config.json` with defaults on first run, heals missing keys on
/// later runs, and refuses to proceed while the placeholder admin
/// credentials are still in place.
#[derive(Parser, Debug)]
#[command(name = "siteboot", author, version, about)]
pub struct Cli {
    /// Path to the config file (defaults to ./config.json).
    #[arg(short, long, env = "SITEBOOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", env = "SITEBOOT_COLOR")]
    pub color: ColorChoice,
}

/// Color output control.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Color when stderr is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}
