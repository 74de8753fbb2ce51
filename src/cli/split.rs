//! CLI for the split subcommand.

use std::path::PathBuf;

use clap::Args;

use crate::config::{ParseMode, TimeMode};
use crate::constants::tracklist::STDIN_PATH;

/// Arguments for the split subcommand.
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Recording to split.
    pub source: PathBuf,

    /// Track list file, one track per line ("-" reads stdin).
    #[arg(short, long, default_value = STDIN_PATH, env = "TRACKCUT_TRACKS")]
    pub tracks: PathBuf,

    /// Directory for the produced tracks (default: next to the source).
    #[arg(short, long, env = "TRACKCUT_OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Whether track list times are start offsets or track lengths.
    #[arg(long, value_enum, env = "TRACKCUT_TIME_MODE")]
    pub time_mode: Option<TimeMode>,

    /// Require every line to be a track (strict) or scan free text (lenient).
    #[arg(long, value_enum, env = "TRACKCUT_PARSE_MODE")]
    pub parse_mode: Option<ParseMode>,

    /// ffmpeg program to run (overrides config).
    #[arg(long, env = "TRACKCUT_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,

    /// Replace existing track files.
    #[arg(long)]
    pub overwrite: bool,

    /// Print the plan without cutting anything.
    #[arg(long)]
    pub dry_run: bool,
}
