//! Configuration type definitions.

use crate::constants::ffmpeg::DEFAULT_PROGRAM;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default split settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Audio cutter settings.
    #[serde(default)]
    pub ffmpeg: FfmpegConfig,
}

/// Default split settings, overridden by command-line flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Directory for produced tracks. When unset, tracks are written next
    /// to the source recording.
    pub output_dir: Option<PathBuf>,

    /// How the time column of a track list is read.
    pub time_mode: TimeMode,

    /// How strictly a track list is parsed.
    pub parse_mode: ParseMode,
}

/// Meaning of the time column in a track list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeMode {
    /// Each time is the track's start offset.
    #[default]
    Timestamps,
    /// Each time is the track's length.
    Durations,
}

/// Track list grammar selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Every non-blank line must be a track.
    #[default]
    Strict,
    /// Pick tracks out of free text, ignoring the rest.
    Lenient,
}

/// External ffmpeg settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FfmpegConfig {
    /// Program to run, either a name looked up in `PATH` or a full path.
    pub program: PathBuf,

    /// Replace existing output files instead of failing.
    pub overwrite: bool,

    /// Extra arguments inserted before the output path.
    pub extra_args: Vec<String>,
}

impl Default for FfmpegConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            overwrite: false,
            extra_args: Vec::new(),
        }
    }
}

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Plain text for people.
    #[default]
    Human,
    /// One JSON envelope per result.
    Json,
}

impl OutputMode {
    /// Whether output is machine-readable.
    pub fn is_structured(self) -> bool {
        matches!(self, Self::Json)
    }
}
