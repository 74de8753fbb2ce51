//! CLI argument definitions.

use crate::cli::{SplitArgs, TagsArgs};
use crate::config::OutputMode;
use clap::{Parser, Subcommand};

/// Split a long audio recording into tracks from a pasted track list.
#[derive(Debug, Parser)]
#[command(name = "trackcut")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors, hide progress bars.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON envelopes on stdout.
    #[arg(long, global = true, env = "TRACKCUT_JSON")]
    pub json: bool,
}

impl Cli {
    /// Output mode selected by the global flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split a recording into one file per track.
    Split(SplitArgs),
    /// Guess artist, album and year from an album title.
    Title {
        /// Title text, e.g. "Radiohead - OK Computer (1997)".
        title: String,
    },
    /// Show the tags inferred for a directory of split tracks.
    Tags(TagsArgs),
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}
