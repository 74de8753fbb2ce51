//! CLI for the tags subcommand.

use std::path::PathBuf;

use clap::Args;

use crate::cli::validators::parse_year;
use crate::metadata::TagOverrides;

/// Arguments for the tags subcommand.
#[derive(Debug, Args)]
pub struct TagsArgs {
    /// Directory holding the split tracks.
    pub dir: PathBuf,

    /// Track artist.
    #[arg(long)]
    pub artist: Option<String>,

    /// Album artist.
    #[arg(long)]
    pub album_artist: Option<String>,

    /// Album name.
    #[arg(long)]
    pub album: Option<String>,

    /// Release year.
    #[arg(long, value_parser = parse_year)]
    pub year: Option<String>,

    /// Do not take track numbers from file names.
    #[arg(long)]
    pub no_track_number: bool,

    /// Do not take titles from file names.
    #[arg(long)]
    pub no_track_name: bool,
}

impl TagsArgs {
    /// Tag overrides described by these arguments.
    pub fn overrides(&self) -> TagOverrides {
        TagOverrides {
            artist: self.artist.clone(),
            album_artist: self.album_artist.clone(),
            album: self.album.clone(),
            year: self.year.clone(),
            track_number: !self.no_track_number,
            track_name: !self.no_track_name,
        }
    }
}
