//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "trackcut";

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Time value grammar limits.
pub mod time {
    /// Maximum number of `:`-separated fields (`hh:mm:ss`).
    pub const MAX_FIELDS: usize = 3;

    /// Maximum digits per field.
    pub const MAX_FIELD_DIGITS: usize = 2;

    /// Largest accepted value of any single field.
    ///
    /// Sixty, not fifty-nine: `0:60` has always been accepted and equals `1:00`.
    pub const MAX_FIELD_VALUE: u64 = 60;

    /// Seconds per minute and minutes per hour.
    pub const BASE: u64 = 60;
}

/// Track list input hints.
pub mod tracklist {
    /// Canonical example line shown when a line cannot be parsed.
    pub const EXAMPLE_LINE: &str = "trackname - 3:45";

    /// Path placeholder used when the track list is read from stdin.
    pub const STDIN_PATH: &str = "-";
}

/// Output file naming.
pub mod naming {
    /// Zero-padded width of the track index in output file names.
    pub const INDEX_WIDTH: usize = 2;

    /// Separator between track index and track title.
    pub const INDEX_SEPARATOR: &str = " - ";
}

/// External audio cutter defaults.
pub mod ffmpeg {
    /// Default program name, resolved through `PATH`.
    pub const DEFAULT_PROGRAM: &str = "ffmpeg";
}

/// Audio file extensions considered when listing an album directory.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "m4a", "aac", "ogg", "opus", "flac", "wav"];
