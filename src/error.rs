//! Error types for trackcut.

use std::path::PathBuf;

/// Result type alias for trackcut operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for trackcut.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Timeline and track list errors
    /// A time value does not match the `hh:mm:ss` grammar or a field exceeds 60.
    #[error("timestamp given: '{text}'. Please use the 'hh:mm:ss' format")]
    WrongTimestampFormat {
        /// The offending raw text.
        text: String,
    },

    /// A track list line does not match the line grammar.
    #[error("couldn't parse line {line_number}: '{line}'. Please use a format such as 'trackname - 3:45'")]
    LineFormat {
        /// 1-based line number within the submitted block.
        line_number: usize,
        /// The offending line, trimmed.
        line: String,
    },

    /// Track start offsets are not strictly increasing.
    #[error(
        "track '{position} - {name}' starting timestamp '{time}' should be later than track '{previous_position} - {previous_name}' starting timestamp '{previous_time}'"
    )]
    TrackTimestampsSequence {
        /// 1-based position of the earlier track.
        previous_position: usize,
        /// Name of the earlier track.
        previous_name: String,
        /// Raw time text of the earlier track.
        previous_time: String,
        /// 1-based position of the offending track.
        position: usize,
        /// Name of the offending track.
        name: String,
        /// Raw time text of the offending track.
        time: String,
    },

    /// A plan was requested for a track list with no tracks.
    #[error("track list contains no tracks")]
    EmptyTrackList,

    /// Failed to read the track list input.
    #[error("failed to read track list from '{path}'")]
    TracksRead {
        /// Path of the track list ("-" for stdin).
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    // Configuration errors
    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    // Segmentation errors
    /// Source audio file does not exist.
    #[error("source audio file not found: {path}")]
    SourceAudioNotFound {
        /// Expected path to the audio file.
        path: PathBuf,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreateFailed {
        /// Path to the output directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The audio cutting program could not be started.
    #[error("failed to run audio cutter '{program}'")]
    CutterSpawn {
        /// Program that was invoked.
        program: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The audio cutting program reported a failure for one segment.
    #[error("audio cutter failed to write '{path}' ({status}): {stderr}")]
    CutFailed {
        /// Output path of the segment.
        path: PathBuf,
        /// Exit status description.
        status: String,
        /// Captured standard error of the cutter.
        stderr: String,
    },

    /// One or more segments could not be produced.
    #[error("{failed} of {total} segments failed")]
    SegmentationFailed {
        /// Number of failed segments.
        failed: usize,
        /// Number of planned segments.
        total: usize,
    },

    /// Failed to list an album directory.
    #[error("failed to read album directory '{path}'")]
    AlbumDirRead {
        /// Path to the directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON output")]
    JsonSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Whether the error stems from malformed input text (bad time or bad line).
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::WrongTimestampFormat { .. } | Self::LineFormat { .. }
        )
    }

    /// Whether the error is a non-increasing track timeline.
    ///
    /// Callers that prompt a human can loop on these and treat format
    /// errors as fatal to the current attempt.
    pub fn is_sequence_error(&self) -> bool {
        matches!(self, Self::TrackTimestampsSequence { .. })
    }
}
