//! JSON envelope types for CLI output.
//!
//! With `--json`, every command result is written to stdout as a single
//! envelope so trackcut can sit behind scripts or a web frontend.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use crate::config::{ParseMode, TimeMode};
use crate::error::{Error, Result};
use crate::metadata::TagPlanEntry;
use crate::plan::SegmentPlanEntry;
use crate::tracklist::AlbumTitleFields;

/// Version of the JSON envelope format.
pub const SPEC_VERSION: &str = "1.0";

/// JSON envelope wrapping all CLI output events.
#[derive(Debug, Serialize)]
pub struct JsonEnvelope<T> {
    /// API specification version.
    pub spec_version: String,
    /// Event timestamp.
    pub timestamp: DateTime<Utc>,
    /// Event type.
    pub event: EventType,
    /// Event-specific payload.
    pub payload: T,
}

impl<T: Serialize> JsonEnvelope<T> {
    /// Create a new envelope with the current timestamp.
    pub fn new(event: EventType, payload: T) -> Self {
        Self {
            spec_version: SPEC_VERSION.to_string(),
            timestamp: Utc::now(),
            event,
            payload,
        }
    }
}

/// Event types for JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Final result.
    Result,
}

/// Result type discriminator for result payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    /// Segmentation plan, executed or not.
    Split,
    /// Album title fields.
    AlbumTitle,
    /// Inferred track tags.
    TagPlan,
    /// Configuration display.
    Config,
}

/// Payload for the split result.
#[derive(Debug, Clone, Serialize)]
pub struct SplitPayload {
    /// Result type discriminator.
    pub result_type: ResultType,
    /// Recording that was split.
    pub source: PathBuf,
    /// Directory holding the tracks.
    pub output_dir: PathBuf,
    /// How track list times were read.
    pub time_mode: TimeMode,
    /// Track list grammar used.
    pub parse_mode: ParseMode,
    /// Whether the plan was only printed.
    pub dry_run: bool,
    /// Album fields guessed from the source file name.
    pub album: AlbumTitleFields,
    /// Planned segments in track order.
    pub segments: Vec<SegmentEntry>,
}

/// A single planned segment.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentEntry {
    /// 1-based track position.
    pub index: usize,
    /// Track title.
    pub title: String,
    /// Output file path.
    pub output_file: PathBuf,
    /// Start offset as written in the track list.
    pub start: String,
    /// Start offset in seconds.
    pub start_seconds: u64,
    /// End offset in seconds, absent for the final track.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_seconds: Option<u64>,
}

impl From<&SegmentPlanEntry> for SegmentEntry {
    fn from(entry: &SegmentPlanEntry) -> Self {
        Self {
            index: entry.index,
            title: entry.title.clone(),
            output_file: entry.output_path.clone(),
            start: entry.start.to_string(),
            start_seconds: entry.start_seconds(),
            end_seconds: entry.end_seconds(),
        }
    }
}

/// Payload for the title result.
#[derive(Debug, Clone, Serialize)]
pub struct AlbumTitlePayload {
    /// Result type discriminator.
    pub result_type: ResultType,
    /// Title that was parsed.
    pub title: String,
    /// Recognized fields.
    #[serde(flatten)]
    pub fields: AlbumTitleFields,
}

/// Payload for the tags result.
#[derive(Debug, Clone, Serialize)]
pub struct TagPlanPayload {
    /// Result type discriminator.
    pub result_type: ResultType,
    /// Directory that was listed.
    pub directory: PathBuf,
    /// One entry per audio file.
    pub files: Vec<TagPlanEntry>,
}

/// Payload for config show result.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigPayload {
    /// Result type discriminator.
    pub result_type: ResultType,
    /// Path to the config file.
    pub config_path: PathBuf,
    /// The configuration contents (as JSON value for flexibility).
    pub config: serde_json::Value,
}

/// Emit a JSON result event to stdout.
pub fn emit_json_result<T: Serialize>(payload: &T) -> Result<()> {
    let envelope = JsonEnvelope::new(EventType::Result, payload);
    let json = serde_json::to_string(&envelope).map_err(|e| Error::JsonSerialize { source: e })?;
    println!("{json}");
    Ok(())
}
