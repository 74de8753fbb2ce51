//! Segmentation plan entries.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::naming::{INDEX_SEPARATOR, INDEX_WIDTH};
use crate::timeline::TimeValue;

/// One cut of the source recording into a track file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPlanEntry {
    /// 1-based position of the track in the list.
    pub index: usize,
    /// Track title as entered.
    pub title: String,
    /// Path of the file to produce.
    pub output_path: PathBuf,
    /// Offset of the track start in the source.
    pub start: TimeValue,
    /// Offset of the track end, `None` for the final track (cut to the end
    /// of the source).
    pub end: Option<TimeValue>,
}

impl SegmentPlanEntry {
    /// File name of the output, e.g. `01 - Intro.mp3`.
    pub fn output_name(&self) -> String {
        self.output_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Start offset in seconds.
    pub fn start_seconds(&self) -> u64 {
        self.start.seconds()
    }

    /// End offset in seconds, if bounded.
    pub fn end_seconds(&self) -> Option<u64> {
        self.end.as_ref().map(TimeValue::seconds)
    }

    /// Length of the segment, if bounded.
    pub fn duration(&self) -> Option<TimeValue> {
        self.end.as_ref().and_then(|end| end.checked_sub(&self.start))
    }

    /// The instruction handed to the audio cutter.
    pub fn cut_instruction(&self) -> CutInstruction {
        CutInstruction {
            output_path: self.output_path.clone(),
            start_seconds: self.start_seconds(),
            end_seconds: self.end_seconds(),
        }
    }
}

/// `(output path, start seconds[, end seconds])` for the audio cutter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CutInstruction {
    /// Path of the file to produce.
    pub output_path: PathBuf,
    /// Start offset in seconds.
    pub start_seconds: u64,
    /// End offset in seconds; absent means "to end of source".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_seconds: Option<u64>,
}

/// Build `<index> - <title><extension>`.
pub(crate) fn output_file_name(index: usize, title: &str, extension: &str) -> String {
    let safe_title = sanitize_filename(title);
    format!(
        "{index:0width$}{INDEX_SEPARATOR}{safe_title}{extension}",
        width = INDEX_WIDTH
    )
}

/// Extension of the source file including the dot, or empty.
pub(crate) fn source_extension(source_file: &Path) -> String {
    source_file
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Sanitize a track title for use as a file name.
///
/// Replaces characters that are invalid in file names across platforms
/// and prevents path traversal.
fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect();

    sanitized.replace("..", "__")
}
