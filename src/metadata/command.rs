//! Tags command execution.

use tracing::info;

use crate::Error;
use crate::cli::TagsArgs;
use crate::config::OutputMode;
use crate::output::{ResultType, TagPlanPayload, emit_json_result};

use super::{build_tag_plan, list_audio_files};

/// Execute the tags command.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed.
pub fn execute(args: &TagsArgs, output_mode: OutputMode) -> Result<(), Error> {
    let files = list_audio_files(&args.dir)?;
    info!("Found {} audio files in {}", files.len(), args.dir.display());

    let plan = build_tag_plan(&files, &args.overrides());

    if output_mode.is_structured() {
        let payload = TagPlanPayload {
            result_type: ResultType::TagPlan,
            directory: args.dir.clone(),
            files: plan,
        };
        return emit_json_result(&payload);
    }

    for entry in &plan {
        let number = entry
            .track_number
            .map_or_else(|| "--".to_string(), |n| format!("{n:02}"));
        let name = entry
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!(
            "{number}  {}  [{}]  ({name})",
            entry.title.as_deref().unwrap_or("-"),
            describe_album(entry.artist.as_deref(), entry.album.as_deref(), entry.year.as_deref()),
        );
    }

    Ok(())
}

fn describe_album(artist: Option<&str>, album: Option<&str>, year: Option<&str>) -> String {
    let mut parts: Vec<&str> = [artist, album, year].into_iter().flatten().collect();
    if parts.is_empty() {
        parts.push("no album tags");
    }
    parts.join(" / ")
}
