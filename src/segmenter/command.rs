//! Split command execution.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::Error;
use crate::cli::SplitArgs;
use crate::config::{Config, OutputMode, ParseMode, TimeMode};
use crate::constants::tracklist::{EXAMPLE_LINE, STDIN_PATH};
use crate::output::progress;
use crate::output::{ResultType, SegmentEntry, SplitPayload, emit_json_result};
use crate::plan::{SegmentPlanEntry, SegmentPlanner};
use crate::tracklist::{
    AlbumTitleFields, TrackRecord, parse_album_style_list, parse_album_title_from_path,
    parse_lines,
};

use super::{AudioCutter, FfmpegCutter};

/// Execute the split command with ffmpeg as the cutter.
///
/// # Errors
///
/// Returns an error if the track list cannot be read or planned, or if any
/// segment fails to cut.
pub fn execute(
    args: &SplitArgs,
    config: &Config,
    output_mode: OutputMode,
    show_progress: bool,
) -> Result<(), Error> {
    let mut ffmpeg = config.ffmpeg.clone();
    if let Some(program) = &args.ffmpeg {
        ffmpeg.program.clone_from(program);
    }
    ffmpeg.overwrite |= args.overwrite;

    let cutter = FfmpegCutter::from_config(&ffmpeg);
    execute_with_cutter(args, config, output_mode, show_progress, &cutter)
}

/// Execute the split command with any [`AudioCutter`].
pub fn execute_with_cutter<C: AudioCutter>(
    args: &SplitArgs,
    config: &Config,
    output_mode: OutputMode,
    show_progress: bool,
    cutter: &C,
) -> Result<(), Error> {
    let time_mode = args.time_mode.unwrap_or(config.defaults.time_mode);
    let parse_mode = args.parse_mode.unwrap_or(config.defaults.parse_mode);

    let text = read_track_list(&args.tracks)?;
    let records = parse_track_list(&text, parse_mode)?;
    if records.is_empty() {
        warn!("No tracks found; expected lines such as '{EXAMPLE_LINE}'");
    }
    debug!("Parsed {} tracks ({parse_mode:?}, {time_mode:?})", records.len());

    let target_dir = resolve_target_dir(args, config);
    let planner = SegmentPlanner::new();
    let plan = match time_mode {
        TimeMode::Timestamps => {
            planner.from_absolute_timestamps(&records, &args.source, &target_dir)?
        }
        TimeMode::Durations => planner.from_durations(&records, &args.source, &target_dir)?,
    };

    let album = parse_album_title_from_path(&args.source);
    if !album.is_empty() {
        info!(
            "Album guess: artist={}, album={}, year={}",
            album.artist.as_deref().unwrap_or("?"),
            album.album.as_deref().unwrap_or("?"),
            album.year.as_deref().unwrap_or("?")
        );
    }

    let report = SplitReport {
        source: &args.source,
        target_dir: &target_dir,
        time_mode,
        parse_mode,
        album,
        plan: &plan,
    };

    if args.dry_run {
        return report.emit(output_mode, true);
    }

    if !args.source.exists() {
        return Err(Error::SourceAudioNotFound {
            path: args.source.clone(),
        });
    }

    std::fs::create_dir_all(&target_dir).map_err(|e| Error::OutputDirCreateFailed {
        path: target_dir.clone(),
        source: e,
    })?;

    cut_all(
        &args.source,
        &plan,
        cutter,
        show_progress && !output_mode.is_structured(),
        output_mode,
    )?;

    report.emit(output_mode, false)
}

/// Read the track list from a file, or stdin for `-`.
fn read_track_list(path: &Path) -> Result<String, Error> {
    let result = if path.as_os_str() == STDIN_PATH {
        io::read_to_string(io::stdin())
    } else {
        std::fs::read_to_string(path)
    };

    result.map_err(|e| Error::TracksRead {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_track_list(text: &str, parse_mode: ParseMode) -> Result<Vec<TrackRecord>, Error> {
    match parse_mode {
        ParseMode::Strict => parse_lines(text),
        ParseMode::Lenient => Ok(parse_album_style_list(text)),
    }
}

/// Output directory resolution order:
/// 1. `--output`
/// 2. `defaults.output_dir` from config
/// 3. The source recording's directory
fn resolve_target_dir(args: &SplitArgs, config: &Config) -> PathBuf {
    args.output
        .clone()
        .or_else(|| config.defaults.output_dir.clone())
        .unwrap_or_else(|| match args.source.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        })
}

/// Cut every planned segment, continuing past failures.
fn cut_all<C: AudioCutter>(
    source: &Path,
    plan: &[SegmentPlanEntry],
    cutter: &C,
    show_progress: bool,
    output_mode: OutputMode,
) -> Result<(), Error> {
    let source_name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let pb = progress::create_segment_progress(plan.len(), &source_name, show_progress);

    let mut failed = 0;
    for entry in plan {
        progress::set_progress_message(pb.as_ref(), &entry.title);

        match cutter.cut(source, entry) {
            Ok(path) => {
                if !output_mode.is_structured() {
                    progress::println_progress(
                        pb.as_ref(),
                        &format!("  {} -> {}", entry.title, path.display()),
                    );
                }
            }
            Err(e) => {
                warn!("Failed to cut track {} '{}': {e}", entry.index, entry.title);
                failed += 1;
            }
        }

        progress::inc_progress(pb.as_ref());
    }

    progress::finish_progress(pb, "done");

    if failed > 0 {
        return Err(Error::SegmentationFailed {
            failed,
            total: plan.len(),
        });
    }

    info!("Split {} into {} tracks", source.display(), plan.len());
    Ok(())
}

/// Everything reported about one split.
struct SplitReport<'a> {
    source: &'a Path,
    target_dir: &'a Path,
    time_mode: TimeMode,
    parse_mode: ParseMode,
    album: AlbumTitleFields,
    plan: &'a [SegmentPlanEntry],
}

impl SplitReport<'_> {
    fn emit(self, output_mode: OutputMode, dry_run: bool) -> Result<(), Error> {
        if output_mode.is_structured() {
            let payload = SplitPayload {
                result_type: ResultType::Split,
                source: self.source.to_path_buf(),
                output_dir: self.target_dir.to_path_buf(),
                time_mode: self.time_mode,
                parse_mode: self.parse_mode,
                dry_run,
                album: self.album,
                segments: self.plan.iter().map(SegmentEntry::from).collect(),
            };
            return emit_json_result(&payload);
        }

        if dry_run {
            for entry in self.plan {
                let end = entry
                    .end
                    .as_ref()
                    .map_or_else(|| "end".to_string(), |end| end.compact());
                println!(
                    "{:>8} - {:<8} {}",
                    entry.start.compact(),
                    end,
                    entry.output_path.display()
                );
            }
        }

        Ok(())
    }
}
