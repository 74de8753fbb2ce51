//! Audio cutting backends.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::config::FfmpegConfig;
use crate::error::{Error, Result};
use crate::plan::SegmentPlanEntry;

/// Something that can copy one segment of a recording into its own file.
pub trait AudioCutter {
    /// Write `entry`'s range of `source` to `entry.output_path`.
    ///
    /// Returns the path of the written file.
    fn cut(&self, source: &Path, entry: &SegmentPlanEntry) -> Result<PathBuf>;
}

/// Cuts segments by running ffmpeg with stream copy, so audio is never
/// re-encoded.
#[derive(Debug, Clone)]
pub struct FfmpegCutter {
    program: PathBuf,
    overwrite: bool,
    extra_args: Vec<String>,
}

impl FfmpegCutter {
    /// Create a cutter running `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            overwrite: false,
            extra_args: Vec::new(),
        }
    }

    /// Create a cutter from the `[ffmpeg]` config section.
    pub fn from_config(config: &FfmpegConfig) -> Self {
        Self {
            program: config.program.clone(),
            overwrite: config.overwrite,
            extra_args: config.extra_args.clone(),
        }
    }

    /// Replace existing output files (`-y`) instead of refusing (`-n`).
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Program that will be run.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments passed to ffmpeg for one segment.
    pub fn command_args(&self, source: &Path, entry: &SegmentPlanEntry) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-hide_banner".into(),
            "-loglevel".into(),
            "error".into(),
            OsString::from(if self.overwrite { "-y" } else { "-n" }),
            "-i".into(),
            source.into(),
            "-ss".into(),
            entry.start_seconds().to_string().into(),
        ];

        if let Some(end) = entry.end_seconds() {
            args.push("-to".into());
            args.push(end.to_string().into());
        }

        args.extend(self.extra_args.iter().map(OsString::from));
        args.push("-c".into());
        args.push("copy".into());
        args.push(entry.output_path.as_os_str().to_owned());
        args
    }
}

impl AudioCutter for FfmpegCutter {
    fn cut(&self, source: &Path, entry: &SegmentPlanEntry) -> Result<PathBuf> {
        let args = self.command_args(source, entry);
        debug!("Running {} {:?}", self.program.display(), args);

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| Error::CutterSpawn {
                program: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(Error::CutFailed {
                path: entry.output_path.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(entry.output_path.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::timeline::TimeValue;

    fn entry(start: &str, end: Option<&str>) -> SegmentPlanEntry {
        SegmentPlanEntry {
            index: 2,
            title: "Verse".to_string(),
            output_path: PathBuf::from("/music/02 - Verse.mp3"),
            start: TimeValue::parse(start).unwrap(),
            end: end.map(|e| TimeValue::parse(e).unwrap()),
        }
    }

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn test_command_args_bounded_segment() {
        let cutter = FfmpegCutter::new("ffmpeg");
        let args = cutter.command_args(Path::new("/dl/album.mp3"), &entry("1:10", Some("1:50")));
        assert_eq!(
            strings(&args),
            [
                "-hide_banner", "-loglevel", "error", "-n", "-i", "/dl/album.mp3", "-ss", "70",
                "-to", "110", "-c", "copy", "/music/02 - Verse.mp3",
            ]
        );
    }

    #[test]
    fn test_command_args_final_segment_has_no_end() {
        let cutter = FfmpegCutter::new("ffmpeg").with_overwrite(true);
        let args = strings(&cutter.command_args(Path::new("album.mp3"), &entry("1:50", None)));
        assert!(!args.contains(&"-to".to_string()));
        assert_eq!(args[3], "-y");
    }

    #[test]
    fn test_command_args_extra_args_before_output() {
        let config = FfmpegConfig {
            program: PathBuf::from("/opt/ffmpeg"),
            overwrite: false,
            extra_args: vec!["-map_metadata".to_string(), "-1".to_string()],
        };
        let cutter = FfmpegCutter::from_config(&config);
        assert_eq!(cutter.program(), Path::new("/opt/ffmpeg"));

        let args = strings(&cutter.command_args(Path::new("a.mp3"), &entry("0", Some("10"))));
        let tail: Vec<&str> = args[args.len() - 5..].iter().map(String::as_str).collect();
        assert_eq!(tail, ["-map_metadata", "-1", "-c", "copy", "/music/02 - Verse.mp3"]);
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let cutter = FfmpegCutter::new("/nonexistent/bin/ffmpeg");
        let result = cutter.cut(Path::new("album.mp3"), &entry("0", None));
        assert!(matches!(result, Err(Error::CutterSpawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_program_is_cut_error() {
        let cutter = FfmpegCutter::new("false");
        let result = cutter.cut(Path::new("album.mp3"), &entry("0", None));
        assert!(matches!(result, Err(Error::CutFailed { .. })));
    }
}
