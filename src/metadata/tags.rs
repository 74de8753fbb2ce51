//! Track tag inference from produced file names.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::constants::AUDIO_EXTENSIONS;
use crate::error::{Error, Result};

/// Optional 1-3 digit track number, a separator, then the title.
#[allow(clippy::expect_used)]
static TRACK_FILE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    // Pattern is hardcoded and known to be valid
    Regex::new(r"^(?:([0-9]{1,3})(?:[ \t]*[.-][ \t]*|[ \t]+))?(.*\S)$")
        .expect("valid track file name pattern")
});

/// Track number and title recovered from a file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackFileFields {
    /// Leading track number, if the name has one.
    pub track_number: Option<u32>,
    /// Remaining file stem.
    pub title: String,
}

/// User-supplied tag values and switches for inferred ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct TagOverrides {
    /// Track artist.
    pub artist: Option<String>,
    /// Album artist.
    pub album_artist: Option<String>,
    /// Album name.
    pub album: Option<String>,
    /// Release year.
    pub year: Option<String>,
    /// Keep the track number inferred from the file name.
    pub track_number: bool,
    /// Keep the title inferred from the file name.
    pub track_name: bool,
}

/// Tags that would be written to one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagPlanEntry {
    /// File the tags belong to.
    pub path: PathBuf,
    /// Track artist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Album artist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_artist: Option<String>,
    /// Album name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// Release year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Track number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_number: Option<u32>,
    /// Track title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Infer track number and title from a file name such as
/// `01 - Loyal to the Pack.mp3`.
///
/// The extension is dropped first. Returns `None` for a name with no
/// visible characters.
pub fn infer_track_fields(file_name: &str) -> Option<TrackFileFields> {
    let path = Path::new(file_name);
    let stem = path.file_stem()?.to_string_lossy();
    let captures = TRACK_FILE_NAME.captures(stem.trim_start())?;

    Some(TrackFileFields {
        track_number: captures.get(1).and_then(|m| m.as_str().parse().ok()),
        title: captures.get(2)?.as_str().to_string(),
    })
}

/// Build the tag plan for a set of files, ordered by path.
pub fn build_tag_plan(files: &[PathBuf], overrides: &TagOverrides) -> Vec<TagPlanEntry> {
    let mut sorted: Vec<&PathBuf> = files.iter().collect();
    sorted.sort();

    sorted
        .into_iter()
        .map(|path| {
            let inferred = path
                .file_name()
                .and_then(|name| infer_track_fields(&name.to_string_lossy()));
            let (track_number, title) = match inferred {
                Some(fields) => (fields.track_number, Some(fields.title)),
                None => (None, None),
            };

            TagPlanEntry {
                path: path.clone(),
                artist: overrides.artist.clone(),
                album_artist: overrides.album_artist.clone(),
                album: overrides.album.clone(),
                year: overrides.year.clone(),
                track_number: track_number.filter(|_| overrides.track_number),
                title: title.filter(|_| overrides.track_name),
            }
        })
        .collect()
}

/// List the audio files directly inside `dir`, sorted by path.
pub fn list_audio_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_err = |source| Error::AlbumDirRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_file() && is_audio_file(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| AUDIO_EXTENSIONS.contains(&ext.as_str()))
}
