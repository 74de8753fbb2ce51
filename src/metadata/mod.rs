//! Track tag inference.
//!
//! Split tracks are named `<nn> - <title>.<ext>`, so number and title can
//! be read back from the file names and combined with album-level values
//! supplied by the user.

pub mod command;
mod tags;

pub use tags::{
    TagOverrides, TagPlanEntry, TrackFileFields, build_tag_plan, infer_track_fields,
    list_audio_files,
};
