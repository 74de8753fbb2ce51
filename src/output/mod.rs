//! Command output: JSON envelopes and progress bars.

pub mod json_envelope;
pub mod progress;

pub use json_envelope::{
    AlbumTitlePayload, ConfigPayload, ResultType, SegmentEntry, SplitPayload, TagPlanPayload,
    emit_json_result,
};
