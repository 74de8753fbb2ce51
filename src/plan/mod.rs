//! Segmentation plans.
//!
//! A plan is the ordered list of cuts that turns one long recording into
//! per-track files. Plans are pure data; running them is the job of
//! [`crate::segmenter`].

mod entry;
mod planner;

pub use entry::{CutInstruction, SegmentPlanEntry};
pub use planner::SegmentPlanner;
