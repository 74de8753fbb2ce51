//! Running segmentation plans against a recording.
//!
//! The planner decides where to cut; an [`AudioCutter`] does the cutting.
//! [`FfmpegCutter`] is the only production cutter.

pub mod command;
mod cutter;

pub use cutter::{AudioCutter, FfmpegCutter};
