//! Canonical time values for track timelines.
//!
//! Every track offset or duration entered by a user is normalized into a
//! [`TimeValue`] before it is compared or summed.

mod cache;
mod time_value;

pub use cache::TimeCache;
pub use time_value::TimeValue;
