//! CLI argument parsing and command handling.

mod args;
mod split;
mod tags;
pub mod validators;

pub use args::{Cli, Command, ConfigAction};
pub use split::SplitArgs;
pub use tags::TagsArgs;
