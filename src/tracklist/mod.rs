//! Free-text track list and album title parsing.
//!
//! Two track list grammars are offered: [`parse_lines`] requires every
//! non-blank line to be a track and reports the first bad line, while
//! [`parse_album_style_list`] picks out whatever looks like a track from
//! messier text. Callers choose based on how much they trust the input.

mod parser;
mod title;

pub use parser::{TrackRecord, parse_album_style_list, parse_lines};
pub use title::{AlbumTitleFields, parse_album_title, parse_album_title_from_path};
