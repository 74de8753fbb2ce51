//! Album title parsing.
//!
//! Best-effort extraction of artist, album and year from a descriptive
//! title such as `Radiohead - OK Computer (1997)`.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Single punctuation separator between artist and album.
const ARTIST_SEPARATOR: &str = r"[ \t]*[.-][ \t]*";

/// Separator before the year.
const YEAR_SEPARATOR: &str = r"[ \t.-]+";

/// Greedy word-ish span (artist or album).
const WORDS: &str = r"([\w ]*\w)";

/// Four-digit year, optionally parenthesized.
const YEAR: &str = r"\(?([0-9]{4})\)?";

/// Fields extracted from an album title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlbumTitleFields {
    /// Performing artist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Album name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// Four-digit release year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl AlbumTitleFields {
    /// Whether no field was recognized.
    pub fn is_empty(&self) -> bool {
        self.artist.is_none() && self.album.is_none() && self.year.is_none()
    }
}

/// Which field a capture group fills.
#[derive(Debug, Clone, Copy)]
enum Field {
    Artist,
    Album,
    Year,
}

/// One grammar in the cascade.
struct TitleRule {
    regex: Regex,
    fields: &'static [Field],
}

impl TitleRule {
    #[allow(clippy::expect_used)]
    fn new(parts: &[&str], fields: &'static [Field]) -> Self {
        Self {
            // Parts are constants and known to form a valid pattern
            regex: Regex::new(&parts.concat()).expect("valid album title pattern"),
            fields,
        }
    }

    fn apply(&self, title: &str) -> Option<AlbumTitleFields> {
        let captures = self.regex.captures(title)?;
        let mut result = AlbumTitleFields::default();

        for (group, field) in self.fields.iter().enumerate() {
            let value = captures.get(group + 1).map(|m| m.as_str().to_string());
            match field {
                Field::Artist => result.artist = value,
                Field::Album => result.album = value,
                Field::Year => result.year = value,
            }
        }

        Some(result)
    }
}

/// Rules from most to least specific. The last one matches any title with
/// a word character in it, so order decides the result.
static TITLE_RULES: LazyLock<[TitleRule; 4]> = LazyLock::new(|| {
    [
        TitleRule::new(
            &[WORDS, ARTIST_SEPARATOR, WORDS, YEAR_SEPARATOR, YEAR],
            &[Field::Artist, Field::Album, Field::Year],
        ),
        TitleRule::new(&[WORDS, YEAR_SEPARATOR, YEAR], &[Field::Album, Field::Year]),
        TitleRule::new(
            &[WORDS, ARTIST_SEPARATOR, WORDS],
            &[Field::Artist, Field::Album],
        ),
        TitleRule::new(&[WORDS], &[Field::Album]),
    ]
});

/// Extract `{artist, album, year}` from a title.
///
/// Tries, in order: `artist - album (year)`, `album (year)`,
/// `artist - album`, `album`, and returns the first that matches. A title
/// without any word character yields empty fields.
pub fn parse_album_title(title: &str) -> AlbumTitleFields {
    TITLE_RULES
        .iter()
        .find_map(|rule| rule.apply(title))
        .unwrap_or_default()
}

/// Extract album fields from a file name, ignoring directory and extension.
pub fn parse_album_title_from_path(path: &Path) -> AlbumTitleFields {
    path.file_stem()
        .map(|stem| parse_album_title(&stem.to_string_lossy()))
        .unwrap_or_default()
}
