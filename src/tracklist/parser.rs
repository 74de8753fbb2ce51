//! Track list parsing.
//!
//! Turns a pasted block of text, one track per line, into ordered
//! `(name, time)` records. The time field is kept as raw text here; it is
//! validated when a plan is built from the records.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::Error;

/// Separator between a leading track number and the track name.
const NUMBER_SEPARATOR: &str = r"(?:[ \t]*[.,-][ \t]*|[ \t]+)";

/// Separator between the track name and the time field.
const TIME_SEPARATOR: &str = r"(?:[ \t]+|[ \t]*[.,-]+[ \t]*)";

/// Time field, `[hh:][mm:]ss` with one or two digits per field.
const TIME_FIELD: &str = r"((?:[0-9]{1,2}:){0,2}[0-9]{1,2})";

/// Strict single-line grammar: optional track number, name, separator, time.
///
/// The track number is consumed and discarded; track order comes from line
/// order. The name may hold apostrophes, parentheses and inner spaces but
/// must end on a word character or `)`.
#[allow(clippy::expect_used)]
static TRACK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^(?:[0-9]{{1,2}}{NUMBER_SEPARATOR})?([\w'() ’]*[\w)]){TIME_SEPARATOR}{TIME_FIELD}$"
    );
    // Pattern is assembled from constants and known to be valid
    Regex::new(&pattern).expect("valid track line pattern")
});

/// Lenient grammar, matched anywhere in the text.
#[allow(clippy::expect_used)]
static TRACK_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?:[0-9]{{1,2}}[ \t]*[.,-][ \t]*|[ \t]+)?([\w ]*\w){TIME_SEPARATOR}{TIME_FIELD}"
    );
    // Pattern is assembled from constants and known to be valid
    Regex::new(&pattern).expect("valid track pair pattern")
});

/// A track name with its raw time field.
///
/// The time is either an absolute start offset or a duration, depending on
/// how the caller interprets the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackRecord {
    /// Track title.
    pub name: String,
    /// Raw `hh:mm:ss`-shaped time text.
    pub time_text: String,
}

impl TrackRecord {
    /// Create a record from a name and raw time text.
    pub fn new(name: impl Into<String>, time_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time_text: time_text.into(),
        }
    }
}

/// Parse a track list, one track per line.
///
/// Blank lines are skipped. Every other line must match the full line
/// grammar, for example `01. Loyal to the Pack - 3:45` or `Intro 0:00`.
///
/// # Errors
///
/// Returns [`Error::LineFormat`] for the first line that does not match,
/// with its 1-based line number. No records are returned in that case.
pub fn parse_lines(text: &str) -> Result<Vec<TrackRecord>, Error> {
    let mut records = Vec::new();

    for (index, raw) in text.split('\n').enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let captures = TRACK_LINE.captures(line).ok_or_else(|| Error::LineFormat {
            line_number: index + 1,
            line: line.to_string(),
        })?;

        records.push(TrackRecord::new(&captures[1], &captures[2]));
    }

    Ok(records)
}

/// Scan text for `(name, time)` pairs without requiring whole-line matches.
///
/// Meant for messy pasted input such as video descriptions. Text that does
/// not look like a track is skipped silently, so this never fails.
pub fn parse_album_style_list(text: &str) -> Vec<TrackRecord> {
    TRACK_PAIR
        .captures_iter(text)
        .map(|captures| TrackRecord::new(&captures[1], &captures[2]))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record(name: &str, time: &str) -> TrackRecord {
        TrackRecord::new(name, time)
    }

    #[test]
    fn test_parse_dash_separated_line() {
        let records = parse_lines("Loyal to the Pack - 3:45").unwrap();
        assert_eq!(records, vec![record("Loyal to the Pack", "3:45")]);
    }

    #[test]
    fn test_parse_line_with_track_number() {
        let records = parse_lines("01. Doteru 3:45").unwrap();
        assert_eq!(records, vec![record("Doteru", "3:45")]);

        let records = parse_lines("2 - Pyramid Scheme - 1:02:03").unwrap();
        assert_eq!(records, vec![record("Pyramid Scheme", "1:02:03")]);
    }

    #[test]
    fn test_parse_line_separators() {
        let text = "Intro\t0:00\nSecond. 1:10\nThird , 1:50\nFourth-2:30";
        let records = parse_lines(text).unwrap();
        assert_eq!(
            records,
            vec![
                record("Intro", "0:00"),
                record("Second", "1:10"),
                record("Third", "1:50"),
                record("Fourth", "2:30"),
            ]
        );
    }

    #[test]
    fn test_parse_name_punctuation() {
        let records = parse_lines("Don't Stop (Live) - 4:01\nRock’n’Roll 5:00").unwrap();
        assert_eq!(records[0], record("Don't Stop (Live)", "4:01"));
        assert_eq!(records[1], record("Rock’n’Roll", "5:00"));
    }

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let text = "\n  Intro - 0:00  \r\n\n\tOutro - 10:00\n";
        let records = parse_lines(text).unwrap();
        assert_eq!(
            records,
            vec![record("Intro", "0:00"), record("Outro", "10:00")]
        );
    }

    #[test]
    fn test_parse_keeps_line_order() {
        let text = "03. C - 0:00\n01. A - 1:00\n02. B - 2:00";
        let names: Vec<String> = parse_lines(text)
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn test_parse_bare_file_name_fails() {
        let err = parse_lines("01. Loyal to the Pack.mp3").unwrap_err();
        assert!(matches!(
            err,
            Error::LineFormat { line_number: 1, ref line } if line == "01. Loyal to the Pack.mp3"
        ));
    }

    #[test]
    fn test_parse_reports_line_number_counting_blank_lines() {
        let err = parse_lines("Intro - 0:00\n\nno time here\n").unwrap_err();
        assert!(matches!(err, Error::LineFormat { line_number: 3, .. }));
    }

    #[test]
    fn test_parse_rejects_time_with_too_many_fields() {
        assert!(parse_lines("Intro - 1:02:03:04").is_err());
    }

    #[test]
    fn test_parse_does_not_validate_time_values() {
        let records = parse_lines("1. 2:70").unwrap();
        assert_eq!(records, vec![record("1", "2:70")]);
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_lines("").unwrap().is_empty());
        assert!(parse_lines("\n \n\t\n").unwrap().is_empty());
    }

    #[test]
    fn test_album_style_list_scans_messy_text() {
        let text = "Tracklist:\n01. Intro - 0:00\n02. Second Song 3:12 (fan favourite)\nThanks for listening";
        let records = parse_album_style_list(text);
        assert_eq!(
            records,
            vec![record("Intro", "0:00"), record("Second Song", "3:12")]
        );
    }

    #[test]
    fn test_album_style_list_without_matches() {
        assert!(parse_album_style_list("no tracks here").is_empty());
        assert!(parse_album_style_list("").is_empty());
    }
}
