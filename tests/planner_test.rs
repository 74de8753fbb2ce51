//! Tests for segmentation planning.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use trackcut::Error;
use trackcut::plan::SegmentPlanner;
use trackcut::timeline::{TimeCache, TimeValue};
use trackcut::tracklist::{TrackRecord, parse_lines};

fn records_from_offsets(offsets: &[u64]) -> Vec<TrackRecord> {
    offsets
        .iter()
        .enumerate()
        .map(|(i, &seconds)| {
            TrackRecord::new(
                format!("Track {}", i + 1),
                TimeValue::from_duration(seconds).compact(),
            )
        })
        .collect()
}

#[test]
fn test_plan_is_contiguous_and_increasing() {
    let offsets = [0, 95, 301, 302, 1800, 3599, 3600, 7261];
    let plan = SegmentPlanner::new()
        .from_absolute_timestamps(
            &records_from_offsets(&offsets),
            Path::new("/dl/live.flac"),
            Path::new("/music/live"),
        )
        .unwrap();

    assert_eq!(plan.len(), offsets.len());
    for (i, entry) in plan.iter().enumerate() {
        assert_eq!(entry.index, i + 1);
        assert_eq!(entry.start_seconds(), offsets[i]);
        assert!(entry.output_name().starts_with(&format!("{:02} - ", i + 1)));
        assert!(entry.output_name().ends_with(".flac"));
    }
    for pair in plan.windows(2) {
        assert_eq!(pair[0].end_seconds(), Some(pair[1].start_seconds()));
        assert!(pair[0].start_seconds() < pair[1].start_seconds());
    }
    assert!(plan[plan.len() - 1].end.is_none());
}

#[test]
fn test_durations_sum_to_offsets() {
    let durations = [225, 250, 5, 720, 61];
    let records: Vec<TrackRecord> = durations
        .iter()
        .enumerate()
        .map(|(i, &d)| TrackRecord::new(format!("T{i}"), TimeValue::from_duration(d).compact()))
        .collect();

    let plan = SegmentPlanner::new()
        .from_durations(&records, Path::new("album.mp3"), Path::new("out"))
        .unwrap();

    let mut expected_start = 0;
    for (entry, duration) in plan.iter().zip(durations) {
        assert_eq!(entry.start_seconds(), expected_start);
        expected_start += duration;
    }
    assert_eq!(plan[0].duration().unwrap().seconds(), 225);
}

#[test]
fn test_parsed_list_to_plan() {
    let records = parse_lines("01. Intro - 0:00\n02. Second gav - 1:10\n03. Third - 01:50").unwrap();
    let plan = SegmentPlanner::new()
        .from_absolute_timestamps(&records, Path::new("/dl/album.mp3"), Path::new("/music"))
        .unwrap();

    let instructions: Vec<_> = plan.iter().map(|e| e.cut_instruction()).collect();
    assert_eq!(instructions[0].output_path, PathBuf::from("/music/01 - Intro.mp3"));
    assert_eq!((instructions[0].start_seconds, instructions[0].end_seconds), (0, Some(70)));
    assert_eq!((instructions[1].start_seconds, instructions[1].end_seconds), (70, Some(110)));
    assert_eq!((instructions[2].start_seconds, instructions[2].end_seconds), (110, None));
}

#[test]
fn test_first_non_increasing_track_is_reported() {
    let records = parse_lines("A - 0:00\nB - 2:00\nC - 1:00\nD - 0:30").unwrap();
    let err = SegmentPlanner::new()
        .from_absolute_timestamps(&records, Path::new("a.mp3"), Path::new("."))
        .unwrap_err();

    assert!(matches!(
        err,
        Error::TrackTimestampsSequence {
            previous_position: 2,
            ref previous_name,
            position: 3,
            ref name,
            ..
        } if previous_name == "B" && name == "C"
    ));
}

#[test]
fn test_first_failing_track_decides_error() {
    let records = parse_lines("A - 5:00\nB - 1:00\nC - 9:99").unwrap();
    let err = SegmentPlanner::new()
        .from_absolute_timestamps(&records, Path::new("a.mp3"), Path::new("."))
        .unwrap_err();
    assert!(err.is_sequence_error());
    assert!(matches!(
        err,
        Error::TrackTimestampsSequence {
            previous_position: 1,
            position: 2,
            ..
        }
    ));
}

#[test]
fn test_empty_list() {
    let err = SegmentPlanner::new()
        .from_durations(&[], Path::new("a.mp3"), Path::new("."))
        .unwrap_err();
    assert!(matches!(err, Error::EmptyTrackList));
}

#[test]
fn test_planners_share_cache() {
    let cache = Arc::new(TimeCache::new());
    let records = records_from_offsets(&[0, 60, 120]);

    for _ in 0..3 {
        SegmentPlanner::with_cache(Arc::clone(&cache))
            .from_absolute_timestamps(&records, Path::new("a.mp3"), Path::new("."))
            .unwrap();
    }
    assert_eq!(cache.len(), 3);
}

#[test]
fn test_out_of_range_field_rejected_when_planning() {
    let records = parse_lines("1. 2:70").unwrap();
    let err = SegmentPlanner::new()
        .from_absolute_timestamps(&records, Path::new("a.mp3"), Path::new("."))
        .unwrap_err();
    assert!(err.is_format_error());
    assert!(!err.is_sequence_error());
}
