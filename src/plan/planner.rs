//! Segmentation plan generation.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::SegmentPlanEntry;
use super::entry::{output_file_name, source_extension};
use crate::error::{Error, Result};
use crate::timeline::{TimeCache, TimeValue};
use crate::tracklist::TrackRecord;

/// Turns parsed track records into a validated, ordered cut plan.
///
/// Time parsing goes through a [`TimeCache`] that can be shared between
/// planners (and threads) with [`SegmentPlanner::with_cache`].
#[derive(Debug, Clone, Default)]
pub struct SegmentPlanner {
    cache: Arc<TimeCache>,
}

impl SegmentPlanner {
    /// Create a planner with its own time cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a planner that parses through a shared cache.
    pub fn with_cache(cache: Arc<TimeCache>) -> Self {
        Self { cache }
    }

    /// The cache used for time parsing.
    pub fn cache(&self) -> &TimeCache {
        &self.cache
    }

    /// Plan cuts where each record's time is the track's start offset.
    ///
    /// Every track ends where the next one starts; the last track runs to
    /// the end of the source. Output files are named
    /// `<two-digit index> - <name><source extension>` inside `target_dir`.
    ///
    /// # Errors
    ///
    /// Records are checked in order, so whichever problem comes first in the
    /// list is reported:
    ///
    /// - [`Error::EmptyTrackList`] if `records` is empty.
    /// - [`Error::WrongTimestampFormat`] for an unparsable time.
    /// - [`Error::TrackTimestampsSequence`] for a track whose start is not
    ///   strictly later than the previous one.
    pub fn from_absolute_timestamps(
        &self,
        records: &[TrackRecord],
        source_file: &Path,
        target_dir: &Path,
    ) -> Result<Vec<SegmentPlanEntry>> {
        if records.is_empty() {
            return Err(Error::EmptyTrackList);
        }

        let starts = self.parse_increasing(records)?;

        let extension = source_extension(source_file);
        let entries: Vec<SegmentPlanEntry> = records
            .iter()
            .zip(&starts)
            .enumerate()
            .map(|(i, (record, start))| {
                let index = i + 1;
                SegmentPlanEntry {
                    index,
                    title: record.name.clone(),
                    output_path: target_dir.join(output_file_name(
                        index,
                        &record.name,
                        &extension,
                    )),
                    start: start.clone(),
                    end: starts.get(index).cloned(),
                }
            })
            .collect();

        debug!(
            "Planned {} segments from {} into {}",
            entries.len(),
            source_file.display(),
            target_dir.display()
        );

        Ok(entries)
    }

    /// Plan cuts where each record's time is the track's duration.
    ///
    /// Durations are prefix-summed into start offsets (the first track
    /// starts at zero) and then planned like absolute timestamps, so a
    /// zero-length track is rejected as a sequence error.
    pub fn from_durations(
        &self,
        records: &[TrackRecord],
        source_file: &Path,
        target_dir: &Path,
    ) -> Result<Vec<SegmentPlanEntry>> {
        let timestamps = self.durations_to_timestamps(records)?;
        self.from_absolute_timestamps(&timestamps, source_file, target_dir)
    }

    /// Convert duration records into start-offset records.
    ///
    /// The last duration does not contribute to any offset but must still
    /// be a valid time. Converted times use the fixed `hh:mm:ss` form.
    pub fn durations_to_timestamps(&self, records: &[TrackRecord]) -> Result<Vec<TrackRecord>> {
        let durations = self.parse_times(records)?;

        let mut offset = TimeValue::from_duration(0);
        Ok(records
            .iter()
            .zip(&durations)
            .map(|(record, duration)| {
                let start = TrackRecord::new(record.name.clone(), offset.as_str());
                offset = &offset + duration;
                start
            })
            .collect())
    }

    /// Parse start offsets one by one, requiring each to be later than the
    /// one before.
    fn parse_increasing(&self, records: &[TrackRecord]) -> Result<Vec<TimeValue>> {
        let mut starts: Vec<TimeValue> = Vec::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            let start = self.cache.parse(&record.time_text)?;
            if let Some(previous_start) = starts.last()
                && start.seconds() <= previous_start.seconds()
            {
                let previous = &records[i - 1];
                return Err(Error::TrackTimestampsSequence {
                    previous_position: i,
                    previous_name: previous.name.clone(),
                    previous_time: previous.time_text.clone(),
                    position: i + 1,
                    name: record.name.clone(),
                    time: record.time_text.clone(),
                });
            }
            starts.push(start);
        }
        Ok(starts)
    }

    fn parse_times(&self, records: &[TrackRecord]) -> Result<Vec<TimeValue>> {
        records
            .iter()
            .map(|record| self.cache.parse(&record.time_text))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn records(items: &[(&str, &str)]) -> Vec<TrackRecord> {
        items
            .iter()
            .map(|(name, time)| TrackRecord::new(*name, *time))
            .collect()
    }

    fn plan(items: &[(&str, &str)]) -> Result<Vec<SegmentPlanEntry>> {
        SegmentPlanner::new().from_absolute_timestamps(
            &records(items),
            Path::new("/downloads/album.mp3"),
            Path::new("/music"),
        )
    }

    #[test]
    fn test_plan_from_timestamps() {
        let entries = plan(&[("First ten", "0:00"), ("Second gav", "1:10"), ("Third", "01:50")]).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].output_path, PathBuf::from("/music/01 - First ten.mp3"));
        assert_eq!(entries[0].start_seconds(), 0);
        assert_eq!(entries[0].end_seconds(), Some(70));
        assert_eq!(entries[1].output_path, PathBuf::from("/music/02 - Second gav.mp3"));
        assert_eq!(entries[1].start_seconds(), 70);
        assert_eq!(entries[1].end_seconds(), Some(110));
        assert_eq!(entries[2].output_path, PathBuf::from("/music/03 - Third.mp3"));
        assert_eq!(entries[2].start_seconds(), 110);
        assert_eq!(entries[2].end_seconds(), None);
    }

    #[test]
    fn test_plan_keeps_original_time_text() {
        let entries = plan(&[("A", "0:00"), ("B", "01:50")]).unwrap();
        assert_eq!(entries[1].start.as_str(), "01:50");
        assert_eq!(entries[0].end.as_ref().unwrap().as_str(), "01:50");
    }

    #[test]
    fn test_single_track_is_unbounded() {
        let entries = plan(&[("Whole album", "0:00")]).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].end.is_none());
    }

    #[test]
    fn test_empty_list_is_rejected() {
        assert!(matches!(plan(&[]), Err(Error::EmptyTrackList)));
    }

    #[test]
    fn test_out_of_order_is_sequence_error() {
        let err = plan(&[("Intro", "1:00"), ("Verse", "0:30")]).unwrap_err();
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
    fn test_equal_offsets_are_sequence_error() {
        let err = plan(&[("A", "0:00"), ("B", "1:00"), ("C", "0:60")]).unwrap_err();
        assert!(matches!(
            err,
            Error::TrackTimestampsSequence {
                previous_position: 2,
                position: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_bad_time_is_format_error() {
        let err = plan(&[("A", "0:00"), ("1", "2:70")]).unwrap_err();
        assert!(err.is_format_error());
        assert!(matches!(err, Error::WrongTimestampFormat { ref text } if text == "2:70"));
    }

    #[test]
    fn test_earlier_sequence_error_wins_over_later_bad_time() {
        let err = plan(&[("A", "5:00"), ("B", "1:00"), ("C", "9:99")]).unwrap_err();
        assert!(err.is_sequence_error());
    }

    #[test]
    fn test_earlier_bad_time_wins_over_later_sequence_error() {
        let err = plan(&[("A", "9:99"), ("B", "5:00"), ("C", "1:00")]).unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn test_source_without_extension() {
        let entries = SegmentPlanner::new()
            .from_absolute_timestamps(
                &records(&[("Intro", "0:00")]),
                Path::new("/downloads/album"),
                Path::new("out"),
            )
            .unwrap();
        assert_eq!(entries[0].output_path, PathBuf::from("out/01 - Intro"));
    }

    #[test]
    fn test_durations_to_timestamps() {
        let planner = SegmentPlanner::new();
        let converted = planner
            .durations_to_timestamps(&records(&[("A", "3:00"), ("B", "4:30"), ("C", "2:00")]))
            .unwrap();
        assert_eq!(
            converted,
            records(&[("A", "00:00:00"), ("B", "00:03:00"), ("C", "00:07:30")])
        );
    }

    #[test]
    fn test_plan_from_durations() {
        let entries = SegmentPlanner::new()
            .from_durations(
                &records(&[("A", "3:00"), ("B", "4:30"), ("C", "2:00")]),
                Path::new("album.opus"),
                Path::new("/music"),
            )
            .unwrap();
        let bounds: Vec<_> = entries
            .iter()
            .map(|e| (e.start_seconds(), e.end_seconds()))
            .collect();
        assert_eq!(bounds, vec![(0, Some(180)), (180, Some(450)), (450, None)]);
        assert_eq!(entries[2].output_name(), "03 - C.opus");
    }

    #[test]
    fn test_zero_duration_is_sequence_error() {
        let err = SegmentPlanner::new()
            .from_durations(
                &records(&[("A", "3:00"), ("Silence", "0"), ("C", "2:00")]),
                Path::new("album.mp3"),
                Path::new("/music"),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            Error::TrackTimestampsSequence {
                previous_position: 2,
                position: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_last_duration_is_still_validated() {
        let err = SegmentPlanner::new()
            .durations_to_timestamps(&records(&[("A", "3:00"), ("B", "99:99")]))
            .unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn test_shared_cache() {
        let cache = Arc::new(TimeCache::new());
        let first = SegmentPlanner::with_cache(Arc::clone(&cache));
        let second = SegmentPlanner::with_cache(Arc::clone(&cache));

        first
            .from_absolute_timestamps(&records(&[("A", "0:00"), ("B", "1:00")]), Path::new("a.mp3"), Path::new("."))
            .unwrap();
        second
            .from_absolute_timestamps(&records(&[("A", "0:00"), ("B", "2:00")]), Path::new("a.mp3"), Path::new("."))
            .unwrap();

        assert_eq!(cache.len(), 3);
        assert_eq!(first.cache().len(), 3);
    }
}
