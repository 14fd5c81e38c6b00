//! Track duration filtering and aggregate statistics.
//!
//! The filter and the statistics are pure functions over already-fetched
//! track entries; all Spotify I/O happens before they run.

use serde::{Deserialize, Serialize};

use crate::types::TrackEntry;

/// Tracks at or above this duration are excluded everywhere ("2 minutes").
pub const MAX_TRACK_DURATION_MS: u64 = 120_000;

/// Returns the entries strictly shorter than `max_ms`, preserving input
/// order. The threshold is an exclusive upper bound.
pub fn filter_by_duration(entries: &[TrackEntry], max_ms: u64) -> Vec<TrackEntry> {
    entries
        .iter()
        .filter(|entry| entry.track.duration_ms < max_ms)
        .cloned()
        .collect()
}

/// Aggregate duration statistics over a set of track entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationStats {
    pub total_ms: u64,
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DurationStats {
    /// Computes total, minimum and maximum duration. An empty input yields
    /// all-zero stats rather than an error, so an empty (or fully filtered)
    /// playlist still produces a well-defined response.
    pub fn compute(entries: &[TrackEntry]) -> Self {
        let mut durations = entries.iter().map(|entry| entry.track.duration_ms);

        let Some(head) = durations.next() else {
            return DurationStats {
                total_ms: 0,
                min_ms: 0,
                max_ms: 0,
            };
        };

        durations.fold(
            DurationStats {
                total_ms: head,
                min_ms: head,
                max_ms: head,
            },
            |stats, ms| DurationStats {
                total_ms: stats.total_ms + ms,
                min_ms: stats.min_ms.min(ms),
                max_ms: stats.max_ms.max(ms),
            },
        )
    }
}

/// Response body of the playlist statistics endpoint. Totals are reported in
/// whole minutes, per-track extremes in whole seconds, for the unfiltered
/// set and the filtered set side by side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaylistStats {
    pub total_duration_min: u64,
    pub min_track_length_sec: u64,
    pub max_track_length_sec: u64,
    pub filtered_total_duration_min: u64,
    pub filtered_min_track_length_sec: u64,
    pub filtered_max_track_length_sec: u64,
}

pub fn playlist_stats(all: &[TrackEntry], filtered: &[TrackEntry]) -> PlaylistStats {
    let all_stats = DurationStats::compute(all);
    let filtered_stats = DurationStats::compute(filtered);

    PlaylistStats {
        total_duration_min: all_stats.total_ms / 60_000,
        min_track_length_sec: all_stats.min_ms / 1_000,
        max_track_length_sec: all_stats.max_ms / 1_000,
        filtered_total_duration_min: filtered_stats.total_ms / 60_000,
        filtered_min_track_length_sec: filtered_stats.min_ms / 1_000,
        filtered_max_track_length_sec: filtered_stats.max_ms / 1_000,
    }
}
