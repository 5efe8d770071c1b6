use std::ops::Range;

use tracing::debug;

use crate::run::Run;

/// Clip `runs` to `intervals`, keeping only the overlapping parts.
///
/// Every overlapping (run, interval) pair gives one run covering the overlap.
/// Output is grouped by run in input order, and within a run by ascending
/// interval start. Intervals with `start >= end` and empty runs are ignored;
/// an interval listed twice counts once.
///
/// Intervals are sorted once and walked with a cursor that only moves
/// forward while runs ascend, which makes the usual case of sorted runs
/// linear after the sort. If a run starts before the previous one the cursor
/// goes back to the first interval, so unsorted runs are still clipped fully.
pub fn filter_runs_by_intervals(intervals: &[Range<usize>], runs: &[Run]) -> Vec<Run> {
    if intervals.is_empty() || runs.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<Run> = intervals
        .iter()
        .filter(|interval| interval.start < interval.end)
        .map(|interval| Run::new(interval.start, interval.end))
        .collect();
    if sorted.len() < intervals.len() {
        debug!(
            dropped = intervals.len() - sorted.len(),
            "ignoring intervals with start >= end"
        );
    }
    sorted.sort_unstable();
    sorted.dedup();

    let mut result = Vec::new();
    let mut cursor = 0;
    let mut previous_start = 0;

    for run in runs.iter().filter(|run| !run.is_empty()) {
        if run.start < previous_start {
            cursor = 0;
        }
        previous_start = run.start;

        // intervals ending at or before this run cannot reach any later one
        while cursor < sorted.len() && sorted[cursor].end <= run.start {
            cursor += 1;
        }

        let overlapping = sorted[cursor..]
            .iter()
            .take_while(|interval| interval.start < run.end)
            .filter_map(|interval| run.intersect(interval));
        result.extend(overlapping);
    }

    result
}
