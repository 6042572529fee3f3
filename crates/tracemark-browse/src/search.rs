// crates/tracemark-browse/src/search.rs
//
// Next/previous occurrence of an annotation type across display segments.
//
// The search runs over the CURRENT display segmentation: an annotation
// outside the segments visible at this zoom level is not found. Zoom out
// (or release the trial lock) to widen the reachable range. Intentional
// simplification, see DESIGN.md.

use tracemark_core::intervals::Span;
use tracemark_core::planner::Segment;

/// First display segment before `cursor` overlapping any of `spans`.
/// None is a non-fatal "not found".
pub fn previous_occurrence(spans: &[Span], segments: &[Segment], cursor: usize) -> Option<usize> {
    let current = segments.get(cursor)?;
    // Spans that begin after the current segment ends can only be hits in
    // the forward direction.
    let reachable: Vec<&Span> = spans.iter().filter(|s| s.begin <= current.end).collect();
    (0..cursor)
        .rev()
        .find(|&ix| overlaps_any(&segments[ix], &reachable))
}

/// First display segment after `cursor` overlapping any of `spans`.
pub fn next_occurrence(spans: &[Span], segments: &[Segment], cursor: usize) -> Option<usize> {
    let current = segments.get(cursor)?;
    let reachable: Vec<&Span> = spans.iter().filter(|s| s.end >= current.begin).collect();
    (cursor + 1..segments.len()).find(|&ix| overlaps_any(&segments[ix], &reachable))
}

fn overlaps_any(segment: &Segment, spans: &[&Span]) -> bool {
    spans
        .iter()
        .any(|s| s.begin <= segment.end && segment.begin <= s.end)
}
