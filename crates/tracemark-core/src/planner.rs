// crates/tracemark-core/src/planner.rs
//
// Display segmentation planning.
//
// The *original* segmentation is fixed at load time (file headers or
// caller-supplied trial definitions). The *display* segmentation is derived
// from it on every window-duration change:
//
//   continuous data  → the full sample range walked in window-sized steps,
//                      last step truncated and padded back up to size.
//   trials, zoom out → the original segmentation itself, each trial padded
//                      up to the window length.
//   trials, zoom in  → exactly one trial (the "locked" one) subdivided into
//                      window-sized pieces, last piece clipped to the trial
//                      end. Subdivision never pads past a trial boundary.
//
// The lock invariant: `lock` is Some only while the requested window is
// strictly shorter than that trial; it is released exactly when the window
// grows to meet or exceed it.

use serde::{Deserialize, Serialize};

/// Contiguous sample range with its time-zero offset.
///
/// `begin`/`end` are absolute, inclusive sample indices. `offset` relates
/// the segment to its local time axis: the first sample sits at
/// `offset / fs` seconds, i.e. sample `begin - offset` maps to time 0.
/// Signed so a pre-stimulus baseline can start before time zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub begin:  usize,
    pub end:    usize,
    pub offset: i64,
}

impl Segment {
    pub fn new(begin: usize, end: usize, offset: i64) -> Self {
        Self { begin, end, offset }
    }

    /// Number of samples covered (inclusive bounds).
    pub fn count(&self) -> usize {
        self.end - self.begin + 1
    }

    pub fn duration_secs(&self, fs: f64) -> f64 {
        self.count() as f64 / fs
    }

    pub fn contains(&self, sample: usize) -> bool {
        self.begin <= sample && sample <= self.end
    }
}

/// Result of one re-planning pass.
#[derive(Clone, Debug)]
pub struct Plan {
    pub segments: Vec<Segment>,
    /// Per-segment NaN-pad length appended at display time. Parallel to
    /// `segments`.
    pub pads:     Vec<usize>,
    /// Display segment the cursor lands on (continuity rule).
    pub cursor:   usize,
    /// Index into the original segmentation, when zoomed inside one trial.
    pub lock:     Option<usize>,
    /// True when the requested window was clamped to the 10-sample minimum.
    /// A policy warning for the caller to surface, never an error.
    pub clamped:  bool,
}

pub struct SegmentPlanner {
    original:   Vec<Segment>,
    fs:         f64,
    continuous: bool,
    lock:       Option<usize>,
    /// Segments of the last plan, for cursor continuity across re-planning.
    previous:   Option<Vec<Segment>>,
}

impl SegmentPlanner {
    pub fn new(original: Vec<Segment>, fs: f64, continuous: bool) -> Self {
        Self {
            original,
            fs,
            continuous,
            lock:     None,
            previous: None,
        }
    }

    pub fn lock(&self) -> Option<usize> {
        self.lock
    }

    pub fn original(&self) -> &[Segment] {
        &self.original
    }

    /// Smallest plannable window: 10 samples.
    pub fn min_window_secs(&self) -> f64 {
        10.0 / self.fs
    }

    /// Recompute the display segmentation for `window_secs`.
    ///
    /// `cursor` indexes the *previous* plan's segments (ignored on the first
    /// call) and anchors both cursor continuity and lock acquisition: when a
    /// zoom-in forces a lock, the trial containing the cursor segment's
    /// start is the one that gets locked.
    ///
    /// Never fails: zero-length data, single-sample trials and degenerate
    /// windows all yield a valid (≥ 1 element) segmentation.
    pub fn plan(&mut self, window_secs: f64, cursor: usize) -> Plan {
        let min = self.min_window_secs();
        let clamped = window_secs < min;
        let window = if clamped { min } else { window_secs };
        let step = ((self.fs * window).round() as usize).max(1);

        let anchor = self.cursor_anchor(cursor);

        let (segments, pads, lock) = if self.continuous {
            self.plan_continuous(step)
        } else {
            self.plan_trials(step, anchor)
        };

        let cursor = continuity_cursor(&segments, anchor);
        self.lock = lock;
        self.previous = Some(segments.clone());

        Plan { segments, pads, cursor, lock, clamped }
    }

    // Start sample of the cursor segment in the previous plan. First plan:
    // anchor at the recording start.
    fn cursor_anchor(&self, cursor: usize) -> usize {
        self.previous
            .as_ref()
            .and_then(|segs| segs.get(cursor))
            .map(|s| s.begin)
            .unwrap_or_else(|| self.original.first().map(|s| s.begin).unwrap_or(0))
    }

    fn plan_continuous(&self, step: usize) -> (Vec<Segment>, Vec<usize>, Option<usize>) {
        let begin = self.original.first().map(|s| s.begin).unwrap_or(0);
        let end   = self.original.last().map(|s| s.end).unwrap_or(0);

        // Offset convention differs with the shape of the original
        // segmentation: exactly one entry → every window carries that
        // entry's stored offset; multiple entries → each window's time axis
        // restarts at 0. Preserved asymmetry, see DESIGN.md.
        let stored_offset = (self.original.len() == 1).then(|| self.original[0].offset);

        let mut segments = Vec::new();
        let mut pads = Vec::new();
        let mut b = begin;
        loop {
            let e = (b + step - 1).min(end);
            segments.push(Segment::new(b, e, stored_offset.unwrap_or(0)));
            pads.push(step - (e - b + 1));
            if e >= end {
                break;
            }
            b = e + 1;
        }
        (segments, pads, None)
    }

    fn plan_trials(&self, step: usize, anchor: usize) -> (Vec<Segment>, Vec<usize>, Option<usize>) {
        if self.original.is_empty() {
            return (vec![Segment::new(0, 0, 0)], vec![0], None);
        }

        // The trial the window length is measured against: the locked one,
        // or the trial under the cursor when no lock is held yet.
        let trial_ix = self.lock.unwrap_or_else(|| self.trial_containing(anchor));
        let trial = self.original[trial_ix];

        if step >= trial.count() {
            // Window covers the whole trial: show the original segmentation,
            // each trial padded up to the window length. Lock released.
            let pads = self.original.iter().map(|t| step.saturating_sub(t.count())).collect();
            return (self.original.clone(), pads, None);
        }

        // Window shorter than the trial: lock onto it and subdivide. The
        // last piece is clipped to the trial end, never padded past it.
        let mut segments = Vec::new();
        let mut b = trial.begin;
        let mut k: usize = 0;
        loop {
            let e = (b + step - 1).min(trial.end);
            segments.push(Segment::new(b, e, trial.offset + (k * step) as i64));
            if e >= trial.end {
                break;
            }
            b = e + 1;
            k += 1;
        }
        let pads = vec![0; segments.len()];
        (segments, pads, Some(trial_ix))
    }

    fn trial_containing(&self, sample: usize) -> usize {
        self.original
            .iter()
            .position(|t| t.contains(sample))
            .unwrap_or(0)
    }
}

// New cursor = segment whose start is nearest to the old cursor segment's
// start; ties resolve to the lower index.
fn continuity_cursor(segments: &[Segment], anchor: usize) -> usize {
    let mut best = 0;
    let mut best_dist = usize::MAX;
    for (ix, seg) in segments.iter().enumerate() {
        let dist = seg.begin.abs_diff(anchor);
        if dist < best_dist {
            best = ix;
            best_dist = dist;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial(begin: usize, end: usize) -> Segment {
        Segment::new(begin, end, 0)
    }

    #[test]
    fn lock_acquired_on_zoom_in() {
        // One 10 s trial at fs = 100, window 4 s.
        let mut planner = SegmentPlanner::new(vec![trial(0, 999)], 100.0, false);
        let plan = planner.plan(4.0, 0);
        assert_eq!(
            plan.segments,
            vec![
                Segment::new(0, 399, 0),
                Segment::new(400, 799, 400),
                Segment::new(800, 999, 800),
            ]
        );
        // Subdivision never pads past the trial end.
        assert_eq!(plan.pads, vec![0, 0, 0]);
        assert_eq!(plan.lock, Some(0));
        assert!(!plan.clamped);
    }

    #[test]
    fn lock_released_when_window_reaches_trial() {
        let mut planner = SegmentPlanner::new(vec![trial(0, 999)], 100.0, false);
        planner.plan(4.0, 0);
        assert_eq!(planner.lock(), Some(0));

        let plan = planner.plan(10.0, 1);
        assert_eq!(plan.segments, vec![trial(0, 999)]);
        assert_eq!(plan.pads, vec![0]);
        assert_eq!(plan.lock, None);
    }

    #[test]
    fn trials_padded_up_to_window() {
        // Two 1 s trials, window 2 s: original segmentation, 100-sample pads.
        let mut planner =
            SegmentPlanner::new(vec![trial(0, 99), trial(100, 199)], 100.0, false);
        let plan = planner.plan(2.0, 0);
        assert_eq!(plan.segments.len(), 2);
        assert_eq!(plan.pads, vec![100, 100]);
        assert_eq!(plan.lock, None);
    }

    #[test]
    fn cursor_continuity_across_replan() {
        let mut planner = SegmentPlanner::new(vec![trial(0, 199)], 100.0, false);
        let first = planner.plan(1.0, 0);
        assert_eq!(
            first.segments,
            vec![Segment::new(0, 99, 0), Segment::new(100, 199, 100)]
        );

        // Cursor on [100,199]; re-plan to quarter windows. The new segment
        // starting at 100 must win — index 2, not 0 or 3.
        let second = planner.plan(0.5, 1);
        assert_eq!(second.segments.len(), 4);
        assert_eq!(second.segments[2].begin, 100);
        assert_eq!(second.cursor, 2);
    }

    #[test]
    fn continuity_tie_resolves_to_lower_index() {
        let segs = vec![Segment::new(0, 9, 0), Segment::new(20, 29, 0)];
        // Anchor 10 is equidistant from begins 0 and 20.
        assert_eq!(continuity_cursor(&segs, 10), 0);
    }

    #[test]
    fn lock_follows_cursor_trial() {
        // Cursor on the second trial when the zoom-in lands: lock it, not
        // the first one.
        let mut planner =
            SegmentPlanner::new(vec![trial(0, 999), trial(1000, 1999)], 100.0, false);
        planner.plan(10.0, 0);
        let plan = planner.plan(4.0, 1);
        assert_eq!(plan.lock, Some(1));
        assert_eq!(plan.segments[0].begin, 1000);
    }

    #[test]
    fn continuous_walk_truncates_and_pads_last() {
        let original = vec![Segment::new(0, 949, 0)];
        let mut planner = SegmentPlanner::new(original, 100.0, true);
        let plan = planner.plan(4.0, 0);
        assert_eq!(plan.segments.len(), 3);
        assert_eq!(plan.segments[2], Segment::new(800, 949, 0));
        assert_eq!(plan.pads, vec![0, 0, 250]);
        assert_eq!(plan.lock, None);
    }

    #[test]
    fn continuous_offsets_single_vs_multiple_entries() {
        // Single original entry: its stored offset is carried into every
        // generated window.
        let mut single =
            SegmentPlanner::new(vec![Segment::new(0, 999, -50)], 100.0, true);
        let plan = single.plan(4.0, 0);
        assert!(plan.segments.iter().all(|s| s.offset == -50));

        // Multiple entries: each window's time axis restarts at 0.
        let mut multi = SegmentPlanner::new(
            vec![Segment::new(0, 499, -50), Segment::new(500, 999, -50)],
            100.0,
            true,
        );
        let plan = multi.plan(4.0, 0);
        assert!(plan.segments.iter().all(|s| s.offset == 0));
    }

    #[test]
    fn subdivision_offsets_increment_from_trial_base() {
        let mut planner =
            SegmentPlanner::new(vec![Segment::new(0, 999, -100)], 100.0, false);
        let plan = planner.plan(4.0, 0);
        assert_eq!(
            plan.segments.iter().map(|s| s.offset).collect::<Vec<_>>(),
            vec![-100, 300, 700]
        );
    }

    #[test]
    fn window_below_minimum_clamps_with_warning() {
        let mut planner = SegmentPlanner::new(vec![trial(0, 999)], 100.0, false);
        // 10/fs = 0.1 s; ask for 0.01 s.
        let plan = planner.plan(0.01, 0);
        assert!(plan.clamped);
        // Clamped to 10-sample windows.
        assert_eq!(plan.segments[0], Segment::new(0, 9, 0));
    }

    #[test]
    fn degenerate_inputs_still_plan() {
        // Zero trials.
        let mut empty = SegmentPlanner::new(vec![], 100.0, false);
        let plan = empty.plan(1.0, 0);
        assert_eq!(plan.segments.len(), 1);

        // Single-sample trial.
        let mut tiny = SegmentPlanner::new(vec![trial(5, 5)], 100.0, false);
        let plan = tiny.plan(1.0, 0);
        assert_eq!(plan.segments, vec![trial(5, 5)]);
        assert_eq!(plan.pads, vec![99]);
    }
}
