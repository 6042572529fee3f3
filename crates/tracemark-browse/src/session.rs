// crates/tracemark-browse/src/session.rs
//
// The session object: single owner of every piece of mutable browsing state
// (planner, annotation store, cursor, limits). Commands come in through
// apply(), run to completion one at a time, and hand back Notices for
// anything non-fatal the caller should surface. Rendering consumes the
// immutable Snapshot and never writes back into this state.
//
// Single-threaded by construction: collaborator fetches are blocking calls
// on the command-loop thread. The only parallelism is rayon inside
// snapshot assembly, over buffers this function owns.

use log::{debug, warn};
use rayon::prelude::*;

use tracemark_core::helpers::time::{format_timecode, sample_time};
use tracemark_core::intervals::Span;
use tracemark_core::planner::{Segment, SegmentPlanner};
use tracemark_core::scale::{self, ScalePolicy};
use tracemark_core::store::{find_extremum, AnnotationStore, Event, EventInsert, Extremum};

use crate::commands::{BrowseCommand, SelectMode};
use crate::config::{ConfigError, SessionConfig, VerticalSpec};
use crate::external::{AnalysisSink, PanelLayout, SampleSource, SignalFilter};
use crate::search;
use crate::selection;

/// Non-fatal condition surfaced from apply(). Fatal errors exist only at
/// setup time (ConfigError); past that, every command yields a valid state
/// plus zero or more of these.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    /// Requested window was below the 10-sample minimum and was clamped.
    WindowClamped { requested: f64, actual: f64 },
    /// Occurrence search found nothing at the current zoom level.
    NotFound,
    /// Navigation hit the first/last display segment.
    AtBoundary,
    /// Whole-range toggle outcome: true = span is now marked.
    Toggled(bool),
    /// Selection in event mode removed this many events.
    EventsDeleted(usize),
    /// Peak/trough placement needs exactly one displayed channel.
    SingleChannelRequired,
    /// Event list was not sorted; the new event was appended at the end.
    EventListUnsorted,
    /// The requested artifact type index does not exist.
    UnknownArtifactType(usize),
    /// Vertical limits were rejected (lo ≥ hi) and left unchanged.
    BadVerticalLimits { lo: f64, hi: f64 },
}

/// Fully-resolved state for one redraw. Everything a renderer needs, no
/// rendering logic inside.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub segment: Segment,
    /// Channel-major samples, NaN-padded to `segment.count() + pad`.
    pub samples: Vec<Vec<f64>>,
    pub labels: Vec<String>,
    /// Local time per displayed sample, seconds.
    pub time: Vec<f64>,
    /// One boolean row per artifact type, aligned to the segment range
    /// (pad samples carry no annotations).
    pub annotation_rows: Vec<Vec<bool>>,
    pub events: Vec<Event>,
    /// Per-channel label/tick positions from the layout collaborator.
    pub positions: Vec<(f64, f64)>,
    pub ylim: (f64, f64),
    pub xlim: (f64, f64),
    pub pad: usize,
}

pub struct Session {
    config:      SessionConfig,
    planner:     SegmentPlanner,
    store:       AnnotationStore,
    segments:    Vec<Segment>,
    pads:        Vec<usize>,
    cursor:      usize,
    active_type: usize,
    window:      f64,
    ylim:        (f64, f64),
    select_mode: SelectMode,

    source: Box<dyn SampleSource>,
    filter: Box<dyn SignalFilter>,
    layout: Box<dyn PanelLayout>,
    sink:   Box<dyn AnalysisSink>,
}

impl Session {
    /// Validate the config and build the initial display segmentation.
    /// Nothing is constructed on a validation failure.
    pub fn new(
        config: SessionConfig,
        source: Box<dyn SampleSource>,
        filter: Box<dyn SignalFilter>,
        layout: Box<dyn PanelLayout>,
        sink: Box<dyn AnalysisSink>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        // Annotation channels span the continuous annotation range: up to
        // the largest end sample over all original trials.
        let max_end = config.trials.iter().map(|t| t.end).max().unwrap_or(0);
        let store = AnnotationStore::new(&config.artifact_types, max_end + 1);

        let mut planner =
            SegmentPlanner::new(config.trials.clone(), config.fs, config.continuous);
        let plan = planner.plan(config.window_secs, 0);
        if plan.clamped {
            warn!(
                "window {:.4}s below minimum {:.4}s, clamped",
                config.window_secs,
                planner.min_window_secs()
            );
        }

        let select_mode = config.select_mode.clone();
        let window = config.window_secs.max(planner.min_window_secs());

        let mut session = Self {
            config,
            planner,
            store,
            segments: plan.segments,
            pads: plan.pads,
            cursor: plan.cursor,
            active_type: 0,
            window,
            ylim: (-1.0, 1.0),
            select_mode,
            source,
            filter,
            layout,
            sink,
        };

        session.ylim = match session.config.vertical {
            VerticalSpec::Fixed { lo, hi } => (lo, hi),
            VerticalSpec::Policy(policy) => session.estimate_limits(policy),
        };
        Ok(session)
    }

    // ── Command loop ─────────────────────────────────────────────────────────

    /// Process one command to completion. Returns the non-fatal notices it
    /// produced; an empty Vec means plain success.
    pub fn apply(&mut self, command: BrowseCommand) -> Vec<Notice> {
        match command {
            BrowseCommand::NextSegment => self.step(1),
            BrowseCommand::PrevSegment => self.step(-1),
            BrowseCommand::JumpToSegment(ix) => {
                if ix >= self.segments.len() {
                    return vec![Notice::AtBoundary];
                }
                self.cursor = ix;
                vec![]
            }
            BrowseCommand::NextOccurrence => self.seek_occurrence(true),
            BrowseCommand::PrevOccurrence => self.seek_occurrence(false),

            BrowseCommand::SetWindow(secs) => self.set_window(secs),

            BrowseCommand::SelectArtifactType(ix) => {
                if ix >= self.store.type_count() {
                    return vec![Notice::UnknownArtifactType(ix)];
                }
                self.active_type = ix;
                vec![]
            }
            BrowseCommand::SetSelectMode(mode) => {
                self.select_mode = mode;
                vec![]
            }
            BrowseCommand::CommitSelection { a, b } => self.commit_selection(a, b),

            BrowseCommand::Rescale(policy) => {
                self.ylim = self.estimate_limits(policy);
                vec![]
            }
            BrowseCommand::SetVerticalLimits { lo, hi } => {
                if !(lo < hi) {
                    warn!("vertical limits rejected: lo {lo} ≥ hi {hi}");
                    return vec![Notice::BadVerticalLimits { lo, hi }];
                }
                self.ylim = (lo, hi);
                vec![]
            }
        }
    }

    fn step(&mut self, direction: isize) -> Vec<Notice> {
        let target = self.cursor as isize + direction;
        if target < 0 || target as usize >= self.segments.len() {
            return vec![Notice::AtBoundary];
        }
        self.cursor = target as usize;
        debug!("cursor → {}", self.describe());
        vec![]
    }

    fn seek_occurrence(&mut self, forward: bool) -> Vec<Notice> {
        let spans = self.store.spans(self.active_type);
        let hit = if forward {
            search::next_occurrence(&spans, &self.segments, self.cursor)
        } else {
            search::previous_occurrence(&spans, &self.segments, self.cursor)
        };
        match hit {
            Some(ix) => {
                self.cursor = ix;
                vec![]
            }
            None => vec![Notice::NotFound],
        }
    }

    fn set_window(&mut self, secs: f64) -> Vec<Notice> {
        let plan = self.planner.plan(secs, self.cursor);
        self.window = if plan.clamped { self.planner.min_window_secs() } else { secs };
        self.segments = plan.segments;
        self.pads = plan.pads;
        self.cursor = plan.cursor;
        if plan.clamped {
            warn!(
                "window {secs:.4}s below minimum {:.4}s, clamped",
                self.planner.min_window_secs()
            );
            return vec![Notice::WindowClamped {
                requested: secs,
                actual:    self.window,
            }];
        }
        vec![]
    }

    // ── Selection dispatch ───────────────────────────────────────────────────

    fn commit_selection(&mut self, a: f64, b: f64) -> Vec<Notice> {
        let segment = self.segments[self.cursor];
        let hlim = self.xlim(&segment, self.pads[self.cursor]);
        let (begin, end) = selection::resolve(a, b, hlim, self.config.fs, &segment);

        match self.select_mode.clone() {
            SelectMode::MarkArtifact => {
                if self.active_type >= self.store.type_count() {
                    return vec![Notice::UnknownArtifactType(self.active_type)];
                }
                let set = self.store.toggle(self.active_type, begin, end);
                vec![Notice::Toggled(set)]
            }

            SelectMode::MarkPeakEvent => self.place_event(begin, end, Extremum::Max, "peak"),
            SelectMode::MarkTroughEvent => self.place_event(begin, end, Extremum::Min, "trough"),

            SelectMode::Dispatch(name) => {
                let (range_begin, range_end) = if self.config.dispatch_full_recording {
                    (0, self.source.last_sample())
                } else {
                    (segment.begin, segment.end)
                };
                let data = self
                    .source
                    .fetch(range_begin, range_end, &self.config.channels);
                self.sink.dispatch(&name, &data, (begin, end));
                vec![]
            }
        }
    }

    // A second selection over an existing event deletes instead of stacking
    // markers; otherwise the extremum of the DISPLAYED (filtered) samples in
    // range gets a single-sample event.
    fn place_event(&mut self, begin: usize, end: usize, mode: Extremum, kind: &str) -> Vec<Notice> {
        if self.config.channels.len() != 1 {
            warn!("{kind} events need a single displayed channel");
            return vec![Notice::SingleChannelRequired];
        }

        if !self.store.events_in(begin, end).is_empty() {
            let removed = self.store.delete_events_in(begin, end);
            return vec![Notice::EventsDeleted(removed)];
        }

        let segment = self.segments[self.cursor];
        let (samples, _, _) = self.fetch_display_block(&segment, self.pads[self.cursor]);
        let row = &samples[0];
        let from = begin - segment.begin;
        let to = (end - segment.begin).min(row.len().saturating_sub(1));
        let Some(local) = find_extremum(&row[from..=to], mode) else {
            // All-NaN selection (pure pad): nothing to anchor the event on.
            return vec![Notice::NotFound];
        };

        let sample = begin + local;
        let event = Event::at(kind, sample).with_value(row[from + local]);
        match self.store.insert_event_sorted(event) {
            EventInsert::Inserted(_) => vec![],
            EventInsert::AppendedUnsorted => {
                warn!("event list out of order, appended at end");
                vec![Notice::EventListUnsorted]
            }
        }
    }

    // ── Snapshot ─────────────────────────────────────────────────────────────

    /// Resolve everything a renderer needs for the current segment. Pure
    /// read: planner, store and cursor are untouched.
    pub fn snapshot(&self) -> Snapshot {
        let segment = self.segments[self.cursor];
        let pad = self.pads[self.cursor];
        let (samples, labels, time) = self.fetch_display_block(&segment, pad);
        let positions = self.layout.layout(&labels);

        Snapshot {
            segment,
            annotation_rows: self.store.rows(segment.begin, segment.end),
            events: self.store.events_in(segment.begin, segment.end),
            positions,
            ylim: self.ylim,
            xlim: self.xlim(&segment, pad),
            pad,
            samples,
            labels,
            time,
        }
    }

    // Fetch the segment range plus pad, NaN-pad short rows to full width,
    // then hand the block through the filter collaborator.
    fn fetch_display_block(
        &self,
        segment: &Segment,
        pad: usize,
    ) -> (Vec<Vec<f64>>, Vec<String>, Vec<f64>) {
        let width = segment.count() + pad;
        let mut rows = self
            .source
            .fetch(segment.begin, segment.end + pad, &self.config.channels);
        rows.par_iter_mut().for_each(|row| {
            row.truncate(width);
            row.resize(width, f64::NAN);
        });

        let time: Vec<f64> = (0..width)
            .map(|i| sample_time(segment.begin + i, segment, self.config.fs))
            .collect();

        self.filter
            .apply(rows, self.config.channel_labels.clone(), time)
    }

    // Panel time extent: first displayed sample through the last pad sample.
    fn xlim(&self, segment: &Segment, pad: usize) -> (f64, f64) {
        (
            sample_time(segment.begin, segment, self.config.fs),
            sample_time(segment.end + pad, segment, self.config.fs),
        )
    }

    fn estimate_limits(&self, policy: ScalePolicy) -> (f64, f64) {
        let segment = self.segments[self.cursor];
        let (samples, _, _) = self.fetch_display_block(&segment, self.pads[self.cursor]);
        let flat: Vec<f64> = samples.into_iter().flatten().collect();
        scale::estimate(&flat, policy)
    }

    // ── Accessors / exports ──────────────────────────────────────────────────

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn lock(&self) -> Option<usize> {
        self.planner.lock()
    }

    pub fn window_secs(&self) -> f64 {
        self.window
    }

    pub fn ylim(&self) -> (f64, f64) {
        self.ylim
    }

    pub fn active_type(&self) -> usize {
        self.active_type
    }

    /// Status line: segment ordinal plus its local time extent.
    pub fn describe(&self) -> String {
        let segment = self.segments[self.cursor];
        let (t0, t1) = self.xlim(&segment, self.pads[self.cursor]);
        format!(
            "segment {}/{} · {} – {}",
            self.cursor + 1,
            self.segments.len(),
            format_timecode(t0),
            format_timecode(t1),
        )
    }

    /// Session-end artifact result: interval form per type.
    pub fn artifact_spans(&self) -> Vec<(String, Vec<Span>)> {
        self.store
            .labels()
            .iter()
            .enumerate()
            .map(|(ix, label)| (label.to_string(), self.store.spans(ix)))
            .collect()
    }

    /// Session-end event result.
    pub fn events(&self) -> &[Event] {
        self.store.events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::{MemorySource, NoopFilter, StackedLayout};
    use std::cell::RefCell;
    use std::rc::Rc;

    // Sink that records dispatches so tests can observe them.
    struct RecordingSink {
        calls: Rc<RefCell<Vec<(String, usize, (usize, usize))>>>,
    }

    impl AnalysisSink for RecordingSink {
        fn dispatch(&mut self, name: &str, data: &[Vec<f64>], bounds: (usize, usize)) {
            self.calls
                .borrow_mut()
                .push((name.to_string(), data[0].len(), bounds));
        }
    }

    fn ramp(len: usize) -> Vec<f64> {
        (0..len).map(|i| i as f64).collect()
    }

    fn config(channels: usize, trials: Vec<Segment>, window: f64) -> SessionConfig {
        SessionConfig {
            fs: 100.0,
            channels: (0..channels).collect(),
            channel_labels: (0..channels).map(|i| format!("ch{i}")).collect(),
            artifact_types: vec!["blink".into(), "jump".into()],
            trials,
            continuous: false,
            window_secs: window,
            select_mode: SelectMode::MarkArtifact,
            vertical: VerticalSpec::Fixed { lo: -10.0, hi: 10.0 },
            dispatch_full_recording: false,
        }
    }

    fn session(channels: usize, trials: Vec<Segment>, window: f64) -> Session {
        let data = vec![ramp(1000); channels.max(1)];
        Session::new(
            config(channels, trials, window),
            Box::new(MemorySource::new(data)),
            Box::new(NoopFilter),
            Box::new(StackedLayout),
            Box::new(crate::external::NullSink),
        )
        .unwrap()
    }

    #[test]
    fn setup_rejects_bad_config_before_state_exists() {
        let mut cfg = config(1, vec![Segment::new(0, 999, 0)], 1.0);
        cfg.channels.clear();
        cfg.channel_labels.clear();
        let res = Session::new(
            cfg,
            Box::new(MemorySource::new(vec![ramp(10)])),
            Box::new(NoopFilter),
            Box::new(StackedLayout),
            Box::new(crate::external::NullSink),
        );
        assert!(matches!(res, Err(ConfigError::NoChannels)));
    }

    #[test]
    fn navigation_stops_at_boundaries() {
        let mut s = session(1, vec![Segment::new(0, 999, 0)], 4.0);
        assert_eq!(s.segments().len(), 3);
        assert_eq!(s.apply(BrowseCommand::PrevSegment), vec![Notice::AtBoundary]);
        assert!(s.apply(BrowseCommand::NextSegment).is_empty());
        assert!(s.apply(BrowseCommand::NextSegment).is_empty());
        assert_eq!(s.apply(BrowseCommand::NextSegment), vec![Notice::AtBoundary]);
        assert_eq!(s.cursor(), 2);
    }

    #[test]
    fn zoom_out_releases_lock_and_keeps_cursor_near() {
        let mut s = session(1, vec![Segment::new(0, 999, 0)], 4.0);
        assert_eq!(s.lock(), Some(0));
        s.apply(BrowseCommand::NextSegment); // on [400, 799]
        let notices = s.apply(BrowseCommand::SetWindow(10.0));
        assert!(notices.is_empty());
        assert_eq!(s.lock(), None);
        assert_eq!(s.segments(), &[Segment::new(0, 999, 0)]);
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn tiny_window_clamps_with_notice() {
        let mut s = session(1, vec![Segment::new(0, 999, 0)], 4.0);
        let notices = s.apply(BrowseCommand::SetWindow(0.01));
        assert_eq!(
            notices,
            vec![Notice::WindowClamped { requested: 0.01, actual: 0.1 }]
        );
        assert_eq!(s.segments()[0], Segment::new(0, 9, 0));
    }

    #[test]
    fn mark_selection_toggles_whole_range() {
        let mut s = session(1, vec![Segment::new(0, 999, 0)], 10.0);
        let notices = s.apply(BrowseCommand::CommitSelection { a: 0.2, b: 0.4 });
        assert_eq!(notices, vec![Notice::Toggled(true)]);
        assert_eq!(s.artifact_spans()[0].1.len(), 1);

        // Same selection again: mark → unmark recovers the original state.
        let notices = s.apply(BrowseCommand::CommitSelection { a: 0.2, b: 0.4 });
        assert_eq!(notices, vec![Notice::Toggled(false)]);
        assert!(s.artifact_spans()[0].1.is_empty());
    }

    #[test]
    fn marks_land_on_the_active_type() {
        let mut s = session(1, vec![Segment::new(0, 999, 0)], 10.0);
        s.apply(BrowseCommand::SelectArtifactType(1));
        s.apply(BrowseCommand::CommitSelection { a: 0.1, b: 0.2 });
        assert!(s.artifact_spans()[0].1.is_empty());
        assert_eq!(s.artifact_spans()[1].1.len(), 1);

        let bad = s.apply(BrowseCommand::SelectArtifactType(9));
        assert_eq!(bad, vec![Notice::UnknownArtifactType(9)]);
    }

    #[test]
    fn occurrence_search_moves_cursor_within_zoom() {
        let mut s = session(1, vec![Segment::new(0, 999, 0)], 2.0);
        assert_eq!(s.segments().len(), 5);
        // Mark inside the 4th display segment [600, 799].
        s.apply(BrowseCommand::JumpToSegment(3));
        s.apply(BrowseCommand::CommitSelection { a: 0.3, b: 0.5 });
        s.apply(BrowseCommand::JumpToSegment(0));

        assert!(s.apply(BrowseCommand::NextOccurrence).is_empty());
        assert_eq!(s.cursor(), 3);
        assert_eq!(s.apply(BrowseCommand::NextOccurrence), vec![Notice::NotFound]);

        s.apply(BrowseCommand::JumpToSegment(4));
        assert!(s.apply(BrowseCommand::PrevOccurrence).is_empty());
        assert_eq!(s.cursor(), 3);
    }

    #[test]
    fn peak_event_inserted_then_removed_by_second_selection() {
        let mut s = session(1, vec![Segment::new(0, 999, 0)], 10.0);
        s.apply(BrowseCommand::SetSelectMode(SelectMode::MarkPeakEvent));

        let notices = s.apply(BrowseCommand::CommitSelection { a: 0.1, b: 0.3 });
        assert!(notices.is_empty());
        assert_eq!(s.events().len(), 1);
        let ev = &s.events()[0];
        assert_eq!(ev.kind, "peak");
        assert_eq!(ev.duration, 1);
        // Ramp data: the maximum sits at the right edge of the selection.
        assert_eq!(Some(ev.sample as f64), ev.value);

        // Overlapping selection removes instead of stacking.
        let notices = s.apply(BrowseCommand::CommitSelection { a: 0.05, b: 0.35 });
        assert_eq!(notices, vec![Notice::EventsDeleted(1)]);
        assert!(s.events().is_empty());
    }

    #[test]
    fn peak_mode_requires_single_channel() {
        let mut s = session(3, vec![Segment::new(0, 999, 0)], 10.0);
        s.apply(BrowseCommand::SetSelectMode(SelectMode::MarkTroughEvent));
        let notices = s.apply(BrowseCommand::CommitSelection { a: 0.1, b: 0.3 });
        assert_eq!(notices, vec![Notice::SingleChannelRequired]);
        assert!(s.events().is_empty());
    }

    #[test]
    fn dispatch_forwards_without_mutation() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut s = Session::new(
            config(1, vec![Segment::new(0, 999, 0)], 4.0),
            Box::new(MemorySource::new(vec![ramp(1000)])),
            Box::new(NoopFilter),
            Box::new(StackedLayout),
            Box::new(RecordingSink { calls: Rc::clone(&calls) }),
        )
        .unwrap();

        s.apply(BrowseCommand::SetSelectMode(SelectMode::Dispatch("spectrum".into())));
        s.apply(BrowseCommand::NextSegment); // [400, 799]
        let notices = s.apply(BrowseCommand::CommitSelection { a: 0.0, b: 1.0 });
        assert!(notices.is_empty());

        let recorded = calls.borrow();
        assert_eq!(recorded.len(), 1);
        let (name, data_len, bounds) = &recorded[0];
        assert_eq!(name, "spectrum");
        // Active segment's data, not the full recording.
        assert_eq!(*data_len, 400);
        assert!(bounds.0 >= 400 && bounds.1 <= 799);

        // No store mutation in dispatch mode.
        assert!(s.artifact_spans().iter().all(|(_, spans)| spans.is_empty()));
        assert!(s.events().is_empty());
    }

    #[test]
    fn trial_subdivision_snapshot_is_unpadded() {
        // 950-sample trial, 4 s windows: the clipped last piece [800, 949]
        // is displayed at its own length, never padded past the trial.
        let mut s = Session::new(
            config(1, vec![Segment::new(0, 949, 0)], 4.0),
            Box::new(MemorySource::new(vec![ramp(950)])),
            Box::new(NoopFilter),
            Box::new(StackedLayout),
            Box::new(crate::external::NullSink),
        )
        .unwrap();
        s.apply(BrowseCommand::JumpToSegment(2));

        let snap = s.snapshot();
        assert_eq!(snap.pad, 0); // trial subdivision never pads
        assert_eq!(snap.samples[0].len(), snap.segment.count());
        assert_eq!(snap.annotation_rows.len(), 2);
        assert_eq!(snap.time.len(), snap.samples[0].len());
        assert_eq!(snap.positions.len(), 1);
    }

    #[test]
    fn continuous_snapshot_includes_pad() {
        let mut cfg = config(1, vec![Segment::new(0, 949, 0)], 4.0);
        cfg.continuous = true;
        let mut s = Session::new(
            cfg,
            Box::new(MemorySource::new(vec![ramp(950)])),
            Box::new(NoopFilter),
            Box::new(StackedLayout),
            Box::new(crate::external::NullSink),
        )
        .unwrap();
        s.apply(BrowseCommand::JumpToSegment(2));

        let snap = s.snapshot();
        assert_eq!(snap.segment, Segment::new(800, 949, 0));
        assert_eq!(snap.pad, 250);
        assert_eq!(snap.samples[0].len(), 400);
        assert!(snap.samples[0][150..].iter().all(|v| v.is_nan()));
        assert!((snap.xlim.1 - 3.99).abs() < 1e-9);
    }

    #[test]
    fn rescale_uses_displayed_block() {
        let mut s = session(1, vec![Segment::new(0, 999, 0)], 4.0);
        s.apply(BrowseCommand::Rescale(ScalePolicy::MaxMin));
        // First display segment is the ramp 0..=399.
        assert_eq!(s.ylim(), (0.0, 399.0));

        let bad = s.apply(BrowseCommand::SetVerticalLimits { lo: 3.0, hi: 3.0 });
        assert_eq!(bad, vec![Notice::BadVerticalLimits { lo: 3.0, hi: 3.0 }]);
        assert_eq!(s.ylim(), (0.0, 399.0));
    }

    #[test]
    fn describe_reports_position() {
        let s = session(1, vec![Segment::new(0, 999, 0)], 4.0);
        assert_eq!(s.describe(), "segment 1/3 · 00:00.000 – 00:03.990");
    }
}
