// crates/tracemark-core/src/store.rs
//
// Annotation store: one boolean channel per artifact type plus an ordered
// event list. All mutation goes through the methods here; the backing
// vectors are never handed out mutably.
//
// Marking semantics are whole-range: a toggle over a span that overlaps an
// existing annotation anywhere clears the ENTIRE requested span, it never
// flips per-sample. This matches how an analyst corrects a mis-marked
// stretch in one gesture.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::intervals::{self, Span};

/// Discrete labeled marker at a specific sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id:       Uuid,
    pub kind:     String,
    pub value:    Option<f64>,
    pub sample:   usize,
    pub duration: usize,
}

impl Event {
    /// Single-sample event with a fresh id.
    pub fn at(kind: impl Into<String>, sample: usize) -> Self {
        Self {
            id:       Uuid::new_v4(),
            kind:     kind.into(),
            value:    None,
            sample,
            duration: 1,
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}

/// Which end of the amplitude range `find_extremum` looks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Extremum {
    Max,
    Min,
}

/// Outcome of a sorted event insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventInsert {
    /// List was sorted; event inserted at this position.
    Inserted(usize),
    /// List was NOT sorted by sample — the event was appended at the end.
    /// A non-fatal anomaly the caller must surface, never an error.
    AppendedUnsorted,
}

struct Channel {
    label: String,
    bits:  Vec<bool>,
}

pub struct AnnotationStore {
    channels: Vec<Channel>,
    events:   Vec<Event>,
    len:      usize,
}

impl AnnotationStore {
    /// One boolean channel per artifact type, all `len` samples long.
    /// Label uniqueness is validated at configuration time (see
    /// tracemark-browse config); duplicates here are a caller bug.
    pub fn new(labels: &[String], len: usize) -> Self {
        let channels = labels
            .iter()
            .map(|label| Channel { label: label.clone(), bits: vec![false; len] })
            .collect();
        Self { channels, events: Vec::new(), len }
    }

    pub fn type_count(&self) -> usize {
        self.channels.len()
    }

    pub fn sample_count(&self) -> usize {
        self.len
    }

    pub fn labels(&self) -> Vec<&str> {
        self.channels.iter().map(|c| c.label.as_str()).collect()
    }

    // ── Span marking ─────────────────────────────────────────────────────────

    pub fn mark(&mut self, ty: usize, begin: usize, end: usize) {
        self.set_range(ty, begin, end, true);
    }

    pub fn unmark(&mut self, ty: usize, begin: usize, end: usize) {
        self.set_range(ty, begin, end, false);
    }

    fn set_range(&mut self, ty: usize, begin: usize, end: usize, value: bool) {
        let Some(channel) = self.channels.get_mut(ty) else { return };
        if self.len == 0 || begin >= self.len || begin > end {
            return;
        }
        let end = end.min(self.len - 1);
        for bit in &mut channel.bits[begin..=end] {
            *bit = value;
        }
    }

    /// True when any sample in `[begin, end]` is marked for `ty`.
    pub fn any_marked(&self, ty: usize, begin: usize, end: usize) -> bool {
        let Some(channel) = self.channels.get(ty) else { return false };
        if self.len == 0 || begin >= self.len || begin > end {
            return false;
        }
        let end = end.min(self.len - 1);
        channel.bits[begin..=end].iter().any(|&b| b)
    }

    /// Whole-range toggle: any overlap with an existing annotation clears
    /// the entire span, otherwise the entire span is set. Returns whether
    /// the span is marked afterwards.
    pub fn toggle(&mut self, ty: usize, begin: usize, end: usize) -> bool {
        if self.any_marked(ty, begin, end) {
            self.unmark(ty, begin, end);
            false
        } else {
            self.mark(ty, begin, end);
            true
        }
    }

    /// Boolean sub-matrix for display/search: one row per type, aligned to
    /// `[begin, end]`. Samples past the channel end read as false.
    pub fn rows(&self, begin: usize, end: usize) -> Vec<Vec<bool>> {
        let width = end.saturating_sub(begin) + 1;
        self.channels
            .iter()
            .map(|channel| {
                let mut row = Vec::with_capacity(width);
                for s in begin..=end {
                    row.push(channel.bits.get(s).copied().unwrap_or(false));
                }
                row
            })
            .collect()
    }

    /// Interval form of one channel — the session-end export shape.
    pub fn spans(&self, ty: usize) -> Vec<Span> {
        self.channels
            .get(ty)
            .map(|c| intervals::to_spans(&c.bits))
            .unwrap_or_default()
    }

    // ── Events ───────────────────────────────────────────────────────────────

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn events_in(&self, begin: usize, end: usize) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| begin <= e.sample && e.sample <= end)
            .cloned()
            .collect()
    }

    fn events_sorted(&self) -> bool {
        self.events.windows(2).all(|w| w[0].sample <= w[1].sample)
    }

    /// Insert preserving ascending sample order. If the list has drifted out
    /// of order (soft invariant), the event is appended instead and the
    /// anomaly is reported through the return value.
    pub fn insert_event_sorted(&mut self, event: Event) -> EventInsert {
        if !self.events_sorted() {
            self.events.push(event);
            return EventInsert::AppendedUnsorted;
        }
        let pos = self.events.partition_point(|e| e.sample <= event.sample);
        self.events.insert(pos, event);
        EventInsert::Inserted(pos)
    }

    /// Remove every event whose sample lies in `[begin, end]`; returns how
    /// many were removed. 0 is a valid result, not an error.
    pub fn delete_events_in(&mut self, begin: usize, end: usize) -> usize {
        let before = self.events.len();
        self.events.retain(|e| e.sample < begin || e.sample > end);
        before - self.events.len()
    }
}

/// Index of the max/min value in `samples`, skipping NaN (display pad).
/// Caller guarantees the slice is a single channel. Empty or all-NaN input
/// yields None.
pub fn find_extremum(samples: &[f64], mode: Extremum) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in samples.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        let better = match (best, mode) {
            (None, _) => true,
            (Some((_, b)), Extremum::Max) => v > b,
            (Some((_, b)), Extremum::Min) => v < b,
        };
        if better {
            best = Some((i, v));
        }
    }
    best.map(|(i, _)| i)
}
