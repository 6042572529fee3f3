// crates/tracemark-core/src/intervals.rs
//
// Boolean-channel ⇄ span-list codec.
//
// An annotation channel is stored as one bool per sample; its exported form
// is a sorted list of disjoint, non-adjacent, inclusive [begin, end] spans.
// Both directions are total: no input is an error. Out-of-range span bounds
// are clipped, overlapping or adjacent input spans coalesce — the decoded
// vector depends only on the set union of the input.

use serde::{Deserialize, Serialize};

/// Inclusive sample range. `begin ≤ end`; a span always covers ≥ 1 sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub begin: usize,
    pub end:   usize,
}

impl Span {
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    /// Number of samples covered (inclusive bounds).
    pub fn count(&self) -> usize {
        self.end - self.begin + 1
    }

    /// True when the two inclusive ranges share at least one sample.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.begin <= other.end && other.begin <= self.end
    }

    pub fn contains(&self, sample: usize) -> bool {
        self.begin <= sample && sample <= self.end
    }
}

/// Convert a boolean channel to its span list by scanning rising/falling
/// edges. The vector is treated as padded with `false` on both ends, so a
/// run touching either boundary still closes cleanly.
///
/// ```
/// use tracemark_core::intervals::{to_spans, Span};
/// let bits = [false, true, true, false, true];
/// assert_eq!(to_spans(&bits), vec![Span::new(1, 2), Span::new(4, 4)]);
/// assert!(to_spans(&[]).is_empty());
/// ```
pub fn to_spans(bits: &[bool]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut run_start: Option<usize> = None;
    for (i, &b) in bits.iter().enumerate() {
        match (b, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(s)) => {
                spans.push(Span::new(s, i - 1));
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = run_start {
        spans.push(Span::new(s, bits.len() - 1));
    }
    spans
}

/// Decode a span list into a boolean channel of length `len`.
///
/// Sample `i` is true iff it falls inside any span. Bounds beyond `len` are
/// silently clipped; spans entirely outside `[0, len)` contribute nothing.
pub fn from_spans(spans: &[Span], len: usize) -> Vec<bool> {
    let mut bits = vec![false; len];
    if len == 0 {
        return bits;
    }
    for span in spans {
        if span.begin >= len || span.begin > span.end {
            continue;
        }
        let end = span.end.min(len - 1);
        for bit in &mut bits[span.begin..=end] {
            *bit = true;
        }
    }
    bits
}
