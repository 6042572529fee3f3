// crates/tracemark-browse/src/external.rs
//
// Collaborator contracts. The session consumes these as black boxes: sample
// I/O, signal conditioning, panel layout and analysis dispatch all live
// behind traits so the core never links against storage or rendering.
//
// All calls are blocking and made on the command-loop thread (see the
// concurrency notes in session.rs).

/// Raw sample access for an absolute sample range.
pub trait SampleSource {
    /// Return one row per requested channel covering `[begin, end]`
    /// (inclusive). Rows MAY be shorter than requested when the range runs
    /// past the recording end — the caller NaN-pads the remainder.
    fn fetch(&self, begin: usize, end: usize, channels: &[usize]) -> Vec<Vec<f64>>;

    /// Last sample index available, used for full-recording dispatch.
    fn last_sample(&self) -> usize;
}

/// Optional per-display signal conditioning (filtering, derivation,
/// resampling). Must be a no-op when the implementation has nothing
/// configured: input handed back unchanged.
pub trait SignalFilter {
    fn apply(
        &self,
        samples: Vec<Vec<f64>>,
        labels: Vec<String>,
        time: Vec<f64>,
    ) -> (Vec<Vec<f64>>, Vec<String>, Vec<f64>);
}

/// Presentation-independent channel placement, used only for scale-tick and
/// label positioning. Consumed, never computed, by this crate.
pub trait PanelLayout {
    /// One `(x, y)` position per channel label, normalized to [0, 1].
    fn layout(&self, labels: &[String]) -> Vec<(f64, f64)>;
}

/// Receiver for Dispatch-mode selections.
pub trait AnalysisSink {
    /// `data` is channel-major; `bounds` are the resolved absolute sample
    /// bounds of the selection.
    fn dispatch(&mut self, name: &str, data: &[Vec<f64>], bounds: (usize, usize));
}

// ── Provided implementations ──────────────────────────────────────────────────

/// In-memory source over preloaded channel-major data.
pub struct MemorySource {
    data: Vec<Vec<f64>>,
}

impl MemorySource {
    pub fn new(data: Vec<Vec<f64>>) -> Self {
        Self { data }
    }
}

impl SampleSource for MemorySource {
    fn fetch(&self, begin: usize, end: usize, channels: &[usize]) -> Vec<Vec<f64>> {
        channels
            .iter()
            .map(|&ch| {
                let row = self.data.get(ch).map(|r| r.as_slice()).unwrap_or(&[]);
                if begin >= row.len() {
                    return Vec::new();
                }
                row[begin..=end.min(row.len() - 1)].to_vec()
            })
            .collect()
    }

    fn last_sample(&self) -> usize {
        self.data
            .iter()
            .map(|r| r.len())
            .max()
            .unwrap_or(0)
            .saturating_sub(1)
    }
}

/// Filter that hands everything back unchanged.
pub struct NoopFilter;

impl SignalFilter for NoopFilter {
    fn apply(
        &self,
        samples: Vec<Vec<f64>>,
        labels: Vec<String>,
        time: Vec<f64>,
    ) -> (Vec<Vec<f64>>, Vec<String>, Vec<f64>) {
        (samples, labels, time)
    }
}

/// Channels stacked evenly down the left edge, top to bottom.
pub struct StackedLayout;

impl PanelLayout for StackedLayout {
    fn layout(&self, labels: &[String]) -> Vec<(f64, f64)> {
        let n = labels.len();
        (0..n)
            .map(|i| (0.0, (i as f64 + 0.5) / n.max(1) as f64))
            .collect()
    }
}

/// Sink that drops everything. Placeholder until a real analysis function
/// is wired in.
pub struct NullSink;

impl AnalysisSink for NullSink {
    fn dispatch(&mut self, _name: &str, _data: &[Vec<f64>], _bounds: (usize, usize)) {}
}
