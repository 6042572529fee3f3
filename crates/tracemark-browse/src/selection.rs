// crates/tracemark-browse/src/selection.rs
//
// Maps a raw horizontal selection — two positions normalized to [0, 1]
// across the visible panel — into absolute sample bounds inside the active
// segment. What the bounds are then *used for* (marking, events, dispatch)
// is decided in session.rs.

use tracemark_core::planner::Segment;

/// Resolve normalized positions `a`/`b` (either order) against the panel's
/// time extent `hlim` and the active segment.
///
/// The begin edge rounds with a −1 bias so a selection starting exactly on
/// a sample boundary does not swallow the previous sample; both edges are
/// clipped to the segment — a selection can never cross the visible window.
pub fn resolve(a: f64, b: f64, hlim: (f64, f64), fs: f64, segment: &Segment) -> (usize, usize) {
    let a = a.clamp(0.0, 1.0);
    let b = b.clamp(0.0, 1.0);
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    let t0 = lo * (hlim.1 - hlim.0) + hlim.0;
    let t1 = hi * (hlim.1 - hlim.0) + hlim.0;

    let base = segment.begin as f64 - segment.offset as f64;
    let begin = (t0 * fs + base).round() - 1.0;
    let end = (t1 * fs + base).round();

    let clip = |v: f64| -> usize {
        if v <= segment.begin as f64 {
            segment.begin
        } else if v >= segment.end as f64 {
            segment.end
        } else {
            v as usize
        }
    };
    (clip(begin), clip(end))
}
