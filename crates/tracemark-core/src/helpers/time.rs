// crates/tracemark-core/src/helpers/time.rs
//
// Time/sample conversion and formatting shared by tracemark-browse and any
// future crate that needs human-readable positions (status lines, exports).

use crate::planner::Segment;

/// Local time in seconds of an absolute `sample` inside `segment`.
///
/// The segment's first sample sits at `offset / fs`; earlier baselines give
/// negative times.
///
/// ```
/// use tracemark_core::planner::Segment;
/// use tracemark_core::helpers::time::sample_time;
/// let seg = Segment::new(400, 799, -100);
/// assert!((sample_time(400, &seg, 100.0) + 1.0).abs() < 1e-12);
/// assert!((sample_time(500, &seg, 100.0) - 0.0).abs() < 1e-12);
/// ```
pub fn sample_time(sample: usize, segment: &Segment, fs: f64) -> f64 {
    (sample as i64 - segment.begin as i64 + segment.offset) as f64 / fs
}

/// Format a time in seconds as `MM:SS.mmm`, sign-prefixed for baseline
/// (negative) times.
///
/// ```
/// use tracemark_core::helpers::time::format_timecode;
/// assert_eq!(format_timecode(0.0),    "00:00.000");
/// assert_eq!(format_timecode(61.5),   "01:01.500");
/// assert_eq!(format_timecode(-0.25),  "-00:00.250");
/// ```
pub fn format_timecode(secs: f64) -> String {
    let sign = if secs < 0.0 { "-" } else { "" };
    let s = secs.abs();
    let m = (s / 60.0) as u64;
    let rem = s - (m as f64) * 60.0;
    format!("{sign}{m:02}:{rem:06.3}")
}
