// crates/tracemark-core/src/scale.rs
//
// Vertical display limits from a representative data block.
//
// NaN samples (display pad, dropouts) are ignored while scanning. The
// denser-layout convention of dividing the limits by a fixed factor is the
// caller's business, not handled here.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalePolicy {
    /// Symmetric limits at the largest absolute value, quantized to two
    /// significant digits at its own decade.
    MaxAbs,
    /// Exact data range; a flat block is widened by machine epsilon on each
    /// side so the range is never zero-height.
    MaxMin,
}

/// Compute `(lo, hi)` display limits for `samples` under `policy`.
pub fn estimate(samples: &[f64], policy: ScalePolicy) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in samples {
        if v.is_nan() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    // Empty or all-NaN block: behave as a flat zero signal.
    if !min.is_finite() || !max.is_finite() {
        min = 0.0;
        max = 0.0;
    }

    match policy {
        ScalePolicy::MaxAbs => {
            let m = quantize_two_digits(min.abs().max(max.abs()));
            (-m, m)
        }
        ScalePolicy::MaxMin => {
            if min == max {
                (min - f64::EPSILON, max + f64::EPSILON)
            } else {
                (min, max)
            }
        }
    }
}

// Round `m` to two significant digits at its own decade:
// scale = 10^floor(log10 m), result = round(m/scale*100)/100*scale.
// m == 0 keeps scale at 1 so the guard never divides by zero.
fn quantize_two_digits(m: f64) -> f64 {
    let scale = if m == 0.0 { 1.0 } else { 10f64.powf(m.log10().floor()) };
    (m / scale * 100.0).round() / 100.0 * scale
}
