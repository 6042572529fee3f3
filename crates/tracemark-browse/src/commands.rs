// crates/tracemark-browse/src/commands.rs
//
// Every user action in tracemark is expressed as a BrowseCommand.
// Key handlers and UI widgets emit these; Session::apply processes them
// one at a time, each mutation running to completion before the next.
// Adding a feature = add a variant here + one match arm in session.rs.

use serde::{Deserialize, Serialize};
use tracemark_core::scale::ScalePolicy;

#[derive(Debug, Clone)]
pub enum BrowseCommand {
    // ── Navigation ───────────────────────────────────────────────────────────
    NextSegment,
    PrevSegment,
    JumpToSegment(usize),
    /// Jump forward to the next display segment overlapping an annotation
    /// of the active type (confined to the current zoom level).
    NextOccurrence,
    PrevOccurrence,

    // ── Zoom ─────────────────────────────────────────────────────────────────
    /// Change the visible window duration (seconds). Re-plans the display
    /// segmentation, acquiring or releasing the trial lock as needed, and
    /// keeps the cursor on the nearest segment.
    SetWindow(f64),

    // ── Annotation ───────────────────────────────────────────────────────────
    /// Select which artifact channel subsequent selections mark.
    SelectArtifactType(usize),
    SetSelectMode(SelectMode),
    /// Commit a horizontal selection. `a` and `b` are positions normalized
    /// to [0, 1] across the visible panel, in either order.
    CommitSelection { a: f64, b: f64 },

    // ── Vertical scale ───────────────────────────────────────────────────────
    /// Recompute vertical limits from the currently displayed block.
    Rescale(ScalePolicy),
    SetVerticalLimits { lo: f64, hi: f64 },
}

/// What a committed selection does.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectMode {
    /// Whole-range toggle on the active artifact channel.
    #[default]
    MarkArtifact,
    /// Place (or remove) a single-sample event at the amplitude maximum of
    /// the selection. Requires a single displayed channel.
    MarkPeakEvent,
    /// Same, at the amplitude minimum.
    MarkTroughEvent,
    /// Forward the selection to the analysis sink under this name.
    /// Never mutates the annotation store.
    Dispatch(String),
}
